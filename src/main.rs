use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use nback::config::RoundConfig;
use nback::error::NbResult;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with round settings. Flags given on the command line win.
    #[arg(global = true, short, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build one round and print its trials
    Generate(cmd::generate::GenerateArgs),
    /// Play rounds with a simulated player and score them
    Simulate(cmd::simulate::SimulateArgs),
    /// Show the round history log
    History(cmd::history::HistoryArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    // Reports go to stdout; keep logs on stderr so `--json` output stays clean
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Generate(args) => {
            resolve_config(&cli, &args.config, &matches, "generate")
                .and_then(|config| cmd::generate::run(args, &config))
        }
        Commands::Simulate(args) => {
            resolve_config(&cli, &args.config, &matches, "simulate")
                .and_then(|config| cmd::simulate::run(args, &config))
        }
        Commands::History(args) => cmd::history::run(args),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}

/// File settings (when given) overlaid with the flags typed for this subcommand.
fn resolve_config(
    cli: &Cli,
    cli_config: &RoundConfig,
    matches: &ArgMatches,
    subcommand: &str,
) -> NbResult<RoundConfig> {
    let config = match (&cli.config, matches.subcommand_matches(subcommand)) {
        (Some(path), Some(sub_matches)) => {
            info!("📂 Loading round settings from: {}", path);
            let mut file_config = RoundConfig::load_from_file(path)?;
            file_config.merge_from_cli(cli_config, sub_matches);
            file_config
        }
        _ => cli_config.clone(),
    };
    config.validate()?;
    Ok(config)
}
