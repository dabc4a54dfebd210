use crate::reports;
use clap::Args;
use nback::config::RoundConfig;
use nback::error::NbResult;
use nback::generator::{self, CategoryCounts};
use nback::rng;
use nback::types::Trial;
use serde::Serialize;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: RoundConfig,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Print the round as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Serialize)]
struct GeneratedRound<'a> {
    level: usize,
    counts: CategoryCounts,
    trials: &'a [Trial],
}

pub fn run(args: &GenerateArgs, config: &RoundConfig) -> NbResult<()> {
    let mut rng = rng::seeded(args.seed);
    let n = config.level;
    let sequence = generator::generate(n, &config.sequence_params(), &mut rng)?;
    let counts = generator::category_counts(&sequence, n);

    if args.json {
        let round = GeneratedRound {
            level: n,
            counts,
            trials: &sequence,
        };
        println!("{}", serde_json::to_string_pretty(&round)?);
    } else {
        reports::print_sequence(&sequence, n);
        reports::print_category_counts(&counts);
    }
    Ok(())
}
