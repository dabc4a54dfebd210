use crate::reports;
use clap::Args;
use nback::config::RoundConfig;
use nback::error::{NbError, NbResult};
use nback::evaluator;
use nback::generator;
use nback::history::{HistoryEntry, HistoryLog, DEFAULT_HISTORY_PATH};
use nback::player::SimulatedPlayer;
use nback::rng;
use nback::session;
use tracing::{debug, info};

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub config: RoundConfig,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[arg(short = 'r', long, default_value_t = 1)]
    pub rounds: usize,

    /// Chance of pressing a channel's key when it matches
    #[arg(long, default_value_t = 0.85)]
    pub hit_rate: f64,

    /// Chance of pressing a channel's key when it doesn't match
    #[arg(long, default_value_t = 0.05)]
    pub false_alarm_rate: f64,

    /// JSON-lines log to append each finished round to
    #[arg(long, default_value = DEFAULT_HISTORY_PATH)]
    pub history: String,

    /// Play without writing to the history log
    #[arg(long, default_value_t = false)]
    pub no_history: bool,
}

pub fn run(args: &SimulateArgs, config: &RoundConfig) -> NbResult<()> {
    for (name, rate) in [
        ("hit-rate", args.hit_rate),
        ("false-alarm-rate", args.false_alarm_rate),
    ] {
        if !(0.0..=1.0).contains(&rate) {
            return Err(NbError::Config(format!(
                "--{} must be within [0, 1] (got {})",
                name, rate
            )));
        }
    }

    let mut log = if args.no_history {
        None
    } else {
        Some(HistoryLog::load(&args.history)?)
    };
    if let Some(log) = &log {
        info!(
            "📜 History: {} previous rounds in {:?}",
            log.entries().len(),
            log.path()
        );
    }

    let player = SimulatedPlayer {
        hit_rate: args.hit_rate,
        false_alarm_rate: args.false_alarm_rate,
    };
    let params = config.sequence_params();
    let mode = config.task;
    let mut rng = rng::seeded(args.seed);
    let mut n = config.level;

    for round in 1..=args.rounds {
        info!("➡️  Round #{} at {}-back ({} mode)", round, n, mode);

        let sequence = generator::generate(n, &params, &mut rng)?;
        let responses = player.play(&sequence, n, mode, &mut rng);
        let score = evaluator::evaluate(&sequence, &responses, n);
        debug!("Round #{} responses: {} trials pressed", round, responses.len());

        reports::print_round_score(round, n, mode, &score);

        if let Some(log) = log.as_mut() {
            log.append(HistoryEntry::from_round(n, mode, &score))?;
        }

        let next = session::next_level(n, &score, mode, config.adaptive);
        if next != n {
            info!("Level change: {} -> {}", n, next);
        }
        n = next;
    }

    Ok(())
}
