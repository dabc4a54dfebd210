use crate::reports;
use clap::Args;
use nback::error::NbResult;
use nback::history::{HistoryLog, DEFAULT_HISTORY_PATH};

#[derive(Args, Debug, Clone)]
pub struct HistoryArgs {
    #[arg(long, default_value = DEFAULT_HISTORY_PATH)]
    pub history: String,
}

pub fn run(args: &HistoryArgs) -> NbResult<()> {
    let log = HistoryLog::load(&args.history)?;
    if log.entries().is_empty() {
        println!("No rounds recorded in {}", args.history);
        return Ok(());
    }
    reports::print_history(log.entries());
    if let Some(best) = log.best_level() {
        println!("Best level: {}", best);
    }
    Ok(())
}
