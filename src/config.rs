use crate::error::{NbError, NbResult};
use crate::generator::SequenceParams;
use crate::session::TaskMode;
use clap::{parser::ValueSource, ArgAction, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Starting n-back level
    #[arg(short = 'n', long, default_value_t = 2)]
    pub level: usize,

    // === SEQUENCE ===
    #[arg(long, default_value_t = 20)]
    pub scorable_trials: usize,
    #[arg(long, default_value_t = 2)]
    pub target_dual: usize,
    #[arg(long, default_value_t = 4)]
    pub target_visual_only: usize,
    #[arg(long, default_value_t = 4)]
    pub target_auditory_only: usize,

    // === SESSION ===
    #[arg(long, default_value_t = TaskMode::Dual)]
    pub task: TaskMode,
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub adaptive: bool,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            level: 2,
            scorable_trials: 20,
            target_dual: 2,
            target_visual_only: 4,
            target_auditory_only: 4,
            task: TaskMode::Dual,
            adaptive: true,
        }
    }
}

impl RoundConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> NbResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: RoundConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn sequence_params(&self) -> SequenceParams {
        SequenceParams {
            scorable_trials: self.scorable_trials,
            target_dual: self.target_dual,
            target_visual_only: self.target_visual_only,
            target_auditory_only: self.target_auditory_only,
        }
    }

    pub fn validate(&self) -> NbResult<()> {
        if self.scorable_trials == 0 {
            return Err(NbError::Config(
                "a round needs at least one scorable trial".to_string(),
            ));
        }
        self.sequence_params().validate(self.level)
    }

    /// Copies every field the user typed on the command line over the file-loaded values.
    pub fn merge_from_cli(&mut self, cli: &RoundConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(level, "level");
        update_if_present!(scorable_trials, "scorable_trials");
        update_if_present!(target_dual, "target_dual");
        update_if_present!(target_visual_only, "target_visual_only");
        update_if_present!(target_auditory_only, "target_auditory_only");
        update_if_present!(task, "task");
        update_if_present!(adaptive, "adaptive");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(RoundConfig::default().validate().is_ok());
        assert_eq!(RoundConfig::default().sequence_params(), SequenceParams::default());
    }

    #[test]
    fn test_zero_scorable_trials_rejected() {
        let cfg = RoundConfig {
            scorable_trials: 0,
            target_dual: 0,
            target_visual_only: 0,
            target_auditory_only: 0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(NbError::Config(_))));
    }
}
