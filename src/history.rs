use crate::error::NbResult;
use crate::session::TaskMode;
use crate::types::RoundScore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub level: usize,
    pub accuracy: f64,
    pub mode: TaskMode,
}

impl HistoryEntry {
    pub fn from_round(level: usize, mode: TaskMode, score: &RoundScore) -> Self {
        Self::from_round_at(Utc::now(), level, mode, score)
    }

    pub fn from_round_at(
        timestamp: DateTime<Utc>,
        level: usize,
        mode: TaskMode,
        score: &RoundScore,
    ) -> Self {
        Self {
            timestamp,
            level,
            accuracy: mode.accuracy(score),
            mode,
        }
    }
}

/// Append-only round log stored as JSON lines.
///
/// `load` reads whatever is on disk once; `append` adds a line to the end of the
/// file and to the in-memory copy. Nothing already written is ever rewritten.
/// Log file used by `simulate` and `history` when no `--history` path is given.
pub const DEFAULT_HISTORY_PATH: &str = "nback-history.jsonl";

#[derive(Debug)]
pub struct HistoryLog {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn load<P: AsRef<Path>>(path: P) -> NbResult<Self> {
        let path = path.as_ref().to_path_buf();
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<HistoryEntry>(line) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!(
                    "Skipping malformed history line {} in {:?}: {}",
                    line_no + 1,
                    path,
                    e
                ),
            }
        }

        debug!("Loaded {} history entries from {:?}", entries.len(), path);
        Ok(Self { path, entries })
    }

    pub fn append(&mut self, entry: HistoryEntry) -> NbResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = serde_json::to_string(&entry)?;
        writeln!(file, "{}", line)?;
        self.entries.push(entry);
        Ok(())
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Highest level reached so far, if any round has been logged.
    pub fn best_level(&self) -> Option<usize> {
        self.entries.iter().map(|e| e.level).max()
    }
}
