use crate::types::{ResponseMap, RoundScore, Trial};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Which channels the player is asked to track.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TaskMode {
    #[default]
    Dual,
    Position,
    Audio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Visual,
    Auditory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// Press dropped: filler trial, index past the end, or channel disabled by the mode.
    Ignored,
    Correct,
    Incorrect,
}

// Adaptive level thresholds (percent)
const LEVEL_UP_PCT: f64 = 90.0;
const LEVEL_DOWN_PCT: f64 = 75.0;

impl TaskMode {
    pub fn tracks_visual(self) -> bool {
        !matches!(self, TaskMode::Audio)
    }

    pub fn tracks_auditory(self) -> bool {
        !matches!(self, TaskMode::Position)
    }

    pub fn accepts(self, kind: ResponseKind) -> bool {
        match kind {
            ResponseKind::Visual => self.tracks_visual(),
            ResponseKind::Auditory => self.tracks_auditory(),
        }
    }

    /// The single accuracy figure kept in history for a round played in this mode.
    pub fn accuracy(self, score: &RoundScore) -> f64 {
        match self {
            TaskMode::Dual => score.dual.pct,
            TaskMode::Position => score.visual.pct,
            TaskMode::Audio => score.auditory.pct,
        }
    }

    fn tracked_pcts(self, score: &RoundScore) -> Vec<f64> {
        let mut pcts = Vec::with_capacity(2);
        if self.tracks_visual() {
            pcts.push(score.visual.pct);
        }
        if self.tracks_auditory() {
            pcts.push(score.auditory.pct);
        }
        pcts
    }
}

/// Records a key press at `index` into `responses`.
///
/// Flags are only ever set, never cleared, so repeated presses are idempotent.
pub fn record_response(
    responses: &mut ResponseMap,
    sequence: &[Trial],
    n: usize,
    index: usize,
    kind: ResponseKind,
    mode: TaskMode,
) -> ResponseOutcome {
    if index < n || index >= sequence.len() || !mode.accepts(kind) {
        return ResponseOutcome::Ignored;
    }

    let current = &sequence[index];
    let n_back = &sequence[index - n];
    let entry = responses.entry(index).or_default();
    let is_match = match kind {
        ResponseKind::Visual => {
            entry.vis = true;
            current.position == n_back.position
        }
        ResponseKind::Auditory => {
            entry.aud = true;
            current.letter == n_back.letter
        }
    };

    if is_match {
        ResponseOutcome::Correct
    } else {
        ResponseOutcome::Incorrect
    }
}

/// Level for the next round under adaptive difficulty.
pub fn next_level(n: usize, score: &RoundScore, mode: TaskMode, adaptive: bool) -> usize {
    if !adaptive {
        return n;
    }
    let pcts = mode.tracked_pcts(score);
    if pcts.iter().all(|&p| p > LEVEL_UP_PCT) {
        n + 1
    } else if pcts.iter().any(|&p| p < LEVEL_DOWN_PCT) {
        n.saturating_sub(1).max(1)
    } else {
        n
    }
}
