use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::{Display, EnumIter, EnumString};

pub const NUM_POSITIONS: usize = 8;

/// Grid cells in clockwise order starting from the top-left corner.
/// The centre cell of the 3x3 grid is never used.
pub const POSITION_LABELS: [&str; NUM_POSITIONS] = [
    "Top-Left",
    "Top-Middle",
    "Top-Right",
    "Middle-Right",
    "Bottom-Right",
    "Bottom-Middle",
    "Bottom-Left",
    "Middle-Left",
];

/// The spoken letter alphabet. Eight consonants chosen to be easy to tell apart by ear.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
pub enum Letter {
    C,
    H,
    K,
    L,
    Q,
    R,
    S,
    T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trial {
    pub index: usize,
    pub position: u8, // 0..NUM_POSITIONS
    pub letter: Letter,
}

impl Trial {
    pub fn position_label(&self) -> &'static str {
        POSITION_LABELS
            .get(self.position as usize)
            .copied()
            .unwrap_or("Off-Grid")
    }
}

/// The user's assertions at one trial: "position matched" and "letter matched".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub vis: bool,
    pub aud: bool,
}

/// Sparse map from trial index to response. A missing entry means no response.
pub type ResponseMap = HashMap<usize, Response>;

/// Label assigned to a scorable slot by the generator. Mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum MatchCategory {
    Dual,
    Visual,
    Auditory,
    None,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub hits: usize,
    pub total: usize,
    pub pct: f64,
}

impl CategoryResult {
    pub fn new(hits: usize, total: usize) -> Self {
        Self {
            hits,
            total,
            pct: pct(hits, total),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundScore {
    pub visual: CategoryResult,
    pub auditory: CategoryResult,
    pub dual: CategoryResult,
}

/// Percentage rounded to one decimal place, or 0 when there were no opportunities.
pub fn pct(hits: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = hits as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}
