#![allow(dead_code)]

use nback::types::{Letter, Response, ResponseMap, Trial};

/// Builds trials from parallel position / letter slices, numbering them in order.
pub fn trials(positions: &[u8], letters: &[Letter]) -> Vec<Trial> {
    assert_eq!(positions.len(), letters.len(), "position/letter length mismatch");
    positions
        .iter()
        .zip(letters)
        .enumerate()
        .map(|(index, (&position, &letter))| Trial {
            index,
            position,
            letter,
        })
        .collect()
}

/// Builds a response map from `(index, vis, aud)` triples.
pub fn responses(entries: &[(usize, bool, bool)]) -> ResponseMap {
    entries
        .iter()
        .map(|&(i, vis, aud)| (i, Response { vis, aud }))
        .collect()
}
