use crate::error::{NbError, NbResult};
use crate::rng::{self, RandomSource};
use crate::types::{Letter, MatchCategory, Trial, NUM_POSITIONS};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::debug;

/// How many scorable trials a round has and how many of each match category they contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceParams {
    pub scorable_trials: usize,
    pub target_dual: usize,
    pub target_visual_only: usize,
    pub target_auditory_only: usize,
}

impl Default for SequenceParams {
    fn default() -> Self {
        Self {
            scorable_trials: 20,
            target_dual: 2,
            target_visual_only: 4,
            target_auditory_only: 4,
        }
    }
}

impl SequenceParams {
    /// Sum of the three match targets, `None` when it does not fit in a `usize`.
    pub fn matched_targets(&self) -> Option<usize> {
        self.target_dual
            .checked_add(self.target_visual_only)?
            .checked_add(self.target_auditory_only)
    }

    pub fn validate(&self, n: usize) -> NbResult<()> {
        if n < 1 {
            return Err(NbError::Config(format!(
                "n-back level must be at least 1 (got {})",
                n
            )));
        }
        if n.checked_add(self.scorable_trials).is_none() {
            return Err(NbError::Config(format!(
                "{}-back round with {} scorable trials is too long",
                n, self.scorable_trials
            )));
        }
        let fits = self
            .matched_targets()
            .is_some_and(|matched| matched <= self.scorable_trials);
        if !fits {
            return Err(NbError::Config(format!(
                "match targets ({} dual + {} visual + {} auditory) exceed {} scorable trials",
                self.target_dual,
                self.target_visual_only,
                self.target_auditory_only,
                self.scorable_trials
            )));
        }
        Ok(())
    }

    /// Shuffled per-slot category labels with exact counts.
    fn shuffled_labels<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec<MatchCategory> {
        // validate() guarantees the targets fit
        let none = self
            .matched_targets()
            .map_or(0, |matched| self.scorable_trials.saturating_sub(matched));
        let mut labels = Vec::with_capacity(self.scorable_trials);
        for (category, count) in [
            (MatchCategory::Dual, self.target_dual),
            (MatchCategory::Visual, self.target_visual_only),
            (MatchCategory::Auditory, self.target_auditory_only),
            (MatchCategory::None, none),
        ] {
            labels.extend(std::iter::repeat(category).take(count));
        }
        rng::shuffle(rng, &mut labels);
        labels
    }
}

/// Uniform pick from `domain` minus `exclude`.
///
/// Indexes into the remainder directly, so the result is exact and uniform. A domain
/// with nothing left after exclusion falls back to its first element.
pub fn pick_excluding<T, R>(rng: &mut R, domain: &[T], exclude: T) -> T
where
    T: Copy + PartialEq,
    R: RandomSource + ?Sized,
{
    let remainder: Vec<T> = domain.iter().copied().filter(|v| *v != exclude).collect();
    rng::pick(rng, &remainder)
        .or_else(|| domain.first().copied())
        .unwrap_or(exclude)
}

/// Builds one round: `n` fillers followed by `params.scorable_trials` trials whose
/// relation to the trial `n` steps back hits every category target exactly.
pub fn generate<R: RandomSource + ?Sized>(
    n: usize,
    params: &SequenceParams,
    rng: &mut R,
) -> NbResult<Vec<Trial>> {
    params.validate(n)?;

    let positions: Vec<u8> = (0..NUM_POSITIONS as u8).collect();
    let letters: Vec<Letter> = Letter::iter().collect();
    let total = n + params.scorable_trials;
    let mut sequence: Vec<Trial> = Vec::with_capacity(total);

    // 1. Fillers: no look-back target, anything goes
    for index in 0..n {
        sequence.push(Trial {
            index,
            position: positions[rng.next_int(0, positions.len() - 1)],
            letter: letters[rng.next_int(0, letters.len() - 1)],
        });
    }

    // 2. Decide which slot gets which category
    let labels = params.shuffled_labels(rng);

    // 3. Derive each scorable trial from its n-back predecessor
    for index in n..total {
        let prev = sequence[index - n];
        let (position, letter) = match labels[index - n] {
            MatchCategory::Dual => (prev.position, prev.letter),
            MatchCategory::Visual => (prev.position, pick_excluding(rng, &letters, prev.letter)),
            MatchCategory::Auditory => (
                pick_excluding(rng, &positions, prev.position),
                prev.letter,
            ),
            MatchCategory::None => (
                pick_excluding(rng, &positions, prev.position),
                pick_excluding(rng, &letters, prev.letter),
            ),
        };
        sequence.push(Trial {
            index,
            position,
            letter,
        });
    }

    debug!(
        "Generated {}-back sequence: {} trials ({} fillers, {:?})",
        n,
        sequence.len(),
        n,
        category_counts(&sequence, n)
    );

    Ok(sequence)
}

/// Exclusive category tally of the scorable trials of `sequence`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub dual: usize,
    pub visual_only: usize,
    pub auditory_only: usize,
    pub none: usize,
}

pub fn category_counts(sequence: &[Trial], n: usize) -> CategoryCounts {
    let mut counts = CategoryCounts::default();
    for i in n..sequence.len() {
        let back = &sequence[i - n];
        let vis = sequence[i].position == back.position;
        let aud = sequence[i].letter == back.letter;
        match (vis, aud) {
            (true, true) => counts.dual += 1,
            (true, false) => counts.visual_only += 1,
            (false, true) => counts.auditory_only += 1,
            (false, false) => counts.none += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;

    #[test]
    fn test_default_round_shape() {
        let mut rng = seeded(Some(1));
        let seq = generate(2, &SequenceParams::default(), &mut rng).unwrap();
        assert_eq!(seq.len(), 22);
        for (i, t) in seq.iter().enumerate() {
            assert_eq!(t.index, i);
            assert!((t.position as usize) < NUM_POSITIONS);
        }
    }

    #[test]
    fn test_exact_counts_across_seeds() {
        let params = SequenceParams::default();
        for seed in 0..500 {
            let mut rng = seeded(Some(seed));
            let seq = generate(2, &params, &mut rng).unwrap();
            let counts = category_counts(&seq, 2);
            assert_eq!(
                counts,
                CategoryCounts {
                    dual: 2,
                    visual_only: 4,
                    auditory_only: 4,
                    none: 10
                },
                "seed {}",
                seed
            );
        }
    }

    #[test]
    fn test_rejects_level_zero() {
        let mut rng = seeded(Some(1));
        let err = generate(0, &SequenceParams::default(), &mut rng).unwrap_err();
        assert!(matches!(err, NbError::Config(_)));
    }

    #[test]
    fn test_rejects_overfull_targets() {
        let params = SequenceParams {
            scorable_trials: 5,
            target_dual: 2,
            target_visual_only: 2,
            target_auditory_only: 2,
        };
        let mut rng = seeded(Some(1));
        assert!(generate(1, &params, &mut rng).is_err());
    }

    #[test]
    fn test_huge_targets_are_rejected_without_overflow() {
        let params = SequenceParams {
            scorable_trials: 20,
            target_dual: usize::MAX,
            target_visual_only: 1,
            target_auditory_only: 1,
        };
        assert_eq!(params.matched_targets(), None);
        assert!(matches!(params.validate(2), Err(NbError::Config(_))));
    }

    #[test]
    fn test_targets_may_fill_every_slot() {
        let params = SequenceParams {
            scorable_trials: 6,
            target_dual: 2,
            target_visual_only: 2,
            target_auditory_only: 2,
        };
        let mut rng = seeded(Some(3));
        let seq = generate(3, &params, &mut rng).unwrap();
        assert_eq!(category_counts(&seq, 3).none, 0);
    }

    #[test]
    fn test_pick_excluding_never_returns_excluded() {
        let mut rng = seeded(Some(5));
        let domain = [0u8, 1, 2];
        for _ in 0..500 {
            assert_ne!(pick_excluding(&mut rng, &domain, 1), 1);
        }
    }

    #[test]
    fn test_pick_excluding_single_value_domain() {
        let mut rng = seeded(Some(5));
        assert_eq!(pick_excluding(&mut rng, &[4u8], 4), 4);
    }
}
