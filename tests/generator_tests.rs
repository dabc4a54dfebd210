use nback::error::NbError;
use nback::evaluator::evaluate;
use nback::generator::{category_counts, generate, SequenceParams};
use nback::player::perfect_responses;
use nback::rng::{seeded, RandomSource};
use nback::types::ResponseMap;
use rstest::rstest;

/// Always answers the low end of the range. Deterministic without any seed.
struct LowestRng;

impl RandomSource for LowestRng {
    fn next_int(&mut self, min: usize, _max: usize) -> usize {
        min
    }
}

/// Cycles through a fixed script, clamped into range.
struct ScriptedRng {
    script: Vec<usize>,
    cursor: usize,
}

impl RandomSource for ScriptedRng {
    fn next_int(&mut self, min: usize, max: usize) -> usize {
        let v = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        min + v % (max - min + 1)
    }
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(5)]
#[case(9)]
fn test_perfect_play_scores_exact_targets(#[case] n: usize) {
    let params = SequenceParams::default();
    for seed in 0..200 {
        let mut rng = seeded(Some(seed));
        let seq = generate(n, &params, &mut rng).unwrap();
        assert_eq!(seq.len(), n + params.scorable_trials);

        let score = evaluate(&seq, &perfect_responses(&seq, n), n);
        assert_eq!(score.dual.total, params.target_dual);
        assert_eq!(
            score.visual.total,
            params.target_visual_only + params.target_dual
        );
        assert_eq!(
            score.auditory.total,
            params.target_auditory_only + params.target_dual
        );
        assert_eq!(score.visual.hits, score.visual.total);
        assert_eq!(score.auditory.hits, score.auditory.total);
        assert_eq!(score.dual.hits, score.dual.total);
        assert_eq!(score.visual.pct, 100.0);
        assert_eq!(score.auditory.pct, 100.0);
        assert_eq!(score.dual.pct, 100.0);
    }
}

#[test]
fn test_no_responses_keeps_totals() {
    let mut rng = seeded(Some(77));
    let seq = generate(2, &SequenceParams::default(), &mut rng).unwrap();
    let score = evaluate(&seq, &ResponseMap::new(), 2);
    assert_eq!(score.visual.hits, 0);
    assert_eq!(score.auditory.hits, 0);
    assert_eq!(score.dual.hits, 0);
    assert_eq!(score.visual.total, 6);
    assert_eq!(score.auditory.total, 6);
    assert_eq!(score.dual.total, 2);
}

#[test]
fn test_same_seed_same_round() {
    let params = SequenceParams::default();
    let a = generate(3, &params, &mut seeded(Some(1234))).unwrap();
    let b = generate(3, &params, &mut seeded(Some(1234))).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_degenerate_rng_still_hits_counts() {
    let params = SequenceParams::default();
    let seq = generate(2, &params, &mut LowestRng).unwrap();
    let counts = category_counts(&seq, 2);
    assert_eq!(counts.dual, 2);
    assert_eq!(counts.visual_only, 4);
    assert_eq!(counts.auditory_only, 4);
    assert_eq!(counts.none, 10);
}

#[test]
fn test_scripted_rng_is_injectable() {
    let params = SequenceParams {
        scorable_trials: 12,
        target_dual: 3,
        target_visual_only: 3,
        target_auditory_only: 3,
    };
    let mut rng = ScriptedRng {
        script: vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5],
        cursor: 0,
    };
    let seq = generate(4, &params, &mut rng).unwrap();
    let counts = category_counts(&seq, 4);
    assert_eq!(
        (counts.dual, counts.visual_only, counts.auditory_only, counts.none),
        (3, 3, 3, 3)
    );
}

#[rstest]
#[case(0, SequenceParams::default())]
#[case(2, SequenceParams {
    scorable_trials: 3,
    target_dual: 2,
    target_visual_only: 1,
    target_auditory_only: 1,
})]
#[case(2, SequenceParams {
    scorable_trials: 20,
    target_dual: usize::MAX,
    target_visual_only: 1,
    target_auditory_only: 1,
})]
#[case(usize::MAX, SequenceParams::default())]
fn test_invalid_round_is_a_config_error(#[case] n: usize, #[case] params: SequenceParams) {
    let result = generate(n, &params, &mut seeded(Some(0)));
    assert!(matches!(result, Err(NbError::Config(_))));
}

#[test]
fn test_all_none_round() {
    let params = SequenceParams {
        scorable_trials: 15,
        target_dual: 0,
        target_visual_only: 0,
        target_auditory_only: 0,
    };
    let seq = generate(2, &params, &mut seeded(Some(8))).unwrap();
    let score = evaluate(&seq, &ResponseMap::new(), 2);
    assert_eq!(score.visual.total + score.auditory.total + score.dual.total, 0);
}
