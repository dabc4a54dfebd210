use crate::rng::RandomSource;
use crate::session::{record_response, ResponseKind, TaskMode};
use crate::types::{Response, ResponseMap, Trial};

/// Responds exactly where matches exist, on both channels.
pub fn perfect_responses(sequence: &[Trial], n: usize) -> ResponseMap {
    let mut responses = ResponseMap::new();
    for i in n..sequence.len() {
        let back = &sequence[i - n];
        let vis = sequence[i].position == back.position;
        let aud = sequence[i].letter == back.letter;
        if vis || aud {
            responses.insert(i, Response { vis, aud });
        }
    }
    responses
}

/// Stand-in for a human at the keyboard. Presses a channel's key with `hit_rate`
/// when that channel matches and with `false_alarm_rate` when it doesn't.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedPlayer {
    pub hit_rate: f64,
    pub false_alarm_rate: f64,
}

impl Default for SimulatedPlayer {
    fn default() -> Self {
        Self {
            hit_rate: 0.85,
            false_alarm_rate: 0.05,
        }
    }
}

// Probabilities are resolved at this granularity so any RandomSource can drive them.
const ROLL_RESOLUTION: usize = 10_000;

impl SimulatedPlayer {
    pub fn play<R: RandomSource + ?Sized>(
        &self,
        sequence: &[Trial],
        n: usize,
        mode: TaskMode,
        rng: &mut R,
    ) -> ResponseMap {
        let mut responses = ResponseMap::new();
        for i in n..sequence.len() {
            let back = &sequence[i - n];
            let channels = [
                (ResponseKind::Visual, sequence[i].position == back.position),
                (ResponseKind::Auditory, sequence[i].letter == back.letter),
            ];
            for (kind, is_match) in channels {
                let p = if is_match {
                    self.hit_rate
                } else {
                    self.false_alarm_rate
                };
                if Self::roll(rng, p) {
                    record_response(&mut responses, sequence, n, i, kind, mode);
                }
            }
        }
        responses
    }

    fn roll<R: RandomSource + ?Sized>(rng: &mut R, p: f64) -> bool {
        let threshold = (p.clamp(0.0, 1.0) * ROLL_RESOLUTION as f64).round() as usize;
        rng.next_int(0, ROLL_RESOLUTION - 1) < threshold
    }
}
