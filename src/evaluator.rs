use crate::types::{CategoryResult, Response, ResponseMap, RoundScore, Trial};

/// Scores `responses` against `sequence` for an `n`-back round.
///
/// Categories overlap: a trial matching on both channels is an opportunity for
/// visual, auditory and dual at once. Indices below `n` never count, and responses
/// recorded outside the scorable range are ignored. `n = 0` compares each trial
/// with itself.
pub fn evaluate(sequence: &[Trial], responses: &ResponseMap, n: usize) -> RoundScore {
    let mut tally = Tally::default();

    for i in n..sequence.len() {
        let current = &sequence[i];
        let n_back = &sequence[i - n];
        let resp = responses.get(&i).copied().unwrap_or_default();

        let visual_match = current.position == n_back.position;
        let auditory_match = current.letter == n_back.letter;

        tally.record(visual_match, auditory_match, resp);
    }

    tally.finish()
}

#[derive(Default)]
struct Tally {
    visual_hits: usize,
    visual_total: usize,
    auditory_hits: usize,
    auditory_total: usize,
    dual_hits: usize,
    dual_total: usize,
}

impl Tally {
    #[inline(always)]
    fn record(&mut self, visual_match: bool, auditory_match: bool, resp: Response) {
        if visual_match {
            self.visual_total += 1;
            if resp.vis {
                self.visual_hits += 1;
            }
        }
        if auditory_match {
            self.auditory_total += 1;
            if resp.aud {
                self.auditory_hits += 1;
            }
        }
        if visual_match && auditory_match {
            self.dual_total += 1;
            if resp.vis && resp.aud {
                self.dual_hits += 1;
            }
        }
    }

    fn finish(self) -> RoundScore {
        RoundScore {
            visual: CategoryResult::new(self.visual_hits, self.visual_total),
            auditory: CategoryResult::new(self.auditory_hits, self.auditory_total),
            dual: CategoryResult::new(self.dual_hits, self.dual_total),
        }
    }
}
