use fastrand::Rng;

/// Source of uniform integers. Everything random in a round goes through this,
/// so a seeded source makes a whole round reproducible.
pub trait RandomSource {
    /// Uniform integer in `[min, max]` (inclusive). Returns `min` when `max < min`.
    fn next_int(&mut self, min: usize, max: usize) -> usize;
}

impl RandomSource for Rng {
    fn next_int(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        self.usize(min..=max)
    }
}

/// Seeded generator when a seed is given, entropy-seeded otherwise.
pub fn seeded(seed: Option<u64>) -> Rng {
    match seed {
        Some(s) => Rng::with_seed(s),
        None => Rng::new(),
    }
}

/// In-place Fisher–Yates shuffle driven by `rng`.
pub fn shuffle<T, R: RandomSource + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.next_int(0, i);
        items.swap(i, j);
    }
}

/// Uniform pick from `domain`. Returns `None` only for an empty domain.
pub fn pick<T: Copy, R: RandomSource + ?Sized>(rng: &mut R, domain: &[T]) -> Option<T> {
    if domain.is_empty() {
        return None;
    }
    Some(domain[rng.next_int(0, domain.len() - 1)])
}
