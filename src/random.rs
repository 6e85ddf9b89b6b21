//! Injectable randomness source
//!
//! Every sampling algorithm in this crate takes its randomness as an
//! explicit dependency instead of reaching for an ambient generator.
//! Production code passes [`GlobalSource`], which delegates to the
//! `fastrand` global generator; tests pass [`SeededSource`] for
//! reproducible outcomes.

/// A source of uniform randomness
///
/// Implementations provide a uniform float and a uniformly distributed
/// bounded integer; shuffling is derived from those.
pub trait Source {
    /// Returns a uniformly distributed float in `[0, 1)`
    fn next_f64(&mut self) -> f64;

    /// Returns a uniformly distributed integer in `[0, bound)`
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    fn next_below(&mut self, bound: usize) -> usize;

    /// Shuffles a slice in place using a Fisher-Yates walk
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_below(i + 1);
            slice.swap(i, j);
        }
    }
}

/// Production randomness backed by the `fastrand` global generator
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalSource;

impl Source for GlobalSource {
    fn next_f64(&mut self) -> f64 {
        fastrand::f64()
    }

    fn next_below(&mut self, bound: usize) -> usize {
        fastrand::usize(..bound)
    }
}

/// Deterministic randomness seeded with a fixed value
///
/// Two sources created with the same seed produce the same sequence,
/// which makes sampling algorithms reproducible under test.
#[derive(Debug, Clone)]
pub struct SeededSource(fastrand::Rng);

impl SeededSource {
    /// Creates a source seeded with `seed`
    pub fn new(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }
}

impl Source for SeededSource {
    fn next_f64(&mut self) -> f64 {
        self.0.f64()
    }

    fn next_below(&mut self, bound: usize) -> usize {
        self.0.usize(..bound)
    }
}
