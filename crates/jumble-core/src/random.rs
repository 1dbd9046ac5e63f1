//! Randomness behind a small seam.
//!
//! The generator only ever asks for four things: a bounded integer, a unit
//! float, an index and a short string. [`RandomSource`] exposes exactly those,
//! so serving code can use the thread-local RNG while tests pin a seed.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use uuid::Builder;

use crate::constants::primitives::MAX_TEXT_LEN;

/// Source of the random choices the generator makes.
pub trait RandomSource {
    /// Uniform integer in `[min, max]`. Returns `min` when the range is empty.
    fn int_in_range(&mut self, min: i64, max: i64) -> i64;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Alphanumeric string of `len` characters, capped at 32.
    fn short_string(&mut self, len: usize) -> String;

    /// Uniform index in `[0, len)`; `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        let upper = i64::try_from(len).unwrap_or(i64::MAX).saturating_sub(1);
        usize::try_from(self.int_in_range(0, upper)).unwrap_or(0)
    }

    /// Fair coin flip.
    fn coin(&mut self) -> bool {
        self.unit() > 0.5
    }
}

/// Pick one element uniformly, or `None` from an empty slice.
pub fn choose<'a, T, R>(rng: &mut R, items: &'a [T]) -> Option<&'a T>
where
    R: RandomSource + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    items.get(rng.index(items.len()))
}

/// [`RandomSource`] backed by any `rand` generator.
///
/// Strings come from a version 4 UUID assembled from the generator's own
/// bytes, printed without hyphens and cut to length. Seeding the generator
/// therefore seeds the strings too.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Thread-local, non-cryptographic generator used when serving requests.
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible generator for tests and tooling.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn int_in_range(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn short_string(&mut self, len: usize) -> String {
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes);
        let mut text = Builder::from_random_bytes(bytes).into_uuid().simple().to_string();
        text.truncate(len.min(MAX_TEXT_LEN));
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_in_range_stays_inclusive() {
        let mut rng = RngSource::seeded(7);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2_000 {
            let n = rng.int_in_range(1, 4);
            assert!((1..=4).contains(&n));
            seen_min |= n == 1;
            seen_max |= n == 4;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn test_empty_range_returns_min() {
        let mut rng = RngSource::seeded(1);
        assert_eq!(rng.int_in_range(5, 5), 5);
        assert_eq!(rng.int_in_range(5, 2), 5);
    }

    #[test]
    fn test_unit_interval() {
        let mut rng = RngSource::seeded(3);
        for _ in 0..1_000 {
            let x = rng.unit();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_short_string_is_alphanumeric_and_sized() {
        let mut rng = RngSource::seeded(11);
        for len in [0, 1, 5, 12, 16, 32, 40] {
            let s = rng.short_string(len);
            assert_eq!(s.len(), len.min(32));
            assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_seeded_sources_repeat() {
        let mut a = RngSource::seeded(99);
        let mut b = RngSource::seeded(99);
        for _ in 0..50 {
            assert_eq!(a.int_in_range(0, 1_000_000), b.int_in_range(0, 1_000_000));
            assert_eq!(a.short_string(16), b.short_string(16));
        }
    }

    #[test]
    fn test_choose() {
        let mut rng = RngSource::seeded(5);
        let empty: [u8; 0] = [];
        assert_eq!(choose(&mut rng, &empty), None);

        let items = ["a", "b", "c"];
        for _ in 0..100 {
            let picked = choose(&mut rng, &items).unwrap();
            assert!(items.contains(picked));
        }
    }

    #[test]
    fn test_thread_source() {
        let mut rng = RngSource::thread();
        let n = rng.int_in_range(10, 20);
        assert!((10..=20).contains(&n));
        assert_eq!(rng.short_string(8).len(), 8);
    }
}
