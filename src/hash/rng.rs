//! Deterministic RNG for hash generation.
//!
//! Trait rolls must be reproducible from a `(seed, nonce)` pair alone,
//! so this is a fixed LCG rather than anything platform-dependent.
//! Statistical quality is irrelevant here; stability of the stream is
//! the contract.

/// Simple LCG PRNG for deterministic generation.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// Uniform-ish draw in `[min, max)`. Returns `min` on an empty range.
    pub fn next_range(&mut self, min: u64, max: u64) -> u64 {
        if max <= min {
            return min;
        }
        min + (self.next_u64() % (max - min))
    }

    /// One draw, true with roughly `percent` in 100 odds.
    pub fn chance(&mut self, percent: u8) -> bool {
        self.next_range(0, 100) < u64::from(percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = SeededRng::new(42);
        let mut b = SeededRng::new(42);
        for _ in 0..64 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = SeededRng::new(1);
        let mut b = SeededRng::new(2);
        let same = (0..16).filter(|_| a.next_u64() == b.next_u64()).count();
        assert_eq!(same, 0);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SeededRng::new(7);
        for _ in 0..256 {
            let v = rng.next_range(3, 10);
            assert!((3..10).contains(&v));
        }
    }

    #[test]
    fn test_next_range_empty_range() {
        let mut rng = SeededRng::new(0);
        assert_eq!(rng.next_range(5, 5), 5);
        assert_eq!(rng.next_range(9, 2), 9);
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = SeededRng::new(123);
        for _ in 0..64 {
            assert!(!rng.chance(0));
            assert!(rng.chance(100));
        }
    }
}
