//! RNG module - seeded element generation
//!
//! Level generation must be reproducible from `(seed, width, height,
//! palette_size)`, so the core carries its own small LCG instead of relying
//! on a platform RNG whose sequence could change between releases.

use crate::types::{Element, ElementKind};

/// 32-bit linear congruential generator.
///
/// `state' = state * 1664525 + 1013904223 (mod 2^32)`, the multiplier and
/// increment from Numerical Recipes. Full period over `u32`.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    const MULTIPLIER: u32 = 1_664_525;
    const INCREMENT: u32 = 1_013_904_223;

    /// Seed 0 is treated as 1 so that seeds 0 and 1 give the same board.
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    /// Advance and return the new state
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Draw one element from a palette of `palette_size` kinds
    pub fn next_element(&mut self, palette_size: u8) -> Element {
        Element::new(ElementKind(self.next_range(u32::from(palette_size)) as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        let a: Vec<u32> = (0..16).map(|_| zero.next_u32()).collect();
        let b: Vec<u32> = (0..16).map(|_| one.next_u32()).collect();
        assert_eq!(a, b);
        assert!(a.iter().any(|&v| v != 0));
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(5) < 5);
        }
        for _ in 0..10 {
            assert_eq!(rng.next_range(1), 0);
        }
    }

    #[test]
    fn test_next_element_covers_palette() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let element = rng.next_element(4);
            seen[element.kind().id() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "all kinds should appear: {:?}", seen);
    }
}
