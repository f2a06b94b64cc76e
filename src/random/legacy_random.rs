//! Legacy 48-bit LCG matching `java.util.Random`.
//!
//! The reference noise generator is seeded from `java.util.Random`, so seed
//! compatibility requires this exact generator: same multiplier, same
//! increment, same bounded-draw rejection loop.

use crate::random::Random;

const MULTIPLIER: i64 = 0x5DEECE66D;
const INCREMENT: i64 = 0xB;
const MASK: i64 = (1 << 48) - 1;
/// `2^-53`, the weight of one unit in the 53-bit double draw.
const DOUBLE_UNIT: f64 = 1.0 / 9_007_199_254_740_992.0;

/// Linear congruential generator with 48 bits of state.
#[derive(Debug, Clone)]
pub struct LegacyRandom {
    seed: i64,
}

impl LegacyRandom {
    /// Create a generator from a seed, scrambling it the way
    /// `java.util.Random` does.
    #[must_use]
    pub const fn from_seed(seed: u64) -> Self {
        Self {
            seed: (seed as i64 ^ MULTIPLIER) & MASK,
        }
    }

    /// Advance the state and return the top `bits` bits.
    ///
    /// The state is masked to 48 bits and therefore non-negative; only a
    /// 32-bit draw can come out negative, via the final truncating cast.
    fn next(&mut self, bits: u32) -> i32 {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT) & MASK;
        (self.seed >> (48 - bits)) as i32
    }
}

impl Random for LegacyRandom {
    fn next_i32(&mut self) -> i32 {
        self.next(32)
    }

    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        assert!(bound > 0, "bound must be positive, got {bound}");

        // Power-of-two bounds take the high bits directly
        if bound & bound.wrapping_neg() == bound {
            return ((i64::from(bound) * i64::from(self.next(31))) >> 31) as i32;
        }

        // Rejection loop: discard draws from the incomplete top interval so
        // the modulo stays uniform
        loop {
            let bits = self.next(31);
            let value = bits % bound;
            if bits.wrapping_sub(value).wrapping_add(bound - 1) >= 0 {
                return value;
            }
        }
    }

    fn next_f64(&mut self) -> f64 {
        let high = i64::from(self.next(26)) << 27;
        let low = i64::from(self.next(27));
        (high + low) as f64 * DOUBLE_UNIT
    }
}
