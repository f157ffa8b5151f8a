//! RNG module - deterministic randomness for the landscape and spawn gaps
//!
//! A small LCG keeps whole sessions reproducible from a single seed, which is
//! what the scenario tests rely on.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low bits of an LCG cycle with short periods; use the high half.
        (self.next_u32() >> 16) % max
    }

    /// Uniform value in `[lo, hi]`; `hi` below `lo` collapses to `lo`.
    ///
    /// Spans wider than 16 bits draw from two outputs and reject the biased
    /// tail, so every value up to `u32::MAX` is reachable.
    pub fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi - lo) as u64 + 1;
        if span <= 1 << 16 {
            return lo + self.next_range(span as u32);
        }
        let zone = (1u64 << 32) - (1u64 << 32) % span;
        loop {
            let v = self.next_wide() as u64;
            if v < zone {
                return lo + (v % span) as u32;
            }
        }
    }

    /// 32 bits built from the high halves of two outputs.
    fn next_wide(&mut self) -> u32 {
        let hi = self.next_u32() & 0xFFFF_0000;
        hi | (self.next_u32() >> 16)
    }

    /// True with probability `per_mille / 1000`
    pub fn chance(&mut self, per_mille: u32) -> bool {
        self.next_range(1000) < per_mille
    }
}
