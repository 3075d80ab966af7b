//! Seeded deterministic integer source.
//!
//! Grounded on the teacher crate's `xoroshiro128+` implementation
//! (`prng.rs`): same engine, same `SplitMix64` seed expansion, same
//! rejection-sampling-with-power-of-two-fast-path shape for bounded draws.
//! What changes is the surface: the spec's `rollDice(maxValue, distribution)`
//! contract needs a draw that can also be biased by an explicit weight
//! table (for `weightedBool` and bucket selection), not just uniform.

use rand_core::{Error, RngCore};

/// Per-value relative weight for a bounded draw. `Uniform` is a flat
/// distribution over `[0, max_value]`; `Weighted` biases which value in
/// that range comes out, without changing what gets *recorded* — only the
/// final value in `[0, max_value]` is ever appended to a `ChoiceSequence`.
#[derive(Debug, Clone, Copy)]
pub enum Distribution<'a> {
    Uniform,
    Weighted(&'a [u32]),
}

/// Splittable deterministic PRNG. Bit-for-bit reproducible across
/// platforms given the same seed.
#[derive(Debug, Clone)]
pub struct RandomSource {
    state: [u64; 2],
}

impl RandomSource {
    /// Seeds from a single 32-bit integer via `SplitMix64` expansion, the
    /// same scheme the teacher crate uses for its single-`u64`-seed
    /// constructor.
    pub fn from_seed(seed: u32) -> Self {
        Self::from_seed_u64(seed as u64)
    }

    pub fn from_seed_u64(seed: u64) -> Self {
        fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        let mut sm_state = seed;
        let mut state = [splitmix64(&mut sm_state), splitmix64(&mut sm_state)];
        if state[0] == 0 && state[1] == 0 {
            state[0] = 0x9e37_79b9_7f4a_7c15;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }

    /// Uniform integer in `[0, max_value]`. Uses rejection sampling with a
    /// power-of-two fast path to avoid modulo bias, same shape as the
    /// teacher's `next_int`.
    fn uniform_below(&mut self, max_value: u32) -> u32 {
        let span = (max_value as u64) + 1;
        if span == 0 {
            // max_value == u32::MAX: the full range, no rejection needed.
            return self.next_u64() as u32;
        }
        if span.is_power_of_two() {
            return (self.next_u64() & (span - 1)) as u32;
        }
        let bound = u64::MAX - u64::MAX % span;
        loop {
            let candidate = self.next_u64();
            if candidate < bound {
                return (candidate % span) as u32;
            }
        }
    }

    /// Draws one value in `[0, max_value]` according to `dist`. This is
    /// `RandomSource`'s half of `rollDice`; the caller (the `Live` PRNG)
    /// is responsible for appending the result to the `ChoiceSequence`.
    pub fn draw(&mut self, max_value: u32, dist: Distribution<'_>) -> u32 {
        match dist {
            Distribution::Uniform => self.uniform_below(max_value),
            Distribution::Weighted(weights) => {
                debug_assert_eq!(weights.len() as u64, max_value as u64 + 1);
                let total: u64 = weights.iter().map(|&w| w as u64).sum();
                if total == 0 {
                    return 0;
                }
                let mut r = {
                    let span = total;
                    if span.is_power_of_two() {
                        self.next_u64() & (span - 1)
                    } else {
                        let bound = u64::MAX - u64::MAX % span;
                        loop {
                            let candidate = self.next_u64();
                            if candidate < bound {
                                break candidate % span;
                            }
                        }
                    }
                };
                for (value, &w) in weights.iter().enumerate() {
                    if r < w as u64 {
                        return value as u32;
                    }
                    r -= w as u64;
                }
                (weights.len() - 1) as u32
            }
        }
    }
}

/// Adapter so `RandomSource` can be used anywhere a `rand_core::RngCore`
/// is expected (e.g. by a harness wiring this crate into another RNG
/// ecosystem). Not used by the core itself.
impl RngCore for RandomSource {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        RandomSource::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut chunks = dest.chunks_exact_mut(8);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next_u64().to_le_bytes());
        }
        let rem = chunks.into_remainder();
        if !rem.is_empty() {
            let bytes = self.next_u64().to_le_bytes();
            rem.copy_from_slice(&bytes[..rem.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
