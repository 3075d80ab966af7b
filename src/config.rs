//! Tunable limits that are not part of the reproducibility contract.
//!
//! `filter`'s 15-retry cap and the `RandomSource` algorithm are fixed by
//! spec and therefore are not here — changing them would change what a
//! given seed produces.

/// Bounds a single fuzzer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Capacity of a [`crate::choice::ChoiceSequence`] before a run is
    /// rejected with "run full".
    pub run_max: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { run_max: RUN_MAX }
    }
}

/// Recommended `ChoiceSequence` capacity bound (spec.md §3).
pub const RUN_MAX: usize = 16_384;

/// Bounds the shrinker's outer search loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShrinkConfig {
    /// Maximum number of full pass rounds the shrinker will run before
    /// giving up and returning the best candidate found so far.
    pub max_rounds: usize,
}

impl Default for ShrinkConfig {
    fn default() -> Self {
        Self { max_rounds: 1_000 }
    }
}
