//! `Live`/`Replay` PRNG and the `rollDice`/`forcedChoice` primitives all
//! fuzzers decompose into.

use crate::choice::ChoiceSequence;
use crate::config::RunConfig;
use crate::result::GenResult;
use crate::source::{Distribution, RandomSource};

/// A PRNG threaded through one fuzzer evaluation.
///
/// `Live` draws randomly and records what it drew; `Replay` has nothing
/// left to draw from but a pre-recorded sequence. Both are driven through
/// the same `roll_dice`/`forced_choice` entry points so fuzzer code never
/// needs to know which one it holds.
#[derive(Debug, Clone)]
pub enum Prng {
    Live {
        source: RandomSource,
        run: ChoiceSequence,
        run_max: usize,
    },
    Replay {
        remaining: ChoiceSequence,
        cursor: usize,
    },
}

impl Prng {
    pub fn live(seed: u32) -> Self {
        Self::live_with_config(seed, RunConfig::default())
    }

    pub fn live_with_config(seed: u32, config: RunConfig) -> Self {
        Prng::Live {
            source: RandomSource::from_seed(seed),
            run: ChoiceSequence::new(),
            run_max: config.run_max,
        }
    }

    pub fn replay(sequence: ChoiceSequence) -> Self {
        Prng::Replay {
            remaining: sequence,
            cursor: 0,
        }
    }

    /// The choice sequence recorded (`Live`) or consumed-from (`Replay`)
    /// so far, for inspection by the shrinker after a run completes.
    pub fn recorded(&self) -> ChoiceSequence {
        match self {
            Prng::Live { run, .. } => run.clone(),
            Prng::Replay { remaining, cursor } => {
                ChoiceSequence::from_vec(remaining.as_slice()[..*cursor].to_vec())
            }
        }
    }

    /// Draws one integer into the choice sequence (spec.md §4.1).
    pub fn roll_dice(self, max_value: u32, dist: Distribution<'_>) -> GenResult<u32> {
        match self {
            Prng::Live {
                mut source,
                mut run,
                run_max,
            } => {
                if run.len() >= run_max {
                    log::trace!("roll_dice: run full at {run_max}");
                    return GenResult::Rejected {
                        reason: "run full".to_string(),
                        prng: Prng::Live { source, run, run_max },
                    };
                }
                let value = source.draw(max_value, dist);
                run.push(value);
                GenResult::Generated {
                    value,
                    prng: Prng::Live { source, run, run_max },
                }
            }
            Prng::Replay { remaining, cursor } => match remaining.get(cursor) {
                Some(value) if value <= max_value => GenResult::Generated {
                    value,
                    prng: Prng::Replay {
                        remaining,
                        cursor: cursor + 1,
                    },
                },
                Some(value) => {
                    log::trace!("roll_dice: replay value {value} exceeds max {max_value}");
                    GenResult::Rejected {
                        reason: format!("replay value {value} exceeds max {max_value}"),
                        prng: Prng::Replay { remaining, cursor },
                    }
                }
                None => GenResult::Rejected {
                    reason: "replay exhausted".to_string(),
                    prng: Prng::Replay { remaining, cursor },
                },
            },
        }
    }

    /// Writes exactly `n` with no randomness; on replay, also verifies the
    /// peeled element equals `n` (spec.md §4.1).
    pub fn forced_choice(self, n: u32) -> GenResult<u32> {
        match self {
            Prng::Live {
                source,
                mut run,
                run_max,
            } => {
                if run.len() >= run_max {
                    return GenResult::Rejected {
                        reason: "run full".to_string(),
                        prng: Prng::Live { source, run, run_max },
                    };
                }
                run.push(n);
                GenResult::Generated {
                    value: n,
                    prng: Prng::Live { source, run, run_max },
                }
            }
            Prng::Replay { remaining, cursor } => match remaining.get(cursor) {
                Some(value) if value == n => GenResult::Generated {
                    value,
                    prng: Prng::Replay {
                        remaining,
                        cursor: cursor + 1,
                    },
                },
                Some(value) => GenResult::Rejected {
                    reason: format!("forced choice mismatch: expected {n}, got {value}"),
                    prng: Prng::Replay { remaining, cursor },
                },
                None => GenResult::Rejected {
                    reason: "replay exhausted".to_string(),
                    prng: Prng::Replay { remaining, cursor },
                },
            },
        }
    }
}
