//! External interface consumed by a test harness (spec.md §6).

use crate::choice::ChoiceSequence;
use crate::config::{RunConfig, ShrinkConfig};
use crate::error::FuzzError;
use crate::fuzzer::Fuzzer;
use crate::fuzzer::list::list_of_length;
use crate::prng::Prng;
use crate::result::GenResult;
use crate::shrink::{self as shrinker, Predicate};

/// One-shot evaluation of `fuzzer` against `prng`.
pub fn generate<A>(prng: Prng, fuzzer: &Fuzzer<A>) -> GenResult<A> {
    fuzzer.run(prng)
}

/// Runs `listOfLength(n, fuzzer)` once against a Live PRNG seeded with 0;
/// surfaces a rejection to the harness as a fatal error (spec.md §4.10).
pub fn examples<A: 'static>(n: usize, fuzzer: &Fuzzer<A>) -> Result<Vec<A>, FuzzError> {
    let list_fuzzer = list_of_length(n, fuzzer);
    match list_fuzzer.run(Prng::live_with_config(0, RunConfig::default())) {
        GenResult::Generated { value, .. } => Ok(value),
        GenResult::Rejected { reason, .. } => Err(FuzzError::Rejected(reason)),
    }
}

/// Returns the minimal witness: a choice sequence (no smaller accepted
/// candidate exists under the fixed pass set) and the value it decodes
/// to. `initial` must already reproduce the failure.
pub fn shrink<A>(
    initial: ChoiceSequence,
    fuzzer: &Fuzzer<A>,
    predicate: impl Predicate<A>,
) -> Result<(ChoiceSequence, A), FuzzError> {
    match fuzzer.run(Prng::replay(initial.clone())) {
        GenResult::Generated { value, .. } if !predicate.check(&value) => {}
        _ => return Err(FuzzError::ShrinkTargetDidNotFail),
    }
    Ok(shrinker::shrink(initial, fuzzer, predicate, ShrinkConfig::default()))
}
