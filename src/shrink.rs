//! Automatic counterexample minimization (spec.md §4.9).
//!
//! Six fixed passes propose candidate choice sequences strictly smaller
//! under shortlex than the current one; each candidate is replayed and
//! accepted only if the fuzzer still generates a value (no rejection) and
//! the predicate still fails. Passes restart from the accepted candidate;
//! the search stops when a full round finds nothing to accept.

use crate::choice::ChoiceSequence;
use crate::config::ShrinkConfig;
use crate::fuzzer::Fuzzer;
use crate::prng::Prng;
use crate::result::GenResult;

/// `PassOrFail`: the harness's property under test (spec.md §6). `check`
/// returns `true` when the property *holds* for `value`; a shrink target
/// is a value where it returns `false`.
pub trait Predicate<A> {
    fn check(&self, value: &A) -> bool;
}

impl<A, F: Fn(&A) -> bool> Predicate<A> for F {
    fn check(&self, value: &A) -> bool {
        self(value)
    }
}

/// Replays `candidate` and reports whether it is an acceptable shrink: the
/// fuzzer must still generate a value (never `Rejected`) and the
/// predicate must still fail.
fn replay_and_check<A>(
    fuzzer: &Fuzzer<A>,
    predicate: &impl Predicate<A>,
    candidate: &ChoiceSequence,
) -> Option<A> {
    match fuzzer.run(Prng::replay(candidate.clone())) {
        GenResult::Generated { value, .. } => {
            if predicate.check(&value) {
                None
            } else {
                Some(value)
            }
        }
        GenResult::Rejected { .. } => None,
    }
}

/// Powers of two from `len` down to 1, descending — the chunk sizes the
/// delete/zero passes try.
fn descending_pow2_sizes(len: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let mut size = len.next_power_of_two();
    if size > len {
        size /= 2;
    }
    let mut sizes = Vec::new();
    while size >= 1 {
        sizes.push(size);
        if size == 1 {
            break;
        }
        size /= 2;
    }
    sizes
}

fn delete_slices_candidates(seq: &ChoiceSequence) -> Vec<ChoiceSequence> {
    let len = seq.len();
    let mut candidates = Vec::new();
    for size in descending_pow2_sizes(len) {
        let mut start = 0;
        while start + size <= len {
            candidates.push(seq.without_range(start, start + size));
            start += size;
        }
    }
    candidates
}

fn zero_slices_candidates(seq: &ChoiceSequence) -> Vec<ChoiceSequence> {
    let len = seq.len();
    let mut candidates = Vec::new();
    for size in descending_pow2_sizes(len) {
        let mut start = 0;
        while start + size <= len {
            let candidate = seq.zeroed_range(start, start + size);
            if &candidate != seq {
                candidates.push(candidate);
            }
            start += size;
        }
    }
    candidates
}

/// Binary-search-style sequence of subtraction amounts: halves of `max`
/// down to 1, largest first, so the first accepted candidate subtracts as
/// much as possible.
fn halving_amounts(max: u32) -> Vec<u32> {
    let mut amounts = Vec::new();
    let mut amt = max;
    while amt >= 1 {
        amounts.push(amt);
        if amt == 1 {
            break;
        }
        amt /= 2;
    }
    amounts
}

fn bulk_subtract_candidates(seq: &ChoiceSequence) -> Vec<ChoiceSequence> {
    let len = seq.len();
    if len == 0 {
        return Vec::new();
    }
    let max_in_seq = seq.as_slice().iter().copied().max().unwrap_or(0);
    if max_in_seq == 0 {
        return Vec::new();
    }
    let mut candidates = Vec::new();
    let mut windows = vec![(0usize, len)];
    if len > 1 {
        windows.push((0, len / 2));
        windows.push((len / 2, len));
    }
    for (start, end) in windows {
        for amt in halving_amounts(max_in_seq) {
            candidates.push(seq.map_range(start, end, move |v| v.saturating_sub(amt)));
        }
    }
    candidates
}

fn single_element_minimize_candidates(seq: &ChoiceSequence) -> Vec<ChoiceSequence> {
    let mut candidates = Vec::new();
    for idx in 0..seq.len() {
        let value = seq.get(idx).unwrap_or(0);
        if value == 0 {
            continue;
        }
        // Binary search toward 0: try 0 first, then successively closer
        // approximations.
        candidates.push(seq.map_range(idx, idx + 1, |_| 0));
        let mut lo = 0u32;
        let mut hi = value;
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            candidates.push(seq.map_range(idx, idx + 1, move |_| mid));
            hi = mid;
        }
    }
    candidates
}

fn swap_adjacent_candidates(seq: &ChoiceSequence) -> Vec<ChoiceSequence> {
    let mut candidates = Vec::new();
    for i in 0..seq.len().saturating_sub(1) {
        let a = seq.get(i).unwrap_or(0);
        let b = seq.get(i + 1).unwrap_or(0);
        if a > b {
            candidates.push(seq.swapped(i, i + 1));
        }
    }
    candidates
}

fn redistribute_candidates(seq: &ChoiceSequence) -> Vec<ChoiceSequence> {
    let mut candidates = Vec::new();
    let len = seq.len();
    for i in 0..len {
        let vi = seq.get(i).unwrap_or(0);
        if vi == 0 {
            continue;
        }
        for j in (i + 1)..len {
            let vj = seq.get(j).unwrap_or(0);
            let delta = vi.min(u32::MAX - vj);
            if delta == 0 {
                continue;
            }
            let mut values = seq.as_slice().to_vec();
            values[i] -= delta;
            values[j] += delta;
            candidates.push(ChoiceSequence::from_vec(values));
        }
    }
    candidates
}

type PassFn = fn(&ChoiceSequence) -> Vec<ChoiceSequence>;

const PASSES: [(&str, PassFn); 6] = [
    ("delete-slices", delete_slices_candidates),
    ("zero-slices", zero_slices_candidates),
    ("bulk-subtract", bulk_subtract_candidates),
    ("single-element-minimize", single_element_minimize_candidates),
    ("swap-adjacent", swap_adjacent_candidates),
    ("redistribute", redistribute_candidates),
];

/// Runs the fixed pass sequence to a fixpoint, starting from `initial`
/// (which must already reproduce the failure). Returns the shortlex-
/// minimal sequence found and the value it decodes to.
pub fn shrink<A>(
    initial: ChoiceSequence,
    fuzzer: &Fuzzer<A>,
    predicate: impl Predicate<A>,
    config: ShrinkConfig,
) -> (ChoiceSequence, A) {
    let mut current = initial;
    let mut current_value = replay_and_check(fuzzer, &predicate, &current)
        .expect("initial choice sequence must reproduce the failure");

    let mut rounds = 0;
    loop {
        if rounds >= config.max_rounds {
            log::debug!("shrink: reached max_rounds={}", config.max_rounds);
            break;
        }
        rounds += 1;
        let mut improved_this_round = false;

        for (name, pass) in PASSES {
            let mut candidates = pass(&current);
            candidates.sort();
            for candidate in candidates {
                if candidate >= current {
                    continue;
                }
                log::trace!("shrink: trying {name} candidate of length {}", candidate.len());
                if let Some(value) = replay_and_check(fuzzer, &predicate, &candidate) {
                    log::debug!("shrink: accepted {name} candidate of length {}", candidate.len());
                    current = candidate;
                    current_value = value;
                    improved_this_round = true;
                    break;
                }
            }
            if improved_this_round {
                break;
            }
        }

        if !improved_this_round {
            break;
        }
    }

    (current, current_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzer::int::int;
    use crate::fuzzer::list::list;
    use crate::fuzzer::composite::unit;

    #[test]
    fn shrinks_negative_int_witness_to_minus_one() {
        let fuzzer = int();
        // Find a failing seed for "n >= 0" first.
        let mut failing_seq = None;
        for seed in 0..10_000u32 {
            let result = fuzzer.run(Prng::live(seed));
            if let GenResult::Generated { value, prng } = result {
                if value < 0 {
                    failing_seq = Some(prng.recorded());
                    break;
                }
            }
        }
        let seq = failing_seq.expect("some seed should produce a negative int");
        let (_, value) = shrink(seq, &fuzzer, |v: &i64| *v >= 0, ShrinkConfig::default());
        assert_eq!(value, -1);
    }

    #[test]
    fn shrinks_list_length_witness_to_minimum_violating_length() {
        let fuzzer = list(&unit());
        let mut failing_seq = None;
        for seed in 0..1_000u32 {
            let result = fuzzer.run(Prng::live(seed));
            if let GenResult::Generated { value, prng } = result {
                if value.len() > 3 {
                    failing_seq = Some(prng.recorded());
                    break;
                }
            }
        }
        let seq = failing_seq.expect("some seed should produce a list longer than 3");
        let (_, value) = shrink(seq, &fuzzer, |v: &Vec<()>| v.len() <= 3, ShrinkConfig::default());
        assert_eq!(value.len(), 4);
    }

    #[test]
    fn shrink_result_is_monotonically_smaller_or_equal() {
        let fuzzer = int();
        let mut failing_seq = None;
        for seed in 0..10_000u32 {
            let result = fuzzer.run(Prng::live(seed));
            if let GenResult::Generated { value, prng } = result {
                if value < 0 {
                    failing_seq = Some(prng.recorded());
                    break;
                }
            }
        }
        let seq = failing_seq.unwrap();
        let original = seq.clone();
        let (shrunk, _) = shrink(seq, &fuzzer, |v: &i64| *v >= 0, ShrinkConfig::default());
        assert!(shrunk <= original);
    }
}
