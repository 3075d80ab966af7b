//! The geometric-length list protocol (spec.md §4.6).
//!
//! Unlike drawing a length up front, the continuation decision is
//! interleaved with each element draw. This is what lets the shrinker
//! delete list elements structurally: flipping one continuation bit from
//! 1 to 0 at position `i >= lo` deletes element `i` and everything after,
//! with no custom per-type shrinker needed.

use super::composite::weighted_bool;
use super::Fuzzer;
use crate::result::GenResult;

/// `1 - 1 / (1 + (lo + hi/2))`. The `lo + hi/2` (not `(lo+hi)/2`) is a
/// documented pre-existing quirk (spec.md §9) that biases toward longer
/// lists; kept verbatim rather than "corrected" so shrinking behavior
/// matches spec exactly.
fn continuation_probability(lo: usize, hi: usize) -> f64 {
    let average = lo as f64 + (hi as f64) / 2.0;
    1.0 - 1.0 / (1.0 + average)
}

pub fn list_of_length_between<A: 'static>(lo: usize, hi: usize, item: &Fuzzer<A>) -> Fuzzer<Vec<A>> {
    let item = item.clone();
    let p = continuation_probability(lo, hi);
    let continue_fuzzer = weighted_bool(p);

    Fuzzer::new(move |prng| {
        let mut prng = prng;
        let mut acc = Vec::new();
        let mut i = 0usize;
        loop {
            if i < lo {
                match prng.forced_choice(1) {
                    GenResult::Generated { prng: next, .. } => prng = next,
                    GenResult::Rejected { reason, prng } => {
                        return GenResult::Rejected { reason, prng }
                    }
                }
                match item.run(prng) {
                    GenResult::Generated { value, prng: next } => {
                        acc.push(value);
                        prng = next;
                        i += 1;
                        continue;
                    }
                    GenResult::Rejected { reason, prng } => {
                        return GenResult::Rejected { reason, prng }
                    }
                }
            }
            if i == hi {
                match prng.forced_choice(0) {
                    GenResult::Generated { prng: next, .. } => {
                        return GenResult::Generated { value: acc, prng: next }
                    }
                    GenResult::Rejected { reason, prng } => {
                        return GenResult::Rejected { reason, prng }
                    }
                }
            }
            match continue_fuzzer.run(prng) {
                GenResult::Generated { value: true, prng: next } => match item.run(next) {
                    GenResult::Generated { value, prng: next } => {
                        acc.push(value);
                        prng = next;
                        i += 1;
                    }
                    GenResult::Rejected { reason, prng } => {
                        return GenResult::Rejected { reason, prng }
                    }
                },
                GenResult::Generated { value: false, prng: next } => {
                    return GenResult::Generated { value: acc, prng: next }
                }
                GenResult::Rejected { reason, prng } => {
                    return GenResult::Rejected { reason, prng }
                }
            }
        }
    })
}

/// `listOfLengthBetween(0, 32, item)`.
pub fn list<A: 'static>(item: &Fuzzer<A>) -> Fuzzer<Vec<A>> {
    list_of_length_between(0, 32, item)
}

/// `listOfLengthBetween(n, n, item)`.
pub fn list_of_length<A: 'static>(n: usize, item: &Fuzzer<A>) -> Fuzzer<Vec<A>> {
    list_of_length_between(n, n, item)
}

/// `list` converted to a boxed slice.
pub fn array<A: 'static>(item: &Fuzzer<A>) -> Fuzzer<Box<[A]>> {
    list(item).map(Vec::into_boxed_slice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzer::composite::unit;
    use crate::prng::Prng;

    #[test]
    fn length_respects_bounds() {
        let fuzzer = list_of_length_between(2, 5, &super::super::int::uniform_int(9));
        for seed in 0..300u32 {
            if let GenResult::Generated { value, .. } = fuzzer.run(Prng::live(seed)) {
                assert!(value.len() >= 2 && value.len() <= 5, "length {}", value.len());
            }
        }
    }

    #[test]
    fn list_of_length_is_exact() {
        let fuzzer = list_of_length(4, &unit());
        let result = fuzzer.run(Prng::live(0));
        if let GenResult::Generated { value, .. } = result {
            assert_eq!(value.len(), 4);
        }
    }

    #[test]
    fn empty_list_replay_is_a_single_terminal_choice() {
        let fuzzer: Fuzzer<Vec<()>> = list_of_length_between(0, 3, &unit());
        let seq = crate::choice::ChoiceSequence::from_vec(vec![0]);
        let result = fuzzer.run(Prng::replay(seq));
        match result {
            GenResult::Generated { value, .. } => assert!(value.is_empty()),
            GenResult::Rejected { .. } => panic!("replay of [0] should generate an empty list"),
        }
    }

    #[test]
    fn four_ones_then_zero_replays_to_length_four() {
        let fuzzer: Fuzzer<Vec<()>> = list_of_length_between(0, 10, &unit());
        let seq = crate::choice::ChoiceSequence::from_vec(vec![1, 1, 1, 1, 0]);
        let result = fuzzer.run(Prng::replay(seq));
        match result {
            GenResult::Generated { value, .. } => assert_eq!(value.len(), 4),
            GenResult::Rejected { .. } => panic!("replay should generate length 4"),
        }
    }
}
