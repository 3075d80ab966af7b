//! Small composite fuzzers (spec.md §4.8).

use super::frequency::{int_frequency, one_of_values};
use super::Fuzzer;
use crate::prng::Prng;
use crate::result::GenResult;

pub fn pair<A: 'static, B: 'static>(a: &Fuzzer<A>, b: &Fuzzer<B>) -> Fuzzer<(A, B)> {
    a.map2(b, |a, b| (a, b))
}

pub fn triple<A: 'static, B: 'static, C: 'static>(
    a: &Fuzzer<A>,
    b: &Fuzzer<B>,
    c: &Fuzzer<C>,
) -> Fuzzer<(A, B, C)> {
    a.map3(b, c, |a, b, c| (a, b, c))
}

/// `intFrequency [(1, constant None), (3, map Some inner)]`.
pub fn maybe<A: Clone + 'static>(inner: &Fuzzer<A>) -> Fuzzer<Option<A>> {
    let none = Fuzzer::constant(None);
    let some = inner.map(Some);
    int_frequency(vec![(1, none), (3, some)])
}

/// `intFrequency [(1, Err ...), (3, Ok ...)]`.
pub fn result<T: 'static, E: 'static>(ok: &Fuzzer<T>, err: &Fuzzer<E>) -> Fuzzer<Result<T, E>> {
    let err_branch = err.map(Err);
    let ok_branch = ok.map(Ok);
    int_frequency(vec![(1, err_branch), (3, ok_branch)])
}

/// `oneOfValues [False, True]` — shrinks `false < true`.
#[allow(non_snake_case)]
pub fn bool() -> Fuzzer<bool> {
    one_of_values(vec![false, true])
}

/// `oneOfValues [LT, EQ, GT]`.
pub fn order() -> Fuzzer<std::cmp::Ordering> {
    use std::cmp::Ordering;
    one_of_values(vec![Ordering::Less, Ordering::Equal, Ordering::Greater])
}

/// A fuzzer that always generates `()`, consuming no choices.
pub fn unit() -> Fuzzer<()> {
    Fuzzer::constant(())
}

/// Clamps `p`, uses `forced_choice` at the extremes, otherwise
/// `rollDice(1, weighted[1-p, p])` then `0 -> false, 1 -> true`.
pub fn weighted_bool(p: f64) -> Fuzzer<bool> {
    let p = p.clamp(0.0, 1.0);
    if p <= 0.0 {
        return Fuzzer::new(move |prng| prng.forced_choice(0).map(|v| v == 1));
    }
    if p >= 1.0 {
        return Fuzzer::new(move |prng| prng.forced_choice(1).map(|v| v == 1));
    }
    const DENOM: u32 = 1 << 16;
    let true_weight = ((p * DENOM as f64).round() as u32).clamp(1, DENOM - 1);
    let false_weight = DENOM - true_weight;
    let weights = vec![false_weight, true_weight];
    Fuzzer::new(move |prng: Prng| match prng.roll_dice(1, crate::source::Distribution::Weighted(&weights)) {
        GenResult::Generated { value, prng } => GenResult::Generated {
            value: value == 1,
            prng,
        },
        GenResult::Rejected { reason, prng } => GenResult::Rejected { reason, prng },
    })
}
