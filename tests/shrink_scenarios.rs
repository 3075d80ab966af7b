//! Scenarios #4 and #5 (spec.md §8): shrinking a failing integer witness
//! down to its minimal counterexample, and shrinking a failing list down
//! to the minimal length that still violates the property.

use choicefuzz::prelude::*;

fn find_failing_seq<A: 'static>(fuzzer: &Fuzzer<A>, fails: impl Fn(&A) -> bool) -> ChoiceSequence {
    for seed in 0..10_000u32 {
        if let GenResult::Generated { value, prng } = fuzzer.run(Prng::live(seed)) {
            if fails(&value) {
                return prng.recorded();
            }
        }
    }
    panic!("no seed in range produced a failing value");
}

#[test]
fn shrinks_to_the_boundary_violation() {
    let fuzzer = int_range(-1_000_000, 1_000_000);
    let seq = find_failing_seq(&fuzzer, |v| *v < -10);
    let (_, value) = shrink(seq, &fuzzer, |v: &i64| *v >= -10).expect("should reproduce");
    assert_eq!(value, -11);
}

#[test]
fn shrinks_list_to_minimal_length_over_threshold() {
    let fuzzer = list_of_length_between(0, 20, &int_range(0, 9));
    let seq = find_failing_seq(&fuzzer, |v: &Vec<i64>| v.len() > 5);
    let (_, value) = shrink(seq, &fuzzer, |v: &Vec<i64>| v.len() <= 5).expect("should reproduce");
    assert_eq!(value.len(), 6);
}

#[test]
fn shrink_never_grows_the_choice_sequence() {
    let fuzzer = int();
    let seq = find_failing_seq(&fuzzer, |v| *v > 1000);
    let original_len = seq.len();
    let (shrunk, _) = shrink(seq, &fuzzer, |v: &i64| *v <= 1000).expect("should reproduce");
    assert!(shrunk.len() <= original_len);
}
