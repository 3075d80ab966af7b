//! Weighted choice among fuzzers (spec.md §4.7).

use super::int::uniform_int;
use super::Fuzzer;

/// `intFrequency`: draws a uniform index into the weight-partitioned
/// domain `[0, W-1]` (`W` = sum of weights) and runs the entry whose
/// cumulative weight range contains it. Smaller indices fall in earlier
/// entries, so shrinking toward 0 biases toward the first entry — callers
/// must place the simplest alternative first.
pub fn int_frequency<A: 'static>(entries: Vec<(u32, Fuzzer<A>)>) -> Fuzzer<A> {
    if entries.is_empty() {
        return Fuzzer::invalid("Fuzz.intFrequency: called with an empty list");
    }
    let total: u64 = entries.iter().map(|&(w, _)| w as u64).sum();
    if total == 0 {
        return Fuzzer::invalid("Fuzz.intFrequency: all weights were 0");
    }
    let cumulative: Vec<u64> = entries
        .iter()
        .scan(0u64, |acc, &(w, _)| {
            *acc += w as u64;
            Some(*acc)
        })
        .collect();
    let fuzzers: Vec<Fuzzer<A>> = entries.into_iter().map(|(_, f)| f).collect();
    let index_fuzzer = uniform_int((total - 1) as u32);
    index_fuzzer.and_then(move |j| {
        let j = j as u64;
        let idx = cumulative
            .iter()
            .position(|&c| j < c)
            .unwrap_or(fuzzers.len() - 1);
        fuzzers[idx].clone()
    })
}

/// `frequency`: like `intFrequency` but weights are floats. Whole-number
/// weights delegate to `intFrequency` (more shrink-friendly, one small
/// choice instead of a mantissa-wide draw); fractional weights walk the
/// cumulative list via a drawn `percentage`.
pub fn frequency<A: 'static>(entries: Vec<(f64, Fuzzer<A>)>) -> Fuzzer<A> {
    if entries.is_empty() {
        return Fuzzer::invalid("Fuzz.frequency: called with an empty list");
    }
    if let Some(&(w, _)) = entries.iter().find(|&&(w, _)| w < 0.0) {
        return Fuzzer::invalid(format!(
            "Fuzz.frequency: weight {w} is less than 0"
        ));
    }
    let total: f64 = entries.iter().map(|&(w, _)| w).sum();
    if total <= 0.0 {
        return Fuzzer::invalid("Fuzz.frequency: all weights were 0");
    }
    let all_whole = entries.iter().all(|&(w, _)| w.fract() == 0.0);
    if all_whole {
        let int_entries = entries.into_iter().map(|(w, f)| (w as u32, f)).collect();
        return int_frequency(int_entries);
    }

    let cumulative: Vec<f64> = entries
        .iter()
        .scan(0.0f64, |acc, &(w, _)| {
            *acc += w;
            Some(*acc)
        })
        .collect();
    let fuzzers: Vec<Fuzzer<A>> = entries.into_iter().map(|(_, f)| f).collect();

    super::float::percentage().and_then(move |p| {
        let target = p * total;
        let idx = cumulative
            .iter()
            .position(|&c| target < c)
            .unwrap_or(fuzzers.len() - 1);
        fuzzers[idx].clone()
    })
}

/// Equal-weight choice among fuzzers; rejects if empty.
pub fn one_of<A: 'static>(fuzzers: Vec<Fuzzer<A>>) -> Fuzzer<A> {
    if fuzzers.is_empty() {
        return Fuzzer::invalid("Fuzz.oneOf: called with an empty list");
    }
    int_frequency(fuzzers.into_iter().map(|f| (1, f)).collect())
}

/// `oneOf(map constant values)`.
pub fn one_of_values<A: Clone + 'static>(values: Vec<A>) -> Fuzzer<A> {
    one_of(values.into_iter().map(Fuzzer::constant).collect())
}

/// `frequency` over constant values.
pub fn frequency_values<A: Clone + 'static>(entries: Vec<(f64, A)>) -> Fuzzer<A> {
    frequency(
        entries
            .into_iter()
            .map(|(w, v)| (w, Fuzzer::constant(v)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prng::Prng;
    use crate::result::GenResult;

    #[test]
    fn empty_one_of_is_rejected() {
        let fuzzer: Fuzzer<i32> = one_of(vec![]);
        let result = fuzzer.run(Prng::live(0));
        assert!(result.is_rejected());
    }

    #[test]
    fn negative_weight_is_rejected_with_function_name() {
        let fuzzer = frequency(vec![(-1.0, Fuzzer::constant(0))]);
        let result = fuzzer.run(Prng::live(0));
        match result {
            GenResult::Rejected { reason, .. } => {
                assert!(reason.contains("Fuzz.frequency"));
                assert!(reason.contains("less than 0"));
            }
            GenResult::Generated { .. } => panic!("expected rejection"),
        }
    }

    #[test]
    fn all_zero_weights_rejected() {
        let fuzzer = int_frequency::<i32>(vec![(0, Fuzzer::constant(1)), (0, Fuzzer::constant(2))]);
        let result = fuzzer.run(Prng::live(0));
        assert!(result.is_rejected());
    }

    #[test]
    fn first_entry_is_preferred_on_shrink_friendly_path() {
        // With weight skewed heavily toward the first entry, most seeds
        // should land on it.
        let fuzzer = int_frequency(vec![(99, Fuzzer::constant("first")), (1, Fuzzer::constant("second"))]);
        let mut first_count = 0;
        for seed in 0..100u32 {
            if let GenResult::Generated { value, .. } = fuzzer.run(Prng::live(seed)) {
                if value == "first" {
                    first_count += 1;
                }
            }
        }
        assert!(first_count > 50);
    }

    #[test]
    fn one_of_values_produces_a_member() {
        let fuzzer = one_of_values(vec![1, 2, 3]);
        for seed in 0..20u32 {
            if let GenResult::Generated { value, .. } = fuzzer.run(Prng::live(seed)) {
                assert!([1, 2, 3].contains(&value));
            }
        }
    }
}
