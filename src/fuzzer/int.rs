//! Integer fuzzers (spec.md §4.3).

use super::frequency::int_frequency;
use super::{roll_dice, Fuzzer};

/// `rollDice(n, uniform[0,n])`.
pub fn uniform_int(n: u32) -> Fuzzer<u32> {
    roll_dice(n)
}

/// `uniformInt(2^k - 1)`.
pub fn int_bits(k: u32) -> Fuzzer<u32> {
    debug_assert!(k <= 32);
    let max = if k == 32 { u32::MAX } else { (1u32 << k) - 1 };
    uniform_int(max)
}

/// Size classes for the bucketed signed integer, smallest (most preferred)
/// first: `(weight, bits)`.
const BUCKETS: [(u32, u32); 4] = [(4, 4), (8, 8), (2, 16), (1, 32)];

fn decode_signed(n: u32) -> i64 {
    let sign_bit = n & 1;
    let magnitude = (n >> 1) as i64;
    if sign_bit == 1 {
        -magnitude
    } else {
        magnitude
    }
}

/// A bucketed signed integer: picks a bit-width bucket (0 most preferred),
/// draws that many bits, then splits low bit = sign, rest = magnitude.
/// Shrinks toward 0 because both the bucket index and the magnitude shrink
/// toward 0 under shortlex.
pub fn int() -> Fuzzer<i64> {
    let entries: Vec<(u32, Fuzzer<u32>)> = BUCKETS
        .iter()
        .map(|&(weight, bits)| (weight, int_bits(bits)))
        .collect();
    int_frequency(entries).map(decode_signed)
}

fn next_pow2_at_least(n: u32) -> u32 {
    if n <= 1 {
        1
    } else {
        n.next_power_of_two()
    }
}

fn bits_needed(upper: u64) -> u32 {
    // Smallest k with 2^k - 1 >= upper, i.e. 2^k >= upper + 1.
    let mut k = 0u32;
    while (1u64 << k) < upper.saturating_add(1) {
        k += 1;
    }
    k
}

/// Draws an unsigned integer in `[0, upper]`.
fn int_(upper: u64) -> Fuzzer<u64> {
    if upper <= 255 {
        return uniform_int(upper as u32).map(|v| v as u64);
    }
    let needed_bits = bits_needed(upper);
    let max_bits = next_pow2_at_least(needed_bits);
    let mut restricted: Vec<(u32, u32)> = BUCKETS
        .iter()
        .copied()
        .filter(|&(_, bits)| bits <= max_bits)
        .collect();
    if restricted.is_empty() {
        restricted.push(BUCKETS[0]);
    }
    let entries: Vec<(u32, Fuzzer<u32>)> = restricted
        .iter()
        .map(|&(weight, bits)| (weight, int_bits(bits)))
        .collect();
    let modulus = upper + 1;
    int_frequency(entries).map(move |v| (v as u64) % modulus)
}

/// Draws a signed integer in `[lo, hi]` (spec.md §4.3).
pub fn int_range(lo: i64, hi: i64) -> Fuzzer<i64> {
    let (lo, hi) = if hi < lo { (hi, lo) } else { (lo, hi) };
    if lo == hi {
        return Fuzzer::constant(lo);
    }
    if lo >= 0 {
        let span = (hi - lo) as u64;
        return int_(span).map(move |v| v as i64 + lo);
    }
    if hi <= 0 {
        let span = (hi - lo) as u64;
        return int_(span).map(move |v| -(v as i64) + hi);
    }
    // Straddles zero: prefer positive over negative, with a direct-zero
    // shortcut, weights 2:2:1 (spec.md §4.3, §9).
    let positive = int_(hi as u64).map(|v| v as i64);
    let negative = int_((-lo) as u64).map(|v| -(v as i64));
    let zero = Fuzzer::constant(0i64);
    int_frequency(vec![(2, positive), (2, negative), (1, zero)])
}

const UPPER_BOUND: i64 = (1i64 << 32) - 1;

/// `intRange(n, 2^32 - 1)`.
pub fn int_at_least(n: i64) -> Fuzzer<i64> {
    int_range(n, UPPER_BOUND)
}

/// `intRange(-(2^32 - 1), n)`.
pub fn int_at_most(n: i64) -> Fuzzer<i64> {
    int_range(-UPPER_BOUND, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prng::Prng;

    #[test]
    fn int_range_contains_bounds() {
        let fuzzer = int_range(20, 50);
        for seed in 0..200u32 {
            let result = fuzzer.run(Prng::live(seed));
            if let crate::result::GenResult::Generated { value, .. } = result {
                assert!((20..=50).contains(&value), "value {value} out of range");
            }
        }
    }

    #[test]
    fn int_range_swaps_out_of_order_bounds() {
        let fuzzer = int_range(50, 20);
        let result = fuzzer.run(Prng::live(1));
        if let crate::result::GenResult::Generated { value, .. } = result {
            assert!((20..=50).contains(&value));
        }
    }

    #[test]
    fn int_range_equal_bounds_is_constant() {
        let fuzzer = int_range(7, 7);
        let result = fuzzer.run(Prng::live(0));
        match result {
            crate::result::GenResult::Generated { value, .. } => assert_eq!(value, 7),
            crate::result::GenResult::Rejected { .. } => panic!("constant should never reject"),
        }
    }

    #[test]
    fn int_range_straddling_zero_contains_bounds() {
        let fuzzer = int_range(-10, 10);
        for seed in 0..200u32 {
            let result = fuzzer.run(Prng::live(seed));
            if let crate::result::GenResult::Generated { value, .. } = result {
                assert!((-10..=10).contains(&value), "value {value} out of range");
            }
        }
    }

    #[test]
    fn int_is_deterministic_for_seed() {
        let fuzzer = int();
        let a = fuzzer.run(Prng::live(0)).into_value();
        let b = fuzzer.run(Prng::live(0)).into_value();
        assert_eq!(a.ok(), b.ok());
    }

    #[test]
    fn decode_signed_maps_zero_both_ways() {
        assert_eq!(decode_signed(0), 0);
        assert_eq!(decode_signed(1), 0);
    }
}
