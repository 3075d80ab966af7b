//! Float codec and float fuzzers (spec.md §4.4, §9).
//!
//! `well_shrinking_float` builds a float from two 32-bit integers plus a
//! sign bit. Bit layout (documented per spec.md §9's recommendation):
//! - `hi`'s low 16 bits are the integer part (0..65535).
//! - `hi`'s high 16 bits are a fractional numerator over 2^16, so `hi == 0`
//!   is exactly the integer `0`, nonzero-low/zero-high is a whole number,
//!   and a nonzero high half is a simple binary fraction.
//! - `lo` perturbs the result by a tiny amount, so under shortlex (`hi`
//!   compared first) it only matters once `hi` is already fixed, landing
//!   "arbitrary mantissa" noise strictly below "simple fraction" in
//!   niceness.
//! - `should_negate` flips the sign.
//!
//! `(0, 0, _) -> 0.0` and the construction can never produce NaN or
//! infinity, since every term is a bounded finite sum/quotient.

use super::int::uniform_int;
use super::Fuzzer;
use super::frequency::int_frequency;

pub fn well_shrinking_float(hi: u32, lo: u32, should_negate: bool) -> f64 {
    if hi == 0 && lo == 0 {
        return 0.0;
    }
    let int_part = (hi & 0xFFFF) as f64;
    let frac_numerator = (hi >> 16) as f64;
    let frac = frac_numerator / 65_536.0;
    let fine = (lo as f64) / (u32::MAX as f64) / 65_536.0;
    let magnitude = int_part + frac + fine;
    if should_negate {
        -magnitude
    } else {
        magnitude
    }
}

fn well_shrinking_float_fuzzer() -> Fuzzer<f64> {
    let hi = uniform_int(u32::MAX);
    let lo = uniform_int(u32::MAX);
    let negate = super::composite::bool();
    hi.map3(&lo, &negate, well_shrinking_float)
}

/// `intFrequency [(1, 0), (5, wellShrinkingFloat), (1, +Inf), (1, -Inf), (1, NaN)]`.
pub fn float() -> Fuzzer<f64> {
    int_frequency(vec![
        (1, Fuzzer::constant(0.0)),
        (5, well_shrinking_float_fuzzer()),
        (1, Fuzzer::constant(f64::INFINITY)),
        (1, Fuzzer::constant(f64::NEG_INFINITY)),
        (1, Fuzzer::constant(f64::NAN)),
    ])
}

/// `wellShrinkingFloat` only — never NaN or +-Inf.
pub fn nice_float() -> Fuzzer<f64> {
    well_shrinking_float_fuzzer()
}

fn fractional_float(top20: u32, bottom32: u32) -> f64 {
    let mantissa = ((top20 as u64) << 32) | (bottom32 as u64);
    let bits = mantissa | 0x3FF0_0000_0000_0000u64;
    f64::from_bits(bits) - 1.0
}

const MAX_20_BITS: u32 = (1 << 20) - 1;

/// `intFrequency [(1, 0), (1, maxFractionalFloat), (4, fractionalFloat(...))]`
/// — a float in `[0, 1)`. Only 20 of `hi`'s 32 bits are drawn (the top 12
/// are skipped) to save choice-sequence capacity, since the mantissa only
/// needs 52 bits total and `lo` supplies the other 32.
pub fn percentage() -> Fuzzer<f64> {
    let top20 = uniform_int(MAX_20_BITS);
    let bottom32 = uniform_int(u32::MAX);
    let fractional = top20.map2(&bottom32, fractional_float);
    int_frequency(vec![
        (1, Fuzzer::constant(0.0)),
        (1, Fuzzer::constant(fractional_float(MAX_20_BITS, u32::MAX))),
        (4, fractional),
    ])
}

/// `percentage * (hi - lo) + lo`. Does not shrink toward nice fractions;
/// only appropriate where that is acceptable (spec.md §4.4).
pub fn scaled_float(lo: f64, hi: f64) -> Fuzzer<f64> {
    percentage().map(move |p| p * (hi - lo) + lo)
}

/// Float in `[lo, hi]`, straddling ranges split positive/negative with
/// positive preferred, same shape as `int_range`.
pub fn float_range(lo: f64, hi: f64) -> Fuzzer<f64> {
    let (lo, hi) = if hi < lo { (hi, lo) } else { (lo, hi) };
    if lo == hi {
        return Fuzzer::constant(lo);
    }
    if lo >= 0.0 {
        return scaled_float(0.0, hi - lo).map(move |v| v + lo);
    }
    if hi <= 0.0 {
        return scaled_float(0.0, hi - lo).map(move |v| hi - v);
    }
    let positive = scaled_float(0.0, hi);
    let negative = scaled_float(0.0, -lo).map(|v| -v);
    let zero = Fuzzer::constant(0.0);
    int_frequency(vec![(2, positive), (2, negative), (1, zero)])
}

pub fn float_at_least(n: f64) -> Fuzzer<f64> {
    float_range(n, f64::MAX)
}

pub fn float_at_most(n: f64) -> Fuzzer<f64> {
    float_range(f64::MIN, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prng::Prng;
    use crate::result::GenResult;

    #[test]
    fn zero_zero_is_zero() {
        assert_eq!(well_shrinking_float(0, 0, false), 0.0);
    }

    #[test]
    fn never_nan_or_infinite() {
        for hi in [0u32, 1, 255, 65_536, u32::MAX] {
            for lo in [0u32, 1, u32::MAX] {
                let v = well_shrinking_float(hi, lo, false);
                assert!(v.is_finite());
                let v = well_shrinking_float(hi, lo, true);
                assert!(v.is_finite());
            }
        }
    }

    #[test]
    fn nice_float_totality() {
        let fuzzer = nice_float();
        for seed in 0..200u32 {
            if let GenResult::Generated { value, .. } = fuzzer.run(Prng::live(seed)) {
                assert!(!value.is_nan());
                assert!(value.is_finite());
            }
        }
    }

    #[test]
    fn percentage_is_within_unit_interval() {
        let fuzzer = percentage();
        for seed in 0..200u32 {
            if let GenResult::Generated { value, .. } = fuzzer.run(Prng::live(seed)) {
                assert!((0.0..1.0).contains(&value), "value {value} outside [0,1)");
            }
        }
    }

    #[test]
    fn float_range_contains_bounds() {
        let fuzzer = float_range(-5.0, 5.0);
        for seed in 0..200u32 {
            if let GenResult::Generated { value, .. } = fuzzer.run(Prng::live(seed)) {
                assert!((-5.0..=5.0).contains(&value), "value {value} out of range");
            }
        }
    }

    #[cfg(feature = "golden_vectors")]
    #[test]
    fn well_shrinking_float_vectors() {
        assert_eq!(well_shrinking_float(0, 0, false), 0.0);
        assert_eq!(well_shrinking_float(1, 0, false), 1.0);
        assert_eq!(well_shrinking_float(1, 0, true), -1.0);
    }
}
