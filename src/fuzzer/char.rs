//! Character fuzzers (spec.md §4.5).

use super::frequency::int_frequency;
use super::int::int_range;
use super::Fuzzer;

const HIGH_SURROGATE_START: u32 = 0xD800;
const LOW_SURROGATE_END: u32 = 0xDFFF;

fn code_point_to_char(code_point: u32) -> char {
    char::from_u32(code_point).unwrap_or('\u{FFFD}')
}

/// `intRange(32, 126)` mapped to code point.
pub fn ascii_char() -> Fuzzer<char> {
    int_range(32, 126).map(|v| code_point_to_char(v as u32))
}

fn arbitrary_unicode() -> Fuzzer<char> {
    int_range(0, 0x10_FFFF).filter(|&cp| {
        let cp = cp as u32;
        !(HIGH_SURROGATE_START..=LOW_SURROGATE_END).contains(&cp)
    }).map(|cp| code_point_to_char(cp as u32))
}

/// `intFrequency [(5, asciiChar), (2, whitespace), (1, diacritic), (1, emoji), (1, arbitraryUnicode)]`,
/// excluding surrogate code points `0xD800..0xDBFF` (and, as a Rust-level
/// necessity, the rest of the surrogate block up to `0xDFFF`, since no
/// `char` value may ever encode one).
pub fn char() -> Fuzzer<char> {
    let whitespace = super::frequency::one_of_values(vec![' ', '\t', '\n']);
    let diacritic = super::frequency::one_of_values(vec!['\u{302}', '\u{303}', '\u{308}']);
    let emoji = super::frequency::one_of_values(vec!['\u{1F308}', '\u{2764}', '\u{1F525}']);

    int_frequency(vec![
        (5, ascii_char()),
        (2, whitespace),
        (1, diacritic),
        (1, emoji),
        (1, arbitrary_unicode()),
    ])
}
