//! String fuzzers (spec.md §4.5).

use super::char::{ascii_char, char};
use super::list::list_of_length_between;
use super::Fuzzer;

fn chars_to_string(chars: Vec<char>) -> String {
    chars.into_iter().collect()
}

pub fn string_of_length_between(lo: usize, hi: usize, item: &Fuzzer<char>) -> Fuzzer<String> {
    list_of_length_between(lo, hi, item).map(chars_to_string)
}

/// `stringOfLengthBetween(0, 10, char)`.
pub fn string() -> Fuzzer<String> {
    string_of_length_between(0, 10, &char())
}

pub fn ascii_string() -> Fuzzer<String> {
    string_of_length_between(0, 10, &ascii_char())
}
