// choicefuzz/src/lib.rs

//! A property-based ("fuzz") testing core: composable value generators
//! ("fuzzers") backed by a choice-sequence PRNG, plus automatic
//! counterexample minimization ("shrinking") derived entirely from the
//! recorded choices. See `SPEC_FULL.md` for the full component design.

#![allow(dead_code)]

pub mod api;
pub mod choice;
pub mod config;
pub mod error;
pub mod fuzzer;
pub mod prng;
pub mod result;
pub mod shrink;
pub mod source;

/// Prelude for easy importing of the common surface.
pub mod prelude {
    pub use crate::api::{examples, generate, shrink};
    pub use crate::choice::ChoiceSequence;
    pub use crate::config::{RunConfig, ShrinkConfig};
    pub use crate::error::FuzzError;
    pub use crate::fuzzer::char::{ascii_char, char};
    pub use crate::fuzzer::composite::{bool, maybe, order, pair, triple, unit, weighted_bool};
    pub use crate::fuzzer::float::{
        float, float_at_least, float_at_most, float_range, nice_float, percentage, scaled_float,
    };
    pub use crate::fuzzer::frequency::{frequency, frequency_values, int_frequency, one_of, one_of_values};
    pub use crate::fuzzer::int::{int, int_at_least, int_at_most, int_range, uniform_int};
    pub use crate::fuzzer::list::{array, list, list_of_length, list_of_length_between};
    pub use crate::fuzzer::string::{ascii_string, string, string_of_length_between};
    pub use crate::fuzzer::Fuzzer;
    pub use crate::prng::Prng;
    pub use crate::result::GenResult;
}
