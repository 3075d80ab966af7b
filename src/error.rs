//! Harness-facing error surface.
//!
//! In-run failures stay modeled as data (see [`crate::result::GenResult`]);
//! this type is only for the two entry points that can fail outright.

/// Fatal failure surfaced to a caller of [`crate::api::examples`] or
/// [`crate::api::shrink`].
#[derive(Debug, thiserror::Error)]
pub enum FuzzError {
    /// A fuzzer run was rejected and the caller had no way to retry it.
    #[error("fuzzer rejected: {0}")]
    Rejected(String),
    /// The choice sequence handed to `shrink` did not reproduce the
    /// original predicate failure.
    #[error("shrink target did not reproduce the original failure")]
    ShrinkTargetDidNotFail,
}
