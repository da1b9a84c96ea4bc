//! Domain error types
//!
//! This module defines the error hierarchy for scrip. All errors are
//! domain-specific and don't expose third-party types.
//!
//! [`ScripError::UnrepresentableSequence`] is the one expected-and-retried
//! variant: generators discard the candidate sequence and redraw, so callers
//! only see it via [`ScripError::RetriesExhausted`] when the redraw cap is
//! hit. Everything else surfaces synchronously and is never retried.

use thiserror::Error;

/// Main scrip error type
///
/// This is the primary error type used throughout the crate.
#[derive(Debug, Error)]
pub enum ScripError {
    /// Input validation errors: wrong length, wrong character class,
    /// out-of-range parameter
    #[error("Validation error: {0}")]
    Validation(String),

    /// The 9-digit sequence has no valid Modulus-11 check digit
    /// (the computation yielded 10)
    #[error("Sequence '{0}' has no valid check digit (Modulus-11 result is 10)")]
    UnrepresentableSequence(String),

    /// Free-text status did not match the closed business-status set
    #[error("Invalid business status '{input}'. Choose from: {expected}")]
    UnrecognizedStatus {
        /// The raw input that failed to match
        input: String,
        /// Comma-separated list of accepted values
        expected: String,
    },

    /// Rejection sampling gave up after the attempt cap
    #[error("Gave up after {attempts} attempts: {reason}")]
    RetriesExhausted {
        /// Number of attempts made before giving up
        attempts: u32,
        /// What was being generated
        reason: String,
    },

    /// Invariant violation indicating a defect in the crate itself
    #[error("Invariant violation: {0}")]
    Invariant(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ScripError {
    fn from(err: serde_json::Error) -> Self {
        ScripError::Serialization(err.to_string())
    }
}
