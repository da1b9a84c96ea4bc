//! Crate-wide `Result` alias
//!
//! Fallible operations across the generators and assemblers all fail
//! with [`ScripError`]; the alias keeps their signatures down to one
//! type parameter.

use super::errors::ScripError;

/// Result carrying a [`ScripError`] on failure
///
/// Everything from the check-digit engine up to the document builders
/// returns this alias, so `?` moves errors between layers without any
/// mapping.
///
/// # Examples
///
/// ```
/// use scrip::domain::errors::ScripError;
/// use scrip::domain::result::Result;
///
/// fn nine_digits(candidate: &str) -> Result<&str> {
///     if candidate.len() == 9 && candidate.bytes().all(|b| b.is_ascii_digit()) {
///         Ok(candidate)
///     } else {
///         Err(ScripError::Validation(format!(
///             "expected nine digits, got '{candidate}'"
///         )))
///     }
/// }
///
/// assert!(nine_digits("943476591").is_ok());
/// assert!(nine_digits("oranges").is_err());
/// ```
pub type Result<T> = std::result::Result<T, ScripError>;
