//! Check digit arithmetic for NHS identifiers
//!
//! This module provides the two checksum schemes used across the crate:
//! Modulus-11 for NHS numbers and Modulus-37 for prescription order
//! numbers. Generators call these to finish an identifier; validators
//! call them to recompute and compare.

use crate::domain::errors::ScripError;
use crate::domain::result::Result;

/// Positional weights applied to the nine digits of an NHS number,
/// most significant first.
pub const NHS_NUMBER_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Output alphabet for the Modulus-37 scheme. Index 36 is the `+`
/// that stands in for a two-digit result.
pub const CHECK_CHARACTER_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ+";

/// Calculate the Modulus-11 check digit for a nine-digit sequence
///
/// Each digit is multiplied by its positional weight (10 down to 2),
/// the products are summed, and the check digit is `11 - (sum % 11)`,
/// with 11 mapping to 0.
///
/// # Arguments
///
/// * `sequence` - Exactly nine ASCII digits
///
/// # Returns
///
/// Returns the check digit (0-9), or an error when the arithmetic
/// yields 10, which has no single-digit representation. Sequences
/// that hit this case cannot become NHS numbers and must be redrawn.
///
/// # Examples
///
/// ```
/// use scrip::core::checkdigit::modulus_11_check_digit;
///
/// assert_eq!(modulus_11_check_digit("943476591").unwrap(), 9);
/// ```
pub fn modulus_11_check_digit(sequence: &str) -> Result<u8> {
    if sequence.len() != 9 || !sequence.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ScripError::Validation(format!(
            "Check digit input must be exactly 9 digits, got '{sequence}'"
        )));
    }

    let sum: u32 = sequence
        .bytes()
        .zip(NHS_NUMBER_WEIGHTS)
        .map(|(b, weight)| u32::from(b - b'0') * weight)
        .sum();

    match 11 - (sum % 11) {
        11 => Ok(0),
        10 => Err(ScripError::UnrepresentableSequence(sequence.to_string())),
        digit => Ok(digit as u8),
    }
}

/// Calculate the Modulus-37 check character for a prescription ID body
///
/// Every character except `-` separators is read as a base-36 digit
/// (case-insensitive) and folded into a running total:
/// `total = ((total + value) * 2) % 37`. The check character is the
/// alphabet entry at the offset `i` satisfying `(total + i) % 37 == 1`.
///
/// # Arguments
///
/// * `body` - The identifier without its check character; `-`
///   separators are ignored
///
/// # Returns
///
/// Returns the check character (`0-9`, `A-Z` or `+`).
///
/// # Examples
///
/// ```
/// use scrip::core::checkdigit::modulus_37_check_character;
///
/// assert_eq!(modulus_37_check_character("9A822C-A83008-13DCA").unwrap(), 'B');
/// ```
pub fn modulus_37_check_character(body: &str) -> Result<char> {
    let mut total: u32 = 0;
    for c in body.chars() {
        if c == '-' {
            continue;
        }
        let value = c.to_digit(36).ok_or_else(|| {
            ScripError::Validation(format!(
                "Check character input must be alphanumeric, got '{c}' in '{body}'"
            ))
        })?;
        total = ((total + value) * 2) % 37;
    }

    // Exactly one offset in 0..37 satisfies the equation; not finding
    // it means the fold above is broken.
    for (i, candidate) in CHECK_CHARACTER_ALPHABET.chars().enumerate() {
        if (total + i as u32) % 37 == 1 {
            return Ok(candidate);
        }
    }
    Err(ScripError::Invariant(format!(
        "No check character satisfies the Modulus-37 equation for '{body}'"
    )))
}
