//! NHS number generation and validation
//!
//! An NHS number is nine random digits completed by a Modulus-11 check
//! digit. Sequences whose check digit computes to 10 cannot be
//! completed and are redrawn, up to [`MAX_GENERATION_ATTEMPTS`].
//!
//! Generated numbers default to the reserved `999` test range so
//! synthetic data can never collide with a live patient record.

use crate::core::checkdigit::modulus_11_check_digit;
use crate::core::generate::MAX_GENERATION_ATTEMPTS;
use crate::domain::errors::ScripError;
use crate::domain::ids::NhsNumber;
use crate::domain::result::Result;
use rand::Rng;

/// Options controlling NHS number generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NhsNumberOptions {
    /// Draw the nine-digit sequence from the reserved `999` test range
    pub dummy: bool,
    /// Append a deliberately wrong check digit, for negative-path tests
    pub invalid: bool,
}

impl Default for NhsNumberOptions {
    fn default() -> Self {
        Self {
            dummy: true,
            invalid: false,
        }
    }
}

/// Complete a caller-supplied nine-digit sequence into an NHS number
///
/// Appends the Modulus-11 check digit, or a uniformly random wrong one
/// when `invalid` is set.
///
/// # Arguments
///
/// * `nine_digits` - Exactly nine ASCII digits
/// * `invalid` - Substitute an incorrect check digit
/// * `rng` - Randomness source, only consulted when `invalid` is set
///
/// # Errors
///
/// Returns [`ScripError::UnrepresentableSequence`] when the sequence's
/// check digit computes to 10. Such a sequence has no NHS number, valid
/// or otherwise, so the caller must supply a different one.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use scrip::core::generate::complete_nhs_number;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let nhs = complete_nhs_number("943476591", false, &mut rng).unwrap();
/// assert_eq!(nhs.as_str(), "9434765919");
/// ```
pub fn complete_nhs_number<R: Rng + ?Sized>(
    nine_digits: &str,
    invalid: bool,
    rng: &mut R,
) -> Result<NhsNumber> {
    let check_digit = modulus_11_check_digit(nine_digits)?;
    let digit = if invalid {
        // Shifting by 1..=9 modulo 10 is uniform over the nine wrong digits
        (check_digit + rng.gen_range(1..10u8)) % 10
    } else {
        check_digit
    };
    NhsNumber::new(format!("{nine_digits}{digit}"))
}

/// Generate a single NHS number
///
/// Draws nine-digit sequences until one has a representable check
/// digit, then completes it according to `options`.
///
/// # Errors
///
/// Returns [`ScripError::RetriesExhausted`] if no drawable sequence
/// has a representable check digit within [`MAX_GENERATION_ATTEMPTS`]
/// attempts.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use scrip::core::generate::{generate_nhs_number, NhsNumberOptions};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let nhs = generate_nhs_number(&NhsNumberOptions::default(), &mut rng).unwrap();
/// assert!(nhs.as_str().starts_with("999"));
/// assert!(nhs.is_valid());
/// ```
pub fn generate_nhs_number<R: Rng + ?Sized>(
    options: &NhsNumberOptions,
    rng: &mut R,
) -> Result<NhsNumber> {
    for attempt in 1..=MAX_GENERATION_ATTEMPTS {
        let nine = random_sequence(options.dummy, rng);
        match complete_nhs_number(&nine, options.invalid, rng) {
            Ok(number) => return Ok(number),
            Err(ScripError::UnrepresentableSequence(_)) => {
                tracing::debug!(
                    attempt,
                    sequence = %nine,
                    "sequence has no representable check digit, redrawing"
                );
            }
            Err(other) => return Err(other),
        }
    }
    Err(ScripError::RetriesExhausted {
        attempts: MAX_GENERATION_ATTEMPTS,
        reason: "every candidate NHS number sequence was unrepresentable".to_string(),
    })
}

/// Generate a batch of NHS numbers sharing one set of options
pub fn generate_nhs_numbers<R: Rng + ?Sized>(
    count: usize,
    options: &NhsNumberOptions,
    rng: &mut R,
) -> Result<Vec<NhsNumber>> {
    let mut numbers = Vec::with_capacity(count);
    while numbers.len() < count {
        numbers.push(generate_nhs_number(options, rng)?);
    }
    Ok(numbers)
}

/// Validate an NHS number's format and check digit
///
/// Returns `false` for wrong length, non-digit characters, or a check
/// digit that does not match the Modulus-11 computation. Never errors:
/// an unanswerable question (such as an unrepresentable sequence) is
/// simply not a valid NHS number.
///
/// # Examples
///
/// ```
/// use scrip::core::generate::validate_nhs_number;
///
/// assert!(validate_nhs_number("9434765919"));
/// assert!(!validate_nhs_number("9434765918"));
/// assert!(!validate_nhs_number("943476591"));
/// ```
pub fn validate_nhs_number(candidate: &str) -> bool {
    if candidate.len() != 10 || !candidate.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match modulus_11_check_digit(&candidate[..9]) {
        Ok(expected) => expected == candidate.as_bytes()[9] - b'0',
        Err(_) => false,
    }
}

fn random_sequence<R: Rng + ?Sized>(dummy: bool, rng: &mut R) -> String {
    let mut sequence = String::with_capacity(9);
    if dummy {
        sequence.push_str("999");
    }
    while sequence.len() < 9 {
        sequence.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_complete_nhs_number_appends_check_digit() {
        let mut rng = StdRng::seed_from_u64(42);
        let nhs = complete_nhs_number("943476591", false, &mut rng).unwrap();
        assert_eq!(nhs.as_str(), "9434765919");
    }

    #[test]
    fn test_complete_nhs_number_invalid_never_matches() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let nhs = complete_nhs_number("943476591", true, &mut rng).unwrap();
            assert_eq!(nhs.sequence(), "943476591");
            assert_ne!(nhs.check_digit(), 9);
        }
    }

    #[test]
    fn test_complete_nhs_number_unrepresentable_sequence() {
        let mut rng = StdRng::seed_from_u64(42);
        let err = complete_nhs_number("000000006", false, &mut rng).unwrap_err();
        assert!(matches!(err, ScripError::UnrepresentableSequence(_)));
    }

    #[test]
    fn test_generate_defaults_to_dummy_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let nhs = generate_nhs_number(&NhsNumberOptions::default(), &mut rng).unwrap();
        assert!(nhs.as_str().starts_with("999"));
        assert!(nhs.is_valid());
    }

    #[test]
    fn test_generate_outside_dummy_range() {
        let options = NhsNumberOptions {
            dummy: false,
            invalid: false,
        };
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let nhs = generate_nhs_number(&options, &mut rng).unwrap();
            assert!(nhs.is_valid());
        }
    }

    #[test]
    fn test_generate_invalid_fails_validation() {
        let options = NhsNumberOptions {
            dummy: true,
            invalid: true,
        };
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let nhs = generate_nhs_number(&options, &mut rng).unwrap();
            assert!(nhs.as_str().starts_with("999"));
            assert!(!nhs.is_valid());
        }
    }

    #[test]
    fn test_generate_is_deterministic_for_a_seed() {
        let options = NhsNumberOptions::default();
        let mut first = StdRng::seed_from_u64(123);
        let mut second = StdRng::seed_from_u64(123);
        assert_eq!(
            generate_nhs_number(&options, &mut first).unwrap(),
            generate_nhs_number(&options, &mut second).unwrap()
        );
    }

    #[test]
    fn test_generate_gives_up_when_every_draw_is_unrepresentable() {
        // An all-zeros RNG pins every dummy draw to 999000000, whose
        // check digit computes to 10
        let mut rng = StepRng::new(0, 0);
        let err = generate_nhs_number(&NhsNumberOptions::default(), &mut rng).unwrap_err();
        match err {
            ScripError::RetriesExhausted { attempts, .. } => {
                assert_eq!(attempts, MAX_GENERATION_ATTEMPTS);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_generate_batch_count_and_validity() {
        let mut rng = StdRng::seed_from_u64(9);
        let numbers = generate_nhs_numbers(25, &NhsNumberOptions::default(), &mut rng).unwrap();
        assert_eq!(numbers.len(), 25);
        assert!(numbers.iter().all(|n| n.is_valid()));
    }

    #[test]
    fn test_validate_rejects_malformed_input() {
        assert!(!validate_nhs_number(""));
        assert!(!validate_nhs_number("943476591"));
        assert!(!validate_nhs_number("94347659199"));
        assert!(!validate_nhs_number("94347659IX"));
    }

    #[test]
    fn test_validate_rejects_unrepresentable_sequence() {
        // No tenth digit can make the sequence 000000006 valid
        for d in 0..=9 {
            assert!(!validate_nhs_number(&format!("000000006{d}")));
        }
    }
}
