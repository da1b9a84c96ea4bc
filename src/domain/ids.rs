//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for the three identifier families
//! the crate generates. Each type ensures type safety and checks the shape
//! of the value at construction.
//!
//! Shape checks are deliberately loose: they enforce length and character
//! class, not national allocation rules. A [`NhsNumber`] with a wrong check
//! digit is still a well-formed value (the generators produce those on
//! request); check-digit correctness is a query, answered by
//! [`NhsNumber::is_valid`].

use crate::domain::errors::ScripError;
use crate::domain::result::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// NHS number newtype wrapper
///
/// A 10-character string of ASCII digits: a 9-digit sequence plus one
/// trailing check digit. Construction checks length and character class
/// only, so deliberately invalid check digits can be represented.
///
/// # Examples
///
/// ```
/// use scrip::domain::ids::NhsNumber;
///
/// let nhs = NhsNumber::new("9434765919").unwrap();
/// assert_eq!(nhs.as_str(), "9434765919");
/// assert!(nhs.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NhsNumber(String);

impl NhsNumber {
    /// Creates a new NhsNumber from a string
    ///
    /// # Errors
    ///
    /// Returns [`ScripError::Validation`] if the value is not exactly
    /// 10 ASCII digits.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.len() != 10 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ScripError::Validation(format!(
                "NHS number must be exactly 10 digits, got '{value}'"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the NHS number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The 9-digit sequence without the check digit
    pub fn sequence(&self) -> &str {
        &self.0[..9]
    }

    /// The stored check digit (last character)
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[9] - b'0'
    }

    /// Whether the stored check digit matches the Modulus-11 computation
    /// over the first nine digits
    pub fn is_valid(&self) -> bool {
        crate::core::generate::validate_nhs_number(&self.0)
    }
}

impl fmt::Display for NhsNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NhsNumber {
    type Err = ScripError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for NhsNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// ODS organisation code newtype wrapper
///
/// A 3 to 6 character upper-case alphanumeric code identifying a
/// care-delivery organisation (pharmacy, GP practice). The letter/digit
/// patterns the generator emits are empirical observations, not hard
/// rules, so construction enforces only length and character class.
///
/// # Examples
///
/// ```
/// use scrip::domain::ids::OdsCode;
///
/// let ods = OdsCode::new("FA565").unwrap();
/// assert_eq!(ods.as_str(), "FA565");
/// assert!(OdsCode::new("toolongcode").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OdsCode(String);

impl OdsCode {
    /// Creates a new OdsCode from a string
    ///
    /// # Errors
    ///
    /// Returns [`ScripError::Validation`] if the value is not 3 to 6
    /// upper-case letters and digits.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if !(3..=6).contains(&value.len()) {
            return Err(ScripError::Validation(format!(
                "ODS code must be 3 to 6 characters, got '{value}'"
            )));
        }
        if !value
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(ScripError::Validation(format!(
                "ODS code must contain only upper-case letters and digits, got '{value}'"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the ODS code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for OdsCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OdsCode {
    type Err = ScripError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for OdsCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Prescription order number newtype wrapper
///
/// The structured identifier grouping all lines of one prescribing event.
/// Format: `AAAAAA-OOOOOO-BBBBBC` where the first six and the middle six
/// characters are upper-case alphanumerics (the middle six being the
/// embedded organisation code), followed by five alphanumerics and one
/// check character from the Modulus-37 alphabet (`0-9`, `A-Z`, `+`).
///
/// # Examples
///
/// ```
/// use scrip::domain::ids::PrescriptionId;
///
/// let id = PrescriptionId::new("9A822C-A83008-13DCAB").unwrap();
/// assert_eq!(id.organisation_segment(), "A83008");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrescriptionId(String);

impl PrescriptionId {
    /// Creates a new PrescriptionId from a string
    ///
    /// # Errors
    ///
    /// Returns [`ScripError::Validation`] if the value does not have the
    /// `AAAAAA-OOOOOO-BBBBBC` shape. The check character is not recomputed
    /// here; use [`PrescriptionId::is_valid`] for that.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if !Self::has_valid_shape(&value) {
            return Err(ScripError::Validation(format!(
                "Prescription ID must match AAAAAA-OOOOOO-BBBBBC, got '{value}'"
            )));
        }
        Ok(Self(value))
    }

    fn has_valid_shape(value: &str) -> bool {
        let bytes = value.as_bytes();
        if bytes.len() != 20 || bytes[6] != b'-' || bytes[13] != b'-' {
            return false;
        }
        let alnum = |b: &u8| b.is_ascii_uppercase() || b.is_ascii_digit();
        bytes[..6].iter().all(alnum)
            && bytes[7..13].iter().all(alnum)
            && bytes[14..19].iter().all(alnum)
            && (alnum(&bytes[19]) || bytes[19] == b'+')
    }

    /// Returns the prescription ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The middle segment carrying the (normalized) organisation code
    pub fn organisation_segment(&self) -> &str {
        &self.0[7..13]
    }

    /// The trailing check character
    pub fn check_character(&self) -> char {
        self.0.as_bytes()[19] as char
    }

    /// Whether the trailing check character matches the Modulus-37
    /// computation over the rest of the identifier
    pub fn is_valid(&self) -> bool {
        crate::core::generate::validate_prescription_id(&self.0)
    }
}

impl fmt::Display for PrescriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PrescriptionId {
    type Err = ScripError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for PrescriptionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nhs_number_creation() {
        let nhs = NhsNumber::new("9434765919").unwrap();
        assert_eq!(nhs.as_str(), "9434765919");
        assert_eq!(nhs.sequence(), "943476591");
        assert_eq!(nhs.check_digit(), 9);
    }

    #[test]
    fn test_nhs_number_rejects_wrong_length() {
        assert!(NhsNumber::new("943476591").is_err());
        assert!(NhsNumber::new("94347659190").is_err());
        assert!(NhsNumber::new("").is_err());
    }

    #[test]
    fn test_nhs_number_rejects_non_digits() {
        assert!(NhsNumber::new("94347659A9").is_err());
        assert!(NhsNumber::new("943476591 ").is_err());
    }

    #[test]
    fn test_nhs_number_from_str() {
        let nhs: NhsNumber = "9434765919".parse().unwrap();
        assert_eq!(format!("{}", nhs), "9434765919");
    }

    #[test]
    fn test_ods_code_creation() {
        let ods = OdsCode::new("FA565").unwrap();
        assert_eq!(ods.as_str(), "FA565");
    }

    #[test]
    fn test_ods_code_accepts_all_lengths() {
        for code in ["AB1", "A123", "AB123", "A12345"] {
            assert!(OdsCode::new(code).is_ok(), "expected '{code}' to be accepted");
        }
    }

    #[test]
    fn test_ods_code_rejects_out_of_range_lengths() {
        assert!(OdsCode::new("AB").is_err());
        assert!(OdsCode::new("A123456").is_err());
    }

    #[test]
    fn test_ods_code_rejects_lower_case() {
        assert!(OdsCode::new("fa565").is_err());
    }

    #[test]
    fn test_prescription_id_creation() {
        let id = PrescriptionId::new("9A822C-A83008-13DCAB").unwrap();
        assert_eq!(id.organisation_segment(), "A83008");
        assert_eq!(id.check_character(), 'B');
    }

    #[test]
    fn test_prescription_id_accepts_plus_check_character() {
        let id = PrescriptionId::new("9A822C-A83008-13DCA+").unwrap();
        assert_eq!(id.check_character(), '+');
    }

    #[test]
    fn test_prescription_id_rejects_bad_shapes() {
        // Missing separator
        assert!(PrescriptionId::new("9A822CA83008-13DCAB").is_err());
        // Too short
        assert!(PrescriptionId::new("9A822C-A83008-13DCA").is_err());
        // Lower case payload
        assert!(PrescriptionId::new("9a822c-a83008-13dcab").is_err());
        // '+' only allowed in the final position
        assert!(PrescriptionId::new("9A822+-A83008-13DCAB").is_err());
    }

    #[test]
    fn test_prescription_id_serialization() {
        let id = PrescriptionId::new("9A822C-A83008-13DCAB").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: PrescriptionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
