//! Prescription order number composition and validation
//!
//! An order number is `AAAAAA-OOOOOO-BBBBBC`: eleven random payload
//! characters split around an embedded six-character organisation code,
//! finished with a Modulus-37 check character. The embedded code is the
//! dispensing site the order is addressed to.

use crate::core::checkdigit::modulus_37_check_character;
use crate::core::generate::ods_code::generate_ods_code;
use crate::domain::errors::ScripError;
use crate::domain::ids::PrescriptionId;
use crate::domain::result::Result;
use rand::Rng;

const PAYLOAD_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a prescription order number
///
/// Eleven payload characters are drawn from `A-Z0-9`; the organisation
/// code is the caller's (normalized to six characters) or a freshly
/// generated six-character code.
///
/// # Arguments
///
/// * `ods_code` - Organisation code to embed; generated when `None`
/// * `rng` - Randomness source
///
/// # Errors
///
/// Returns [`ScripError::Validation`] when a supplied organisation code
/// is empty or contains non-alphanumeric characters.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use scrip::core::generate::{generate_prescription_id, validate_prescription_id};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let id = generate_prescription_id(Some("FA565"), &mut rng).unwrap();
/// assert_eq!(id.organisation_segment(), "FA5650");
/// assert!(validate_prescription_id(id.as_str()));
/// ```
pub fn generate_prescription_id<R: Rng + ?Sized>(
    ods_code: Option<&str>,
    rng: &mut R,
) -> Result<PrescriptionId> {
    let segment = match ods_code {
        Some(code) => normalize_ods_segment(code)?,
        None => generate_ods_code(6, rng)?.into_inner(),
    };

    let payload: String = (0..11)
        .map(|_| char::from(PAYLOAD_ALPHABET[rng.gen_range(0..PAYLOAD_ALPHABET.len())]))
        .collect();

    let body = format!("{}-{}-{}", &payload[..6], segment, &payload[6..]);
    let check = modulus_37_check_character(&body)?;
    PrescriptionId::new(format!("{body}{check}"))
}

/// Generate a batch of order numbers addressed to one organisation
///
/// Each identifier gets its own payload; when `ods_code` is `None`, a
/// fresh organisation code is embedded per identifier.
pub fn generate_prescription_ids<R: Rng + ?Sized>(
    count: usize,
    ods_code: Option<&str>,
    rng: &mut R,
) -> Result<Vec<PrescriptionId>> {
    let mut ids = Vec::with_capacity(count);
    while ids.len() < count {
        ids.push(generate_prescription_id(ods_code, rng)?);
    }
    Ok(ids)
}

/// Validate an order number's shape and check character
///
/// Returns `false` when the value does not match the
/// `AAAAAA-OOOOOO-BBBBBC` shape or the check character does not match
/// the Modulus-37 recomputation. Never errors.
///
/// # Examples
///
/// ```
/// use scrip::core::generate::validate_prescription_id;
///
/// assert!(validate_prescription_id("9A822C-A83008-13DCAB"));
/// assert!(!validate_prescription_id("9A822C-A83008-13DCAA"));
/// ```
pub fn validate_prescription_id(candidate: &str) -> bool {
    let Ok(id) = PrescriptionId::new(candidate) else {
        return false;
    };
    match modulus_37_check_character(&candidate[..19]) {
        Ok(expected) => expected == id.check_character(),
        Err(_) => false,
    }
}

/// Widen or narrow an organisation code to the six-character segment
/// the order number embeds. Codes longer than six characters lose
/// their tail; shorter codes are right-padded with zeros. Both cases
/// lose the original code, so round-tripping a non-six-character code
/// through an order number is not possible.
fn normalize_ods_segment(code: &str) -> Result<String> {
    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(ScripError::Validation(format!(
            "Organisation code for an order number must be alphanumeric, got '{code}'"
        )));
    }
    let mut segment = code.to_ascii_uppercase();
    segment.truncate(6);
    while segment.len() < 6 {
        segment.push('0');
    }
    Ok(segment)
}
