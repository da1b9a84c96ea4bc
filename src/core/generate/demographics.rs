//! Synthetic demographic data for patients and prescribers
//!
//! Names, addresses and phone numbers come from the `fake` crate's EN
//! locale, uppercased the way they appear in spine test data. National
//! identifiers (SDS user and role, GMC, DIN) are random digit strings
//! of the right shape; nothing here corresponds to a real person.

use crate::core::generate::ods_code::generate_ods_code;
use crate::domain::ids::OdsCode;
use crate::domain::result::Result;
use chrono::{DateTime, Months, Utc};
use fake::faker::address::en::{BuildingNumber, CityName, StateName, StreetName};
use fake::faker::chrono::en::DateTimeBetween;
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::Rng;
use std::fmt;

/// Administrative gender recorded on a patient resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Wire-level code for the gender
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Demographics for a synthetic patient
#[derive(Debug, Clone)]
pub struct PatientDemographics {
    /// Name prefix matched to the gender (`Mr`, `Ms`, `Mrs`, `Miss`)
    pub prefix: String,
    /// Uppercased forename
    pub given: String,
    /// Uppercased surname
    pub family: String,
    pub gender: Gender,
    /// ISO date, `YYYY-MM-DD`, between 18 and 90 years ago
    pub birth_date: String,
    /// Street, city and county lines, uppercased
    pub address_lines: Vec<String>,
    /// UK-shaped postcode, for example `AB1 2CD`
    pub postal_code: String,
}

/// Demographics and professional identifiers for a synthetic prescriber
#[derive(Debug, Clone)]
pub struct PrescriberDemographics {
    /// Always `Dr`
    pub prefix: String,
    /// Uppercased forename
    pub given: String,
    /// Uppercased surname
    pub family: String,
    /// SDS user id: `555` followed by nine digits
    pub sds_user_id: String,
    /// SDS role profile id: twelve digits
    pub sds_role_id: String,
    /// GMC reference: `C` followed by seven digits
    pub gmc_number: String,
    /// Doctor index number: six digits
    pub din_number: String,
    pub phone: String,
    /// Practice organisation code, supplied or freshly generated
    pub ods_code: OdsCode,
}

/// Generate random patient demographics
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use scrip::core::generate::generate_patient_demographics;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let patient = generate_patient_demographics(&mut rng);
/// assert_eq!(patient.address_lines.len(), 3);
/// ```
pub fn generate_patient_demographics<R: Rng + ?Sized>(rng: &mut R) -> PatientDemographics {
    let gender = if rng.gen_bool(0.5) {
        Gender::Male
    } else {
        Gender::Female
    };
    let prefix = match gender {
        Gender::Male => "Mr".to_string(),
        Gender::Female => {
            const FEMALE_PREFIXES: [&str; 3] = ["Ms", "Mrs", "Miss"];
            FEMALE_PREFIXES[rng.gen_range(0..FEMALE_PREFIXES.len())].to_string()
        }
    };

    let street = format!(
        "{} {}",
        BuildingNumber().fake_with_rng::<String, _>(rng),
        StreetName().fake_with_rng::<String, _>(rng)
    )
    .to_uppercase();
    let city = CityName().fake_with_rng::<String, _>(rng).to_uppercase();
    let county = StateName().fake_with_rng::<String, _>(rng).to_uppercase();

    PatientDemographics {
        prefix,
        given: FirstName().fake_with_rng::<String, _>(rng).to_uppercase(),
        family: LastName().fake_with_rng::<String, _>(rng).to_uppercase(),
        gender,
        birth_date: random_birth_date(rng),
        address_lines: vec![street, city, county],
        postal_code: random_postcode(rng),
    }
}

/// Generate random prescriber demographics and identifiers
///
/// # Errors
///
/// Propagates organisation-code generation failures; a supplied
/// `ods_code` is used as-is.
pub fn generate_prescriber_demographics<R: Rng + ?Sized>(
    ods_code: Option<OdsCode>,
    rng: &mut R,
) -> Result<PrescriberDemographics> {
    let ods_code = match ods_code {
        Some(code) => code,
        None => generate_ods_code(6, rng)?,
    };

    Ok(PrescriberDemographics {
        prefix: "Dr".to_string(),
        given: FirstName().fake_with_rng::<String, _>(rng).to_uppercase(),
        family: LastName().fake_with_rng::<String, _>(rng).to_uppercase(),
        sds_user_id: format!("555{:09}", rng.gen_range(0..1_000_000_000u64)),
        sds_role_id: format!("{:012}", rng.gen_range(0..1_000_000_000_000u64)),
        gmc_number: format!("C{:07}", rng.gen_range(0..10_000_000u32)),
        din_number: format!("{:06}", rng.gen_range(0..1_000_000u32)),
        phone: PhoneNumber().fake_with_rng::<String, _>(rng),
        ods_code,
    })
}

/// Date of birth between 18 and 90 years ago, as an ISO date
fn random_birth_date<R: Rng + ?Sized>(rng: &mut R) -> String {
    let now = Utc::now();
    let oldest = now - Months::new(90 * 12);
    let youngest = now - Months::new(18 * 12);
    let birth: DateTime<Utc> = DateTimeBetween(oldest, youngest).fake_with_rng(rng);
    birth.format("%Y-%m-%d").to_string()
}

/// UK-shaped postcode: two letters, a digit, a space, a digit, two letters
fn random_postcode<R: Rng + ?Sized>(rng: &mut R) -> String {
    const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut postcode = String::with_capacity(7);
    for slot in "LLD DLL".chars() {
        match slot {
            'L' => postcode.push(char::from(LETTERS[rng.gen_range(0..LETTERS.len())])),
            'D' => postcode.push(char::from(b'0' + rng.gen_range(0..10u8))),
            _ => postcode.push(' '),
        }
    }
    postcode
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_patient_prefix_matches_gender() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..50 {
            let patient = generate_patient_demographics(&mut rng);
            match patient.gender {
                Gender::Male => assert_eq!(patient.prefix, "Mr"),
                Gender::Female => {
                    assert!(["Ms", "Mrs", "Miss"].contains(&patient.prefix.as_str()))
                }
            }
        }
    }

    #[test]
    fn test_patient_names_are_uppercased() {
        let mut rng = StdRng::seed_from_u64(21);
        let patient = generate_patient_demographics(&mut rng);
        assert_eq!(patient.given, patient.given.to_uppercase());
        assert_eq!(patient.family, patient.family.to_uppercase());
        for line in &patient.address_lines {
            assert_eq!(*line, line.to_uppercase());
        }
    }

    #[test]
    fn test_patient_birth_date_is_within_age_range() {
        let mut rng = StdRng::seed_from_u64(21);
        let today = Utc::now().date_naive();
        let oldest = today - Months::new(90 * 12);
        let youngest = today - Months::new(18 * 12);
        for _ in 0..50 {
            let patient = generate_patient_demographics(&mut rng);
            let birth = NaiveDate::parse_from_str(&patient.birth_date, "%Y-%m-%d").unwrap();
            assert!(birth >= oldest, "{birth} older than 90 years");
            assert!(birth <= youngest, "{birth} younger than 18 years");
        }
    }

    #[test]
    fn test_patient_postcode_shape() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..20 {
            let patient = generate_patient_demographics(&mut rng);
            let bytes = patient.postal_code.as_bytes();
            assert_eq!(bytes.len(), 7);
            assert!(bytes[0].is_ascii_uppercase());
            assert!(bytes[1].is_ascii_uppercase());
            assert!(bytes[2].is_ascii_digit());
            assert_eq!(bytes[3], b' ');
            assert!(bytes[4].is_ascii_digit());
            assert!(bytes[5].is_ascii_uppercase());
            assert!(bytes[6].is_ascii_uppercase());
        }
    }

    #[test]
    fn test_prescriber_identifier_shapes() {
        let mut rng = StdRng::seed_from_u64(33);
        let prescriber = generate_prescriber_demographics(None, &mut rng).unwrap();
        assert_eq!(prescriber.prefix, "Dr");
        assert_eq!(prescriber.sds_user_id.len(), 12);
        assert!(prescriber.sds_user_id.starts_with("555"));
        assert_eq!(prescriber.sds_role_id.len(), 12);
        assert!(prescriber.sds_role_id.bytes().all(|b| b.is_ascii_digit()));
        assert_eq!(prescriber.gmc_number.len(), 8);
        assert!(prescriber.gmc_number.starts_with('C'));
        assert_eq!(prescriber.din_number.len(), 6);
        assert!(prescriber.din_number.bytes().all(|b| b.is_ascii_digit()));
        assert_eq!(prescriber.ods_code.as_str().len(), 6);
    }

    #[test]
    fn test_prescriber_uses_supplied_ods_code() {
        let mut rng = StdRng::seed_from_u64(33);
        let ods = OdsCode::new("FA565").unwrap();
        let prescriber = generate_prescriber_demographics(Some(ods.clone()), &mut rng).unwrap();
        assert_eq!(prescriber.ods_code, ods);
    }

    #[test]
    fn test_deterministic_for_a_seed() {
        let mut first = StdRng::seed_from_u64(55);
        let mut second = StdRng::seed_from_u64(55);
        let a = generate_patient_demographics(&mut first);
        let b = generate_patient_demographics(&mut second);
        assert_eq!(a.given, b.given);
        assert_eq!(a.family, b.family);
        assert_eq!(a.birth_date, b.birth_date);
        assert_eq!(a.postal_code, b.postal_code);
    }
}
