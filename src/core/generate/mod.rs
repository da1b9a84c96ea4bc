//! Random identifier and demographic generators
//!
//! Every generator draws from a caller-supplied [`rand::Rng`], so a
//! seeded [`rand::rngs::StdRng`] reproduces the same identifiers and
//! the same documents run after run.

pub mod demographics;
pub mod nhs_number;
pub mod ods_code;
pub mod prescription_id;

pub use demographics::{
    generate_patient_demographics, generate_prescriber_demographics, Gender,
    PatientDemographics, PrescriberDemographics,
};
pub use nhs_number::{
    complete_nhs_number, generate_nhs_number, generate_nhs_numbers, validate_nhs_number,
    NhsNumberOptions,
};
pub use ods_code::{generate_ods_code, generate_ods_codes};
pub use prescription_id::{
    generate_prescription_id, generate_prescription_ids, validate_prescription_id,
};

/// Upper bound on redraws when a generator rejection-samples (for
/// example, NHS number sequences whose check digit computes to 10).
/// Roughly one sequence in eleven is rejected, so hitting this cap
/// with a healthy RNG is effectively impossible.
pub const MAX_GENERATION_ATTEMPTS: u32 = 1000;
