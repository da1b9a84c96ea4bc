//! Pulling identifiers back out of assembled documents

use crate::fhir::resource::{Bundle, Resource};

/// Find the patient NHS number carried anywhere in a bundle
///
/// Resource kinds are tried in priority order across the whole bundle:
/// every MedicationRequest `subject` identifier first, then Patient
/// identifiers, then Task `for` identifiers. Empty values are skipped.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use scrip::domain::ids::NhsNumber;
/// use scrip::fhir::extract::find_nhs_number;
/// use scrip::fhir::order::{build_order_message, OrderMessageOptions};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let options = OrderMessageOptions {
///     nhs_number: Some(NhsNumber::new("9434765919").unwrap()),
///     ..Default::default()
/// };
/// let bundle = build_order_message(&options, &mut rng).unwrap();
/// assert_eq!(find_nhs_number(&bundle), Some("9434765919"));
/// ```
pub fn find_nhs_number(bundle: &Bundle) -> Option<&str> {
    medication_request_subject(bundle)
        .or_else(|| patient_identifier(bundle))
        .or_else(|| task_for(bundle))
}

fn medication_request_subject(bundle: &Bundle) -> Option<&str> {
    bundle.entry.iter().find_map(|entry| match &entry.resource {
        Resource::MedicationRequest(line) => line
            .subject
            .identifier
            .as_ref()
            .map(|identifier| identifier.value.as_str())
            .filter(|value| !value.is_empty()),
        _ => None,
    })
}

fn patient_identifier(bundle: &Bundle) -> Option<&str> {
    bundle.entry.iter().find_map(|entry| match &entry.resource {
        Resource::Patient(patient) => patient
            .identifier
            .first()
            .map(|identifier| identifier.value.as_str())
            .filter(|value| !value.is_empty()),
        _ => None,
    })
}

fn task_for(bundle: &Bundle) -> Option<&str> {
    bundle.entry.iter().find_map(|entry| match &entry.resource {
        Resource::Task(task) => task
            .for_
            .identifier
            .as_ref()
            .map(|identifier| identifier.value.as_str())
            .filter(|value| !value.is_empty()),
        _ => None,
    })
}
