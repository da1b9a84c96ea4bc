//! Prescription-order message assembly
//!
//! Builds the message-type bundle a prescribing system sends to the
//! ordering API: one MessageHeader, N MedicationRequest lines, and the
//! patient / prescriber / organisation graph they reference. All
//! cross-references are fresh UUIDs scoped to the one message; the
//! order lines share a single group order number and prescription UUID.

use crate::core::generate::{
    generate_nhs_number, generate_ods_code, generate_patient_demographics,
    generate_prescriber_demographics, generate_prescription_id, NhsNumberOptions,
    PatientDemographics, PrescriberDemographics,
};
use crate::domain::errors::ScripError;
use crate::domain::ids::{NhsNumber, OdsCode, PrescriptionId};
use crate::domain::result::Result;
use crate::fhir::random_uuid;
use crate::fhir::resource::{
    Bundle, BundleEntry, DispenseRequest, Dosage, MedicationRequest, MessageDestination,
    MessageHeader, MessageSource, Organization, Patient, Practitioner, PractitionerRole, Repeat,
    Resource, Substitution, Timing,
};
use crate::fhir::systems;
use crate::fhir::types::{
    Address, CodeableConcept, Coding, ContactPoint, Extension, HumanName, Identifier, Period,
    Quantity, Reference,
};
use chrono::{Duration, Utc};
use rand::Rng;

const GP_NAME: &str = "HALLGARTH SURGERY";
const GP_PHONE: &str = "0115 9737320";
const PHARMACY_ENDPOINT: &str =
    "https://sandbox.api.service.nhs.uk/fhir-prescribing/$post-message";

/// How long a dispense window stays open, in days
const VALIDITY_DAYS: i64 = 30;

struct Medication {
    code: &'static str,
    display: &'static str,
    quantity: u32,
    dosage_text: &'static str,
    frequency: u32,
    period: u32,
    period_unit: &'static str,
}

/// Fixed catalogue the order lines cycle through
const SAMPLE_MEDICATIONS: [Medication; 4] = [
    Medication {
        code: "39732311000001104",
        display: "Amoxicillin 250mg capsules",
        quantity: 20,
        dosage_text: "2 times a day for 10 days",
        frequency: 2,
        period: 1,
        period_unit: "d",
    },
    Medication {
        code: "322341003",
        display: "Co-codamol 30mg/500mg tablets",
        quantity: 20,
        dosage_text: "2 times a day for 10 days",
        frequency: 2,
        period: 1,
        period_unit: "d",
    },
    Medication {
        code: "321080004",
        display: "Pseudoephedrine hydrochloride 60mg tablets",
        quantity: 30,
        dosage_text: "3 times a day for 10 days",
        frequency: 3,
        period: 1,
        period_unit: "d",
    },
    Medication {
        code: "324252006",
        display: "Azithromycin 250mg capsules",
        quantity: 30,
        dosage_text: "3 times a day for 10 days",
        frequency: 3,
        period: 1,
        period_unit: "d",
    },
];

/// Options for [`build_order_message`]
///
/// Unset identifiers are generated fresh per invocation: a dummy-range
/// NHS number, a five-character pharmacy code, and a six-character
/// prescriber practice code.
#[derive(Debug, Clone)]
pub struct OrderMessageOptions {
    /// Number of order lines; must be at least 1
    pub line_count: usize,
    /// Patient the order is for
    pub nhs_number: Option<NhsNumber>,
    /// Dispensing site the order is addressed to
    pub pharmacy_ods: Option<OdsCode>,
    /// Prescribing practice; also embedded in the group order number
    pub prescriber_ods: Option<OdsCode>,
}

impl Default for OrderMessageOptions {
    fn default() -> Self {
        Self {
            line_count: 1,
            nhs_number: None,
            pharmacy_ods: None,
            prescriber_ods: None,
        }
    }
}

/// Build a prescription-order message bundle
///
/// # Errors
///
/// Returns [`ScripError::Validation`] when `line_count` is zero;
/// propagates identifier-generation failures.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use scrip::fhir::order::{build_order_message, OrderMessageOptions};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let options = OrderMessageOptions {
///     line_count: 2,
///     ..Default::default()
/// };
/// let bundle = build_order_message(&options, &mut rng).unwrap();
/// // header + 2 lines + patient + practitioner role + practitioner + organisation
/// assert_eq!(bundle.entry.len(), 7);
/// ```
pub fn build_order_message<R: Rng + ?Sized>(
    options: &OrderMessageOptions,
    rng: &mut R,
) -> Result<Bundle> {
    if options.line_count == 0 {
        return Err(ScripError::Validation(
            "An order message needs at least one line".to_string(),
        ));
    }

    let nhs_number = match &options.nhs_number {
        Some(number) => number.clone(),
        None => generate_nhs_number(&NhsNumberOptions::default(), rng)?,
    };
    let pharmacy_ods = match &options.pharmacy_ods {
        Some(code) => code.clone(),
        None => generate_ods_code(5, rng)?,
    };
    let prescriber = generate_prescriber_demographics(options.prescriber_ods.clone(), rng)?;
    let patient = generate_patient_demographics(rng);

    let bundle_id = random_uuid(rng).to_string();
    let message_id = random_uuid(rng).to_string();
    let header_uuid = random_uuid(rng).to_string();
    let patient_uuid = random_uuid(rng).to_string();
    let practitioner_uuid = random_uuid(rng).to_string();
    let practitioner_role_uuid = random_uuid(rng).to_string();
    let organization_uuid = random_uuid(rng).to_string();

    let group_order_number = generate_prescription_id(Some(prescriber.ods_code.as_str()), rng)?;
    let prescription_uuid = random_uuid(rng).to_string();

    tracing::debug!(
        lines = options.line_count,
        nhs_number = %nhs_number,
        pharmacy_ods = %pharmacy_ods,
        prescriber_ods = %prescriber.ods_code,
        order_number = %group_order_number,
        "assembling prescription-order message"
    );

    let line_entries = build_line_entries(
        options.line_count,
        &patient_uuid,
        &practitioner_role_uuid,
        &pharmacy_ods,
        &group_order_number,
        &prescription_uuid,
        rng,
    );
    let focus = line_entries
        .iter()
        .map(|entry| Reference::to_url(entry.full_url.clone()))
        .collect();

    let mut entries = Vec::with_capacity(options.line_count + 5);
    entries.push(build_header_entry(
        &prescriber.ods_code,
        &pharmacy_ods,
        &header_uuid,
        focus,
    ));
    entries.extend(line_entries);
    entries.push(build_patient_entry(
        &nhs_number,
        &patient,
        &prescriber.ods_code,
        &patient_uuid,
    ));
    entries.push(build_practitioner_role_entry(
        &prescriber,
        &practitioner_uuid,
        &practitioner_role_uuid,
        &organization_uuid,
    ));
    entries.push(build_practitioner_entry(&prescriber, &practitioner_uuid));
    entries.push(build_organization_entry(
        &prescriber.ods_code,
        &organization_uuid,
    ));

    Ok(Bundle::message(
        bundle_id,
        Identifier::new(systems::RFC_4122, message_id),
        entries,
    ))
}

fn build_line_entries<R: Rng + ?Sized>(
    count: usize,
    patient_uuid: &str,
    practitioner_role_uuid: &str,
    pharmacy_ods: &OdsCode,
    group_order_number: &PrescriptionId,
    prescription_uuid: &str,
    rng: &mut R,
) -> Vec<BundleEntry> {
    let mut entries = Vec::with_capacity(count);

    for index in 0..count {
        let medication = &SAMPLE_MEDICATIONS[index % SAMPLE_MEDICATIONS.len()];
        let line_uuid = random_uuid(rng).to_string();

        let today = Utc::now().date_naive();
        let end = today + Duration::days(VALIDITY_DAYS);

        let resource = MedicationRequest {
            extension: vec![Extension::coding(
                systems::EXT_PRESCRIPTION_TYPE,
                Coding::with_display(
                    systems::PRESCRIPTION_TYPE,
                    "0101",
                    "Primary Care Prescriber - Medical Prescriber",
                ),
            )],
            identifier: vec![Identifier::new(
                systems::PRESCRIPTION_ORDER_ITEM_NUMBER,
                &line_uuid,
            )],
            status: "active".to_string(),
            intent: "order".to_string(),
            category: vec![CodeableConcept::single(Coding::with_display(
                systems::MEDICATION_REQUEST_CATEGORY,
                "community",
                "Community",
            ))],
            medication_codeable_concept: CodeableConcept::single(Coding::with_display(
                systems::SNOMED,
                medication.code,
                medication.display,
            )),
            subject: Reference::to_url(format!("urn:uuid:{patient_uuid}")),
            requester: Reference::to_url(format!("urn:uuid:{practitioner_role_uuid}")),
            group_identifier: Identifier {
                system: systems::PRESCRIPTION_ORDER_NUMBER.to_string(),
                value: group_order_number.to_string(),
                extension: Some(vec![Extension::identifier(
                    systems::EXT_PRESCRIPTION_ID,
                    Identifier::new(systems::PRESCRIPTION, prescription_uuid),
                )]),
            },
            course_of_therapy_type: CodeableConcept::single(Coding::with_display(
                systems::COURSE_OF_THERAPY,
                "acute",
                "Short course (acute) therapy",
            )),
            dosage_instruction: vec![Dosage {
                text: medication.dosage_text.to_string(),
                timing: Timing {
                    repeat: Repeat {
                        frequency: medication.frequency,
                        period: medication.period,
                        period_unit: medication.period_unit.to_string(),
                    },
                },
                route: CodeableConcept::single(Coding::with_display(
                    systems::SNOMED,
                    "26643006",
                    "Oral",
                )),
            }],
            dispense_request: DispenseRequest {
                extension: vec![Extension::coding(
                    systems::EXT_PERFORMER_SITE_TYPE,
                    Coding::new(systems::DISPENSING_SITE_PREFERENCE, "P1"),
                )],
                validity_period: Period {
                    start: today.format("%Y-%m-%d").to_string(),
                    end: end.format("%Y-%m-%d").to_string(),
                },
                quantity: Quantity {
                    value: medication.quantity,
                    unit: "tablet".to_string(),
                    system: systems::SNOMED.to_string(),
                    code: "428673006".to_string(),
                },
                expected_supply_duration: Quantity {
                    value: medication.period * medication.frequency,
                    unit: "day".to_string(),
                    system: systems::UNITS_OF_MEASURE.to_string(),
                    code: "d".to_string(),
                },
                performer: Reference::to_identifier(Identifier::new(
                    systems::ODS_ORGANIZATION_CODE,
                    pharmacy_ods.as_str(),
                )),
            },
            substitution: Substitution {
                allowed_boolean: false,
            },
        };

        entries.push(BundleEntry {
            full_url: format!("urn:uuid:{line_uuid}"),
            resource: Resource::MedicationRequest(resource),
            request: None,
        });
    }

    entries
}

fn build_header_entry(
    prescriber_ods: &OdsCode,
    pharmacy_ods: &OdsCode,
    header_uuid: &str,
    focus: Vec<Reference>,
) -> BundleEntry {
    let resource = MessageHeader {
        event_coding: Coding::with_display(
            systems::MESSAGE_EVENT,
            "prescription-order",
            "Prescription Order",
        ),
        destination: vec![MessageDestination {
            endpoint: PHARMACY_ENDPOINT.to_string(),
            receiver: Reference::to_identifier(Identifier::new(
                systems::ODS_ORGANIZATION_CODE,
                pharmacy_ods.as_str(),
            ))
            .with_display(pharmacy_ods.as_str()),
        }],
        sender: Reference::to_identifier(Identifier::new(
            systems::ODS_ORGANIZATION_CODE,
            prescriber_ods.as_str(),
        ))
        .with_display(GP_NAME),
        source: MessageSource {
            endpoint: format!(
                "https://directory.spineservices.nhs.uk/STU3/Organization/{prescriber_ods}"
            ),
        },
        focus,
    };

    BundleEntry {
        full_url: format!("urn:uuid:{header_uuid}"),
        resource: Resource::MessageHeader(resource),
        request: None,
    }
}

fn build_patient_entry(
    nhs_number: &NhsNumber,
    patient: &PatientDemographics,
    prescriber_ods: &OdsCode,
    patient_uuid: &str,
) -> BundleEntry {
    let resource = Patient {
        identifier: vec![Identifier::new(systems::NHS_NUMBER, nhs_number.as_str())],
        name: vec![HumanName {
            use_: Some("usual".to_string()),
            family: patient.family.clone(),
            given: vec![patient.given.clone()],
            prefix: vec![patient.prefix.clone()],
        }],
        gender: patient.gender.as_str().to_string(),
        birth_date: patient.birth_date.clone(),
        address: vec![Address {
            use_: "home".to_string(),
            type_: None,
            line: patient.address_lines.clone(),
            city: None,
            district: None,
            postal_code: patient.postal_code.clone(),
        }],
        general_practitioner: vec![Reference::to_identifier(Identifier::new(
            systems::ODS_ORGANIZATION_CODE,
            prescriber_ods.as_str(),
        ))],
    };

    BundleEntry {
        full_url: format!("urn:uuid:{patient_uuid}"),
        resource: Resource::Patient(resource),
        request: None,
    }
}

fn build_practitioner_role_entry(
    prescriber: &PrescriberDemographics,
    practitioner_uuid: &str,
    practitioner_role_uuid: &str,
    organization_uuid: &str,
) -> BundleEntry {
    let job_role = "R8000";
    let job_role_display = "Clinical Practitioner Access Role";

    let resource = PractitionerRole {
        identifier: vec![Identifier::new(
            systems::SDS_ROLE_PROFILE_ID,
            &prescriber.sds_role_id,
        )],
        practitioner: Reference::to_url(format!("urn:uuid:{practitioner_uuid}")),
        organization: Reference::to_url(format!("urn:uuid:{organization_uuid}")),
        code: vec![CodeableConcept {
            coding: vec![
                Coding::with_display(systems::SDS_JOB_ROLE_CODE, job_role, job_role_display),
                Coding::with_display(
                    systems::UKCORE_SDS_JOB_ROLE_NAME,
                    job_role,
                    job_role_display,
                ),
            ],
        }],
        telecom: vec![ContactPoint::work_phone(&prescriber.phone)],
    };

    BundleEntry {
        full_url: format!("urn:uuid:{practitioner_role_uuid}"),
        resource: Resource::PractitionerRole(resource),
        request: None,
    }
}

fn build_practitioner_entry(
    prescriber: &PrescriberDemographics,
    practitioner_uuid: &str,
) -> BundleEntry {
    let resource = Practitioner {
        identifier: vec![
            Identifier::new(systems::SDS_USER_ID, &prescriber.sds_user_id),
            Identifier::new(systems::GMC_NUMBER, &prescriber.gmc_number),
            Identifier::new(systems::DIN_NUMBER, &prescriber.din_number),
        ],
        name: vec![HumanName {
            use_: None,
            family: prescriber.family.clone(),
            given: vec![prescriber.given.clone()],
            prefix: vec![prescriber.prefix.clone()],
        }],
    };

    BundleEntry {
        full_url: format!("urn:uuid:{practitioner_uuid}"),
        resource: Resource::Practitioner(resource),
        request: None,
    }
}

fn build_organization_entry(prescriber_ods: &OdsCode, organization_uuid: &str) -> BundleEntry {
    let resource = Organization {
        identifier: vec![Identifier::new(
            systems::ODS_ORGANIZATION_CODE,
            prescriber_ods.as_str(),
        )],
        type_: vec![CodeableConcept::single(Coding::with_display(
            systems::ORGANISATION_ROLE,
            "76",
            "GP PRACTICE",
        ))],
        name: GP_NAME.to_string(),
        telecom: vec![ContactPoint::work_phone(GP_PHONE)],
        address: vec![Address {
            use_: "work".to_string(),
            type_: Some("both".to_string()),
            line: vec![GP_NAME.to_string(), "CHEAPSIDE".to_string()],
            city: Some("SHILDON".to_string()),
            district: Some("COUNTY DURHAM".to_string()),
            postal_code: "DL4 2HP".to_string(),
        }],
        part_of: Reference::to_identifier(Identifier::new(systems::ODS_ORGANIZATION_CODE, "84H"))
            .with_display("NHS COUNTY DURHAM CCG"),
    };

    BundleEntry {
        full_url: format!("urn:uuid:{organization_uuid}"),
        resource: Resource::Organization(resource),
        request: None,
    }
}
