//! Identifier and coding system URLs used on the wire
//!
//! These strings are part of the contract with the receiving services
//! and must be reproduced verbatim; none of them is negotiable.

// Identifier systems
pub const NHS_NUMBER: &str = "https://fhir.nhs.uk/Id/nhs-number";
pub const PRESCRIPTION_ORDER_NUMBER: &str = "https://fhir.nhs.uk/Id/prescription-order-number";
pub const PRESCRIPTION_ORDER_ITEM_NUMBER: &str =
    "https://fhir.nhs.uk/Id/prescription-order-item-number";
pub const PRESCRIPTION: &str = "https://fhir.nhs.uk/Id/prescription";
pub const ODS_ORGANIZATION_CODE: &str = "https://fhir.nhs.uk/Id/ods-organization-code";
pub const SDS_USER_ID: &str = "https://fhir.nhs.uk/Id/sds-user-id";
pub const SDS_ROLE_PROFILE_ID: &str = "https://fhir.nhs.uk/Id/sds-role-profile-id";
pub const GMC_NUMBER: &str = "https://fhir.hl7.org.uk/Id/gmc-number";
pub const DIN_NUMBER: &str = "https://fhir.hl7.org.uk/Id/din-number";

// Coding systems
pub const TASK_BUSINESS_STATUS_NPPT: &str =
    "https://fhir.nhs.uk/CodeSystem/task-businessStatus-nppt";
pub const MESSAGE_EVENT: &str = "https://fhir.nhs.uk/CodeSystem/message-event";
pub const PRESCRIPTION_TYPE: &str = "https://fhir.nhs.uk/CodeSystem/prescription-type";
pub const ORGANISATION_ROLE: &str = "https://fhir.nhs.uk/CodeSystem/organisation-role";
pub const DISPENSING_SITE_PREFERENCE: &str =
    "https://fhir.nhs.uk/CodeSystem/dispensing-site-preference";
pub const SDS_JOB_ROLE_CODE: &str = "https://fhir.nhs.uk/CodeSystem/NHSDigital-SDS-JobRoleCode";
pub const UKCORE_SDS_JOB_ROLE_NAME: &str =
    "https://fhir.hl7.org.uk/CodeSystem/UKCore-SDSJobRoleName";
pub const SNOMED: &str = "http://snomed.info/sct";
pub const MEDICATION_REQUEST_CATEGORY: &str =
    "http://terminology.hl7.org/CodeSystem/medicationrequest-category";
pub const COURSE_OF_THERAPY: &str =
    "http://terminology.hl7.org/CodeSystem/medicationrequest-course-of-therapy";
pub const UNITS_OF_MEASURE: &str = "http://unitsofmeasure.org";

// Extension definitions
pub const EXT_PRESCRIPTION_TYPE: &str =
    "https://fhir.nhs.uk/StructureDefinition/Extension-DM-PrescriptionType";
pub const EXT_PRESCRIPTION_ID: &str =
    "https://fhir.nhs.uk/StructureDefinition/Extension-DM-PrescriptionId";
pub const EXT_PERFORMER_SITE_TYPE: &str =
    "https://fhir.nhs.uk/StructureDefinition/Extension-DM-PerformerSiteType";

// Bundle identifier namespace
pub const RFC_4122: &str = "https://tools.ietf.org/html/rfc4122";
