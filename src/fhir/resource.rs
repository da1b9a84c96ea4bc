//! Typed FHIR resources and the bundle container
//!
//! Each resource the two document families emit is modeled with the
//! exact field set the receiving services expect, and the entry payload
//! is a tagged enum keyed on `resourceType`. As in [`crate::fhir::types`],
//! field declaration order is the wire order.

use crate::fhir::types::{
    Address, CodeableConcept, Coding, ContactPoint, Extension, HumanName, Identifier, Meta,
    Period, Quantity, Reference,
};
use serde::{Deserialize, Serialize};

/// Any resource that can appear in a bundle entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resourceType")]
pub enum Resource {
    MessageHeader(MessageHeader),
    MedicationRequest(MedicationRequest),
    Patient(Patient),
    PractitionerRole(PractitionerRole),
    Practitioner(Practitioner),
    Organization(Organization),
    Task(Task),
}

/// MessageHeader - routing envelope of a message bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageHeader {
    #[serde(rename = "eventCoding")]
    pub event_coding: Coding,

    pub destination: Vec<MessageDestination>,

    pub sender: Reference,

    pub source: MessageSource,

    pub focus: Vec<Reference>,
}

/// Destination endpoint and receiving organisation of a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDestination {
    pub endpoint: String,
    pub receiver: Reference,
}

/// Sending endpoint of a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageSource {
    pub endpoint: String,
}

/// MedicationRequest - one prescribed line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationRequest {
    pub extension: Vec<Extension>,

    pub identifier: Vec<Identifier>,

    pub status: String, // active | cancelled | completed

    pub intent: String, // order

    pub category: Vec<CodeableConcept>,

    #[serde(rename = "medicationCodeableConcept")]
    pub medication_codeable_concept: CodeableConcept,

    pub subject: Reference,

    pub requester: Reference,

    #[serde(rename = "groupIdentifier")]
    pub group_identifier: Identifier,

    #[serde(rename = "courseOfTherapyType")]
    pub course_of_therapy_type: CodeableConcept,

    #[serde(rename = "dosageInstruction")]
    pub dosage_instruction: Vec<Dosage>,

    #[serde(rename = "dispenseRequest")]
    pub dispense_request: DispenseRequest,

    pub substitution: Substitution,
}

/// Dosage - how the medication should be taken
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dosage {
    pub text: String,
    pub timing: Timing,
    pub route: CodeableConcept,
}

/// Timing - repetition schedule for a dosage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    pub repeat: Repeat,
}

/// Repeat - frequency per period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repeat {
    pub frequency: u32,

    pub period: u32,

    #[serde(rename = "periodUnit")]
    pub period_unit: String, // d | wk | mo
}

/// DispenseRequest - fulfilment instructions for a line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispenseRequest {
    pub extension: Vec<Extension>,

    #[serde(rename = "validityPeriod")]
    pub validity_period: Period,

    pub quantity: Quantity,

    #[serde(rename = "expectedSupplyDuration")]
    pub expected_supply_duration: Quantity,

    pub performer: Reference,
}

/// Substitution - whether a generic swap is allowed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substitution {
    #[serde(rename = "allowedBoolean")]
    pub allowed_boolean: bool,
}

/// Patient - the person the order is for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub identifier: Vec<Identifier>,

    pub name: Vec<HumanName>,

    pub gender: String, // male | female

    #[serde(rename = "birthDate")]
    pub birth_date: String,

    pub address: Vec<Address>,

    #[serde(rename = "generalPractitioner")]
    pub general_practitioner: Vec<Reference>,
}

/// PractitionerRole - the prescriber acting for an organisation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PractitionerRole {
    pub identifier: Vec<Identifier>,

    pub practitioner: Reference,

    pub organization: Reference,

    pub code: Vec<CodeableConcept>,

    pub telecom: Vec<ContactPoint>,
}

/// Practitioner - the prescriber as a person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Practitioner {
    pub identifier: Vec<Identifier>,

    pub name: Vec<HumanName>,
}

/// Organization - the prescribing practice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub identifier: Vec<Identifier>,

    #[serde(rename = "type")]
    pub type_: Vec<CodeableConcept>,

    pub name: String,

    pub telecom: Vec<ContactPoint>,

    pub address: Vec<Address>,

    #[serde(rename = "partOf")]
    pub part_of: Reference,
}

/// Task - one prescription status update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,

    #[serde(rename = "basedOn")]
    pub based_on: Vec<Reference>,

    pub status: String, // in-progress | completed

    #[serde(rename = "businessStatus")]
    pub business_status: CodeableConcept,

    pub intent: String, // order

    pub focus: Reference,

    #[serde(rename = "for")]
    pub for_: Reference,

    #[serde(rename = "lastModified")]
    pub last_modified: String,

    pub owner: Reference,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

/// Bundle - the document container for both message families
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(rename = "resourceType")]
    pub resource_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    #[serde(rename = "type")]
    pub type_: String, // message | transaction

    pub entry: Vec<BundleEntry>,
}

impl Bundle {
    /// A message-type bundle carrying its own id and message identifier
    pub fn message(id: String, identifier: Identifier, entry: Vec<BundleEntry>) -> Self {
        Self {
            resource_type: "Bundle".to_string(),
            id: Some(id),
            identifier: Some(identifier),
            type_: "message".to_string(),
            entry,
        }
    }

    /// A transaction-type bundle; these carry no bundle-level identity
    pub fn transaction(entry: Vec<BundleEntry>) -> Self {
        Self {
            resource_type: "Bundle".to_string(),
            id: None,
            identifier: None,
            type_: "transaction".to_string(),
            entry,
        }
    }
}

/// One bundle entry; `request` is present only in transaction bundles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleEntry {
    #[serde(rename = "fullUrl")]
    pub full_url: String,

    pub resource: Resource,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<BundleRequest>,
}

/// Transaction instruction for an entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleRequest {
    pub method: String, // POST
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fhir::systems;

    #[test]
    fn test_resource_tag_leads_serialization() {
        let resource = Resource::Practitioner(Practitioner {
            identifier: vec![Identifier::new(systems::SDS_USER_ID, "555086689106")],
            name: vec![HumanName {
                use_: None,
                family: "SMITH".to_string(),
                given: vec!["JANE".to_string()],
                prefix: vec!["Dr".to_string()],
            }],
        });
        let json = serde_json::to_string(&resource).unwrap();
        assert!(json.starts_with(r#"{"resourceType":"Practitioner","identifier""#));
    }

    #[test]
    fn test_resource_round_trip_through_tag() {
        let resource = Resource::Task(Task {
            id: "e3b0c442-98fc-4c14-9b3c-1c8a2f1e5b6d".to_string(),
            based_on: vec![Reference::to_identifier(Identifier::new(
                systems::PRESCRIPTION_ORDER_NUMBER,
                "9A822C-A83008-13DCAB",
            ))],
            status: "in-progress".to_string(),
            business_status: CodeableConcept::single(Coding::new(
                systems::TASK_BUSINESS_STATUS_NPPT,
                "With Pharmacy",
            )),
            intent: "order".to_string(),
            focus: Reference::to_identifier(Identifier::new(
                systems::PRESCRIPTION_ORDER_ITEM_NUMBER,
                "a7b0e9cb-dd77-44b9-a1c6-6d8f41a4a2ea",
            )),
            for_: Reference::to_identifier(Identifier::new(systems::NHS_NUMBER, "9434765919")),
            last_modified: "2025-06-01T10:00:00.000Z".to_string(),
            owner: Reference::to_identifier(Identifier::new(
                systems::ODS_ORGANIZATION_CODE,
                "FA565",
            )),
            meta: None,
        });
        let json = serde_json::to_string(&resource).unwrap();
        let back: Resource = serde_json::from_str(&json).unwrap();
        assert_eq!(resource, back);
    }

    #[test]
    fn test_task_for_field_renames_and_meta_skips() {
        let task = Task {
            id: "x".to_string(),
            based_on: vec![],
            status: "completed".to_string(),
            business_status: CodeableConcept::single(Coding::new(
                systems::TASK_BUSINESS_STATUS_NPPT,
                "Collected",
            )),
            intent: "order".to_string(),
            focus: Reference::to_url("urn:uuid:x"),
            for_: Reference::to_identifier(Identifier::new(systems::NHS_NUMBER, "9434765919")),
            last_modified: "2025-06-01T10:00:00.000Z".to_string(),
            owner: Reference::to_identifier(Identifier::new(
                systems::ODS_ORGANIZATION_CODE,
                "FA565",
            )),
            meta: None,
        };
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains(r#""for":{"identifier""#));
        assert!(!json.contains("for_"));
        assert!(!json.contains("meta"));
    }

    #[test]
    fn test_transaction_bundle_has_no_id_or_identifier() {
        let bundle = Bundle::transaction(vec![]);
        let json = serde_json::to_string(&bundle).unwrap();
        assert_eq!(json, r#"{"resourceType":"Bundle","type":"transaction","entry":[]}"#);
    }

    #[test]
    fn test_message_bundle_field_order() {
        let bundle = Bundle::message(
            "0c7bbbe5-0626-43ae-b596-de3c7c7a04ea".to_string(),
            Identifier::new(systems::RFC_4122, "e9c2f1a7-6d6f-43ac-9b6e-2a0e9c2b6a11"),
            vec![],
        );
        let json = serde_json::to_string(&bundle).unwrap();
        assert!(json.starts_with(r#"{"resourceType":"Bundle","id":"0c7bbbe5"#));
        assert!(json.contains(r#""type":"message""#));
    }
}
