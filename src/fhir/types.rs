//! General-purpose FHIR datatypes shared across resources
//!
//! Field declaration order matters: serde serializes struct fields in
//! order, and the documents these types produce are compared byte-wise
//! against recorded fixtures downstream. Optional fields are skipped
//! when absent rather than serialized as null.

use serde::{Deserialize, Serialize};

/// Coding - a reference to a code defined by a terminology system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coding {
    pub system: String,

    pub code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl Coding {
    pub fn new(system: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            code: code.into(),
            display: None,
        }
    }

    pub fn with_display(
        system: impl Into<String>,
        code: impl Into<String>,
        display: impl Into<String>,
    ) -> Self {
        Self {
            system: system.into(),
            code: code.into(),
            display: Some(display.into()),
        }
    }
}

/// CodeableConcept - one or more codings for a concept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeableConcept {
    pub coding: Vec<Coding>,
}

impl CodeableConcept {
    pub fn single(coding: Coding) -> Self {
        Self {
            coding: vec![coding],
        }
    }
}

/// Identifier - a value unique within its naming system
///
/// The optional extension list carries identifier-scoped extensions,
/// such as the prescription UUID attached to an order group identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    pub system: String,

    pub value: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
}

impl Identifier {
    pub fn new(system: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            value: value.into(),
            extension: None,
        }
    }
}

/// Extension carrying one of the value types the documents use
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    pub url: String,

    #[serde(rename = "valueCoding", skip_serializing_if = "Option::is_none")]
    pub value_coding: Option<Coding>,

    #[serde(rename = "valueIdentifier", skip_serializing_if = "Option::is_none")]
    pub value_identifier: Option<Identifier>,
}

impl Extension {
    pub fn coding(url: impl Into<String>, coding: Coding) -> Self {
        Self {
            url: url.into(),
            value_coding: Some(coding),
            value_identifier: None,
        }
    }

    pub fn identifier(url: impl Into<String>, identifier: Identifier) -> Self {
        Self {
            url: url.into(),
            value_coding: None,
            value_identifier: Some(identifier),
        }
    }
}

/// Reference - a link to another resource, by local URL or identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl Reference {
    /// Reference a resource inside the same bundle by its full URL
    pub fn to_url(reference: impl Into<String>) -> Self {
        Self {
            reference: Some(reference.into()),
            identifier: None,
            display: None,
        }
    }

    /// Reference a resource by business identifier
    pub fn to_identifier(identifier: Identifier) -> Self {
        Self {
            reference: None,
            identifier: Some(identifier),
            display: None,
        }
    }

    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }
}

/// HumanName - name parts as the spine expects them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanName {
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<String>, // usual | official | temp

    pub family: String,

    pub given: Vec<String>,

    pub prefix: Vec<String>,
}

/// Address - postal address lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "use")]
    pub use_: String, // home | work

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>, // postal | physical | both

    pub line: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,

    #[serde(rename = "postalCode")]
    pub postal_code: String,
}

/// ContactPoint (phone, email, etc.)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactPoint {
    pub system: String, // phone | fax | email

    #[serde(rename = "use")]
    pub use_: String, // home | work

    pub value: String,
}

impl ContactPoint {
    pub fn work_phone(value: impl Into<String>) -> Self {
        Self {
            system: "phone".to_string(),
            use_: "work".to_string(),
            value: value.into(),
        }
    }
}

/// Period - a start/end date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub start: String,
    pub end: String,
}

/// Quantity - an amount with unit coding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: u32,
    pub unit: String,
    pub system: String,
    pub code: String,
}

/// Meta - resource metadata; only `lastUpdated` is used here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coding_omits_absent_display() {
        let coding = Coding::new("http://snomed.info/sct", "26643006");
        let json = serde_json::to_string(&coding).unwrap();
        assert_eq!(json, r#"{"system":"http://snomed.info/sct","code":"26643006"}"#);
    }

    #[test]
    fn test_coding_serializes_display_last() {
        let coding = Coding::with_display("http://snomed.info/sct", "26643006", "Oral");
        let json = serde_json::to_string(&coding).unwrap();
        assert_eq!(
            json,
            r#"{"system":"http://snomed.info/sct","code":"26643006","display":"Oral"}"#
        );
    }

    #[test]
    fn test_reference_by_identifier_has_no_reference_key() {
        let reference = Reference::to_identifier(Identifier::new(
            "https://fhir.nhs.uk/Id/nhs-number",
            "9434765919",
        ));
        let json = serde_json::to_string(&reference).unwrap();
        assert!(!json.contains("\"reference\""));
        assert!(json.contains("\"identifier\""));
    }

    #[test]
    fn test_reference_display_rides_after_identifier() {
        let reference = Reference::to_identifier(Identifier::new(
            "https://fhir.nhs.uk/Id/ods-organization-code",
            "A83008",
        ))
        .with_display("HALLGARTH SURGERY");
        let json = serde_json::to_string(&reference).unwrap();
        assert_eq!(
            json,
            r#"{"identifier":{"system":"https://fhir.nhs.uk/Id/ods-organization-code","value":"A83008"},"display":"HALLGARTH SURGERY"}"#
        );
    }

    #[test]
    fn test_address_field_order_matches_wire_contract() {
        let address = Address {
            use_: "work".to_string(),
            type_: Some("both".to_string()),
            line: vec!["HALLGARTH SURGERY".to_string(), "CHEAPSIDE".to_string()],
            city: Some("SHILDON".to_string()),
            district: Some("COUNTY DURHAM".to_string()),
            postal_code: "DL4 2HP".to_string(),
        };
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(
            json,
            r#"{"use":"work","type":"both","line":["HALLGARTH SURGERY","CHEAPSIDE"],"city":"SHILDON","district":"COUNTY DURHAM","postalCode":"DL4 2HP"}"#
        );
    }

    #[test]
    fn test_identifier_round_trip_with_extension() {
        let identifier = Identifier {
            system: "https://fhir.nhs.uk/Id/prescription-order-number".to_string(),
            value: "9A822C-A83008-13DCAB".to_string(),
            extension: Some(vec![Extension::identifier(
                "https://fhir.nhs.uk/StructureDefinition/Extension-DM-PrescriptionId",
                Identifier::new(
                    "https://fhir.nhs.uk/Id/prescription",
                    "0f3978e5-a034-4f39-be1f-c461e3eff686",
                ),
            )]),
        };
        let json = serde_json::to_string(&identifier).unwrap();
        let back: Identifier = serde_json::from_str(&json).unwrap();
        assert_eq!(identifier, back);
    }
}
