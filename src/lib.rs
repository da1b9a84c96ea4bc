// Scrip - Synthetic NHS e-prescribing test data
// Copyright (c) 2025 Scrip Contributors
// Licensed under the MIT License

//! # Scrip - Synthetic NHS e-Prescribing Test Data
//!
//! Scrip generates the identifiers and FHIR documents needed to exercise an
//! NHS electronic prescribing pipeline without touching real patient data:
//! NHS numbers, ODS organisation codes, short-form prescription IDs,
//! prescription-order message bundles and prescription status update
//! transaction bundles.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Generating** NHS numbers (modulus 11 check digit, dummy 999 range),
//!   ODS codes and short-form prescription IDs (modulus 37 check character)
//! - **Assembling** prescription-order message bundles with a realistic
//!   patient / prescriber / organisation graph
//! - **Assembling** prescription status update transaction bundles, with
//!   optional post-dating for testing time-sensitive flows
//! - **Extracting** identifiers back out of assembled bundles
//!
//! ## Architecture
//!
//! Scrip follows a layered architecture:
//!
//! - [`core`] - Check-digit algorithms and data generators
//! - [`domain`] - Typed identifiers, dispensing statuses and errors
//! - [`fhir`] - Wire models, document assemblers and extraction helpers
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use scrip::core::generate::{generate_nhs_number, NhsNumberOptions};
//! use scrip::fhir::order::{build_order_message, OrderMessageOptions};
//!
//! fn main() -> Result<(), scrip::domain::ScripError> {
//!     // Seeded RNG so runs are reproducible
//!     let mut rng = StdRng::seed_from_u64(42);
//!
//!     let nhs_number = generate_nhs_number(&NhsNumberOptions::default(), &mut rng)?;
//!     println!("NHS number: {nhs_number}");
//!
//!     let bundle = build_order_message(&OrderMessageOptions::default(), &mut rng)?;
//!     println!("{}", serde_json::to_string_pretty(&bundle)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! ### Deterministic generation
//!
//! Every generator and assembler draws exclusively from a caller-supplied
//! [`rand::Rng`], so a seeded generator reproduces identical identifiers,
//! UUIDs and documents run after run:
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use scrip::core::generate::{generate_prescription_id, generate_ods_code};
//!
//! # fn main() -> Result<(), scrip::domain::ScripError> {
//! let mut rng = StdRng::seed_from_u64(7);
//! let pharmacy = generate_ods_code(5, &mut rng)?;
//! let id = generate_prescription_id(Some(pharmacy.as_str()), &mut rng)?;
//! assert!(scrip::core::generate::validate_prescription_id(id.as_str()));
//! # Ok(())
//! # }
//! ```
//!
//! ### Status updates
//!
//! Status update bundles carry one Task per tracked order item; the
//! human-readable dispensing state decides the FHIR task status:
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use scrip::domain::status::BusinessStatus;
//! use scrip::fhir::psu::{build_status_update, StatusUpdateOptions};
//!
//! let status: BusinessStatus = "ready to collect".parse().unwrap();
//! assert_eq!(status.task_status().as_str(), "in-progress");
//! assert!(BusinessStatus::Collected.is_terminal());
//!
//! // Any state will do for bulk test data; draw one
//! let mut rng = StdRng::seed_from_u64(7);
//! let options = StatusUpdateOptions::new(BusinessStatus::random(&mut rng));
//! let bundle = build_status_update(&options, &mut rng).unwrap();
//! assert_eq!(bundle.entry.len(), 1);
//! ```
//!
//! ## Error Handling
//!
//! Scrip uses the [`domain::ScripError`] type for all errors:
//!
//! ```rust
//! use scrip::core::generate::generate_ods_code;
//! use scrip::domain::ScripError;
//!
//! let mut rng = rand::thread_rng();
//! match generate_ods_code(9, &mut rng) {
//!     Err(ScripError::Validation(message)) => assert!(message.contains("between 3 and 6")),
//!     other => panic!("expected a validation error, got {other:?}"),
//! }
//! ```
//!
//! ## Logging
//!
//! Scrip emits structured events with the `tracing` crate; see
//! [`logging::init_logging`] for a console subscriber.
//!
//! ## See Also
//!
//! - [NHS number](https://www.datadictionary.nhs.uk/attributes/nhs_number.html)
//!   in the NHS Data Dictionary
//! - [Organisation Data Service](https://digital.nhs.uk/services/organisation-data-service)

pub mod core;
pub mod domain;
pub mod fhir;
pub mod logging;
