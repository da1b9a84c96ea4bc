//! FHIR document layer
//!
//! Typed wire models for the two document families the crate produces,
//! the assemblers that build them, and extraction helpers for reading
//! identifiers back out of a bundle. Field names and coding-system URLs
//! follow the NHS England FHIR profiles; serialization order matches
//! the declared struct order so emitted JSON is stable.

pub mod extract;
pub mod order;
pub mod psu;
pub mod resource;
pub mod systems;
pub mod types;

pub use extract::find_nhs_number;
pub use order::{build_order_message, OrderMessageOptions};
pub use psu::{build_status_update, StatusUpdateOptions};
pub use resource::{Bundle, BundleEntry, BundleRequest, Resource};

use rand::Rng;
use uuid::Uuid;

/// Draw a version-4 UUID from the supplied generator
///
/// Routing UUIDs through the injected RNG keeps seeded document builds
/// reproducible.
pub(crate) fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}
