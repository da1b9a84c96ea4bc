//! Domain models and types for synthetic prescription data
//!
//! This module contains the core types the rest of the crate is built
//! on: the error taxonomy, identifier newtypes, and the dispensing
//! status model.

pub mod errors;
pub mod ids;
pub mod result;
pub mod status;

pub use errors::ScripError;
pub use ids::{NhsNumber, OdsCode, PrescriptionId};
pub use result::Result;
pub use status::{BusinessStatus, TaskStatus};
