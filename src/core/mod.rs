//! Core generation engine
//!
//! Check-digit arithmetic plus the random identifier and demographic
//! generators built on top of it.

pub mod checkdigit;
pub mod generate;
