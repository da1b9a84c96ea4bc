//! Dispensing business statuses and their task-state mapping
//!
//! A status update carries a free-text-looking but closed-set business
//! status ("With Pharmacy", "Ready to Collect", ...) plus a coarse task
//! state that trackers key off. The coarse state is fully determined by
//! the business status: three labels mean the prescription has left the
//! pharmacy's hands, everything else is still in progress.

use crate::domain::errors::ScripError;
use crate::domain::result::Result;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Coarse lifecycle state of a status-update task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    /// The prescription is still being worked on by the pharmacy
    InProgress,
    /// The prescription has reached a terminal outcome
    Completed,
}

impl TaskStatus {
    /// Wire-level code for the state
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Business status of a prescription at a dispensing site
///
/// The variant set and display labels are fixed; parsing is forgiving
/// about case and surrounding whitespace but rejects anything outside
/// the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessStatus {
    WithPharmacy,
    WithPharmacyPreparingRemainder,
    ReadyToCollect,
    ReadyToCollectPartial,
    Collected,
    Dispatched,
    NotDispensed,
    ReadyToDispatch,
    ReadyToDispatchPartial,
}

impl BusinessStatus {
    /// Every status, in display order
    pub const ALL: [BusinessStatus; 9] = [
        BusinessStatus::WithPharmacy,
        BusinessStatus::WithPharmacyPreparingRemainder,
        BusinessStatus::ReadyToCollect,
        BusinessStatus::ReadyToCollectPartial,
        BusinessStatus::Collected,
        BusinessStatus::Dispatched,
        BusinessStatus::NotDispensed,
        BusinessStatus::ReadyToDispatch,
        BusinessStatus::ReadyToDispatchPartial,
    ];

    /// Canonical display label, as it appears on the wire
    pub fn label(&self) -> &'static str {
        match self {
            BusinessStatus::WithPharmacy => "With Pharmacy",
            BusinessStatus::WithPharmacyPreparingRemainder => {
                "With Pharmacy - Preparing Remainder"
            }
            BusinessStatus::ReadyToCollect => "Ready to Collect",
            BusinessStatus::ReadyToCollectPartial => "Ready to Collect - Partial",
            BusinessStatus::Collected => "Collected",
            BusinessStatus::Dispatched => "Dispatched",
            BusinessStatus::NotDispensed => "Not Dispensed",
            BusinessStatus::ReadyToDispatch => "Ready to Dispatch",
            BusinessStatus::ReadyToDispatchPartial => "Ready to Dispatch - Partial",
        }
    }

    /// Whether this status ends the prescription's journey
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BusinessStatus::Collected
                | BusinessStatus::Dispatched
                | BusinessStatus::NotDispensed
        )
    }

    /// The coarse task state implied by this business status
    pub fn task_status(&self) -> TaskStatus {
        if self.is_terminal() {
            TaskStatus::Completed
        } else {
            TaskStatus::InProgress
        }
    }

    /// Picks a status uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Parses a label, ignoring case and surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns [`ScripError::UnrecognizedStatus`] naming the accepted
    /// labels when the input matches none of them.
    pub fn parse(input: &str) -> Result<Self> {
        let wanted = input.trim();
        for status in Self::ALL {
            if status.label().eq_ignore_ascii_case(wanted) {
                return Ok(status);
            }
        }
        Err(ScripError::UnrecognizedStatus {
            input: input.to_string(),
            expected: Self::ALL
                .iter()
                .map(|s| s.label())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

impl fmt::Display for BusinessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for BusinessStatus {
    type Err = ScripError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(BusinessStatus::WithPharmacy, "in-progress")]
    #[test_case(BusinessStatus::WithPharmacyPreparingRemainder, "in-progress")]
    #[test_case(BusinessStatus::ReadyToCollect, "in-progress")]
    #[test_case(BusinessStatus::ReadyToCollectPartial, "in-progress")]
    #[test_case(BusinessStatus::Collected, "completed")]
    #[test_case(BusinessStatus::Dispatched, "completed")]
    #[test_case(BusinessStatus::NotDispensed, "completed")]
    #[test_case(BusinessStatus::ReadyToDispatch, "in-progress")]
    #[test_case(BusinessStatus::ReadyToDispatchPartial, "in-progress")]
    fn test_task_status_mapping(status: BusinessStatus, expected: &str) {
        assert_eq!(status.task_status().as_str(), expected);
    }

    #[test]
    fn test_parse_canonical_labels() {
        for status in BusinessStatus::ALL {
            assert_eq!(BusinessStatus::parse(status.label()).unwrap(), status);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            BusinessStatus::parse("ready to collect").unwrap(),
            BusinessStatus::ReadyToCollect
        );
        assert_eq!(
            BusinessStatus::parse("NOT DISPENSED").unwrap(),
            BusinessStatus::NotDispensed
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            BusinessStatus::parse("  Collected  ").unwrap(),
            BusinessStatus::Collected
        );
        assert_eq!(
            BusinessStatus::parse(" ready to collect ").unwrap().label(),
            "Ready to Collect"
        );
    }

    #[test]
    fn test_parse_rejects_unknown_label() {
        let err = BusinessStatus::parse("Teleported").unwrap_err();
        match err {
            ScripError::UnrecognizedStatus { input, expected } => {
                assert_eq!(input, "Teleported");
                assert!(expected.contains("With Pharmacy"));
                assert!(expected.contains("Ready to Dispatch - Partial"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_random_stays_in_set() {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let status = BusinessStatus::random(&mut rng);
            assert!(BusinessStatus::ALL.contains(&status));
        }
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(
            BusinessStatus::ReadyToCollectPartial.to_string(),
            "Ready to Collect - Partial"
        );
    }
}
