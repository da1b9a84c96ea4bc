//! Prescription status update assembly
//!
//! Builds the transaction bundle a dispatching site posts to the status
//! update API: one Task per tracked order item. Entries resolve their
//! identifiers independently, so an unpinned run produces N unrelated
//! tasks while pinning an identifier applies it to every entry.

use crate::core::generate::{
    generate_nhs_number, generate_ods_code, generate_prescription_id, NhsNumberOptions,
};
use crate::domain::errors::ScripError;
use crate::domain::ids::{NhsNumber, OdsCode, PrescriptionId};
use crate::domain::result::Result;
use crate::domain::status::BusinessStatus;
use crate::fhir::random_uuid;
use crate::fhir::resource::{Bundle, BundleEntry, BundleRequest, Resource, Task};
use crate::fhir::systems;
use crate::fhir::types::{CodeableConcept, Coding, Identifier, Meta, Reference};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::Rng;

/// Largest accepted `post_dated_hours` magnitude, about 114 years.
/// Keeps the timestamp arithmetic inside chrono's representable range.
const MAX_POST_DATED_HOURS: f64 = 1_000_000.0;

/// Options for [`build_status_update`]
///
/// Unset identifiers are resolved fresh for every entry; the order
/// number is composed over whichever ODS code the entry ends up with.
/// `post_dated_hours` shifts `lastModified` into the future by that many
/// hours while `meta.lastUpdated` records the true creation instant, and
/// wins over a pinned `last_modified`.
#[derive(Debug, Clone)]
pub struct StatusUpdateOptions {
    /// Human-readable dispensing state carried on every Task
    pub business_status: BusinessStatus,
    /// Number of Task entries; must be at least 1
    pub entry_count: usize,
    pub nhs_number: Option<NhsNumber>,
    pub ods_code: Option<OdsCode>,
    pub order_number: Option<PrescriptionId>,
    pub order_item_number: Option<String>,
    /// Pinned `lastModified` timestamp, RFC 3339
    pub last_modified: Option<String>,
    /// Hours to shift `lastModified` by; finite, within ±1,000,000
    pub post_dated_hours: Option<f64>,
}

impl StatusUpdateOptions {
    /// A single-entry update with everything else resolved at build time
    pub fn new(business_status: BusinessStatus) -> Self {
        Self {
            business_status,
            entry_count: 1,
            nhs_number: None,
            ods_code: None,
            order_number: None,
            order_item_number: None,
            last_modified: None,
            post_dated_hours: None,
        }
    }
}

/// Build a prescription status update transaction bundle
///
/// # Errors
///
/// Returns [`ScripError::Validation`] when `entry_count` is zero or
/// `post_dated_hours` is not a finite in-range offset; propagates
/// identifier-generation failures.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use scrip::domain::status::BusinessStatus;
/// use scrip::fhir::psu::{build_status_update, StatusUpdateOptions};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let options = StatusUpdateOptions::new(BusinessStatus::ReadyToCollect);
/// let bundle = build_status_update(&options, &mut rng).unwrap();
/// assert_eq!(bundle.entry.len(), 1);
/// ```
pub fn build_status_update<R: Rng + ?Sized>(
    options: &StatusUpdateOptions,
    rng: &mut R,
) -> Result<Bundle> {
    if options.entry_count == 0 {
        return Err(ScripError::Validation(
            "A status update needs at least one entry".to_string(),
        ));
    }
    if let Some(hours) = options.post_dated_hours {
        if !hours.is_finite() || hours.abs() > MAX_POST_DATED_HOURS {
            return Err(ScripError::Validation(format!(
                "post_dated_hours must be a finite offset within \
                 ±{MAX_POST_DATED_HOURS} hours, got {hours}"
            )));
        }
    }

    tracing::debug!(
        entries = options.entry_count,
        business_status = %options.business_status,
        post_dated_hours = options.post_dated_hours,
        "assembling status-update transaction"
    );

    let mut entries = Vec::with_capacity(options.entry_count);
    for _ in 0..options.entry_count {
        entries.push(build_task_entry(options, rng)?);
    }

    Ok(Bundle::transaction(entries))
}

fn build_task_entry<R: Rng + ?Sized>(
    options: &StatusUpdateOptions,
    rng: &mut R,
) -> Result<BundleEntry> {
    let ods_code = match &options.ods_code {
        Some(code) => code.clone(),
        None => generate_ods_code(6, rng)?,
    };
    let order_number = match &options.order_number {
        Some(number) => number.clone(),
        None => generate_prescription_id(Some(ods_code.as_str()), rng)?,
    };
    let order_item_number = match &options.order_item_number {
        Some(number) => number.clone(),
        None => random_uuid(rng).to_string(),
    };
    let nhs_number = match &options.nhs_number {
        Some(number) => number.clone(),
        None => generate_nhs_number(&NhsNumberOptions::default(), rng)?,
    };
    let task_id = random_uuid(rng).to_string();

    let (last_modified, created) = resolve_timestamps(options);

    let task = Task {
        id: task_id.clone(),
        based_on: vec![Reference::to_identifier(Identifier::new(
            systems::PRESCRIPTION_ORDER_NUMBER,
            order_number.as_str(),
        ))],
        status: options.business_status.task_status().as_str().to_string(),
        business_status: CodeableConcept::single(Coding::new(
            systems::TASK_BUSINESS_STATUS_NPPT,
            options.business_status.label(),
        )),
        intent: "order".to_string(),
        focus: Reference::to_identifier(Identifier::new(
            systems::PRESCRIPTION_ORDER_ITEM_NUMBER,
            &order_item_number,
        )),
        for_: Reference::to_identifier(Identifier::new(
            systems::NHS_NUMBER,
            nhs_number.as_str(),
        )),
        last_modified,
        owner: Reference::to_identifier(Identifier::new(
            systems::ODS_ORGANIZATION_CODE,
            ods_code.as_str(),
        )),
        meta: created.map(|instant| Meta {
            last_updated: instant,
        }),
    };

    Ok(BundleEntry {
        full_url: format!("urn:uuid:{task_id}"),
        resource: Resource::Task(task),
        request: Some(BundleRequest {
            method: "POST".to_string(),
            url: "Task".to_string(),
        }),
    })
}

/// Resolve `(lastModified, meta.lastUpdated)` for one entry
///
/// The clock is read per entry so a long multi-entry build keeps honest
/// creation instants.
fn resolve_timestamps(options: &StatusUpdateOptions) -> (String, Option<String>) {
    match options.post_dated_hours {
        Some(hours) => {
            let now = Utc::now();
            let offset = Duration::milliseconds((hours * 3_600_000.0) as i64);
            (iso_millis(now + offset), Some(iso_millis(now)))
        }
        None => {
            let stamp = options
                .last_modified
                .clone()
                .unwrap_or_else(|| iso_millis(Utc::now()));
            (stamp, None)
        }
    }
}

fn iso_millis(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
