//! Fixtures file loading.
//!
//! Reads a JSON array of delivery records from disk and converts it into
//! [`DeliveryRecord`] structs for the aggregation passes.

use std::io::BufReader;
use std::path::Path;

use stats_core::error::{Result, StatsError};
use stats_core::models::DeliveryRecord;
use tracing::debug;

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every delivery record from the JSON file at `path`.
///
/// The file must contain a single JSON array of objects with `postcode`,
/// `recipe` and `delivery` keys. Unknown keys are ignored.
pub fn load_records(path: &Path) -> Result<Vec<DeliveryRecord>> {
    let file = std::fs::File::open(path).map_err(|source| StatsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_records(BufReader::new(file))?;

    debug!("Loaded {} records from {}", records.len(), path.display());

    Ok(records)
}

/// Parse delivery records from any reader producing a JSON array.
pub fn parse_records<R: std::io::Read>(reader: R) -> Result<Vec<DeliveryRecord>> {
    let records: Vec<DeliveryRecord> = serde_json::from_reader(reader)?;
    Ok(records)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
