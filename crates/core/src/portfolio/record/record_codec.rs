use log::warn;
use serde_json::Value;
use std::collections::HashSet;

use super::{PortfolioRecord, StoredHolding, VersionPolicy};
use crate::constants::CURRENT_RECORD_VERSION;
use crate::errors::{PersistenceError, Result};
use crate::portfolio::holdings::{validate_stored_holding, Holding};

/// Serializes the collection as a current-version record.
pub fn encode_record(holdings: &[Holding]) -> Result<String> {
    let record = PortfolioRecord {
        version: CURRENT_RECORD_VERSION,
        stocks: holdings.iter().map(StoredHolding::from).collect(),
    };
    serde_json::to_string(&record)
        .map_err(|e| PersistenceError::Serialization(e.to_string()).into())
}

/// Decodes a stored record back into the ordered collection.
///
/// Records from another layout version go through [`migrate_record`]; when
/// no upgrade path exists `policy` decides between failing and starting empty.
/// Malformed or invariant-violating records always fail.
pub fn decode_record(raw: &str, policy: VersionPolicy) -> Result<Vec<Holding>> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| PersistenceError::CorruptRecord(e.to_string()))?;

    let version = value
        .get("version")
        .and_then(Value::as_u64)
        .ok_or_else(|| PersistenceError::CorruptRecord("missing record version".to_string()))?;

    let value = match migrate_record(value, version) {
        Ok(v) => v,
        Err(err @ PersistenceError::UnsupportedVersion { .. }) => {
            return match policy {
                VersionPolicy::Reject => Err(err.into()),
                VersionPolicy::Discard => {
                    warn!("Discarding stored portfolio record: {}", err);
                    Ok(Vec::new())
                }
            };
        }
        Err(err) => return Err(err.into()),
    };

    let record: PortfolioRecord = serde_json::from_value(value)
        .map_err(|e| PersistenceError::CorruptRecord(e.to_string()))?;
    let holdings: Vec<Holding> = record.stocks.into_iter().map(Holding::from).collect();
    check_integrity(&holdings)?;
    Ok(holdings)
}

/// Upgrades a raw record to the current layout.
///
/// Version 1 is the first layout ever written, so there is nothing older to
/// upgrade from yet; new steps go here as `n => upgrade_from_vn(record)`.
fn migrate_record(record: Value, from_version: u64) -> std::result::Result<Value, PersistenceError> {
    match from_version {
        v if v == u64::from(CURRENT_RECORD_VERSION) => Ok(record),
        found => Err(PersistenceError::UnsupportedVersion {
            found,
            supported: CURRENT_RECORD_VERSION,
        }),
    }
}

fn check_integrity(holdings: &[Holding]) -> std::result::Result<(), PersistenceError> {
    let mut seen = HashSet::with_capacity(holdings.len());
    for h in holdings {
        if !seen.insert(h.id.as_str()) {
            return Err(PersistenceError::CorruptRecord(format!(
                "duplicate holding id '{}'",
                h.id
            )));
        }
        validate_stored_holding(h).map_err(|e| {
            PersistenceError::CorruptRecord(format!("holding '{}' is invalid: {}", h.id, e))
        })?;
    }
    Ok(())
}
