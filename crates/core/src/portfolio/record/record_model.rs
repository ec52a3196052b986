use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::DEFAULT_STORAGE_KEY;
use crate::errors::Error;
use crate::portfolio::holdings::Holding;

/// The single record the whole collection is persisted as.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PortfolioRecord {
    pub version: u32,
    pub stocks: Vec<StoredHolding>,
}

/// Persisted form of a [`Holding`].
///
/// Prices are written as decimal text so every digit survives a reload.
/// Records are decoded from a `serde_json::Value`, which also accepts the
/// plain JSON numbers earlier records hold.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredHolding {
    pub id: String,
    pub ticker: String,
    pub company_name: String,
    pub quantity: i64,
    #[serde(serialize_with = "rust_decimal::serde::str::serialize")]
    pub purchase_price: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::str::serialize")]
    pub current_price: Decimal,
    pub date_of_purchase: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Holding> for StoredHolding {
    fn from(holding: &Holding) -> Self {
        StoredHolding {
            id: holding.id.clone(),
            ticker: holding.ticker.clone(),
            company_name: holding.company_name.clone(),
            quantity: holding.quantity,
            purchase_price: holding.purchase_price,
            current_price: holding.current_price,
            date_of_purchase: holding.date_of_purchase,
            created_at: holding.created_at,
            updated_at: holding.updated_at,
        }
    }
}

impl From<StoredHolding> for Holding {
    fn from(stored: StoredHolding) -> Self {
        Holding {
            id: stored.id,
            ticker: stored.ticker,
            company_name: stored.company_name,
            quantity: stored.quantity,
            purchase_price: stored.purchase_price,
            current_price: stored.current_price,
            date_of_purchase: stored.date_of_purchase,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        }
    }
}

/// What to do with a stored record whose layout version this build cannot read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionPolicy {
    /// Refuse to start. The stored record stays untouched.
    #[default]
    Reject,
    /// Start with an empty collection; the record is replaced on the next write.
    Discard,
}

impl FromStr for VersionPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(VersionPolicy::Reject),
            "discard" => Ok(VersionPolicy::Discard),
            other => Err(Error::InvalidConfigValue(format!(
                "unknown version policy '{}', expected 'reject' or 'discard'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub storage_key: String,
    pub version_policy: VersionPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            version_policy: VersionPolicy::default(),
        }
    }
}
