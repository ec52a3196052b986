//! Versioned persisted form of the holdings collection.

mod record_codec;
mod record_model;
mod record_traits;


pub use record_codec::{decode_record, encode_record};
pub use record_model::{PortfolioRecord, StoreConfig, StoredHolding, VersionPolicy};
pub use record_traits::PortfolioRecordRepositoryTrait;
