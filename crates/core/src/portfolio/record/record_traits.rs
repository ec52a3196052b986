//! Repository trait for the durable key-value collaborator.

use async_trait::async_trait;

use crate::errors::Result;

/// Key-value storage holding serialized portfolio records.
#[async_trait]
pub trait PortfolioRecordRepositoryTrait: Send + Sync {
    /// Get the record stored under `key`, or `None` if nothing was ever written.
    fn get_record(&self, key: &str) -> Result<Option<String>>;

    /// Replace the record stored under `key`. Returns only once the write is durable.
    async fn set_record(&self, key: &str, value: &str) -> Result<()>;
}
