use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use super::model::AppRecordDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::app_records::dsl::*;
use stockfolio_core::errors::Result;
use stockfolio_core::portfolio::record::PortfolioRecordRepositoryTrait;

/// SQLite-backed store for the serialized portfolio record.
///
/// Reads go through the pool; writes go through the single writer actor.
pub struct PortfolioRecordRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PortfolioRecordRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        PortfolioRecordRepository { pool, writer }
    }
}

#[async_trait]
impl PortfolioRecordRepositoryTrait for PortfolioRecordRepository {
    fn get_record(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        app_records
            .select(record_value)
            .filter(record_key.eq(key))
            .first::<String>(&mut conn)
            .optional()
            .into_core()
    }

    async fn set_record(&self, key: &str, value: &str) -> Result<()> {
        let row = AppRecordDB {
            record_key: key.to_string(),
            record_value: value.to_string(),
            updated_at: Utc::now().naive_utc(),
        };
        debug!("Writing record '{}' ({} bytes)", row.record_key, row.record_value.len());

        self.writer
            .exec(move |conn| {
                diesel::replace_into(app_records)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}
