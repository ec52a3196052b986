use async_trait::async_trait;
use log::{debug, error, info};
use rust_decimal::Decimal;
use std::sync::{Arc, RwLock, RwLockReadGuard};
use tokio::sync::Mutex;
use uuid::Uuid;

use super::holdings_validation::{validate_current_price, validate_new_holding};
use super::HoldingsServiceTrait;
use crate::errors::{Error, Result};
use crate::portfolio::holdings::{
    query_holdings, Holding, HoldingUpdate, HoldingView, HoldingsQuery, NewHolding,
};
use crate::portfolio::record::{
    decode_record, encode_record, PortfolioRecordRepositoryTrait, StoreConfig,
};
use crate::portfolio::valuation::{
    calculate_holding_metrics, calculate_portfolio_summary, HoldingMetrics, PortfolioSummary,
};
use crate::utils::time_utils::{next_timestamp, today_local};

/// The holdings store: owns the ordered collection and its durable copy.
///
/// Construct once at startup with [`HoldingsService::load`] and share it by `Arc`.
pub struct HoldingsService {
    repository: Arc<dyn PortfolioRecordRepositoryTrait>,
    config: StoreConfig,
    holdings: RwLock<Vec<Holding>>,
    // Serialises mutations so each one, including its write, finishes before the next starts.
    write_lock: Mutex<()>,
}

impl HoldingsService {
    /// Loads the persisted collection, or starts empty when nothing is stored.
    pub fn load(
        repository: Arc<dyn PortfolioRecordRepositoryTrait>,
        config: StoreConfig,
    ) -> Result<Self> {
        let holdings = match repository.get_record(&config.storage_key)? {
            Some(raw) => decode_record(&raw, config.version_policy)?,
            None => Vec::new(),
        };
        info!(
            "Loaded {} holdings from '{}'",
            holdings.len(),
            config.storage_key
        );

        Ok(HoldingsService {
            repository,
            config,
            holdings: RwLock::new(holdings),
            write_lock: Mutex::new(()),
        })
    }

    fn read_holdings(&self) -> Result<RwLockReadGuard<'_, Vec<Holding>>> {
        self.holdings
            .read()
            .map_err(|_| Error::Unexpected("holdings lock poisoned".to_string()))
    }

    fn snapshot(&self) -> Result<Vec<Holding>> {
        Ok(self.read_holdings()?.clone())
    }

    fn find_in<'a>(holdings: &'a mut [Holding], holding_id: &str) -> Result<&'a mut Holding> {
        holdings
            .iter_mut()
            .find(|h| h.id == holding_id)
            .ok_or_else(|| Error::HoldingNotFound(holding_id.to_string()))
    }

    /// Persists `next` and only then makes it the in-memory collection.
    async fn commit(&self, next: Vec<Holding>) -> Result<()> {
        let payload = encode_record(&next)?;
        if let Err(e) = self
            .repository
            .set_record(&self.config.storage_key, &payload)
            .await
        {
            error!(
                "Failed to persist holdings under '{}': {}",
                self.config.storage_key, e
            );
            return Err(e);
        }

        let mut guard = self
            .holdings
            .write()
            .map_err(|_| Error::Unexpected("holdings lock poisoned".to_string()))?;
        *guard = next;
        Ok(())
    }
}

#[async_trait]
impl HoldingsServiceTrait for HoldingsService {
    fn list_holdings(&self) -> Result<Vec<Holding>> {
        self.snapshot()
    }

    fn get_holding(&self, holding_id: &str) -> Result<Option<Holding>> {
        Ok(self
            .read_holdings()?
            .iter()
            .find(|h| h.id == holding_id)
            .cloned())
    }

    async fn add_holding(&self, new_holding: NewHolding) -> Result<Holding> {
        let validated = validate_new_holding(&new_holding, today_local())?;

        let _write = self.write_lock.lock().await;
        let now = next_timestamp(None);
        let holding = Holding {
            id: Uuid::new_v4().to_string(),
            ticker: validated.ticker,
            company_name: validated.company_name,
            quantity: validated.quantity,
            purchase_price: validated.purchase_price,
            current_price: validated
                .current_price
                .unwrap_or(validated.purchase_price),
            date_of_purchase: validated.date_of_purchase,
            created_at: now,
            updated_at: now,
        };

        let mut next = self.snapshot()?;
        next.push(holding.clone());
        self.commit(next).await?;

        debug!("Added holding {} ({})", holding.id, holding.ticker);
        Ok(holding)
    }

    async fn edit_holding(&self, holding_id: &str, update: HoldingUpdate) -> Result<Holding> {
        let _write = self.write_lock.lock().await;
        let mut next = self.snapshot()?;
        let target = Self::find_in(&mut next, holding_id)?;

        let validated = validate_new_holding(&update.merged_with(target), today_local())?;
        target.ticker = validated.ticker;
        target.company_name = validated.company_name;
        target.quantity = validated.quantity;
        target.purchase_price = validated.purchase_price;
        target.current_price = validated
            .current_price
            .unwrap_or(validated.purchase_price);
        target.date_of_purchase = validated.date_of_purchase;
        target.updated_at = next_timestamp(Some(target.updated_at));
        let edited = target.clone();

        self.commit(next).await?;

        debug!("Edited holding {}", holding_id);
        Ok(edited)
    }

    async fn delete_holding(&self, holding_id: &str) -> Result<bool> {
        let _write = self.write_lock.lock().await;
        let mut next = self.snapshot()?;
        let before = next.len();
        next.retain(|h| h.id != holding_id);

        if next.len() == before {
            debug!("Delete of unknown holding {} ignored", holding_id);
            return Ok(false);
        }

        self.commit(next).await?;
        debug!("Deleted holding {}", holding_id);
        Ok(true)
    }

    async fn update_current_price(&self, holding_id: &str, new_price: Decimal) -> Result<Holding> {
        let _write = self.write_lock.lock().await;
        let mut next = self.snapshot()?;
        let target = Self::find_in(&mut next, holding_id)?;

        target.current_price = validate_current_price(new_price)?;
        target.updated_at = next_timestamp(Some(target.updated_at));
        let updated = target.clone();

        self.commit(next).await?;

        debug!("Updated current price of {} to {}", holding_id, new_price);
        Ok(updated)
    }

    async fn clear_holdings(&self) -> Result<()> {
        let _write = self.write_lock.lock().await;
        self.commit(Vec::new()).await?;
        info!("Cleared all holdings");
        Ok(())
    }

    fn get_portfolio_summary(&self) -> Result<PortfolioSummary> {
        Ok(calculate_portfolio_summary(&self.read_holdings()?))
    }

    fn get_holding_metrics(&self, holding_id: &str) -> Result<HoldingMetrics> {
        self.read_holdings()?
            .iter()
            .find(|h| h.id == holding_id)
            .map(calculate_holding_metrics)
            .ok_or_else(|| Error::HoldingNotFound(holding_id.to_string()))
    }

    fn query_holdings(&self, query: &HoldingsQuery) -> Result<Vec<HoldingView>> {
        Ok(query_holdings(&self.read_holdings()?, query, today_local()))
    }
}
