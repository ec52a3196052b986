use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::portfolio::holdings::{Holding, HoldingUpdate, HoldingView, HoldingsQuery, NewHolding};
use crate::portfolio::valuation::{HoldingMetrics, PortfolioSummary};

/// Trait for the holdings store.
///
/// Mutations are applied one at a time and return only after the collection
/// has been persisted. A failed mutation leaves the collection unchanged.
#[async_trait]
pub trait HoldingsServiceTrait: Send + Sync {
    /// All holdings in insertion order.
    fn list_holdings(&self) -> Result<Vec<Holding>>;

    fn get_holding(&self, holding_id: &str) -> Result<Option<Holding>>;

    async fn add_holding(&self, new_holding: NewHolding) -> Result<Holding>;

    /// Applies the supplied fields of `update` and re-validates the merged holding.
    async fn edit_holding(&self, holding_id: &str, update: HoldingUpdate) -> Result<Holding>;

    /// Removes the holding if present. Returns whether anything was removed.
    async fn delete_holding(&self, holding_id: &str) -> Result<bool>;

    async fn update_current_price(&self, holding_id: &str, new_price: Decimal) -> Result<Holding>;

    async fn clear_holdings(&self) -> Result<()>;

    fn get_portfolio_summary(&self) -> Result<PortfolioSummary>;

    fn get_holding_metrics(&self, holding_id: &str) -> Result<HoldingMetrics>;

    fn query_holdings(&self, query: &HoldingsQuery) -> Result<Vec<HoldingView>>;
}
