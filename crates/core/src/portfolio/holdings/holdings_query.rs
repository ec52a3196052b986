//! Filtering, searching and sorting of holdings for table display.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::portfolio::holdings::{Holding, HoldingView};
use crate::portfolio::valuation::{calculate_holding_metrics, PerformanceClass};
use crate::utils::time_utils::days_between;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceFilter {
    #[default]
    All,
    Gainers,
    Losers,
    Neutral,
}

impl PerformanceFilter {
    fn accepts(self, class: PerformanceClass) -> bool {
        match self {
            PerformanceFilter::All => true,
            PerformanceFilter::Gainers => class == PerformanceClass::Gainer,
            PerformanceFilter::Losers => class == PerformanceClass::Loser,
            PerformanceFilter::Neutral => class == PerformanceClass::Neutral,
        }
    }
}

/// How recently a holding must have been purchased.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseWindow {
    #[default]
    All,
    Week,
    Month,
    Quarter,
    Year,
}

impl PurchaseWindow {
    pub fn max_days(self) -> Option<i64> {
        match self {
            PurchaseWindow::All => None,
            PurchaseWindow::Week => Some(7),
            PurchaseWindow::Month => Some(30),
            PurchaseWindow::Quarter => Some(90),
            PurchaseWindow::Year => Some(365),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HoldingSortKey {
    Ticker,
    CompanyName,
    Quantity,
    PurchasePrice,
    CurrentPrice,
    TotalValue,
    GainLoss,
    GainLossPercentage,
    DateOfPurchase,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HoldingsQuery {
    pub performance: PerformanceFilter,
    pub purchased_within: PurchaseWindow,
    pub search: Option<String>,
    pub sort_by: Option<HoldingSortKey>,
    pub sort_order: SortOrder,
}

/// Applies `query` to `holdings`, attaching per-holding metrics to each result.
///
/// Without a sort key the insertion order is kept; sorting is stable so ties
/// keep it too.
pub fn query_holdings(
    holdings: &[Holding],
    query: &HoldingsQuery,
    today: NaiveDate,
) -> Vec<HoldingView> {
    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);
    let max_days = query.purchased_within.max_days();

    let mut views: Vec<HoldingView> = holdings
        .iter()
        .filter(|h| match max_days {
            Some(limit) => days_between(h.date_of_purchase, today) <= limit,
            None => true,
        })
        .filter(|h| match &needle {
            Some(n) => {
                h.ticker.to_lowercase().contains(n) || h.company_name.to_lowercase().contains(n)
            }
            None => true,
        })
        .map(|h| HoldingView {
            holding: h.clone(),
            metrics: calculate_holding_metrics(h),
        })
        .filter(|v| query.performance.accepts(v.metrics.performance()))
        .collect();

    if let Some(key) = query.sort_by {
        views.sort_by(|a, b| {
            let ordering = compare_by(key, a, b);
            match query.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }

    views
}

fn compare_by(key: HoldingSortKey, a: &HoldingView, b: &HoldingView) -> Ordering {
    match key {
        HoldingSortKey::Ticker => a.holding.ticker.cmp(&b.holding.ticker),
        HoldingSortKey::CompanyName => a
            .holding
            .company_name
            .to_lowercase()
            .cmp(&b.holding.company_name.to_lowercase()),
        HoldingSortKey::Quantity => a.holding.quantity.cmp(&b.holding.quantity),
        HoldingSortKey::PurchasePrice => a.holding.purchase_price.cmp(&b.holding.purchase_price),
        HoldingSortKey::CurrentPrice => a.holding.current_price.cmp(&b.holding.current_price),
        HoldingSortKey::TotalValue => a.metrics.total_value.cmp(&b.metrics.total_value),
        HoldingSortKey::GainLoss => a.metrics.gain_loss.cmp(&b.metrics.gain_loss),
        HoldingSortKey::GainLossPercentage => a
            .metrics
            .gain_loss_percentage
            .cmp(&b.metrics.gain_loss_percentage),
        HoldingSortKey::DateOfPurchase => a
            .holding
            .date_of_purchase
            .cmp(&b.holding.date_of_purchase),
    }
}
