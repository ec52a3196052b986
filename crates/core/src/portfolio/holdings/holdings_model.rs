use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::valuation::HoldingMetrics;
use crate::utils::time_utils::format_calendar_date;

/// One recorded stock position.
///
/// Every `Holding` handed out by the store has an upper-cased ticker, a
/// strictly positive quantity and prices, and a purchase date that was not in
/// the future when it was last validated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub ticker: String,
    pub company_name: String,
    pub quantity: i64,
    pub purchase_price: Decimal,
    pub current_price: Decimal,
    pub date_of_purchase: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for recording a new holding (the add form).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewHolding {
    pub ticker: String,
    pub company_name: String,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    #[serde(default)]
    pub current_price: Option<Decimal>,
    pub date_of_purchase: String,
}

/// Partial update for an existing holding. `None` keeps the stored value.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingUpdate {
    pub ticker: Option<String>,
    pub company_name: Option<String>,
    pub quantity: Option<Decimal>,
    pub purchase_price: Option<Decimal>,
    pub current_price: Option<Decimal>,
    pub date_of_purchase: Option<String>,
}

impl HoldingUpdate {
    pub fn is_empty(&self) -> bool {
        self == &HoldingUpdate::default()
    }

    /// Merges this patch over `holding`, producing the full form to re-validate.
    pub fn merged_with(&self, holding: &Holding) -> NewHolding {
        NewHolding {
            ticker: self
                .ticker
                .clone()
                .unwrap_or_else(|| holding.ticker.clone()),
            company_name: self
                .company_name
                .clone()
                .unwrap_or_else(|| holding.company_name.clone()),
            quantity: self
                .quantity
                .unwrap_or_else(|| Decimal::from(holding.quantity)),
            purchase_price: self.purchase_price.unwrap_or(holding.purchase_price),
            current_price: Some(self.current_price.unwrap_or(holding.current_price)),
            date_of_purchase: self
                .date_of_purchase
                .clone()
                .unwrap_or_else(|| format_calendar_date(holding.date_of_purchase)),
        }
    }
}

/// A holding together with its derived per-row metrics.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingView {
    #[serde(flatten)]
    pub holding: Holding,
    pub metrics: HoldingMetrics,
}
