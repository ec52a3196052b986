//! Portfolio valuation domain models.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Derived figures for a single holding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingMetrics {
    /// Market value: quantity x current price
    pub total_value: Decimal,
    /// Cost basis: quantity x purchase price
    pub total_cost: Decimal,
    pub gain_loss: Decimal,
    pub gain_loss_percentage: Decimal,
}

impl HoldingMetrics {
    pub fn performance(&self) -> PerformanceClass {
        PerformanceClass::of(self.gain_loss)
    }

    pub fn rounded_for_display(&self) -> Self {
        Self {
            total_value: round_for_display(self.total_value),
            total_cost: round_for_display(self.total_cost),
            gain_loss: round_for_display(self.gain_loss),
            gain_loss_percentage: round_for_display(self.gain_loss_percentage),
        }
    }
}

/// Aggregate figures across the whole collection. Never stored; recomputed per request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_stocks: usize,
    pub total_value: Decimal,
    pub total_cost: Decimal,
    pub total_gain_loss: Decimal,
    pub total_gain_loss_percentage: Decimal,
}

impl PortfolioSummary {
    pub fn empty() -> Self {
        PortfolioSummary {
            total_stocks: 0,
            total_value: Decimal::ZERO,
            total_cost: Decimal::ZERO,
            total_gain_loss: Decimal::ZERO,
            total_gain_loss_percentage: Decimal::ZERO,
        }
    }

    pub fn rounded_for_display(&self) -> Self {
        Self {
            total_stocks: self.total_stocks,
            total_value: round_for_display(self.total_value),
            total_cost: round_for_display(self.total_cost),
            total_gain_loss: round_for_display(self.total_gain_loss),
            total_gain_loss_percentage: round_for_display(self.total_gain_loss_percentage),
        }
    }
}

/// Sign of a holding's gain/loss.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceClass {
    Gainer,
    Loser,
    Neutral,
}

impl PerformanceClass {
    pub fn of(gain_loss: Decimal) -> Self {
        if gain_loss > Decimal::ZERO {
            PerformanceClass::Gainer
        } else if gain_loss < Decimal::ZERO {
            PerformanceClass::Loser
        } else {
            PerformanceClass::Neutral
        }
    }
}

/// Rounds a monetary or percentage figure to display precision, halves away from zero.
pub fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}
