use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::portfolio::holdings::Holding;
use crate::portfolio::valuation::{HoldingMetrics, PortfolioSummary};

/// Market value, cost basis and gain/loss for one holding.
pub fn calculate_holding_metrics(holding: &Holding) -> HoldingMetrics {
    let quantity = Decimal::from(holding.quantity);
    let total_value = quantity * holding.current_price;
    let total_cost = quantity * holding.purchase_price;
    let gain_loss = total_value - total_cost;

    HoldingMetrics {
        total_value,
        total_cost,
        gain_loss,
        gain_loss_percentage: gain_loss_percentage(gain_loss, total_cost),
    }
}

/// Aggregates the whole collection.
///
/// Products are summed at full precision; nothing is rounded here. An empty
/// collection yields all zeros.
pub fn calculate_portfolio_summary(holdings: &[Holding]) -> PortfolioSummary {
    if holdings.is_empty() {
        return PortfolioSummary::empty();
    }

    let mut total_value = Decimal::ZERO;
    let mut total_cost = Decimal::ZERO;

    for holding in holdings {
        let quantity = Decimal::from(holding.quantity);
        total_value += quantity * holding.current_price;
        total_cost += quantity * holding.purchase_price;
    }

    let total_gain_loss = total_value - total_cost;
    debug!(
        "Summarised {} holdings: value={}, cost={}",
        holdings.len(),
        total_value,
        total_cost
    );

    PortfolioSummary {
        total_stocks: holdings.len(),
        total_value,
        total_cost,
        total_gain_loss,
        total_gain_loss_percentage: gain_loss_percentage(total_gain_loss, total_cost),
    }
}

fn gain_loss_percentage(gain_loss: Decimal, cost: Decimal) -> Decimal {
    if cost > Decimal::ZERO {
        gain_loss / cost * dec!(100)
    } else {
        Decimal::ZERO
    }
}
