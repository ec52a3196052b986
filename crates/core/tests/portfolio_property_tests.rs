//! Property-based tests for valuation and input validation.
//!
//! These tests verify that universal properties hold across generated holdings
//! and form inputs, using the `proptest` crate for random test case generation.

use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use stockfolio_core::errors::ValidationError;
use stockfolio_core::portfolio::holdings::{validate_new_holding, Holding, NewHolding};
use stockfolio_core::portfolio::valuation::{
    calculate_holding_metrics, calculate_portfolio_summary, PerformanceClass,
};

// =============================================================================
// Generators
// =============================================================================

/// Price in whole cents between $0.01 and $100,000.00.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (1i64..=10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_holding() -> impl Strategy<Value = Holding> {
    ("[A-Z0-9]{1,10}", 1i64..=100_000, arb_price(), arb_price()).prop_map(
        |(ticker, quantity, purchase_price, current_price)| {
            let now = Utc::now();
            Holding {
                id: format!("id-{}", ticker),
                company_name: format!("{} Holdings", ticker),
                ticker,
                quantity,
                purchase_price,
                current_price,
                date_of_purchase: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                created_at: now,
                updated_at: now,
            }
        },
    )
}

fn arb_holdings(max_count: usize) -> impl Strategy<Value = Vec<Holding>> {
    proptest::collection::vec(arb_holding(), 0..=max_count)
}

fn form(ticker: String) -> NewHolding {
    NewHolding {
        ticker,
        company_name: "Example Corp.".to_string(),
        quantity: Decimal::from(3),
        purchase_price: Decimal::new(1234, 2),
        current_price: None,
        date_of_purchase: "2024-01-01".to_string(),
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Aggregate totals equal the sum of the per-holding figures.
    #[test]
    fn prop_summary_matches_per_holding_metrics(holdings in arb_holdings(40)) {
        let summary = calculate_portfolio_summary(&holdings);

        let (value, cost) = holdings.iter().map(calculate_holding_metrics).fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(v, c), m| (v + m.total_value, c + m.total_cost),
        );

        prop_assert_eq!(summary.total_stocks, holdings.len());
        prop_assert_eq!(summary.total_value, value);
        prop_assert_eq!(summary.total_cost, cost);
        prop_assert_eq!(summary.total_gain_loss, value - cost);
    }

    /// The percentage has the same sign as the gain/loss and is zero for an empty portfolio.
    #[test]
    fn prop_percentage_sign_follows_gain_loss(holdings in arb_holdings(20)) {
        let summary = calculate_portfolio_summary(&holdings);

        prop_assert_eq!(
            PerformanceClass::of(summary.total_gain_loss_percentage),
            PerformanceClass::of(summary.total_gain_loss)
        );
        if holdings.is_empty() {
            prop_assert_eq!(summary.total_gain_loss_percentage, Decimal::ZERO);
        }
    }

    /// Collection order does not change the summary.
    #[test]
    fn prop_summary_is_order_independent(holdings in arb_holdings(20)) {
        let mut reversed = holdings.clone();
        reversed.reverse();

        prop_assert_eq!(
            calculate_portfolio_summary(&holdings),
            calculate_portfolio_summary(&reversed)
        );
    }

    /// Any alphanumeric ticker up to ten characters is accepted and upper-cased.
    #[test]
    fn prop_alphanumeric_tickers_normalize(ticker in "[a-zA-Z0-9]{1,10}") {
        let validated = validate_new_holding(&form(ticker.clone()), today());

        prop_assert!(validated.is_ok());
        prop_assert_eq!(validated.unwrap().ticker, ticker.to_ascii_uppercase());
    }

    /// A ticker containing any non-alphanumeric character is rejected on the ticker field.
    #[test]
    fn prop_tickers_with_symbols_are_rejected(
        prefix in "[A-Z]{0,4}",
        symbol in "[^a-zA-Z0-9]",
        suffix in "[A-Z]{0,4}",
    ) {
        let ticker = format!("{}{}{}", prefix, symbol, suffix);

        match validate_new_holding(&form(ticker), today()) {
            Err(ValidationError::Fields(errors)) => {
                prop_assert!(errors.contains("ticker"));
                prop_assert_eq!(errors.len(), 1);
            }
            other => prop_assert!(false, "expected a ticker error, got {:?}", other),
        }
    }
}
