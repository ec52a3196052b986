#[cfg(test)]
mod tests {
    use crate::portfolio::holdings::{
        query_holdings, Holding, HoldingSortKey, HoldingsQuery, PerformanceFilter,
        PurchaseWindow, SortOrder,
    };
    use chrono::{Duration, NaiveDate, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    fn holding(
        ticker: &str,
        name: &str,
        quantity: i64,
        purchase: Decimal,
        current: Decimal,
        days_ago: i64,
    ) -> Holding {
        let now = Utc::now();
        Holding {
            id: format!("id-{}", ticker),
            ticker: ticker.to_string(),
            company_name: name.to_string(),
            quantity,
            purchase_price: purchase,
            current_price: current,
            date_of_purchase: today() - Duration::days(days_ago),
            created_at: now,
            updated_at: now,
        }
    }

    fn portfolio() -> Vec<Holding> {
        vec![
            holding("AAPL", "Apple Inc.", 10, dec!(100), dec!(150), 3),
            holding("INTC", "Intel Corporation", 20, dec!(50), dec!(30), 45),
            holding("KO", "Coca-Cola Company", 8, dec!(60), dec!(60), 200),
            holding("MSFT", "Microsoft Corporation", 2, dec!(300), dec!(400), 500),
        ]
    }

    fn tickers(query: &HoldingsQuery) -> Vec<String> {
        query_holdings(&portfolio(), query, today())
            .into_iter()
            .map(|v| v.holding.ticker)
            .collect()
    }

    #[test]
    fn test_default_query_keeps_everything_in_insertion_order() {
        assert_eq!(
            tickers(&HoldingsQuery::default()),
            vec!["AAPL", "INTC", "KO", "MSFT"]
        );
    }

    #[test]
    fn test_performance_filters() {
        let query = |performance| HoldingsQuery {
            performance,
            ..Default::default()
        };
        assert_eq!(tickers(&query(PerformanceFilter::Gainers)), vec!["AAPL", "MSFT"]);
        assert_eq!(tickers(&query(PerformanceFilter::Losers)), vec!["INTC"]);
        assert_eq!(tickers(&query(PerformanceFilter::Neutral)), vec!["KO"]);
    }

    #[test]
    fn test_purchase_window_filters() {
        let query = |purchased_within| HoldingsQuery {
            purchased_within,
            ..Default::default()
        };
        assert_eq!(tickers(&query(PurchaseWindow::Week)), vec!["AAPL"]);
        assert_eq!(tickers(&query(PurchaseWindow::Month)), vec!["AAPL"]);
        assert_eq!(tickers(&query(PurchaseWindow::Quarter)), vec!["AAPL", "INTC"]);
        assert_eq!(
            tickers(&query(PurchaseWindow::Year)),
            vec!["AAPL", "INTC", "KO"]
        );
    }

    #[test]
    fn test_search_matches_ticker_or_company_case_insensitively() {
        let query = |s: &str| HoldingsQuery {
            search: Some(s.to_string()),
            ..Default::default()
        };
        assert_eq!(tickers(&query("corporation")), vec!["INTC", "MSFT"]);
        assert_eq!(tickers(&query("ko")), vec!["KO"]);
        assert_eq!(tickers(&query("  ")).len(), 4);
    }

    #[test]
    fn test_sort_by_gain_loss_descending() {
        let query = HoldingsQuery {
            sort_by: Some(HoldingSortKey::GainLoss),
            sort_order: SortOrder::Desc,
            ..Default::default()
        };
        // AAPL +500, MSFT +200, KO 0, INTC -400
        assert_eq!(tickers(&query), vec!["AAPL", "MSFT", "KO", "INTC"]);
    }

    #[test]
    fn test_sort_by_total_value_and_name() {
        let by_value = HoldingsQuery {
            sort_by: Some(HoldingSortKey::TotalValue),
            ..Default::default()
        };
        // KO 480, INTC 600, MSFT 800, AAPL 1500
        assert_eq!(tickers(&by_value), vec!["KO", "INTC", "MSFT", "AAPL"]);

        let by_name = HoldingsQuery {
            sort_by: Some(HoldingSortKey::CompanyName),
            sort_order: SortOrder::Desc,
            ..Default::default()
        };
        assert_eq!(tickers(&by_name), vec!["MSFT", "INTC", "KO", "AAPL"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut holdings = portfolio();
        for h in holdings.iter_mut() {
            h.quantity = 1;
        }
        let query = HoldingsQuery {
            sort_by: Some(HoldingSortKey::Quantity),
            sort_order: SortOrder::Desc,
            ..Default::default()
        };
        let result: Vec<String> = query_holdings(&holdings, &query, today())
            .into_iter()
            .map(|v| v.holding.ticker)
            .collect();
        assert_eq!(result, vec!["AAPL", "INTC", "KO", "MSFT"]);
    }

    #[test]
    fn test_views_carry_metrics() {
        let views = query_holdings(&portfolio(), &HoldingsQuery::default(), today());
        assert_eq!(views[1].metrics.total_cost, dec!(1000));
        assert_eq!(views[1].metrics.gain_loss_percentage, dec!(-40));
    }

    #[test]
    fn test_query_deserializes_from_camel_case() {
        let query: HoldingsQuery = serde_json::from_str(
            r#"{"performance":"losers","purchasedWithin":"quarter","sortBy":"gainLossPercentage","sortOrder":"desc"}"#,
        )
        .unwrap();
        assert_eq!(query.performance, PerformanceFilter::Losers);
        assert_eq!(query.purchased_within, PurchaseWindow::Quarter);
        assert_eq!(query.sort_by, Some(HoldingSortKey::GainLossPercentage));
        assert_eq!(query.sort_order, SortOrder::Desc);
        assert_eq!(query.search, None);
    }
}
