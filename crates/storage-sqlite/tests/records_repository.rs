//! Integration tests for the SQLite record repository.

use rust_decimal_macros::dec;
use std::sync::Arc;
use stockfolio_core::portfolio::holdings::{HoldingsService, HoldingsServiceTrait, NewHolding};
use stockfolio_core::portfolio::record::{PortfolioRecordRepositoryTrait, StoreConfig};
use stockfolio_storage_sqlite::{
    create_pool, get_connection, init, run_migrations, spawn_writer, PortfolioRecordRepository,
};
use tempfile::TempDir;

fn open_repository(dir: &TempDir) -> PortfolioRecordRepository {
    let db_path = dir.path().join("app.db");
    let db_path = init(db_path.to_str().unwrap()).unwrap();
    let pool = create_pool(&db_path).unwrap();
    run_migrations(&pool).unwrap();
    let writer = spawn_writer(get_connection(&pool).unwrap());
    PortfolioRecordRepository::new(pool, writer)
}

fn apple() -> NewHolding {
    NewHolding {
        ticker: "aapl".to_string(),
        company_name: "Apple Inc.".to_string(),
        quantity: dec!(10),
        purchase_price: dec!(150),
        current_price: Some(dec!(175.25)),
        date_of_purchase: "2024-01-02".to_string(),
    }
}

#[tokio::test]
async fn test_missing_key_reads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let repo = open_repository(&dir);

    assert_eq!(repo.get_record("stock-portfolio-storage").unwrap(), None);
}

#[tokio::test]
async fn test_set_record_overwrites_previous_value() {
    let dir = tempfile::tempdir().unwrap();
    let repo = open_repository(&dir);

    repo.set_record("k", "first").await.unwrap();
    repo.set_record("k", "second").await.unwrap();
    repo.set_record("other", "untouched").await.unwrap();

    assert_eq!(repo.get_record("k").unwrap().as_deref(), Some("second"));
    assert_eq!(repo.get_record("other").unwrap().as_deref(), Some("untouched"));
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = init(dir.path().join("app.db").to_str().unwrap()).unwrap();
    let pool = create_pool(&db_path).unwrap();

    run_migrations(&pool).unwrap();
    run_migrations(&pool).unwrap();
}

#[tokio::test]
async fn test_holdings_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let added = {
        let repo: Arc<dyn PortfolioRecordRepositoryTrait> = Arc::new(open_repository(&dir));
        let service = HoldingsService::load(repo, StoreConfig::default()).unwrap();
        let added = service.add_holding(apple()).await.unwrap();
        service
            .update_current_price(&added.id, dec!(180))
            .await
            .unwrap()
    };

    let repo: Arc<dyn PortfolioRecordRepositoryTrait> = Arc::new(open_repository(&dir));
    let service = HoldingsService::load(repo, StoreConfig::default()).unwrap();
    let holdings = service.list_holdings().unwrap();

    assert_eq!(holdings, vec![added]);
    assert_eq!(holdings[0].ticker, "AAPL");
    assert_eq!(holdings[0].current_price, dec!(180));
}

#[tokio::test]
async fn test_cleared_portfolio_persists_as_empty_record() {
    let dir = tempfile::tempdir().unwrap();
    let repo = Arc::new(open_repository(&dir));

    let service = HoldingsService::load(repo.clone(), StoreConfig::default()).unwrap();
    service.add_holding(apple()).await.unwrap();
    service.clear_holdings().await.unwrap();

    let raw = repo.get_record("stock-portfolio-storage").unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["version"], 1);
    assert_eq!(json["stocks"].as_array().unwrap().len(), 0);
}
