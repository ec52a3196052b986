use std::sync::Arc;

use crate::config::Config;
use stockfolio_core::portfolio::holdings::{HoldingsService, HoldingsServiceTrait};
use stockfolio_core::portfolio::record::PortfolioRecordRepositoryTrait;
use stockfolio_storage_sqlite::{db, PortfolioRecordRepository};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub holdings_service: Arc<dyn HoldingsServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("SF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer(db::get_connection(&pool)?);

    let repository: Arc<dyn PortfolioRecordRepositoryTrait> =
        Arc::new(PortfolioRecordRepository::new(pool, writer));
    let holdings_service = HoldingsService::load(repository, config.store_config())?;

    Ok(Arc::new(AppState {
        holdings_service: Arc::new(holdings_service),
    }))
}
