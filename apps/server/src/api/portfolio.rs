use std::sync::Arc;

use crate::{
    api::{ApiQuery, DisplayQuery},
    error::ApiResult,
    main_lib::AppState,
};
use axum::{extract::State, routing::get, Json, Router};
use stockfolio_core::portfolio::valuation::PortfolioSummary;

async fn get_portfolio_summary(
    State(state): State<Arc<AppState>>,
    ApiQuery(display): ApiQuery<DisplayQuery>,
) -> ApiResult<Json<PortfolioSummary>> {
    let summary = state.holdings_service.get_portfolio_summary()?;
    if display.rounded {
        return Ok(Json(summary.rounded_for_display()));
    }
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/portfolio/summary", get(get_portfolio_summary))
}
