use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use stockfolio_core::{
    errors::Error as CoreError,
    portfolio::{
        holdings::{Holding, HoldingUpdate, HoldingView, HoldingsQuery, NewHolding},
        valuation::HoldingMetrics,
    },
};

use crate::{
    api::{ApiJson, ApiQuery, DisplayQuery},
    error::ApiResult,
    main_lib::AppState,
};

use super::dto::PriceUpdateBody;

pub async fn list_holdings(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<HoldingsQuery>,
) -> ApiResult<Json<Vec<HoldingView>>> {
    let views = state.holdings_service.query_holdings(&query)?;
    Ok(Json(views))
}

pub async fn create_holding(
    State(state): State<Arc<AppState>>,
    ApiJson(new_holding): ApiJson<NewHolding>,
) -> ApiResult<(StatusCode, Json<Holding>)> {
    let holding = state.holdings_service.add_holding(new_holding).await?;
    Ok((StatusCode::CREATED, Json(holding)))
}

pub async fn clear_holdings(State(state): State<Arc<AppState>>) -> ApiResult<StatusCode> {
    state.holdings_service.clear_holdings().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_holding(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Holding>> {
    let holding = state
        .holdings_service
        .get_holding(&id)?
        .ok_or(CoreError::HoldingNotFound(id))?;
    Ok(Json(holding))
}

pub async fn update_holding(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    ApiJson(update): ApiJson<HoldingUpdate>,
) -> ApiResult<Json<Holding>> {
    let holding = state.holdings_service.edit_holding(&id, update).await?;
    Ok(Json(holding))
}

pub async fn delete_holding(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let _ = state.holdings_service.delete_holding(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn update_current_price(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<PriceUpdateBody>,
) -> ApiResult<Json<Holding>> {
    let holding = state
        .holdings_service
        .update_current_price(&id, body.current_price)
        .await?;
    Ok(Json(holding))
}

pub async fn get_holding_metrics(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    ApiQuery(display): ApiQuery<DisplayQuery>,
) -> ApiResult<Json<HoldingMetrics>> {
    let metrics = state.holdings_service.get_holding_metrics(&id)?;
    if display.rounded {
        return Ok(Json(metrics.rounded_for_display()));
    }
    Ok(Json(metrics))
}
