mod dto;
mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::main_lib::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/holdings",
            get(handlers::list_holdings)
                .post(handlers::create_holding)
                .delete(handlers::clear_holdings),
        )
        .route(
            "/holdings/{id}",
            get(handlers::get_holding)
                .put(handlers::update_holding)
                .delete(handlers::delete_holding),
        )
        .route("/holdings/{id}/price", put(handlers::update_current_price))
        .route("/holdings/{id}/metrics", get(handlers::get_holding_metrics))
}
