pub mod holdings_model;
pub mod holdings_query;
pub mod holdings_service;
pub mod holdings_traits;
pub mod holdings_validation;

#[cfg(test)]
mod holdings_query_tests;

pub use holdings_model::*;
pub use holdings_query::{
    query_holdings, HoldingSortKey, HoldingsQuery, PerformanceFilter, PurchaseWindow, SortOrder,
};
pub use holdings_service::HoldingsService;
pub use holdings_traits::HoldingsServiceTrait;
pub use holdings_validation::{
    validate_current_price, validate_new_holding, validate_stored_holding, ValidatedHolding,
};
