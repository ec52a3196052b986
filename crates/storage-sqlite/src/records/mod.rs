//! Key-value record storage backing the holdings store.

mod model;
mod repository;

pub use model::AppRecordDB;
pub use repository::PortfolioRecordRepository;
