use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Storage key the portfolio record lives under
pub const DEFAULT_STORAGE_KEY: &str = "stock-portfolio-storage";

/// Layout version written into every persisted portfolio record
pub const CURRENT_RECORD_VERSION: u32 = 1;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

pub const TICKER_MAX_LEN: usize = 10;

pub const COMPANY_NAME_MAX_LEN: usize = 100;

/// Smallest accepted per-share price
pub const MIN_PRICE: Decimal = dec!(0.01);

/// Upper bound on per-share prices, keeps aggregate products inside `Decimal` range
pub const MAX_PRICE: Decimal = dec!(1000000000);

/// Upper bound on share counts, keeps aggregate products inside `Decimal` range
pub const MAX_QUANTITY: i64 = 1_000_000_000;

/// Date format used for purchase dates on the wire and in storage
pub const DATE_FORMAT: &str = "%Y-%m-%d";
