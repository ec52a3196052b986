pub mod holdings;
pub mod record;
pub mod valuation;

pub use holdings::*;
pub use record::*;
pub use valuation::*;
