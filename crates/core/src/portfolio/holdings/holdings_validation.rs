//! Input contract applied to every add and edit before the store mutates anything.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::constants::{
    COMPANY_NAME_MAX_LEN, MAX_PRICE, MAX_QUANTITY, MIN_PRICE, TICKER_MAX_LEN,
};
use crate::errors::{FieldErrors, ValidationError};
use crate::portfolio::holdings::{Holding, NewHolding};
use crate::utils::time_utils::parse_calendar_date;

pub const FIELD_TICKER: &str = "ticker";
pub const FIELD_COMPANY_NAME: &str = "companyName";
pub const FIELD_QUANTITY: &str = "quantity";
pub const FIELD_PURCHASE_PRICE: &str = "purchasePrice";
pub const FIELD_CURRENT_PRICE: &str = "currentPrice";
pub const FIELD_DATE_OF_PURCHASE: &str = "dateOfPurchase";

/// Normalised output of a successful validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedHolding {
    pub ticker: String,
    pub company_name: String,
    pub quantity: i64,
    pub purchase_price: Decimal,
    pub current_price: Option<Decimal>,
    pub date_of_purchase: NaiveDate,
}

/// Checks `input` against every field rule and reports all failing fields at once.
///
/// The ticker is upper-cased on success; `today` is the last valid purchase date.
pub fn validate_new_holding(
    input: &NewHolding,
    today: NaiveDate,
) -> Result<ValidatedHolding, ValidationError> {
    let mut errors = FieldErrors::new();

    let ticker = check_ticker(&input.ticker, &mut errors);
    check_company_name(&input.company_name, &mut errors);
    let quantity = check_quantity(input.quantity, &mut errors);
    check_price(
        FIELD_PURCHASE_PRICE,
        "Purchase price",
        input.purchase_price,
        &mut errors,
    );
    if let Some(current) = input.current_price {
        check_price(FIELD_CURRENT_PRICE, "Current price", current, &mut errors);
    }
    let date_of_purchase = check_purchase_date(&input.date_of_purchase, today, &mut errors);

    errors.into_result()?;

    match (quantity, date_of_purchase) {
        (Some(quantity), Some(date_of_purchase)) => Ok(ValidatedHolding {
            ticker,
            company_name: input.company_name.clone(),
            quantity,
            purchase_price: input.purchase_price,
            current_price: input.current_price,
            date_of_purchase,
        }),
        _ => Err(ValidationError::InvalidInput(
            "holding passed validation without a quantity or purchase date".to_string(),
        )),
    }
}

/// Validates a replacement current price on its own.
pub fn validate_current_price(price: Decimal) -> Result<Decimal, ValidationError> {
    let mut errors = FieldErrors::new();
    check_price(FIELD_CURRENT_PRICE, "Current price", price, &mut errors);
    errors.into_result().map(|_| price)
}

/// Re-checks a holding read back from storage against the same field bounds.
///
/// Stored tickers must already be upper-case. The purchase date is not
/// compared with today, since the clock may have moved since it was saved.
pub fn validate_stored_holding(holding: &Holding) -> Result<(), ValidationError> {
    let mut errors = FieldErrors::new();

    if check_ticker(&holding.ticker, &mut errors) != holding.ticker {
        errors.add(FIELD_TICKER, "Ticker must be upper-case");
    }
    check_company_name(&holding.company_name, &mut errors);
    check_quantity(Decimal::from(holding.quantity), &mut errors);
    check_price(
        FIELD_PURCHASE_PRICE,
        "Purchase price",
        holding.purchase_price,
        &mut errors,
    );
    check_price(
        FIELD_CURRENT_PRICE,
        "Current price",
        holding.current_price,
        &mut errors,
    );

    errors.into_result()
}

fn check_ticker(raw: &str, errors: &mut FieldErrors) -> String {
    if raw.is_empty() {
        errors.add(FIELD_TICKER, "Ticker is required");
    } else if raw.chars().count() > TICKER_MAX_LEN {
        errors.add(
            FIELD_TICKER,
            format!("Ticker must be {} characters or less", TICKER_MAX_LEN),
        );
    } else if !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
        errors.add(FIELD_TICKER, "Ticker must contain only letters and numbers");
    }
    raw.to_ascii_uppercase()
}

fn check_company_name(raw: &str, errors: &mut FieldErrors) {
    if raw.trim().is_empty() {
        errors.add(FIELD_COMPANY_NAME, "Company name is required");
    } else if raw.chars().count() > COMPANY_NAME_MAX_LEN {
        errors.add(
            FIELD_COMPANY_NAME,
            format!(
                "Company name must be {} characters or less",
                COMPANY_NAME_MAX_LEN
            ),
        );
    }
}

fn check_quantity(quantity: Decimal, errors: &mut FieldErrors) -> Option<i64> {
    if !quantity.fract().is_zero() {
        errors.add(FIELD_QUANTITY, "Quantity must be a whole number");
        return None;
    }
    if quantity <= Decimal::ZERO {
        errors.add(FIELD_QUANTITY, "Quantity must be greater than 0");
        return None;
    }
    match quantity.to_i64() {
        Some(q) if q <= MAX_QUANTITY => Some(q),
        _ => {
            errors.add(
                FIELD_QUANTITY,
                format!("Quantity must be at most {}", MAX_QUANTITY),
            );
            None
        }
    }
}

fn check_price(field: &'static str, label: &str, price: Decimal, errors: &mut FieldErrors) {
    if price <= Decimal::ZERO {
        errors.add(field, format!("{} must be greater than 0", label));
    } else if price < MIN_PRICE {
        errors.add(field, format!("{} must be at least ${}", label, MIN_PRICE));
    } else if price > MAX_PRICE {
        errors.add(field, format!("{} must be at most ${}", label, MAX_PRICE));
    }
}

fn check_purchase_date(
    raw: &str,
    today: NaiveDate,
    errors: &mut FieldErrors,
) -> Option<NaiveDate> {
    if raw.trim().is_empty() {
        errors.add(FIELD_DATE_OF_PURCHASE, "Date of purchase is required");
        return None;
    }
    match parse_calendar_date(raw) {
        None => {
            errors.add(
                FIELD_DATE_OF_PURCHASE,
                "Date of purchase must be a valid date (YYYY-MM-DD)",
            );
            None
        }
        Some(date) if date > today => {
            errors.add(
                FIELD_DATE_OF_PURCHASE,
                "Date of purchase cannot be in the future",
            );
            None
        }
        Some(date) => Some(date),
    }
}
