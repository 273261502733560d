//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Formats a decimal amount as dollars.
///
/// Usage in templates: `{{ product.price|money }}`
#[askama::filter_fn]
pub fn money(value: &Decimal, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("${:.2}", value.round_dp(2)))
}

/// Formats a backend timestamp for display.
///
/// Usage in templates: `{{ order.order_date|date }}`
#[askama::filter_fn]
pub fn date(value: &NaiveDateTime, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(value.format("%b %d, %Y %H:%M").to_string())
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}
