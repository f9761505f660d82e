use crate::calc::currency::format_currency;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Rounds `cost` up to `precision` decimal places.
pub fn apply_precision(cost: f64, precision: u32) -> f64 {
    let exponent = 10f64.powi(precision as i32);
    (cost * exponent).ceil() / exponent
}

/// Formats a price: whole amounts drop their decimals, fractional amounts use
/// the currency's default precision. When `precision` is given the cost is
/// first rounded up to that many places.
pub fn format_price(cost: f64, currency: &str, precision: Option<u32>) -> Result<String, PricingError> {
    let cost = match precision {
        Some(p) => apply_precision(cost, p),
        None => cost,
    };
    let decimals = if cost % 1.0 > 0.0 { None } else { Some(0) };
    format_currency(cost, currency, decimals)
}

pub fn annual_price(cost: f64, currency: &str) -> Result<String, PricingError> {
    format_price(cost, currency, None)
}

/// The annual `cost` spread over twelve months.
pub fn monthly_price(cost: f64, currency: &str) -> Result<String, PricingError> {
    format_price(cost / 12.0, currency, None)
}
