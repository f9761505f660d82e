use crate::calc::pricing::PricingError;

/// Display conventions for one currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrencyDefaults {
    pub symbol: &'static str,
    pub grouping: &'static str,
    pub decimal: &'static str,
    pub precision: usize,
}

const fn cur(
    symbol: &'static str,
    grouping: &'static str,
    decimal: &'static str,
    precision: usize,
) -> CurrencyDefaults {
    CurrencyDefaults {
        symbol,
        grouping,
        decimal,
        precision,
    }
}

/// Looks up the display conventions for an ISO 4217 code (case-insensitive).
pub fn currency_defaults(code: &str) -> Option<CurrencyDefaults> {
    let c = match code.to_ascii_uppercase().as_str() {
        "USD" => cur("$", ",", ".", 2),
        "AUD" => cur("A$", ",", ".", 2),
        "BRL" => cur("R$", ".", ",", 2),
        "CAD" => cur("C$", ",", ".", 2),
        "CHF" => cur("CHF ", "'", ".", 2),
        "CZK" => cur("Kč", " ", ",", 2),
        "DKK" => cur("kr.", ".", ",", 2),
        "EUR" => cur("€", ".", ",", 2),
        "GBP" => cur("£", ",", ".", 2),
        "HKD" => cur("HK$", ",", ".", 2),
        "HUF" => cur("Ft", ".", ",", 0),
        "IDR" => cur("Rp", ".", ",", 0),
        "ILS" => cur("₪", ",", ".", 2),
        "INR" => cur("₹", ",", ".", 2),
        "JPY" => cur("¥", ",", ".", 0),
        "MXN" => cur("MX$", ",", ".", 2),
        "NOK" => cur("kr", " ", ",", 2),
        "NZD" => cur("NZ$", ",", ".", 2),
        "PHP" => cur("₱", ",", ".", 2),
        "PLN" => cur("zł", " ", ",", 2),
        "RUB" => cur("₽", " ", ",", 2),
        "SEK" => cur("kr", " ", ",", 2),
        "SGD" => cur("S$", ",", ".", 2),
        "THB" => cur("฿", ",", ".", 2),
        "TRY" => cur("TL", ".", ",", 2),
        "TWD" => cur("NT$", ",", ".", 2),
        _ => return None,
    };
    Some(c)
}

/// Formats `amount` with the currency's symbol and separators. `precision`
/// overrides the currency's default number of decimals.
pub fn format_currency(
    amount: f64,
    code: &str,
    precision: Option<usize>,
) -> Result<String, PricingError> {
    let defaults =
        currency_defaults(code).ok_or_else(|| PricingError::UnknownCurrency(code.to_string()))?;
    let decimals = precision.unwrap_or(defaults.precision);
    let sign = if amount < 0.0 { "-" } else { "" };
    let body = number_format(amount.abs(), decimals, defaults.decimal, defaults.grouping);
    Ok(format!("{sign}{}{body}", defaults.symbol))
}

/// Fixed-point rendering with thousands grouping.
pub(crate) fn number_format(value: f64, decimals: usize, decimal: &str, grouping: &str) -> String {
    let fixed = format!("{value:.decimals$}");
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(grouping);
        }
        grouped.push(*ch);
    }

    match frac_part {
        Some(f) => format!("{grouped}{decimal}{f}"),
        None => grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_two_decimals() {
        assert_eq!(format_currency(4.5, "USD", None).unwrap(), "$4.50");
    }

    #[test]
    fn test_usd_zero_precision() {
        assert_eq!(format_currency(72.0, "USD", Some(0)).unwrap(), "$72");
    }

    #[test]
    fn test_grouping_thousands() {
        assert_eq!(format_currency(1234567.891, "USD", None).unwrap(), "$1,234,567.89");
    }

    #[test]
    fn test_euro_separators() {
        assert_eq!(format_currency(1234.5, "EUR", None).unwrap(), "€1.234,50");
    }

    #[test]
    fn test_jpy_has_no_decimals_by_default() {
        assert_eq!(format_currency(1500.0, "JPY", None).unwrap(), "¥1,500");
    }

    #[test]
    fn test_negative_amount_sign_before_symbol() {
        assert_eq!(format_currency(-3.25, "GBP", None).unwrap(), "-£3.25");
    }

    #[test]
    fn test_lowercase_code_accepted() {
        assert_eq!(format_currency(1.0, "usd", Some(0)).unwrap(), "$1");
    }

    #[test]
    fn test_unknown_currency_is_error() {
        let err = format_currency(1.0, "XXX", None).unwrap_err();
        assert_eq!(err, PricingError::UnknownCurrency("XXX".to_string()));
    }

    #[test]
    fn test_number_format_small_values_ungrouped() {
        assert_eq!(number_format(999.0, 0, ".", ","), "999");
        assert_eq!(number_format(1000.0, 0, ".", ","), "1,000");
    }
}
