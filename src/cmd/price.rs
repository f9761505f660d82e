use crate::calc::pricing::{annual_price, format_price, monthly_price};
use crate::data::AppSettings;
use anyhow::Result;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    Annual,
    Monthly,
}

pub fn run(cost: f64, currency: Option<&str>, period: Option<Period>, precision: Option<u32>) -> Result<()> {
    let settings = AppSettings::load()?;
    let currency = currency.unwrap_or(settings.currency.as_str());
    write_prices(cost, currency, period, precision, &mut std::io::stdout())
}

pub(crate) fn write_prices<W: std::io::Write>(
    cost: f64,
    currency: &str,
    period: Option<Period>,
    precision: Option<u32>,
    out: &mut W,
) -> Result<()> {
    match (period, precision) {
        (_, Some(p)) => {
            let cost = match period {
                Some(Period::Monthly) => cost / 12.0,
                _ => cost,
            };
            writeln!(out, "{}", format_price(cost, currency, Some(p))?)?;
        }
        (Some(Period::Annual), None) => writeln!(out, "{}", annual_price(cost, currency)?)?,
        (Some(Period::Monthly), None) => writeln!(out, "{}", monthly_price(cost, currency)?)?,
        (None, None) => {
            writeln!(out, "  {:<10} {}", "Annual", annual_price(cost, currency)?)?;
            writeln!(out, "  {:<10} {}", "Monthly", monthly_price(cost, currency)?)?;
        }
    }
    Ok(())
}
