use crate::calc::links::{gsuite_settings_url, login_url_with_tos_redirect};
use anyhow::Result;

pub fn run(domain: &str, email: Option<&str>) -> Result<()> {
    write_links(domain, email, &mut std::io::stdout())
}

pub(crate) fn write_links<W: std::io::Write>(domain: &str, email: Option<&str>, out: &mut W) -> Result<()> {
    writeln!(out, "Settings: {}", gsuite_settings_url(domain))?;
    if let Some(email) = email {
        writeln!(out, "Accept ToS: {}", login_url_with_tos_redirect(email, domain))?;
    }
    Ok(())
}
