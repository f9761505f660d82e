use crate::calc::eligibility::{
    can_domain_add_gsuite, eligible_gsuite_domain, gsuite_supported_domains, has_gsuite,
    has_gsuite_supported_domain, has_pending_gsuite_users, is_gsuite_restricted,
};
use crate::data::{AppSettings, DomainData, Persistable};
use anyhow::Result;

pub fn run(selected: Option<&str>) -> Result<()> {
    let settings = AppSettings::load()?;
    let data = DomainData::load()?;
    write_domains(&data, selected, &settings, &mut std::io::stdout())
}

pub(crate) fn write_domains<W: std::io::Write>(
    data: &DomainData,
    selected: Option<&str>,
    user: &AppSettings,
    out: &mut W,
) -> Result<()> {
    let supported = gsuite_supported_domains(&data.domains, user);

    writeln!(out, "Domains")?;
    writeln!(out, "---")?;
    writeln!(
        out,
        "  {:<28} {:<14} {:<8} {:<8} {}",
        "Name", "Type", "Email", "Pending", "Supported"
    )?;
    for d in &data.domains {
        let is_supported = supported.iter().any(|s| s.name == d.name);
        writeln!(
            out,
            "  {:<28} {:<14} {:<8} {:<8} {}",
            d.name,
            format!("{:?}", d.domain_type),
            yes_no(has_gsuite(d)),
            yes_no(has_pending_gsuite_users(d)),
            yes_no(is_supported)
        )?;
    }
    writeln!(out, "---")?;
    if is_gsuite_restricted(user) {
        writeln!(out, "Hosted email is not available in your country.")?;
    } else if !has_gsuite_supported_domain(&data.domains, user) {
        writeln!(out, "No listed domain supports hosted email.")?;
    }
    if let Some(name) = selected {
        if data.find(name).is_none() {
            tracing::debug!(name, "selected domain is not in domains.json");
        }
        writeln!(out, "Selected {name} can add email: {}", yes_no(can_domain_add_gsuite(name, user)))?;
    }
    let eligible = eligible_gsuite_domain(selected, &data.domains, user);
    if eligible.is_empty() {
        writeln!(out, "Eligible: none")?;
    } else {
        writeln!(out, "Eligible: {eligible}")?;
    }
    Ok(())
}

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}
