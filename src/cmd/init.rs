use crate::data::app_settings::SettingsWrapper;
use crate::data::{Domain, DomainData, DomainType, Persistable};
use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn run() -> Result<()> {
    let dir = crate::data::persistence::get_data_dir()?;
    fs::create_dir_all(&dir)?;
    run_in_dir(&dir)?;
    println!("Data files initialized successfully.");
    Ok(())
}

/// Writes all default data files into `dir`. Exposed for unit testing.
pub(crate) fn run_in_dir(dir: &Path) -> Result<()> {
    SettingsWrapper::default().save_to(dir)?;
    sample_domains().save_to(dir)?;
    tracing::info!(dir = %dir.display(), "data files written");
    Ok(())
}

fn sample_domains() -> DomainData {
    let mut data = DomainData::default();
    data.add(
        Domain::new("example.com", DomainType::Registered)
            .with_nameservers()
            .with_subscription("no_subscription", &[]),
    );
    data.add(Domain::new("example.org", DomainType::Mapped));
    data.add(Domain::new("example.wpcomstaging.com", DomainType::Wpcom));
    data
}
