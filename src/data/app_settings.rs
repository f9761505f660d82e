use crate::data::persistence::Persistable;
use anyhow::{bail, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// chrono format used for the trigger label and the text inputs.
    pub date_format: String,
    pub compact: bool,
    /// Minimum drawing width (columns) for the two-month calendar.
    pub wide_threshold: u16,
    pub currency: String,
    /// A config without this key counts as a restricted country.
    #[serde(default)]
    pub is_valid_google_apps_country: bool,
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            date_format: "%m/%d/%Y".to_string(),
            compact: false,
            wide_threshold: 60,
            currency: "USD".to_string(),
            is_valid_google_apps_country: true,
            log_level: "info".to_string(),
        }
    }
}

/// config.yaml keeps everything under a `settings` key.
#[derive(Serialize, Deserialize, Default, Debug)]
pub(crate) struct SettingsWrapper {
    #[serde(default)]
    pub(crate) settings: AppSettings,
}

impl Persistable for SettingsWrapper {
    fn filename() -> &'static str {
        "config.yaml"
    }
    fn is_json() -> bool {
        false
    }
}

impl AppSettings {
    pub fn load() -> Result<Self> {
        Self::load_from(&crate::data::persistence::get_data_dir()?)
    }

    pub fn load_from(dir: &Path) -> Result<Self> {
        let settings = SettingsWrapper::load_from(dir)?.settings;
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects settings the picker cannot work with.
    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            bail!(
                "invalid date_format {:?} in config.yaml: not a chrono strftime pattern",
                self.date_format
            );
        }
        Ok(())
    }
}
