pub mod app_settings;
pub mod domain;
pub mod persistence;

pub use app_settings::AppSettings;
pub use domain::{Domain, DomainData, DomainType, GSuiteSubscription};
pub use persistence::Persistable;
