use crate::data::persistence::Persistable;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DomainType {
    Registered,
    Mapped,
    SiteRedirect,
    Wpcom,
    Transfer,
}

/// Hosted-email subscription attached to a domain.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GSuiteSubscription {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub pending_users: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub name: String,
    #[serde(rename = "type")]
    pub domain_type: DomainType,
    #[serde(default)]
    pub has_wpcom_nameservers: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_apps_subscription: Option<GSuiteSubscription>,
}

impl Domain {
    pub fn new(name: &str, domain_type: DomainType) -> Self {
        Domain {
            name: name.to_string(),
            domain_type,
            has_wpcom_nameservers: false,
            google_apps_subscription: None,
        }
    }

    pub fn with_nameservers(mut self) -> Self {
        self.has_wpcom_nameservers = true;
        self
    }

    pub fn with_subscription(mut self, status: &str, pending_users: &[&str]) -> Self {
        self.google_apps_subscription = Some(GSuiteSubscription {
            status: status.to_string(),
            pending_users: pending_users.iter().map(|u| u.to_string()).collect(),
        });
        self
    }
}

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct DomainData {
    pub domains: Vec<Domain>,
}

impl Persistable for DomainData {
    fn filename() -> &'static str {
        "domains.json"
    }
    fn is_json() -> bool {
        true
    }
}

impl DomainData {
    pub fn add(&mut self, domain: Domain) {
        self.domains.push(domain);
    }

    pub fn find(&self, name: &str) -> Option<&Domain> {
        self.domains.iter().find(|d| d.name == name)
    }
}
