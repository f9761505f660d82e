use crate::data::{AppSettings, Domain, DomainType};

const INVALID_SUFFIXES: [&str; 2] = [".in", ".wpcomstaging.com"];
const BANNED_PHRASES: [&str; 1] = ["google"];

/// Users outside the supported countries cannot buy hosted email at all.
pub fn is_gsuite_restricted(user: &AppSettings) -> bool {
    !user.is_valid_google_apps_country
}

pub fn can_domain_add_gsuite(domain_name: &str, user: &AppSettings) -> bool {
    let has_banned_phrase = BANNED_PHRASES.iter().any(|p| domain_name.contains(p));
    let has_invalid_suffix = INVALID_SUFFIXES.iter().any(|s| domain_name.ends_with(s));
    !(has_invalid_suffix || has_banned_phrase || is_gsuite_restricted(user))
}

/// A domain without subscription info reports an empty status, which counts
/// as having a subscription; only an explicit `no_subscription` does not.
pub fn has_gsuite(domain: &Domain) -> bool {
    let status = domain
        .google_apps_subscription
        .as_ref()
        .map(|s| s.status.as_str())
        .unwrap_or("");
    status != "no_subscription"
}

pub fn has_pending_gsuite_users(domain: &Domain) -> bool {
    domain
        .google_apps_subscription
        .as_ref()
        .is_some_and(|s| !s.pending_users.is_empty())
}

/// Registered domains served by our name servers (or already on hosted
/// email) and mapped domains, minus names that fail `can_domain_add_gsuite`.
pub fn gsuite_supported_domains<'a>(domains: &'a [Domain], user: &AppSettings) -> Vec<&'a Domain> {
    domains
        .iter()
        .filter(|d| {
            let wpcom_hosted = d.domain_type == DomainType::Registered
                && (d.has_wpcom_nameservers || has_gsuite(d));
            let mapped = d.domain_type == DomainType::Mapped;
            (wpcom_hosted || mapped) && can_domain_add_gsuite(&d.name, user)
        })
        .collect()
}

pub fn has_gsuite_supported_domain(domains: &[Domain], user: &AppSettings) -> bool {
    !gsuite_supported_domains(domains, user).is_empty()
}

/// The selected domain when it is eligible, else the first supported domain,
/// else an empty string.
pub fn eligible_gsuite_domain(selected: Option<&str>, domains: &[Domain], user: &AppSettings) -> String {
    if let Some(name) = selected.filter(|n| !n.is_empty()) {
        if can_domain_add_gsuite(name, user) {
            return name.to_string();
        }
    }
    gsuite_supported_domains(domains, user)
        .first()
        .map(|d| d.name.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> AppSettings {
        AppSettings::default()
    }

    fn restricted() -> AppSettings {
        AppSettings {
            is_valid_google_apps_country: false,
            ..AppSettings::default()
        }
    }

    #[test]
    fn test_can_add_plain_domain() {
        assert!(can_domain_add_gsuite("example.com", &user()));
    }

    #[test]
    fn test_cannot_add_invalid_suffix() {
        assert!(!can_domain_add_gsuite("example.in", &user()));
        assert!(!can_domain_add_gsuite("site.wpcomstaging.com", &user()));
    }

    #[test]
    fn test_suffix_must_be_at_end() {
        assert!(can_domain_add_gsuite("example.info", &user()));
    }

    #[test]
    fn test_cannot_add_banned_phrase() {
        assert!(!can_domain_add_gsuite("mygooglesite.com", &user()));
    }

    #[test]
    fn test_restricted_user_cannot_add() {
        assert!(is_gsuite_restricted(&restricted()));
        assert!(!can_domain_add_gsuite("example.com", &restricted()));
    }

    #[test]
    fn test_has_gsuite_statuses() {
        let none = Domain::new("a.com", DomainType::Registered);
        let active = Domain::new("a.com", DomainType::Registered).with_subscription("active", &[]);
        let no_sub =
            Domain::new("a.com", DomainType::Registered).with_subscription("no_subscription", &[]);
        assert!(has_gsuite(&none));
        assert!(has_gsuite(&active));
        assert!(!has_gsuite(&no_sub));
    }

    #[test]
    fn test_pending_users() {
        let pending = Domain::new("a.com", DomainType::Registered)
            .with_subscription("active", &["x@a.com"]);
        let clear = Domain::new("a.com", DomainType::Registered).with_subscription("active", &[]);
        assert!(has_pending_gsuite_users(&pending));
        assert!(!has_pending_gsuite_users(&clear));
        assert!(!has_pending_gsuite_users(&Domain::new("b.com", DomainType::Mapped)));
    }

    fn sample_domains() -> Vec<Domain> {
        vec![
            Domain::new("redirect.com", DomainType::SiteRedirect),
            Domain::new("external.com", DomainType::Registered)
                .with_subscription("no_subscription", &[]),
            Domain::new("hosted.com", DomainType::Registered).with_nameservers(),
            Domain::new("mapped.com", DomainType::Mapped),
            Domain::new("mapped.in", DomainType::Mapped),
        ]
    }

    #[test]
    fn test_supported_domains_filter() {
        let domains = sample_domains();
        let names: Vec<&str> = gsuite_supported_domains(&domains, &user())
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["hosted.com", "mapped.com"]);
    }

    #[test]
    fn test_registered_without_subscription_info_is_supported() {
        let domains = vec![Domain::new("plain.com", DomainType::Registered)];
        assert!(has_gsuite_supported_domain(&domains, &user()));
    }

    #[test]
    fn test_no_supported_domain() {
        let domains = vec![Domain::new("redirect.com", DomainType::SiteRedirect)];
        assert!(!has_gsuite_supported_domain(&domains, &user()));
        assert!(!has_gsuite_supported_domain(&sample_domains(), &restricted()));
    }

    #[test]
    fn test_eligible_prefers_selected() {
        let domains = sample_domains();
        assert_eq!(eligible_gsuite_domain(Some("chosen.com"), &domains, &user()), "chosen.com");
    }

    #[test]
    fn test_eligible_falls_back_to_first_supported() {
        let domains = sample_domains();
        assert_eq!(eligible_gsuite_domain(Some("bad.in"), &domains, &user()), "hosted.com");
        assert_eq!(eligible_gsuite_domain(None, &domains, &user()), "hosted.com");
    }

    #[test]
    fn test_eligible_empty_when_nothing_fits() {
        assert_eq!(eligible_gsuite_domain(Some("x.com"), &sample_domains(), &restricted()), "");
    }
}
