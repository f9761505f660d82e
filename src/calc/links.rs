const GSUITE_LINK_PREFIX: &str = "https://mail.google.com/a/";

pub fn gsuite_settings_url(domain_name: &str) -> String {
    format!("{GSUITE_LINK_PREFIX}{domain_name}")
}

/// Account-chooser URL that lands the new user on the Terms of Service page
/// for `domain`, then on their mailbox.
pub fn login_url_with_tos_redirect(email: &str, domain: &str) -> String {
    let continue_url = format!(
        "https://admin.google.com/{domain}/AcceptTermsOfService?continue=https://mail.google.com/mail/u/{email}"
    );
    format!(
        "https://accounts.google.com/AccountChooser?Email={}&service=CPanel&continue={}",
        encode_uri_component(email),
        encode_uri_component(&continue_url)
    )
}

/// Percent-encodes everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
