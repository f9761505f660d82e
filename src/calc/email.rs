use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[\-!#$%&'*+/0-9=?A-Z^_a-z{|}~](\.?[\-!#$%&'*+/0-9=?A-Z^_`a-z{|}~])*@[a-zA-Z0-9](-*\.?[a-zA-Z0-9])*\.[a-zA-Z](-?[a-zA-Z0-9])+$",
    )
    .expect("email pattern is valid")
});

const MAX_ADDRESS_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;
const MAX_LABEL_LEN: usize = 63;

/// Syntactic address check: pattern plus RFC length limits on the whole
/// address, the local part and each domain label.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_ADDRESS_LEN {
        return false;
    }
    if !EMAIL_PATTERN.is_match(email) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    local.len() <= MAX_LOCAL_LEN && domain.split('.').all(|label| label.len() <= MAX_LABEL_LEN)
}
