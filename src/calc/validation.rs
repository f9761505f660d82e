use crate::calc::email::is_valid_email;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const REQUIRED_MSG: &str = "This field is required.";
pub const TOO_LONG_MSG: &str = "This field can't be longer than 60 characters.";
pub const MAILBOX_CHARS_MSG: &str =
    "Only number, letters, dashes, underscores, apostrophes and periods are allowed.";
pub const INVALID_EMAIL_MSG: &str = "Please provide a valid email address.";

/// Counted in UTF-16 code units, so astral characters count twice.
const MAX_NAME_LEN: usize = 60;

static MAILBOX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-z_'-](\.?[0-9a-z_'-])*$").expect("mailbox pattern is valid")
});

/// A form value and the first rule it failed, if any.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Field {
    pub value: String,
    pub error: Option<String>,
}

impl Field {
    pub fn new(value: &str) -> Self {
        Field {
            value: value.to_string(),
            error: None,
        }
    }
}

/// The new-mailbox form of the signup flow.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupUser {
    pub domain: Field,
    pub mail_box: Field,
    pub first_name: Field,
    pub last_name: Field,
}

impl SignupUser {
    pub fn new(domain: &str, mail_box: &str, first_name: &str, last_name: &str) -> Self {
        SignupUser {
            domain: Field::new(domain),
            mail_box: Field::new(mail_box),
            first_name: Field::new(first_name),
            last_name: Field::new(last_name),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.fields().iter().all(|(_, f)| f.error.is_none())
    }

    /// Fields paired with a display label, in form order.
    pub fn fields(&self) -> [(&'static str, &Field); 4] {
        [
            ("Domain", &self.domain),
            ("Mailbox", &self.mail_box),
            ("First name", &self.first_name),
            ("Last name", &self.last_name),
        ]
    }

    pub fn email(&self) -> String {
        format!("{}@{}", self.mail_box.value, self.domain.value)
    }
}

// Each rule only sets an error when none is present yet, so the first
// failing rule in a chain wins.

fn remove_previous_errors(field: &Field) -> Field {
    Field {
        value: field.value.clone(),
        error: None,
    }
}

fn required_field(field: Field) -> Field {
    if field.error.is_none() && field.value.is_empty() {
        return Field {
            error: Some(REQUIRED_MSG.to_string()),
            ..field
        };
    }
    field
}

fn sixty_character_field(field: Field) -> Field {
    if field.error.is_none() && field.value.encode_utf16().count() > MAX_NAME_LEN {
        return Field {
            error: Some(TOO_LONG_MSG.to_string()),
            ..field
        };
    }
    field
}

fn valid_email_character_field(field: Field) -> Field {
    if field.error.is_none() && !MAILBOX_PATTERN.is_match(&field.value) {
        return Field {
            error: Some(MAILBOX_CHARS_MSG.to_string()),
            ..field
        };
    }
    field
}

fn validate_overall_email(mail_box: Field, domain: &Field) -> Field {
    let address = format!("{}@{}", mail_box.value, domain.value);
    if mail_box.error.is_none() && !is_valid_email(&address) {
        return Field {
            error: Some(INVALID_EMAIL_MSG.to_string()),
            ..mail_box
        };
    }
    mail_box
}

/// Validates the signup form, discarding errors from any previous pass.
/// Every field is required; the mailbox must use allowed characters and
/// form a valid address with the domain; names are capped at 60 characters.
pub fn validate_user(user: &SignupUser) -> SignupUser {
    let domain = required_field(remove_previous_errors(&user.domain));
    let mail_box = required_field(remove_previous_errors(&user.mail_box));
    let first_name = required_field(remove_previous_errors(&user.first_name));
    let last_name = required_field(remove_previous_errors(&user.last_name));

    let mail_box = validate_overall_email(valid_email_character_field(mail_box), &domain);

    SignupUser {
        domain,
        mail_box,
        first_name: sixty_character_field(first_name),
        last_name: sixty_character_field(last_name),
    }
}
