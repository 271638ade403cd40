use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::answers::{ValidationError, ValidationResult};

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
const MIN_PHONE_DIGITS: usize = 7;

/// Contact details captured after the result screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LeadContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub consent: bool,
}

/// Shape-check a lead contact: non-empty name, mailbox-shaped email, at
/// least seven phone digits, and explicit consent.
pub fn validate(contact: &LeadContact) -> ValidationResult {
    let mut errors = Vec::new();

    if contact.name.trim().is_empty() {
        errors.push(field_error("name", "name must not be empty", "min_length"));
    }

    if !email_is_valid(&contact.email) {
        errors.push(field_error(
            "email",
            "email is not a valid address",
            "pattern_mismatch",
        ));
    }

    let digits = contact.phone.chars().filter(char::is_ascii_digit).count();
    if digits < MIN_PHONE_DIGITS {
        errors.push(field_error(
            "phone",
            "phone must contain at least 7 digits",
            "min_length",
        ));
    }

    if !contact.consent {
        errors.push(field_error(
            "consent",
            "consent must be given",
            "consent_required",
        ));
    }

    ValidationResult::from_parts(errors, Vec::new(), Vec::new())
}

fn email_is_valid(email: &str) -> bool {
    if let Ok(regex) = Regex::new(EMAIL_PATTERN)
        && regex.is_match(email)
    {
        return true;
    }
    false
}

fn field_error(field: &str, message: &str, code: &str) -> ValidationError {
    ValidationError {
        question_id: Some(field.to_string()),
        path: Some(format!("/{}", field)),
        message: message.into(),
        code: Some(code.into()),
    }
}
