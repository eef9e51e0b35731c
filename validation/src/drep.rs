//! DRep profile form rules.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::FieldError;
use crate::proposal::validate_max_chars;

pub const MAX_NAME_CHARS: usize = 80;
pub const MAX_BIO_CHARS: usize = 500;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)*\.[A-Za-z]{2,}$").expect("static regex")
    })
}

/// DRep name: required, no whitespace, at most 80 characters.
pub fn validate_drep_name(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    if value.chars().any(char::is_whitespace) {
        return Err(FieldError::ContainsWhitespace);
    }
    validate_max_chars(value, MAX_NAME_CHARS)
}

/// Contact email: optional, but must look like an address when present.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if value.is_empty() || email_regex().is_match(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

pub fn validate_bio(value: &str) -> Result<(), FieldError> {
    validate_max_chars(value, MAX_BIO_CHARS)
}
