//! Proposal form field rules.

use govtool_types::Lovelace;

use crate::anchor::validate_anchor_url;
use crate::error::FieldError;

pub const MAX_TITLE_CHARS: usize = 80;
pub const MAX_ABSTRACT_CHARS: usize = 2500;
pub const MAX_MOTIVATION_CHARS: usize = 12000;
pub const MAX_RATIONALE_CHARS: usize = 12000;
pub const MAX_LINK_TEXT_CHARS: usize = 80;

/// A required free-text field: non-blank and at most `max` characters.
pub fn validate_required_text(value: &str, max: usize) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required);
    }
    validate_max_chars(value, max)
}

/// An optional free-text field: at most `max` characters.
pub fn validate_max_chars(value: &str, max: usize) -> Result<(), FieldError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(FieldError::TooLong { max, actual });
    }
    Ok(())
}

pub fn validate_title(value: &str) -> Result<(), FieldError> {
    validate_required_text(value, MAX_TITLE_CHARS)
}

pub fn validate_abstract(value: &str) -> Result<(), FieldError> {
    validate_required_text(value, MAX_ABSTRACT_CHARS)
}

pub fn validate_motivation(value: &str) -> Result<(), FieldError> {
    validate_required_text(value, MAX_MOTIVATION_CHARS)
}

pub fn validate_rationale(value: &str) -> Result<(), FieldError> {
    validate_required_text(value, MAX_RATIONALE_CHARS)
}

/// A reference link: the URL follows anchor rules, the label is optional.
pub fn validate_link(url: &str, text: &str) -> Result<(), FieldError> {
    validate_anchor_url(url)?;
    validate_max_chars(text, MAX_LINK_TEXT_CHARS)
}

/// Treasury withdrawal amount in ADA; must be strictly positive.
pub fn validate_amount(value: &str) -> Result<Lovelace, FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required);
    }
    let amount = Lovelace::parse_ada(value).map_err(|_| FieldError::InvalidAmount)?;
    if amount.is_zero() {
        return Err(FieldError::NotPositive);
    }
    Ok(amount)
}
