//! Metadata anchor validation.
//!
//! The byte limit is on the UTF-8 encoding, not the character count: the
//! ledger stores anchor URLs as at most 128 bytes.

use govtool_types::{AnchorHash, MetadataAnchor};
use url::{Host, Url};

use crate::error::AnchorError;
use crate::validity::Validity;

/// Maximum encoded length of an anchor URL.
pub const MAX_URL_BYTES: usize = 128;

/// Validate an anchor URL for submission.
pub fn validate_anchor_url(input: &str) -> Result<(), AnchorError> {
    if input.is_empty() {
        return Err(AnchorError::Empty);
    }
    if !is_well_formed(input) {
        return Err(AnchorError::Malformed);
    }
    if input.len() > MAX_URL_BYTES {
        return Err(AnchorError::TooLong { bytes: input.len() });
    }
    Ok(())
}

/// Validation state for a required URL input.
///
/// An empty field stays neutral until the user has interacted with it.
pub fn anchor_url_validity(input: &str, touched: bool) -> Validity<AnchorError> {
    if input.is_empty() && !touched {
        return Validity::Neutral;
    }
    Validity::from_result(validate_anchor_url(input))
}

/// Validation state for an optional URL input (links, vote rationale).
pub fn optional_url_validity(input: &str) -> Validity<AnchorError> {
    if input.is_empty() {
        return Validity::Neutral;
    }
    Validity::from_result(validate_anchor_url(input))
}

/// Validate an anchor hash: exactly 64 hex characters.
pub fn validate_anchor_hash(input: &str) -> Result<AnchorHash, AnchorError> {
    if input.is_empty() {
        return Err(AnchorError::Empty);
    }
    if input.len() != 64 {
        return Err(AnchorError::InvalidHash);
    }
    input.parse().map_err(|_| AnchorError::InvalidHash)
}

/// Validate both halves and build the anchor.
pub fn validate_anchor(url: &str, hash: &str) -> Result<MetadataAnchor, AnchorError> {
    validate_anchor_url(url)?;
    let hash = validate_anchor_hash(hash)?;
    Ok(MetadataAnchor::new(url, hash))
}

fn is_well_formed(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) {
        return false;
    }
    let Ok(url) = Url::parse(input) else {
        return false;
    };
    match url.scheme() {
        "http" | "https" => match url.host() {
            Some(Host::Domain(domain)) => has_top_level_label(domain),
            _ => false,
        },
        "ipfs" => url.host_str().is_some_and(|h| !h.is_empty()) || url.path().len() > 1,
        _ => false,
    }
}

/// A dotted domain whose last label is at least two letters (`example.com`, not `test.c`).
/// Every label is non-empty and neither starts nor ends with a hyphen.
fn has_top_level_label(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let labels: Vec<&str> = domain.split('.').collect();
    let [.., parent, tld] = labels.as_slice() else {
        return false;
    };
    if parent.is_empty() {
        return false;
    }
    let labels_ok = labels
        .iter()
        .all(|l| !l.is_empty() && !l.starts_with('-') && !l.ends_with('-'));
    let tld_ok = tld.len() >= 2
        && (tld.chars().all(|c| c.is_ascii_alphabetic()) || tld.starts_with("xn--"));
    labels_ok && tld_ok
}
