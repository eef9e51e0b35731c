//! Form validation for GovTool.
//!
//! Every validator here is a pure function over the raw input string. Inputs
//! that have not been interacted with yet validate as [`Validity::Neutral`] so
//! the view can hold back error text until the first edit.

pub mod address;
pub mod anchor;
pub mod drep;
pub mod error;
pub mod proposal;
pub mod validity;

pub use address::{encode_bech32, validate_receiving_address};
pub use anchor::{
    anchor_url_validity, optional_url_validity, validate_anchor, validate_anchor_hash,
    validate_anchor_url, MAX_URL_BYTES,
};
pub use error::{AnchorError, FieldError};
pub use validity::Validity;
