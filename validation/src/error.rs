use thiserror::Error;

/// Why a metadata anchor URL or hash was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AnchorError {
    #[error("This field is required")]
    Empty,

    #[error("Invalid URL")]
    Malformed,

    #[error("Url must be at most 128 bytes (got {bytes})")]
    TooLong { bytes: usize },

    #[error("Invalid hash")]
    InvalidHash,
}

/// Why a form field was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required")]
    Required,

    #[error("Max {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Nickname cannot contain whitespaces")]
    ContainsWhitespace,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Invalid bech32 address: {0}")]
    InvalidAddress(String),

    #[error("Address belongs to another network (expected prefix {expected})")]
    WrongNetwork { expected: &'static str },

    #[error("Amount must be a positive number")]
    NotPositive,

    #[error("Invalid amount")]
    InvalidAmount,

    #[error("{0}")]
    Url(#[from] AnchorError),
}
