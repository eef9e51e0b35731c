use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("a wallet session is already active")]
    AlreadyConnected,

    #[error("no wallet connected")]
    NotConnected,

    #[error("a transaction is already pending")]
    TransactionPending,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("{0}")]
    Other(String),
}
