//! Transaction submission bridge.
//!
//! Signing happens in the wallet extension, transaction construction in a
//! remote service. This crate only defines both contracts, talks to the
//! service over HTTP and waits for the outcome.

pub mod bridge;
pub mod error;
pub mod http;
pub mod poll;
pub mod tx;

pub use bridge::{sign_and_submit, SubmissionBridge, WalletSigner};
pub use error::BridgeError;
pub use http::HttpBridge;
pub use poll::{poll_transaction, BridgeConfig};
pub use tx::{SubmissionRequest, TxStatus, TxSubmission, Witness};
