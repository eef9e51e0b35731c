//! Nullable infrastructure for deterministic testing.
//!
//! Every external collaborator of the portal (local storage, the wallet
//! extension, the transaction bridge, browser tabs, the backend) is behind a
//! trait. This crate provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Record what they were asked to do
//! - Never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod bridge;
pub mod signer;
pub mod storage;
pub mod tabs;
pub mod voting_power;

pub use bridge::NullBridge;
pub use signer::NullSigner;
pub use storage::NullStorage;
pub use tabs::NullTabs;
pub use voting_power::NullVotingPower;
