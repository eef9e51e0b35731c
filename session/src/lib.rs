//! Wallet session context for GovTool.
//!
//! Provides what every screen needs to know about the connected wallet:
//! - The active session (stake key, wallet name, DRep registration, pending transaction)
//! - Persisted session identifiers in local storage
//! - The navigation guard for authenticated pages
//! - Voting-power queries (ada-holder and DRep) with their loading state
//!
//! The session is passed explicitly to views and flows; there is no global.

pub mod client;
pub mod error;
pub mod guard;
pub mod session;
pub mod storage;
pub mod voting_power;

pub use client::BackendClient;
pub use error::SessionError;
pub use guard::{guard_authenticated_page, GuardOutcome};
pub use session::{DRepStatus, PendingTransaction, SessionContext, TxKind, WalletSession};
pub use storage::{KeyValueStore, SessionStore, WALLET_LS_KEY};
pub use voting_power::{load_drep_status, QueryState, VotingPower, VotingPowerSource};
