//! Fundamental types for GovTool.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! stake keys, DRep ids, lovelace amounts, metadata anchors, transaction ids,
//! proposal types and vote choices.

pub mod address;
pub mod amount;
pub mod anchor;
pub mod error;
pub mod governance;
pub mod hash;
pub mod network;

pub use address::{DRepId, StakeKey};
pub use amount::Lovelace;
pub use anchor::MetadataAnchor;
pub use error::TypeError;
pub use governance::{GovActionId, ProposalType, VoteChoice};
pub use hash::{AnchorHash, TxId};
pub use network::NetworkId;
