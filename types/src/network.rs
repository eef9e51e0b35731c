//! Network identifier.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TypeError;

/// Identifies which Cardano network the portal is pointed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// The production network.
    Mainnet,
    /// Public preview testnet.
    Preview,
    /// Public pre-production testnet.
    Preprod,
    /// The governance test network.
    Sanchonet,
}

impl NetworkId {
    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Preview => "preview",
            Self::Preprod => "preprod",
            Self::Sanchonet => "sanchonet",
        }
    }

    /// Network tag carried in the low nibble of an address header byte.
    pub fn address_tag(&self) -> u8 {
        match self {
            Self::Mainnet => 1,
            _ => 0,
        }
    }

    /// Bech32 human-readable prefix for payment addresses.
    pub fn payment_hrp(&self) -> &'static str {
        match self {
            Self::Mainnet => "addr",
            _ => "addr_test",
        }
    }

    /// Bech32 human-readable prefix for reward (stake) addresses.
    pub fn reward_hrp(&self) -> &'static str {
        match self {
            Self::Mainnet => "stake",
            _ => "stake_test",
        }
    }
}

impl FromStr for NetworkId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "preview" => Ok(Self::Preview),
            "preprod" => Ok(Self::Preprod),
            "sanchonet" => Ok(Self::Sanchonet),
            other => Err(TypeError::UnknownNetwork(other.to_string())),
        }
    }
}
