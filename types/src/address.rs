//! Wallet identities: stake keys and DRep ids.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::TypeError;
use crate::network::NetworkId;

/// Length of a Blake2b-224 credential hash.
pub const CREDENTIAL_LEN: usize = 28;

/// A reward-address stake key as exposed by the wallet extension.
///
/// Stored as the raw 29 address bytes: one header byte followed by the
/// 28-byte stake credential. The header's high nibble must mark a reward
/// address (`0xe` key credential, `0xf` script credential).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StakeKey([u8; CREDENTIAL_LEN + 1]);

impl StakeKey {
    /// Build a key-credential stake key for the given network.
    pub fn from_credential(network: NetworkId, credential: [u8; CREDENTIAL_LEN]) -> Self {
        let mut raw = [0u8; CREDENTIAL_LEN + 1];
        raw[0] = 0xe0 | network.address_tag();
        raw[1..].copy_from_slice(&credential);
        Self(raw)
    }

    pub fn header(&self) -> u8 {
        self.0[0]
    }

    pub fn credential(&self) -> &[u8] {
        &self.0[1..]
    }

    /// Whether the header's network tag matches `network`.
    pub fn is_on(&self, network: NetworkId) -> bool {
        self.header() & 0x0f == network.address_tag()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for StakeKey {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != CREDENTIAL_LEN + 1 {
            return Err(TypeError::WrongLength {
                expected: CREDENTIAL_LEN + 1,
                actual: bytes.len(),
            });
        }
        let kind = bytes[0] >> 4;
        if kind != 0xe && kind != 0xf {
            return Err(TypeError::InvalidStakeKey(format!(
                "header {:#04x} is not a reward address",
                bytes[0]
            )));
        }
        let mut raw = [0u8; CREDENTIAL_LEN + 1];
        raw.copy_from_slice(&bytes);
        Ok(Self(raw))
    }
}

impl fmt::Debug for StakeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StakeKey({})", hex::encode(&self.0[..5]))
    }
}

impl fmt::Display for StakeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A delegated representative's id: the 28-byte hash of its DRep key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DRepId([u8; CREDENTIAL_LEN]);

impl DRepId {
    pub fn new(hash: [u8; CREDENTIAL_LEN]) -> Self {
        Self(hash)
    }

    pub fn as_bytes(&self) -> &[u8; CREDENTIAL_LEN] {
        &self.0
    }
}

impl FromStr for DRepId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != CREDENTIAL_LEN {
            return Err(TypeError::WrongLength {
                expected: CREDENTIAL_LEN,
                actual: bytes.len(),
            });
        }
        let mut raw = [0u8; CREDENTIAL_LEN];
        raw.copy_from_slice(&bytes);
        Ok(Self(raw))
    }
}

impl fmt::Debug for DRepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DRepId({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for DRepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

macro_rules! hex_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

hex_serde!(StakeKey);
hex_serde!(DRepId);
