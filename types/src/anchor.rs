//! Metadata anchors: a URL plus the hash of the document it points to.

use serde::{Deserialize, Serialize};

use crate::hash::AnchorHash;

/// Off-chain metadata reference carried by DRep updates and governance actions.
///
/// Construction does not validate the URL; use the validation crate before
/// handing an anchor to the submission bridge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataAnchor {
    pub url: String,
    pub hash: AnchorHash,
}

impl MetadataAnchor {
    pub fn new(url: impl Into<String>, hash: AnchorHash) -> Self {
        Self {
            url: url.into(),
            hash,
        }
    }
}
