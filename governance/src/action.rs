//! Governance actions as listed by the portal.

use serde::{Deserialize, Serialize};

use govtool_types::GovActionId;

/// An on-chain governance action open for voting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceAction {
    pub id: GovActionId,
    /// Display label of the action type, e.g. `"Info"` or `"Treasury"`.
    pub action_type: String,
    pub title: String,
    pub submitted_date: String,
    pub expiry_date: String,
    /// Off-chain document describing the action.
    pub metadata_url: String,
}
