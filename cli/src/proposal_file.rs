//! TOML description of a governance action proposal.
//!
//! ```toml
//! type = "treasury"
//! title = "Fund the docs"
//! abstract = "..."
//! motivation = "..."
//! rationale = "..."
//! receiving_address = "addr_test1..."
//! amount = "1500"
//!
//! [[links]]
//! url = "https://example.com/plan"
//! text = "Plan"
//!
//! [anchor]
//! url = "https://example.com/proposal.jsonld"
//! hash = "<64 hex chars>"
//! ```

use std::path::Path;

use anyhow::{bail, Context};
use serde::Deserialize;

use govtool_governance::{FieldIssue, ProposalDraft, ProposalPayload};
use govtool_types::{NetworkId, ProposalType};
use govtool_validation::validate_anchor;

#[derive(Clone, Debug, Deserialize)]
pub struct LinkEntry {
    pub url: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AnchorEntry {
    pub url: String,
    pub hash: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProposalFile {
    #[serde(rename = "type")]
    pub proposal_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub motivation: String,
    #[serde(default)]
    pub rationale: String,
    #[serde(default)]
    pub receiving_address: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub links: Vec<LinkEntry>,
    pub anchor: Option<AnchorEntry>,
}

impl ProposalFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn draft(&self) -> anyhow::Result<ProposalDraft> {
        let proposal_type: ProposalType = self.proposal_type.parse()?;
        let mut draft = ProposalDraft::new(proposal_type);
        draft.title = self.title.clone();
        draft.abstract_text = self.abstract_text.clone();
        draft.motivation = self.motivation.clone();
        draft.rationale = self.rationale.clone();
        draft.receiving_address = self.receiving_address.clone();
        draft.amount = self.amount.clone();
        for link in &self.links {
            let index = draft.links.add()?;
            draft.links.set(index, &link.url, &link.text)?;
        }
        Ok(draft)
    }

    /// Every field problem, in form order. Empty when the proposal is valid.
    pub fn issues(&self, network: NetworkId) -> anyhow::Result<Vec<FieldIssue>> {
        Ok(match self.draft()?.validate(network) {
            Ok(_) => Vec::new(),
            Err(issues) => issues,
        })
    }

    /// Validated content plus anchor, ready for the bridge.
    pub fn payload(&self, network: NetworkId) -> anyhow::Result<ProposalPayload> {
        let content = match self.draft()?.validate(network) {
            Ok(content) => content,
            Err(issues) => bail!("proposal has {} invalid field(s)", issues.len()),
        };
        let Some(anchor) = &self.anchor else {
            bail!("proposal file has no [anchor] section");
        };
        let anchor = validate_anchor(&anchor.url, &anchor.hash)?;
        Ok(ProposalPayload { content, anchor })
    }
}
