//! Deterministic form data for the harness, valid and invalid.
//!
//! Every generator takes a `seed` so loops over many iterations see varied
//! but reproducible input.

use govtool_types::{AnchorHash, DRepId, NetworkId, ProposalType, StakeKey};
use govtool_validation::encode_bech32;

use crate::app::WalletInfo;

const WORDS: [&str; 12] = [
    "treasury", "ledger", "stake", "quorum", "ballot", "epoch", "anchor", "delegate", "motion",
    "charter", "budget", "tally",
];
const TLDS: [&str; 4] = ["com", "org", "io", "net"];
const INVALID_URLS: [&str; 6] = [
    "testdotcom",
    "https://testdotcom",
    "https://test.c",
    "ftp://files.example.com",
    "https://exa mple.com",
    "https://.com",
];

fn word(seed: usize) -> &'static str {
    WORDS[seed % WORDS.len()]
}

/// `count` words starting at `seed`, capitalised like a sentence.
pub fn sentence(seed: usize, count: usize) -> String {
    let body = (0..count)
        .map(|i| word(seed.wrapping_add(i * 7)))
        .collect::<Vec<_>>()
        .join(" ");
    let mut chars = body.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => body,
    }
}

pub fn valid_url(seed: usize) -> String {
    format!(
        "https://{}{}.example.{}/{}",
        word(seed),
        seed,
        TLDS[seed % TLDS.len()],
        word(seed + 3)
    )
}

pub fn invalid_url(seed: usize) -> String {
    INVALID_URLS[seed % INVALID_URLS.len()].to_string()
}

/// Well-formed, but 129 bytes or more.
pub fn oversized_url() -> String {
    format!("https://{}.example.com/{}", word(0), "a".repeat(110))
}

pub fn valid_hash(seed: usize) -> String {
    AnchorHash::new([seed as u8; 32]).to_string()
}

pub fn receiving_address(network: NetworkId, seed: usize) -> String {
    encode_bech32(network.payment_hrp(), &[seed as u8; 29])
}

/// One proposal form's worth of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProposalFields {
    pub proposal_type: ProposalType,
    pub title: String,
    pub abstract_text: String,
    pub motivation: String,
    pub rationale: String,
    pub receiving_address: Option<String>,
    pub amount: Option<String>,
    pub link_url: String,
    pub link_text: String,
}

pub fn valid_proposal(proposal_type: ProposalType, seed: usize, network: NetworkId) -> ProposalFields {
    let withdrawal = proposal_type.requires_withdrawal();
    ProposalFields {
        proposal_type,
        title: format!("{} {seed}", sentence(seed, 3)),
        abstract_text: sentence(seed + 1, 20),
        motivation: sentence(seed + 2, 40),
        rationale: sentence(seed + 3, 40),
        receiving_address: withdrawal.then(|| receiving_address(network, seed)),
        amount: withdrawal.then(|| format!("{}", 1 + seed % 5000)),
        link_url: valid_url(seed),
        link_text: sentence(seed + 4, 2),
    }
}

/// Every field breaks a different rule.
pub fn invalid_proposal(proposal_type: ProposalType, seed: usize) -> ProposalFields {
    let withdrawal = proposal_type.requires_withdrawal();
    ProposalFields {
        proposal_type,
        title: "t".repeat(81 + seed % 10),
        abstract_text: String::new(),
        motivation: "m".repeat(12_001),
        rationale: "r".repeat(12_001),
        receiving_address: withdrawal.then(|| format!("addr_test1{}", word(seed))),
        amount: withdrawal.then(|| ["0", "-4", "abc", "1.1234567"][seed % 4].to_string()),
        link_url: invalid_url(seed),
        link_text: "l".repeat(81),
    }
}

pub fn valid_drep_name(seed: usize) -> String {
    format!("{}_{}{seed}", word(seed), word(seed + 5))
}

pub fn invalid_drep_name(seed: usize) -> String {
    match seed % 3 {
        0 => format!("{} {}", word(seed), word(seed + 1)),
        1 => "n".repeat(81),
        _ => String::new(),
    }
}

pub fn valid_email(seed: usize) -> String {
    format!("{}{seed}@example.{}", word(seed), TLDS[seed % TLDS.len()])
}

pub fn invalid_email(seed: usize) -> String {
    ["plainaddress", "@no-local.com", "user@nodot", "two@@example.com"][seed % 4].to_string()
}

/// A wallet extension whose stake and DRep keys derive from `seed`.
pub fn wallet(name: &str, seed: u8, network: NetworkId) -> WalletInfo {
    WalletInfo {
        name: name.to_string(),
        stake_key: StakeKey::from_credential(network, [seed; 28]),
        drep_id: DRepId::new([seed; 28]),
    }
}
