//! `data-testid` values. Changing any of these breaks the harness.

// Home / hero
pub const HERO_CONNECT_WALLET: &str = "hero-connect-wallet-button";
pub const VOTING_POWER_LINK: &str = "voting-power-link";
pub const CONNECT_WALLET: &str = "connect-wallet-button";
pub const DISCONNECT: &str = "disconnect-button";
pub const VIEW_GOVERNANCE_ACTIONS: &str = "view-governance-actions-button";
pub const PROPOSE_GOVERNANCE_ACTION: &str = "propose-governance-action-button";
pub const EDIT_DREP: &str = "edit-drep-data-button";
pub const UPDATE_METADATA: &str = "update-metadata-button";
pub const VOTING_POWER_CHIP: &str = "voting-power-chips";
pub const VOTING_POWER_VALUE: &str = "voting-power-chips-value";
pub const VOTING_POWER_SPINNER: &str = "voting-power-chips-spinner";
pub const VOTING_POWER_INFO: &str = "voting-power-chips-info";

// Modals
pub const CHOOSE_WALLET_MODAL: &str = "choose-wallet-modal";
pub const EXTERNAL_LINK_MODAL: &str = "external-link-modal";
pub const CONTINUE_MODAL: &str = "continue-modal-button";
pub const CANCEL_MODAL: &str = "cancel-modal-button";
pub const CLOSE_MODAL: &str = "close-modal-button";
pub const URL_ERROR_MODAL: &str = "url-error-modal";
pub const URL_ERROR_MODAL_TITLE: &str = "url-error-modal-title";
pub const STATUS_ERROR_MODAL: &str = "status-error-modal";
pub const VOTE_SUCCESS_MODAL: &str = "vote-success-modal";
pub const CONTEXT_MODAL: &str = "context-modal";
pub const CONTEXT_INPUT: &str = "provide-context-input";
pub const CONTEXT_CONFIRM: &str = "confirm-context-button";

// Shared form controls
pub const CONTINUE: &str = "continue-button";
pub const URL_INPUT: &str = "url-input";
pub const HASH_INPUT: &str = "hash-input";
pub const ANCHOR_HOWTO_LINK: &str = "how-to-create-anchor-link";
pub const INVALID_URL_ERROR: &str = "invalid-url-error";
pub const INVALID_HASH_ERROR: &str = "invalid-hash-error";
pub const CONFIRM: &str = "confirm-button";
pub const CANCEL: &str = "cancel-button";
pub const ADD_LINK: &str = "add-link-button";

// Proposal submission
pub const GOVERNANCE_ACTION_TYPE: &str = "governance-action-type";
pub const TITLE_INPUT: &str = "title-input";
pub const ABSTRACT_INPUT: &str = "abstract-input";
pub const MOTIVATION_INPUT: &str = "motivation-input";
pub const RATIONALE_INPUT: &str = "rationale-input";
pub const RECEIVING_ADDRESS_INPUT: &str = "receiving-address-input";
pub const AMOUNT_INPUT: &str = "amount-input";
pub const EDIT_SUBMISSION: &str = "edit-submission-button";
pub const SUBMIT: &str = "submit-button";
pub const FIELD_ERROR_SUFFIX: &str = "-error";
// TODO: give the submission acknowledgement checkbox a test id; the harness
// still selects it by element id `submission-checkbox`.
pub const SUBMISSION_CHECKBOX_ID: &str = "submission-checkbox";

// Governance actions
pub const VOTED_TAB: &str = "voted-tab";
pub const MY_VOTE: &str = "my-vote";
pub const VOTE: &str = "vote-button";
pub const YES_RADIO: &str = "yes-radio";
pub const NO_RADIO: &str = "no-radio";
pub const ABSTAIN_RADIO: &str = "abstain-radio";
pub const PROVIDE_CONTEXT: &str = "provide-context-button";
pub const EXTERNAL_MODAL_BUTTON: &str = "external-modal-button";
pub const SUBMISSION_DATE: &str = "submission-date";
pub const EXPIRY_DATE: &str = "expiry-date";

// Edit DRep
pub const NAME_INPUT: &str = "name-input";
pub const EMAIL_INPUT: &str = "email-input";
pub const BIO_INPUT: &str = "bio-input";
pub const STORE_DATA_CHECKBOX: &str = "store-data-checkbox";

pub fn radio(label: &str) -> String {
    format!("{label}-radio")
}

pub fn link_url_input(index: usize) -> String {
    format!("link-{index}-url-input")
}

pub fn link_text_input(index: usize) -> String {
    format!("link-{index}-text-input")
}

pub fn remove_link(index: usize) -> String {
    format!("delete-link-{index}-button")
}

/// Which half of a link row an input id addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkPart {
    Url,
    Text,
}

/// Parse `link-<i>-url-input` / `link-<i>-text-input`.
pub fn parse_link_input(test_id: &str) -> Option<(usize, LinkPart)> {
    let rest = test_id.strip_prefix("link-")?;
    let (index, part) = rest.split_once('-')?;
    let part = match part {
        "url-input" => LinkPart::Url,
        "text-input" => LinkPart::Text,
        _ => return None,
    };
    Some((index.parse().ok()?, part))
}

/// Parse `delete-link-<i>-button`.
pub fn parse_remove_link(test_id: &str) -> Option<usize> {
    test_id
        .strip_prefix("delete-link-")?
        .strip_suffix("-button")?
        .parse()
        .ok()
}

pub fn wallet_button(name: &str) -> String {
    format!("{name}-wallet-button")
}

pub fn field_error(input: &str) -> String {
    format!("{input}{FIELD_ERROR_SUFFIX}")
}

pub fn view_action(id: &str) -> String {
    format!("govaction-{id}-view-detail")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_ids_parse_back() {
        assert_eq!(parse_link_input(&link_url_input(3)), Some((3, LinkPart::Url)));
        assert_eq!(parse_link_input(&link_text_input(0)), Some((0, LinkPart::Text)));
        assert_eq!(parse_link_input("link-x-url-input"), None);
        assert_eq!(parse_remove_link(&remove_link(5)), Some(5));
        assert_eq!(parse_remove_link(ADD_LINK), None);
    }
}
