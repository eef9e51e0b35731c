//! Modal layer: one tagged union for every modal kind.

use serde::{Deserialize, Serialize};

use govtool_types::{GovActionId, TxId};

use crate::frame::{Element, ElementKind, Frame};
use crate::test_ids;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "state", rename_all = "camelCase")]
pub enum Modal {
    ChooseWallet,
    ExternalLink { url: String },
    UrlError { title: String, message: String },
    VoteSuccess { tx_id: TxId },
    StatusError { message: String },
    /// Vote rationale entry for one action.
    Context { action: GovActionId, url: String },
}

impl Modal {
    pub fn test_id(&self) -> &'static str {
        match self {
            Self::ChooseWallet => test_ids::CHOOSE_WALLET_MODAL,
            Self::ExternalLink { .. } => test_ids::EXTERNAL_LINK_MODAL,
            Self::UrlError { .. } => test_ids::URL_ERROR_MODAL,
            Self::VoteSuccess { .. } => test_ids::VOTE_SUCCESS_MODAL,
            Self::StatusError { .. } => test_ids::STATUS_ERROR_MODAL,
            Self::Context { .. } => test_ids::CONTEXT_MODAL,
        }
    }

    pub fn render(&self) -> Frame {
        let mut frame = Frame::new();
        frame.push(Element::new(ElementKind::Container).with_test_id(self.test_id()));
        frame.push(Element::button(test_ids::CLOSE_MODAL, "×"));
        match self {
            Self::ChooseWallet => {
                frame.push(Element::text("Connect your wallet"));
            }
            Self::ExternalLink { url } => {
                frame.push(Element::text("Be Careful!"));
                frame.push(Element::text(
                    "You are about to leave the portal. Only continue if you trust this site.",
                ));
                frame.push(Element::text(url.as_str()));
                frame.push(Element::button(test_ids::CONTINUE_MODAL, "Continue"));
                frame.push(Element::button(test_ids::CANCEL_MODAL, "Cancel"));
            }
            Self::UrlError { title, message } => {
                frame.push(Element::text(title.as_str()).with_test_id(test_ids::URL_ERROR_MODAL_TITLE));
                frame.push(Element::text(message.as_str()));
                frame.push(Element::button(test_ids::CANCEL_MODAL, "Go back"));
            }
            Self::VoteSuccess { tx_id } => {
                frame.push(Element::text("Vote submitted"));
                frame.push(Element::text(format!("Transaction {tx_id}")));
                frame.push(Element::button(test_ids::CONTINUE_MODAL, "OK"));
            }
            Self::StatusError { message } => {
                frame.push(Element::text("Something went wrong"));
                frame.push(Element::text(message.as_str()));
                frame.push(Element::button(test_ids::CANCEL_MODAL, "Close"));
            }
            Self::Context { url, .. } => {
                frame.push(Element::text("Provide context about your vote"));
                frame.push(Element::input(test_ids::CONTEXT_INPUT, url));
                frame.push(Element::button(test_ids::CONTEXT_CONFIRM, "Confirm"));
                frame.push(Element::button(test_ids::CANCEL_MODAL, "Cancel"));
            }
        }
        frame
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OpenModal {
    modal: Modal,
    prevent_dismiss: bool,
}

/// Holds the single open modal, if any.
#[derive(Clone, Debug, Default)]
pub struct ModalController {
    current: Option<OpenModal>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `modal`, replacing whatever was open.
    pub fn open(&mut self, modal: Modal) {
        self.open_with(modal, false);
    }

    /// Open a modal that ignores backdrop clicks and escape.
    pub fn open_undismissable(&mut self, modal: Modal) {
        self.open_with(modal, true);
    }

    fn open_with(&mut self, modal: Modal, prevent_dismiss: bool) {
        tracing::debug!(modal = modal.test_id(), prevent_dismiss, "open modal");
        self.current = Some(OpenModal {
            modal,
            prevent_dismiss,
        });
    }

    pub fn current(&self) -> Option<&Modal> {
        self.current.as_ref().map(|m| &m.modal)
    }

    pub fn current_mut(&mut self) -> Option<&mut Modal> {
        self.current.as_mut().map(|m| &mut m.modal)
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Explicit close button. Always closes.
    pub fn close(&mut self) -> Option<Modal> {
        self.current.take().map(|m| m.modal)
    }

    /// Backdrop click or escape. Returns whether the modal closed.
    pub fn dismiss(&mut self) -> bool {
        match &self.current {
            Some(open) if open.prevent_dismiss => false,
            Some(_) => {
                self.current = None;
                true
            }
            None => false,
        }
    }

    pub fn render(&self) -> Frame {
        self.current().map(Modal::render).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_respects_prevent_dismiss() {
        let mut modals = ModalController::new();
        modals.open_undismissable(Modal::StatusError {
            message: "boom".into(),
        });
        assert!(!modals.dismiss());
        assert!(modals.is_open());
        assert!(modals.close().is_some());
        assert!(!modals.is_open());

        modals.open(Modal::ChooseWallet);
        assert!(modals.dismiss());
        assert!(!modals.is_open());
    }

    #[test]
    fn opening_replaces_current() {
        let mut modals = ModalController::new();
        modals.open(Modal::ChooseWallet);
        modals.open(Modal::ExternalLink {
            url: "https://example.com".into(),
        });
        let frame = modals.render();
        assert!(frame.is_visible(test_ids::EXTERNAL_LINK_MODAL));
        assert!(!frame.is_visible(test_ids::CHOOSE_WALLET_MODAL));
        assert!(frame.has_text("Be Careful!"));
        assert!(frame.by_exact_text("https://example.com").is_some());
    }

    #[test]
    fn tagged_like_the_web_client() {
        let json = serde_json::to_value(Modal::ExternalLink {
            url: "https://x.org".into(),
        })
        .unwrap();
        assert_eq!(json["type"], "externalLink");
        assert_eq!(json["state"]["url"], "https://x.org");
    }
}
