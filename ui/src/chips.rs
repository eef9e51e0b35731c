//! Voting-power chip shown in the dashboard header.

use govtool_session::{QueryState, VotingPower, WalletSession};

use crate::frame::{Element, ElementKind, Frame};
use crate::size_tier::{shows_chip_label, Viewport};
use crate::test_ids;

/// What the chip displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChipContent {
    Spinner,
    Amount(String),
}

/// Spinner while the relevant query (or the DRep status itself) is in
/// flight; otherwise the relevant figure. A failed query shows zero.
pub fn chip_content(session: &WalletSession, power: &VotingPower) -> ChipContent {
    if session.is_drep_loading() {
        return ChipContent::Spinner;
    }
    match power.relevant(session) {
        QueryState::Loading => ChipContent::Spinner,
        QueryState::Ready(amount) => ChipContent::Amount(format!("₳ {}", amount.to_ada_display())),
        QueryState::Failed(_) => ChipContent::Amount("₳ 0".to_string()),
    }
}

pub fn render(session: &WalletSession, power: &VotingPower, viewport: Viewport) -> Frame {
    let mut frame = Frame::new();
    frame.push(Element::new(ElementKind::Container).with_test_id(test_ids::VOTING_POWER_CHIP));
    if session.is_registered_drep() {
        frame.push(
            Element::new(ElementKind::Image)
                .with_test_id(test_ids::VOTING_POWER_INFO)
                .with_text("Voting power is the total ada delegated to you."),
        );
    }
    if shows_chip_label(viewport) {
        frame.push(Element::text("Voting power:"));
    }
    match chip_content(session, power) {
        ChipContent::Spinner => {
            frame.push(Element::new(ElementKind::Spinner).with_test_id(test_ids::VOTING_POWER_SPINNER));
        }
        ChipContent::Amount(text) => {
            frame.push(Element::text(text).with_test_id(test_ids::VOTING_POWER_VALUE));
        }
    }
    frame
}
