//! Dashboard: voting-power chip and the entry points into each flow.

use govtool_session::{VotingPower, WalletSession};

use crate::chips;
use crate::frame::{Element, Frame};
use crate::routes::Route;
use crate::size_tier::Viewport;
use crate::test_ids;

pub fn render(session: &WalletSession, power: &VotingPower, viewport: Viewport) -> Frame {
    let mut frame = Frame::new();
    frame.push(Element::text("Dashboard"));
    frame.extend(chips::render(session, power, viewport));
    frame.push(Element::text(session.wallet_name.as_str()));
    frame.push(Element::button(test_ids::DISCONNECT, "Disconnect"));
    frame.push(Element::button(test_ids::VIEW_GOVERNANCE_ACTIONS, "View governance actions"));
    frame.push(Element::button(test_ids::PROPOSE_GOVERNANCE_ACTION, "Propose a governance action"));
    let drep = session.is_registered_drep();
    frame.push(Element::button(test_ids::EDIT_DREP, "Edit DRep data").visible(drep));
    frame.push(Element::button(test_ids::UPDATE_METADATA, "Update metadata").visible(drep));
    if session.is_pending_transaction() {
        frame.push(Element::text("Transaction in progress").with_id("pending-transaction"));
    }
    frame
}

/// Where a dashboard button leads.
pub fn target(test_id: &str) -> Option<Route> {
    match test_id {
        test_ids::VIEW_GOVERNANCE_ACTIONS => Some(Route::GovernanceActions),
        test_ids::PROPOSE_GOVERNANCE_ACTION => Some(Route::ProposalSubmission),
        test_ids::EDIT_DREP => Some(Route::EditDRep),
        test_ids::UPDATE_METADATA => Some(Route::UpdateMetadata),
        _ => None,
    }
}
