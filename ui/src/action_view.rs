//! Governance action list, details with the vote panel, and the voted tab.

use govtool_governance::{GovernanceAction, VoteForm, VotePhase, VotedActions};
use govtool_types::VoteChoice;

use crate::frame::{Element, ElementKind, Frame};
use crate::test_ids;

/// Test id of a vote radio.
pub fn choice_radio(choice: VoteChoice) -> &'static str {
    match choice {
        VoteChoice::Yes => test_ids::YES_RADIO,
        VoteChoice::No => test_ids::NO_RADIO,
        VoteChoice::Abstain => test_ids::ABSTAIN_RADIO,
    }
}

pub fn choice_for_radio(test_id: &str) -> Option<VoteChoice> {
    VoteChoice::ALL.into_iter().find(|c| choice_radio(*c) == test_id)
}

/// Test id of an action card's "view details" button. Uses the action's
/// `<tx>#<index>` form.
pub fn view_details_id(action: &GovernanceAction) -> String {
    test_ids::view_action(&action.id.to_string())
}

pub fn render_list(actions: &[GovernanceAction], voted: &VotedActions, show_voted_tab: bool) -> Frame {
    let mut frame = Frame::new();
    frame.push(Element::text("Governance Actions"));
    frame.push(Element::button(test_ids::VOTED_TAB, "My votes").visible(show_voted_tab));
    for action in actions {
        frame.push(Element::text(action.title.as_str()));
        frame.push(Element::text(action.action_type.as_str()));
        frame.push(Element::button(&view_details_id(action), "View proposal details"));
        if let Some(vote) = voted.get(&action.id) {
            frame.push(Element::text(vote.choice.label()).with_test_id(test_ids::MY_VOTE));
        }
    }
    frame
}

/// The voted tab: one card per recorded vote.
pub fn render_voted(actions: &[GovernanceAction], voted: &VotedActions) -> Frame {
    let mut frame = Frame::new();
    frame.push(Element::button(test_ids::VOTED_TAB, "My votes"));
    if voted.is_empty() {
        frame.push(Element::text("You haven't voted on any governance actions yet."));
    }
    for (id, vote) in voted.iter() {
        let title = actions
            .iter()
            .find(|a| &a.id == id)
            .map_or_else(|| id.to_string(), |a| a.title.clone());
        frame.push(Element::text(title));
        frame.push(Element::text(vote.choice.label()).with_test_id(test_ids::MY_VOTE));
        frame.push(Element::button(&test_ids::view_action(&id.to_string()), "View proposal details"));
    }
    frame
}

/// Details page. `vote` is `None` when the wallet cannot vote.
pub fn render_details(action: &GovernanceAction, vote: Option<&VoteForm>) -> Frame {
    let mut frame = Frame::new();
    frame.push(Element::text(action.title.as_str()));
    frame.push(Element::text(action.action_type.as_str()).with_test_id(test_ids::GOVERNANCE_ACTION_TYPE));
    frame.push(Element::text(action.submitted_date.as_str()).with_test_id(test_ids::SUBMISSION_DATE));
    frame.push(Element::text(action.expiry_date.as_str()).with_test_id(test_ids::EXPIRY_DATE));
    frame.push(Element::new(ElementKind::Link)
        .with_test_id(test_ids::EXTERNAL_MODAL_BUTTON)
        .with_text("View other details"));

    let Some(form) = vote else {
        return frame;
    };
    let editable = form.phase() == VotePhase::Editing;
    if let Some(previous) = form.previous() {
        frame.push(Element::text(format!("You voted {}", previous.label())));
    }
    for choice in VoteChoice::ALL {
        frame.push(
            Element::new(ElementKind::Radio)
                .with_test_id(choice_radio(choice))
                .with_text(choice.label())
                .checked(form.choice() == Some(choice))
                .enabled(editable),
        );
    }
    frame.push(Element::button(test_ids::PROVIDE_CONTEXT, "Provide context about your vote").enabled(editable));
    if !form.rationale().is_empty() {
        frame.push(Element::new(ElementKind::Link).with_text(form.rationale()));
    }
    let label = if form.previous().is_some() {
        "Change vote"
    } else {
        "Vote"
    };
    frame.push(Element::button(test_ids::VOTE, label).enabled(form.can_submit()));
    if form.phase() == VotePhase::Submitting {
        frame.push(Element::new(ElementKind::Spinner).with_id("vote-in-progress"));
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use govtool_governance::CastVote;
    use govtool_types::{GovActionId, TxId};

    fn action() -> GovernanceAction {
        GovernanceAction {
            id: GovActionId::new(TxId::new([9; 32]), 0),
            action_type: "Info".into(),
            title: "Fund the docs".into(),
            submitted_date: "2024-05-01".into(),
            expiry_date: "2024-06-01".into(),
            metadata_url: "https://example.com/ga.jsonld".into(),
        }
    }

    #[test]
    fn vote_button_enabled_after_choice() {
        let a = action();
        let mut form = VoteForm::new(a.id);
        assert!(!render_details(&a, Some(&form)).is_enabled(test_ids::VOTE));
        form.select(VoteChoice::Yes).unwrap();
        let frame = render_details(&a, Some(&form));
        assert!(frame.is_enabled(test_ids::VOTE));
        assert!(frame.by_test_id(test_ids::YES_RADIO).is_some_and(|e| e.is_checked()));
    }

    #[test]
    fn no_vote_panel_without_eligibility() {
        let frame = render_details(&action(), None);
        assert!(!frame.is_visible(test_ids::VOTE));
        assert!(frame.is_visible(test_ids::EXTERNAL_MODAL_BUTTON));
        assert!(frame.is_visible(test_ids::SUBMISSION_DATE));
    }

    #[test]
    fn voted_tab_shows_current_choice() {
        let a = action();
        let mut voted = VotedActions::new();
        voted.record(a.id, CastVote { choice: VoteChoice::Yes, tx_id: TxId::new([1; 32]) });
        voted.record(a.id, CastVote { choice: VoteChoice::No, tx_id: TxId::new([2; 32]) });
        let frame = render_voted(std::slice::from_ref(&a), &voted);
        let votes: Vec<_> = frame.all_by_test_id(test_ids::MY_VOTE).map(|e| e.text.as_str()).collect();
        assert_eq!(votes, ["No"]);
    }

    #[test]
    fn radio_ids_map_back() {
        for choice in VoteChoice::ALL {
            assert_eq!(choice_for_radio(choice_radio(choice)), Some(choice));
        }
    }
}
