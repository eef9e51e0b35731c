//! Proposal submission page.

use govtool_governance::{Field, FormState, ProposalForm};
use govtool_types::ProposalType;

use crate::frame::{Element, ElementKind, Frame};
use crate::test_ids;

/// Page-local state that is not part of the form itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProposalView {
    /// The "submit as governance action" acknowledgement is ticked.
    pub acknowledged: bool,
    /// Past the acknowledgement, on the metadata anchor step.
    pub on_anchor_step: bool,
}

impl ProposalView {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub fn input_test_id(field: Field) -> String {
    match field {
        Field::Title => test_ids::TITLE_INPUT.to_string(),
        Field::Abstract => test_ids::ABSTRACT_INPUT.to_string(),
        Field::Motivation => test_ids::MOTIVATION_INPUT.to_string(),
        Field::Rationale => test_ids::RATIONALE_INPUT.to_string(),
        Field::ReceivingAddress => test_ids::RECEIVING_ADDRESS_INPUT.to_string(),
        Field::Amount => test_ids::AMOUNT_INPUT.to_string(),
        Field::Link(i) => test_ids::link_url_input(i),
    }
}

/// Inverse of [`input_test_id`] for the fixed inputs.
pub fn field_for_input(test_id: &str) -> Option<Field> {
    match test_id {
        test_ids::TITLE_INPUT => Some(Field::Title),
        test_ids::ABSTRACT_INPUT => Some(Field::Abstract),
        test_ids::MOTIVATION_INPUT => Some(Field::Motivation),
        test_ids::RATIONALE_INPUT => Some(Field::Rationale),
        test_ids::RECEIVING_ADDRESS_INPUT => Some(Field::ReceivingAddress),
        test_ids::AMOUNT_INPUT => Some(Field::Amount),
        _ => None,
    }
}

pub fn render(form: &ProposalForm, view: &ProposalView) -> Frame {
    match form.state() {
        FormState::Draft => render_draft(form),
        FormState::Reviewing if view.on_anchor_step => render_anchor_step(form, true),
        FormState::Reviewing => render_review(form, view),
        FormState::Submitting { .. } => render_anchor_step(form, false),
        FormState::Confirmed { tx_id } => {
            let mut frame = Frame::new();
            frame.push(Element::text("Governance action submitted"));
            frame.push(Element::text(tx_id.to_string()));
            frame
        }
        FormState::Rejected { message } => {
            let mut frame = render_review(form, view);
            frame.push(Element::text(message.as_str()).with_id("submission-error"));
            frame
        }
    }
}

fn render_draft(form: &ProposalForm) -> Frame {
    let draft = form.draft();
    let mut frame = Frame::new();
    frame.push(Element::text("Create a Governance Action"));
    frame.push(
        Element::new(ElementKind::Input)
            .with_test_id(test_ids::GOVERNANCE_ACTION_TYPE)
            .with_value(draft.proposal_type.label()),
    );
    for proposal_type in ProposalType::ALL {
        frame.push(
            Element::new(ElementKind::Radio)
                .with_test_id(&test_ids::radio(proposal_type.label()))
                .with_text(proposal_type.label())
                .checked(draft.proposal_type == proposal_type),
        );
    }

    let errors = form.visible_errors();
    for field in draft.fields() {
        let id = input_test_id(field);
        match field {
            Field::Link(i) => {
                let text = draft.links.iter().nth(i).map_or("", |l| l.text.as_str());
                frame.push(Element::input(&id, draft.field(field)));
                frame.push(Element::input(&test_ids::link_text_input(i), text));
                frame.push(Element::button(&test_ids::remove_link(i), "Remove"));
            }
            _ => {
                frame.push(Element::input(&id, draft.field(field)));
            }
        }
        if let Some(issue) = errors.iter().find(|i| i.field == field) {
            frame.push(Element::text(issue.error.to_string()).with_test_id(&test_ids::field_error(&id)));
        }
    }

    frame.push(Element::button(test_ids::ADD_LINK, "+ Add link").visible(form.can_add_link()));
    frame.push(Element::button(test_ids::CONTINUE, "Continue").enabled(form.can_continue()));
    frame
}

fn render_review(form: &ProposalForm, view: &ProposalView) -> Frame {
    let draft = form.draft();
    let mut frame = Frame::new();
    frame.push(Element::text("Review your submission"));
    if let Some(content) = form.review() {
        frame.push(Element::text(content.proposal_type.label()).with_test_id(test_ids::GOVERNANCE_ACTION_TYPE));
        frame.push(Element::text(content.title.as_str()));
        frame.push(Element::text(content.abstract_text.as_str()));
        frame.push(Element::text(content.motivation.as_str()));
        frame.push(Element::text(content.rationale.as_str()));
        if content.withdrawal.is_some() {
            frame.push(Element::text(draft.receiving_address.trim()));
            frame.push(Element::text(draft.amount.trim()));
        }
        for link in &content.links {
            frame.push(Element::new(ElementKind::Link).with_text(link.url.as_str()));
            frame.push(Element::text(link.text.as_str()));
        }
    }
    frame.push(Element::button(test_ids::EDIT_SUBMISSION, "Edit submission"));
    frame.push(
        Element::new(ElementKind::Checkbox)
            .with_id(test_ids::SUBMISSION_CHECKBOX_ID)
            .with_text("I understand the deposit is locked until the action expires")
            .checked(view.acknowledged),
    );
    frame.push(Element::button(test_ids::CONTINUE, "Continue").enabled(view.acknowledged));
    frame
}

fn render_anchor_step(form: &ProposalForm, editable: bool) -> Frame {
    let mut frame = Frame::new();
    frame.push(Element::text("Store and maintain the data yourself"));
    frame.push(Element::input(test_ids::URL_INPUT, form.anchor_url()).enabled(editable));
    if let Some(error) = form.anchor_url_validity().error() {
        frame.push(Element::text(error.to_string()).with_test_id(test_ids::INVALID_URL_ERROR));
    }
    frame.push(Element::input(test_ids::HASH_INPUT, form.anchor_hash()).enabled(editable));
    if !editable {
        frame.push(Element::new(ElementKind::Spinner).with_id("submitting"));
    }
    frame.push(Element::button(test_ids::SUBMIT, "Submit").enabled(editable && form.can_submit()));
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use govtool_types::NetworkId;

    fn filled() -> ProposalForm {
        let mut form = ProposalForm::new(NetworkId::Preview, ProposalType::Info);
        form.set_field(Field::Title, "Title").unwrap();
        form.set_field(Field::Abstract, "Abstract").unwrap();
        form.set_field(Field::Motivation, "Motivation").unwrap();
        form.set_field(Field::Rationale, "Rationale").unwrap();
        form
    }

    #[test]
    fn treasury_inputs_only_for_treasury() {
        let mut form = filled();
        let frame = render(&form, &ProposalView::default());
        assert!(!frame.is_visible(test_ids::AMOUNT_INPUT));
        form.set_type(ProposalType::Treasury).unwrap();
        let frame = render(&form, &ProposalView::default());
        assert!(frame.is_visible(test_ids::AMOUNT_INPUT));
        assert!(frame.is_visible(test_ids::RECEIVING_ADDRESS_INPUT));
        assert!(frame.by_test_id("Treasury-radio").is_some_and(|e| e.is_checked()));
    }

    #[test]
    fn add_link_hidden_at_cap() {
        let mut form = filled();
        for _ in 0..6 {
            assert!(render(&form, &ProposalView::default()).is_visible(test_ids::ADD_LINK));
            form.add_link().unwrap();
        }
        assert!(!render(&form, &ProposalView::default()).is_visible(test_ids::ADD_LINK));
        form.remove_link(0).unwrap();
        assert!(render(&form, &ProposalView::default()).is_visible(test_ids::ADD_LINK));
    }

    #[test]
    fn anchor_error_appears_for_bad_url() {
        let mut form = filled();
        form.continue_to_review().unwrap();
        let view = ProposalView {
            acknowledged: true,
            on_anchor_step: true,
        };
        assert!(!render(&form, &view).is_visible(test_ids::INVALID_URL_ERROR));
        form.set_anchor_url("https://test.c").unwrap();
        assert!(render(&form, &view).is_visible(test_ids::INVALID_URL_ERROR));
        assert!(!render(&form, &view).is_enabled(test_ids::SUBMIT));
    }

    #[test]
    fn review_lists_content() {
        let mut form = filled();
        form.continue_to_review().unwrap();
        let frame = render(&form, &ProposalView::default());
        assert!(frame.by_exact_text("Info").is_some());
        assert!(frame.has_text("Motivation"));
        assert!(frame.by_id(test_ids::SUBMISSION_CHECKBOX_ID).is_some());
        assert!(!frame.is_enabled(test_ids::CONTINUE));
    }
}
