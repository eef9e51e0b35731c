//! Edit DRep page.

use govtool_governance::{DRepProfileForm, ProfileStep};
use govtool_validation::drep::{validate_bio, validate_drep_name, validate_email};
use govtool_validation::optional_url_validity;

use crate::frame::{Element, ElementKind, Frame};
use crate::metadata_page::push_anchor_inputs;
use crate::test_ids;

/// Which profile inputs have been edited, so errors stay hidden until then.
#[derive(Clone, Debug, Default)]
pub struct DRepView {
    pub name_touched: bool,
    pub email_touched: bool,
    pub bio_touched: bool,
    /// The store-data checkbox is ticked.
    pub consent: bool,
}

fn push_error(frame: &mut Frame, input: &str, error: Option<String>) {
    if let Some(message) = error {
        frame.push(Element::text(message).with_test_id(&test_ids::field_error(input)));
    }
}

pub fn render(form: &DRepProfileForm, view: &DRepView) -> Frame {
    let mut frame = Frame::new();
    frame.push(Element::text("Edit DRep"));
    match form.step() {
        ProfileStep::Profile => {
            frame.push(Element::input(test_ids::NAME_INPUT, &form.name));
            push_error(
                &mut frame,
                test_ids::NAME_INPUT,
                view.name_touched
                    .then(|| validate_drep_name(&form.name).err())
                    .flatten()
                    .map(|e| e.to_string()),
            );
            frame.push(Element::input(test_ids::EMAIL_INPUT, &form.email));
            push_error(
                &mut frame,
                test_ids::EMAIL_INPUT,
                view.email_touched
                    .then(|| validate_email(&form.email).err())
                    .flatten()
                    .map(|e| e.to_string()),
            );
            frame.push(Element::input(test_ids::BIO_INPUT, &form.bio));
            push_error(
                &mut frame,
                test_ids::BIO_INPUT,
                view.bio_touched
                    .then(|| validate_bio(&form.bio).err())
                    .flatten()
                    .map(|e| e.to_string()),
            );
            for (i, link) in form.links().iter().enumerate() {
                let id = test_ids::link_url_input(i);
                frame.push(Element::input(&id, &link.url));
                push_error(
                    &mut frame,
                    &id,
                    optional_url_validity(&link.url).error().map(|e| e.to_string()),
                );
                frame.push(Element::button(&test_ids::remove_link(i), "Remove"));
            }
            frame.push(Element::button(test_ids::ADD_LINK, "+ Add link").visible(form.links().can_add()));
            frame.push(Element::button(test_ids::CONTINUE, "Continue"));
        }
        ProfileStep::StoreData => {
            frame.push(Element::text("Store and maintain the data yourself"));
            frame.push(
                Element::new(ElementKind::Checkbox)
                    .with_test_id(test_ids::STORE_DATA_CHECKBOX)
                    .with_text("I agree to store correctly this information")
                    .checked(view.consent),
            );
            frame.push(Element::button(test_ids::CONTINUE, "Continue").enabled(view.consent));
        }
        ProfileStep::Anchor => {
            push_anchor_inputs(&mut frame, form.anchor(), true);
            frame.push(Element::button(test_ids::CONFIRM, "Submit").enabled(form.anchor().is_valid()));
        }
    }
    frame.push(Element::button(test_ids::CANCEL, "Back"));
    frame
}
