//! Update DRep metadata page.

use govtool_governance::{AnchorInput, MetadataUpdateForm};
use govtool_session::{guard_authenticated_page, GuardOutcome, KeyValueStore, SessionContext};

use crate::frame::{Element, ElementKind, Frame};
use crate::routes::Route;
use crate::size_tier::{metadata_page_width, Viewport};
use crate::test_ids;

pub const METADATA_ANCHOR_HOWTO: &str =
    "https://docs.sanchogov.tools/faqs/how-to-create-a-metadata-anchor";

/// Mount check: where the page sends the user, if anywhere.
pub fn on_mount<S: KeyValueStore>(ctx: &SessionContext<S>) -> Option<Route> {
    match guard_authenticated_page(ctx) {
        GuardOutcome::Allow => None,
        GuardOutcome::RedirectHome => Some(Route::Home),
    }
}

pub(crate) fn push_anchor_inputs(frame: &mut Frame, input: &AnchorInput, enabled: bool) {
    frame.push(
        Element::input(test_ids::URL_INPUT, input.url())
            .with_text("Your URL with extra info about you")
            .enabled(enabled),
    );
    if let Some(error) = input.url_validity().error() {
        frame.push(Element::text(error.to_string()).with_test_id(test_ids::INVALID_URL_ERROR));
    }
    frame.push(
        Element::input(test_ids::HASH_INPUT, input.hash())
            .with_text("The hash of your URL")
            .enabled(enabled),
    );
    if let Some(error) = input.hash_validity().error() {
        frame.push(Element::text(error.to_string()).with_test_id(test_ids::INVALID_HASH_ERROR));
    }
}

pub fn render(form: &MetadataUpdateForm, viewport: Viewport) -> Frame {
    let mut frame = Frame::new();
    frame.push(Element::text("Update DRep Metadata"));
    frame.push(
        Element::new(ElementKind::Container)
            .with_id("metadata-card")
            .with_value(metadata_page_width(viewport)),
    );
    frame.push(Element::text("Update Information"));
    frame.push(Element::text(
        "You can include extra information about yourself by adding a URL and its hash.",
    ));
    push_anchor_inputs(&mut frame, form.input(), !form.is_submitting());
    frame.push(
        Element::new(ElementKind::Link)
            .with_test_id(test_ids::ANCHOR_HOWTO_LINK)
            .with_text("How to create URL and hash?")
            .with_value(METADATA_ANCHOR_HOWTO),
    );

    let confirm = Element::button(test_ids::CONFIRM, "Confirm").enabled(form.can_confirm());
    let cancel = Element::button(test_ids::CANCEL, "Cancel");
    // Mobile stacks the primary action on top.
    if viewport.is_mobile() {
        frame.push(confirm);
        frame.push(cancel);
    } else {
        frame.push(cancel);
        frame.push(confirm);
    }
    if form.is_submitting() {
        frame.push(Element::new(ElementKind::Spinner).with_id("confirm-loading"));
    }
    frame
}
