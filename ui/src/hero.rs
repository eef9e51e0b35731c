//! Landing-page hero.

use crate::frame::{Element, ElementKind, Frame};
use crate::modal::Modal;
use crate::routes::Route;
use crate::size_tier::{Headline, HeroLayout, Viewport};
use crate::test_ids;

pub const VOTING_POWER_FAQ: &str = "https://docs.sanchogov.tools/faqs/what-is-voting-power";

/// What a hero click asks the portal to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeroAction {
    Navigate(Route),
    OpenModal(Modal),
    /// Outbound link; goes through the external-link gate.
    OpenLink(String),
}

/// Connect button: dashboard when a wallet is already enabled, wallet picker otherwise.
pub fn on_connect_wallet(wallet_enabled: bool) -> HeroAction {
    if wallet_enabled {
        HeroAction::Navigate(Route::Dashboard)
    } else {
        HeroAction::OpenModal(Modal::ChooseWallet)
    }
}

pub fn on_voting_power_link() -> HeroAction {
    HeroAction::OpenLink(VOTING_POWER_FAQ.to_string())
}

pub fn render(viewport: Viewport) -> Frame {
    let layout = HeroLayout::for_viewport(viewport);
    let mut frame = Frame::new();
    frame.push(
        Element::new(ElementKind::Container)
            .with_test_id("hero")
            .with_width(layout.padding_x),
    );
    let headline = match layout.headline {
        Headline::Headline1 => "headline1",
        Headline::Headline2 => "headline2",
    };
    frame.push(
        Element::text("Your voice in governance")
            .with_id(headline)
            .with_value(&layout.font_size.map(|s| s.to_string()).unwrap_or_default()),
    );
    frame.push(Element::new(ElementKind::Link)
        .with_test_id(test_ids::VOTING_POWER_LINK)
        .with_text("voting power"));
    frame.push(Element::button(test_ids::HERO_CONNECT_WALLET, "Connect your wallet"));
    frame.push(
        Element::new(ElementKind::Image)
            .with_id("hero-image")
            .with_width(f64::from(layout.image_size)),
    );
    frame
}
