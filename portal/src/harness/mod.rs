//! End-to-end harness: a [`Driver`] over the rendered portal plus page
//! objects for each screen the browser suite covers.
//!
//! Page objects only talk to the driver through test ids, so they exercise
//! the same automation contract the web front-end exposes.

use std::future::Future;

use govtool_bridge::{SubmissionBridge, WalletSigner};
use govtool_session::{KeyValueStore, VotingPowerSource};
use govtool_ui::{Frame, Route, TabOpener};

use crate::app::Portal;
use crate::error::PortalError;

pub mod fixtures;
pub mod pages;

pub use pages::{
    EditDRepPage, GovernanceActionDetailsPage, GovernanceActionsPage, LoginPage,
    ProposalSubmissionPage, UpdateMetadataPage,
};

/// What a page object can do to the application under test.
pub trait Driver {
    /// Everything currently rendered, modal layer included.
    fn frame(&self) -> Frame;

    fn route(&self) -> Route;

    /// Load `path` as a fresh page.
    fn goto(&mut self, path: &str) -> Result<Route, PortalError>;

    /// Click a visible, enabled element. May wait on the wallet or the
    /// transaction service.
    fn click(&mut self, test_id: &str) -> impl Future<Output = Result<(), PortalError>>;

    fn fill(&mut self, test_id: &str, value: &str) -> Result<(), PortalError>;

    fn select_option(&mut self, test_id: &str, option: &str) -> Result<(), PortalError>;

    /// Toggle a checkbox that only carries an element id.
    fn check_by_id(&mut self, id: &str) -> Result<(), PortalError>;

    fn press_escape(&mut self) -> bool;

    fn is_visible(&self, test_id: &str) -> bool {
        self.frame().is_visible(test_id)
    }

    fn is_enabled(&self, test_id: &str) -> bool {
        self.frame().is_enabled(test_id)
    }

    fn has_text(&self, needle: &str) -> bool {
        self.frame().has_text(needle)
    }
}

impl<S, B, W, T, Q> Driver for Portal<S, B, W, T, Q>
where
    S: KeyValueStore,
    B: SubmissionBridge,
    W: WalletSigner,
    T: TabOpener,
    Q: VotingPowerSource,
{
    fn frame(&self) -> Frame {
        Portal::frame(self)
    }

    fn route(&self) -> Route {
        Portal::route(self)
    }

    fn goto(&mut self, path: &str) -> Result<Route, PortalError> {
        Portal::goto(self, path)
    }

    async fn click(&mut self, test_id: &str) -> Result<(), PortalError> {
        Portal::click(self, test_id).await
    }

    fn fill(&mut self, test_id: &str, value: &str) -> Result<(), PortalError> {
        Portal::fill(self, test_id, value)
    }

    fn select_option(&mut self, test_id: &str, option: &str) -> Result<(), PortalError> {
        Portal::select_option(self, test_id, option)
    }

    fn check_by_id(&mut self, id: &str) -> Result<(), PortalError> {
        Portal::check_by_id(self, id)
    }

    fn press_escape(&mut self) -> bool {
        Portal::press_escape(self)
    }
}
