//! The portal: session, forms, modals and collaborators wired together.

use std::time::Instant;

use govtool_bridge::{
    poll_transaction, sign_and_submit, BridgeError, SubmissionBridge, SubmissionRequest,
    TxSubmission, WalletSigner,
};
use govtool_governance::{
    CastVote, DRepProfileForm, FormState, GovernanceAction, GovernanceError, MetadataUpdateForm,
    ProfileStep, ProposalForm, VoteForm, VotedActions,
};
use govtool_session::{
    guard_authenticated_page, load_drep_status, GuardOutcome, KeyValueStore, PendingTransaction,
    SessionContext, SessionError, SessionStore, TxKind, VotingPower, VotingPowerSource,
};
use govtool_types::{DRepId, GovActionId, ProposalType, StakeKey, TxId};
use govtool_ui::drep_view::DRepView;
use govtool_ui::proposal_view::ProposalView;
use govtool_ui::test_ids::{self, LinkPart};
use govtool_ui::{
    action_view, confirm_external, dashboard, drep_view, hero, metadata_page, proposal_view,
    request_navigation, Frame, HeroAction, Modal, ModalController, Route, TabOpener, Viewport,
};
use govtool_utils::format_duration;

use crate::config::PortalConfig;
use crate::error::PortalError;

/// A wallet extension installed in the browser, as offered by the
/// wallet picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletInfo {
    pub name: String,
    pub stake_key: StakeKey,
    pub drep_id: DRepId,
}

/// The portal, generic over its external collaborators.
///
/// - `S`: local storage
/// - `B`: transaction-building service
/// - `W`: wallet-extension signer
/// - `T`: browser tab opener
/// - `Q`: backend voting-power and DRep queries
pub struct Portal<S, B, W, T, Q> {
    config: PortalConfig,
    session: SessionContext<S>,
    bridge: B,
    signer: W,
    tabs: T,
    backend: Q,
    extension: Option<WalletInfo>,
    viewport: Viewport,
    route: Route,
    modals: ModalController,
    power: VotingPower,
    actions: Vec<GovernanceAction>,
    selected: Option<GovActionId>,
    vote: Option<VoteForm>,
    voted: VotedActions,
    proposal: ProposalForm,
    proposal_view: ProposalView,
    metadata: MetadataUpdateForm,
    drep: DRepProfileForm,
    drep_view: DRepView,
}

impl<S, B, W, T, Q> Portal<S, B, W, T, Q>
where
    S: KeyValueStore,
    B: SubmissionBridge,
    W: WalletSigner,
    T: TabOpener,
    Q: VotingPowerSource,
{
    pub fn new(config: PortalConfig, storage: S, bridge: B, signer: W, tabs: T, backend: Q) -> Self {
        let store = SessionStore::new(storage, config.storage_prefix.clone());
        let session = SessionContext::new(store, config.network);
        let proposal = ProposalForm::new(config.network, ProposalType::Info);
        Self {
            config,
            session,
            bridge,
            signer,
            tabs,
            backend,
            extension: None,
            viewport: Viewport::DESKTOP,
            route: Route::Home,
            modals: ModalController::new(),
            power: VotingPower::default(),
            actions: Vec::new(),
            selected: None,
            vote: None,
            voted: VotedActions::new(),
            proposal,
            proposal_view: ProposalView::default(),
            metadata: MetadataUpdateForm::new(),
            drep: DRepProfileForm::new(),
            drep_view: DRepView::default(),
        }
    }

    // ── Accessors ──────────────────────────────────────────────────────

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionContext<S> {
        &self.session
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn signer(&self) -> &W {
        &self.signer
    }

    pub fn tabs(&self) -> &T {
        &self.tabs
    }

    pub fn backend(&self) -> &Q {
        &self.backend
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn modals(&self) -> &ModalController {
        &self.modals
    }

    pub fn voting_power(&self) -> &VotingPower {
        &self.power
    }

    pub fn voted(&self) -> &VotedActions {
        &self.voted
    }

    pub fn proposal(&self) -> &ProposalForm {
        &self.proposal
    }

    pub fn vote_form(&self) -> Option<&VoteForm> {
        self.vote.as_ref()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Make a wallet extension available to the wallet picker.
    pub fn install_wallet(&mut self, wallet: WalletInfo) {
        self.extension = Some(wallet);
    }

    /// Replace the governance-action listing.
    pub fn set_actions(&mut self, actions: Vec<GovernanceAction>) {
        self.actions = actions;
    }

    pub fn actions(&self) -> &[GovernanceAction] {
        &self.actions
    }

    // ── Session ────────────────────────────────────────────────────────

    /// Connect `wallet`, load its DRep status, then its voting power.
    pub async fn connect_wallet(&mut self, wallet: &WalletInfo) -> Result<(), PortalError> {
        self.session.connect(wallet.stake_key, &wallet.name)?;
        let status = load_drep_status(&self.backend, &wallet.drep_id).await;
        self.session.set_drep_status(status)?;
        self.refresh_voting_power().await;
        Ok(())
    }

    pub async fn refresh_voting_power(&mut self) {
        if let Some(session) = self.session.session() {
            self.power.refresh(&self.backend, session).await;
        }
    }

    pub fn disconnect(&mut self) -> Result<(), PortalError> {
        self.session.disconnect()?;
        self.power = VotingPower::default();
        self.navigate(Route::Home);
        Ok(())
    }

    fn can_vote(&self) -> bool {
        self.session
            .session()
            .is_some_and(|s| self.power.can_vote(s))
    }

    fn ensure_idle(&self) -> Result<(), PortalError> {
        if self.session.is_pending_transaction() {
            return Err(SessionError::TransactionPending.into());
        }
        Ok(())
    }

    // ── Navigation ─────────────────────────────────────────────────────

    /// Load `path` as a fresh page: open modals are gone and the route's
    /// guard runs.
    pub fn goto(&mut self, path: &str) -> Result<Route, PortalError> {
        let route = Route::from_path(path).ok_or_else(|| PortalError::UnknownRoute(path.to_string()))?;
        self.modals.close();
        if route == Route::GovernanceActionDetails {
            let id = path
                .strip_prefix("/governance_actions/")
                .and_then(|rest| rest.split('?').next())
                .and_then(|raw| raw.parse::<GovActionId>().ok())
                .ok_or_else(|| PortalError::UnknownRoute(path.to_string()))?;
            self.open_action(id)?;
            return Ok(self.route);
        }
        Ok(self.route_to(route, true))
    }

    /// In-app navigation; form state survives when the route is unchanged.
    fn navigate(&mut self, route: Route) -> Route {
        self.route_to(route, false)
    }

    /// Switch to `route`, applying the session guard. Returns where the
    /// user ended up.
    fn route_to(&mut self, route: Route, reload: bool) -> Route {
        let target = match route {
            Route::UpdateMetadata => metadata_page::on_mount(&self.session).unwrap_or(route),
            _ if route.requires_session() => match guard_authenticated_page(&self.session) {
                GuardOutcome::Allow => route,
                GuardOutcome::RedirectHome => Route::Home,
            },
            _ => route,
        };
        if target != route {
            tracing::debug!(requested = %route, "navigation redirected home");
        }
        if reload || target != self.route {
            self.enter(target);
        }
        self.route = target;
        target
    }

    /// Fresh page state for the form routes.
    fn enter(&mut self, route: Route) {
        match route {
            Route::ProposalSubmission => {
                self.proposal = ProposalForm::new(self.config.network, ProposalType::Info);
                self.proposal_view.reset();
            }
            Route::EditDRep => {
                self.drep = DRepProfileForm::new();
                self.drep_view = DRepView::default();
            }
            Route::UpdateMetadata => self.metadata = MetadataUpdateForm::new(),
            _ => {}
        }
    }

    fn open_action(&mut self, id: GovActionId) -> Result<(), PortalError> {
        if !self.actions.iter().any(|a| a.id == id) {
            return Err(PortalError::UnknownRoute(Route::action_path(&id.to_string())));
        }
        self.selected = Some(id);
        self.vote = Some(match self.voted.get(&id) {
            Some(cast) => VoteForm::revote(id, cast.choice),
            None => VoteForm::new(id),
        });
        self.route = Route::GovernanceActionDetails;
        Ok(())
    }

    // ── Rendering ──────────────────────────────────────────────────────

    fn render_route(&self) -> Frame {
        match self.route {
            Route::Home => hero::render(self.viewport),
            Route::Dashboard => self
                .session
                .session()
                .map(|s| dashboard::render(s, &self.power, self.viewport))
                .unwrap_or_default(),
            Route::GovernanceActions => {
                action_view::render_list(&self.actions, &self.voted, self.session.is_enabled())
            }
            Route::VotedActions => action_view::render_voted(&self.actions, &self.voted),
            Route::GovernanceActionDetails => {
                let action = self
                    .selected
                    .and_then(|id| self.actions.iter().find(|a| a.id == id));
                match action {
                    Some(action) => {
                        let vote = self.vote.as_ref().filter(|_| self.can_vote());
                        action_view::render_details(action, vote)
                    }
                    None => Frame::new(),
                }
            }
            Route::ProposalSubmission => proposal_view::render(&self.proposal, &self.proposal_view),
            Route::EditDRep => drep_view::render(&self.drep, &self.drep_view),
            Route::UpdateMetadata => metadata_page::render(&self.metadata, self.viewport),
        }
    }

    fn render_modal(&self) -> Frame {
        let mut frame = self.modals.render();
        if let (Some(Modal::ChooseWallet), Some(wallet)) = (self.modals.current(), &self.extension) {
            frame.push(govtool_ui::Element::button(
                &test_ids::wallet_button(&wallet.name),
                wallet.name.as_str(),
            ));
        }
        frame
    }

    /// Everything on screen: the page with the modal layer on top.
    pub fn frame(&self) -> Frame {
        let mut frame = self.render_route();
        frame.extend(self.render_modal());
        frame
    }

    /// The layer that receives input: the modal when one is open.
    fn interactive(&self) -> Frame {
        if self.modals.is_open() {
            self.render_modal()
        } else {
            self.render_route()
        }
    }

    fn require_enabled(&self, test_id: &str) -> Result<(), PortalError> {
        let frame = self.interactive();
        let element = frame
            .all_by_test_id(test_id)
            .find(|e| e.visible)
            .ok_or_else(|| PortalError::NoSuchElement(test_id.to_string()))?;
        if !element.enabled {
            return Err(PortalError::Disabled(test_id.to_string()));
        }
        Ok(())
    }

    // ── Input ──────────────────────────────────────────────────────────

    /// Click the element with `test_id`.
    pub async fn click(&mut self, test_id: &str) -> Result<(), PortalError> {
        self.require_enabled(test_id)?;
        tracing::trace!(test_id, route = %self.route, "click");
        if self.modals.is_open() {
            return self.click_modal(test_id).await;
        }
        match self.route {
            Route::Home => self.click_home(test_id),
            Route::Dashboard => self.click_dashboard(test_id),
            Route::GovernanceActions | Route::VotedActions => self.click_action_list(test_id),
            Route::GovernanceActionDetails => self.click_details(test_id).await,
            Route::ProposalSubmission => self.click_proposal(test_id).await,
            Route::EditDRep => self.click_drep(test_id).await,
            Route::UpdateMetadata => self.click_metadata(test_id).await,
        }
    }

    async fn click_modal(&mut self, test_id: &str) -> Result<(), PortalError> {
        match test_id {
            test_ids::CLOSE_MODAL | test_ids::CANCEL_MODAL => {
                self.modals.close();
            }
            test_ids::CONTINUE_MODAL => {
                if !confirm_external(&mut self.modals, &self.tabs) {
                    self.modals.close();
                }
            }
            test_ids::CONTEXT_CONFIRM => {
                if let Some(Modal::Context { url, .. }) = self.modals.close() {
                    if let Some(form) = self.vote.as_mut() {
                        form.set_rationale(&url)?;
                    }
                }
            }
            other => {
                let Some(wallet) = self.extension.clone() else {
                    return Err(PortalError::NoSuchElement(other.to_string()));
                };
                if other != test_ids::wallet_button(&wallet.name) {
                    return Err(PortalError::NoSuchElement(other.to_string()));
                }
                self.modals.close();
                self.connect_wallet(&wallet).await?;
                self.navigate(Route::Dashboard);
            }
        }
        Ok(())
    }

    fn apply_hero(&mut self, action: HeroAction) {
        match action {
            HeroAction::Navigate(route) => {
                self.navigate(route);
            }
            HeroAction::OpenModal(modal) => self.modals.open(modal),
            HeroAction::OpenLink(url) => {
                request_navigation(&mut self.modals, &self.tabs, &url, &self.config.portal_host)
            }
        }
    }

    fn click_home(&mut self, test_id: &str) -> Result<(), PortalError> {
        let action = match test_id {
            test_ids::HERO_CONNECT_WALLET => hero::on_connect_wallet(self.session.is_enabled()),
            test_ids::VOTING_POWER_LINK => hero::on_voting_power_link(),
            other => return Err(PortalError::NoSuchElement(other.to_string())),
        };
        self.apply_hero(action);
        Ok(())
    }

    fn click_dashboard(&mut self, test_id: &str) -> Result<(), PortalError> {
        if test_id == test_ids::DISCONNECT {
            return self.disconnect();
        }
        let route = dashboard::target(test_id)
            .ok_or_else(|| PortalError::NoSuchElement(test_id.to_string()))?;
        self.navigate(route);
        Ok(())
    }

    fn click_action_list(&mut self, test_id: &str) -> Result<(), PortalError> {
        if test_id == test_ids::VOTED_TAB {
            self.navigate(Route::VotedActions);
            return Ok(());
        }
        let id = self
            .actions
            .iter()
            .find(|a| action_view::view_details_id(a) == test_id)
            .map(|a| a.id)
            .ok_or_else(|| PortalError::NoSuchElement(test_id.to_string()))?;
        self.open_action(id)
    }

    async fn click_details(&mut self, test_id: &str) -> Result<(), PortalError> {
        if test_id == test_ids::EXTERNAL_MODAL_BUTTON {
            let url = self
                .selected
                .and_then(|id| self.actions.iter().find(|a| a.id == id))
                .map(|a| a.metadata_url.clone())
                .ok_or_else(|| PortalError::NoSuchElement(test_id.to_string()))?;
            request_navigation(&mut self.modals, &self.tabs, &url, &self.config.portal_host);
            return Ok(());
        }
        if test_id == test_ids::VOTE {
            return self.submit_vote().await;
        }
        let form = self
            .vote
            .as_mut()
            .ok_or_else(|| PortalError::NoSuchElement(test_id.to_string()))?;
        if test_id == test_ids::PROVIDE_CONTEXT {
            self.modals.open(Modal::Context {
                action: *form.action(),
                url: form.rationale().to_string(),
            });
            return Ok(());
        }
        let choice = action_view::choice_for_radio(test_id)
            .ok_or_else(|| PortalError::NoSuchElement(test_id.to_string()))?;
        form.select(choice)?;
        Ok(())
    }

    async fn click_proposal(&mut self, test_id: &str) -> Result<(), PortalError> {
        match (self.proposal.state(), test_id) {
            (FormState::Draft, test_ids::ADD_LINK) => {
                self.proposal.add_link()?;
            }
            (FormState::Draft, test_ids::CONTINUE) => {
                tolerate_invalid(self.proposal.continue_to_review().map(|_| ()))?;
            }
            (FormState::Draft, other) => {
                if let Some(index) = test_ids::parse_remove_link(other) {
                    self.proposal.remove_link(index)?;
                } else {
                    let proposal_type = ProposalType::ALL
                        .into_iter()
                        .find(|t| test_ids::radio(t.label()) == other)
                        .ok_or_else(|| PortalError::NoSuchElement(other.to_string()))?;
                    self.proposal.set_type(proposal_type)?;
                }
            }
            (FormState::Reviewing, test_ids::SUBMIT) if self.proposal_view.on_anchor_step => {
                self.submit_proposal().await?;
            }
            (FormState::Reviewing, test_ids::CONTINUE) => self.proposal_view.on_anchor_step = true,
            (FormState::Reviewing | FormState::Rejected { .. }, test_ids::EDIT_SUBMISSION) => {
                self.proposal.edit()?;
                self.proposal_view.reset();
            }
            (_, other) => return Err(PortalError::NoSuchElement(other.to_string())),
        }
        Ok(())
    }

    async fn click_drep(&mut self, test_id: &str) -> Result<(), PortalError> {
        match (self.drep.step(), test_id) {
            (ProfileStep::Profile, test_ids::ADD_LINK) => {
                self.drep.links_mut().add()?;
            }
            (ProfileStep::Profile, test_ids::CONTINUE) => {
                self.drep_view.name_touched = true;
                self.drep_view.email_touched = true;
                self.drep_view.bio_touched = true;
                tolerate_invalid(self.drep.continue_to_storage())?;
            }
            (ProfileStep::Profile, test_ids::CANCEL) => {
                self.navigate(Route::Dashboard);
            }
            (ProfileStep::Profile, other) => {
                let index = test_ids::parse_remove_link(other)
                    .ok_or_else(|| PortalError::NoSuchElement(other.to_string()))?;
                self.drep.links_mut().remove(index)?;
            }
            (ProfileStep::StoreData, test_ids::STORE_DATA_CHECKBOX) => {
                self.drep_view.consent = !self.drep_view.consent;
            }
            (ProfileStep::StoreData, test_ids::CONTINUE) => {
                self.drep.acknowledge_storage(self.drep_view.consent)?;
            }
            (ProfileStep::Anchor, test_ids::CONFIRM) => self.submit_drep_profile().await?,
            (_, test_ids::CANCEL) => self.drep.back(),
            (_, other) => return Err(PortalError::NoSuchElement(other.to_string())),
        }
        Ok(())
    }

    async fn click_metadata(&mut self, test_id: &str) -> Result<(), PortalError> {
        match test_id {
            test_ids::CONFIRM => self.submit_metadata_update().await,
            test_ids::ANCHOR_HOWTO_LINK => {
                request_navigation(
                    &mut self.modals,
                    &self.tabs,
                    metadata_page::METADATA_ANCHOR_HOWTO,
                    &self.config.portal_host,
                );
                Ok(())
            }
            test_ids::CANCEL => {
                self.navigate(Route::Dashboard);
                Ok(())
            }
            other => Err(PortalError::NoSuchElement(other.to_string())),
        }
    }

    /// Type `value` into the input with `test_id`, replacing its content.
    pub fn fill(&mut self, test_id: &str, value: &str) -> Result<(), PortalError> {
        self.require_enabled(test_id)?;
        if let Some(Modal::Context { url, .. }) = self.modals.current_mut() {
            if test_id == test_ids::CONTEXT_INPUT {
                *url = value.to_string();
                return Ok(());
            }
        }
        match self.route {
            Route::ProposalSubmission => self.fill_proposal(test_id, value),
            Route::EditDRep => self.fill_drep(test_id, value),
            Route::UpdateMetadata => {
                match test_id {
                    test_ids::URL_INPUT => self.metadata.set_url(value),
                    test_ids::HASH_INPUT => self.metadata.set_hash(value),
                    other => return Err(PortalError::NoSuchElement(other.to_string())),
                }
                Ok(())
            }
            _ => Err(PortalError::NoSuchElement(test_id.to_string())),
        }
    }

    fn fill_proposal(&mut self, test_id: &str, value: &str) -> Result<(), PortalError> {
        match test_id {
            test_ids::URL_INPUT => self.proposal.set_anchor_url(value)?,
            test_ids::HASH_INPUT => self.proposal.set_anchor_hash(value)?,
            other => {
                if let Some(field) = proposal_view::field_for_input(other) {
                    self.proposal.set_field(field, value)?;
                } else if let Some((index, part)) = test_ids::parse_link_input(other) {
                    let link = self
                        .proposal
                        .draft()
                        .links
                        .iter()
                        .nth(index)
                        .cloned()
                        .ok_or(GovernanceError::NoSuchLink(index))?;
                    match part {
                        LinkPart::Url => self.proposal.set_link(index, value, &link.text)?,
                        LinkPart::Text => self.proposal.set_link(index, &link.url, value)?,
                    }
                } else {
                    return Err(PortalError::NoSuchElement(other.to_string()));
                }
            }
        }
        Ok(())
    }

    fn fill_drep(&mut self, test_id: &str, value: &str) -> Result<(), PortalError> {
        match test_id {
            test_ids::NAME_INPUT => {
                self.drep.name = value.to_string();
                self.drep_view.name_touched = true;
            }
            test_ids::EMAIL_INPUT => {
                self.drep.email = value.to_string();
                self.drep_view.email_touched = true;
            }
            test_ids::BIO_INPUT => {
                self.drep.bio = value.to_string();
                self.drep_view.bio_touched = true;
            }
            test_ids::URL_INPUT => self.drep.anchor_mut().set_url(value),
            test_ids::HASH_INPUT => self.drep.anchor_mut().set_hash(value),
            other => {
                let (index, _) = test_ids::parse_link_input(other)
                    .filter(|(_, part)| *part == LinkPart::Url)
                    .ok_or_else(|| PortalError::NoSuchElement(other.to_string()))?;
                let text = self
                    .drep
                    .links()
                    .iter()
                    .nth(index)
                    .map(|l| l.text.clone())
                    .ok_or(GovernanceError::NoSuchLink(index))?;
                self.drep.links_mut().set(index, value, &text)?;
            }
        }
        Ok(())
    }

    /// Pick `option` in a select control.
    pub fn select_option(&mut self, test_id: &str, option: &str) -> Result<(), PortalError> {
        self.require_enabled(test_id)?;
        if self.route != Route::ProposalSubmission || test_id != test_ids::GOVERNANCE_ACTION_TYPE {
            return Err(PortalError::NoSuchElement(test_id.to_string()));
        }
        let proposal_type = option
            .parse::<ProposalType>()
            .map_err(|_| PortalError::InvalidOption(option.to_string(), test_id.to_string()))?;
        self.proposal.set_type(proposal_type)?;
        Ok(())
    }

    /// Toggle a checkbox addressed by element id.
    pub fn check_by_id(&mut self, id: &str) -> Result<(), PortalError> {
        let frame = self.interactive();
        let element = frame
            .by_id(id)
            .filter(|e| e.visible)
            .ok_or_else(|| PortalError::NoSuchElement(id.to_string()))?;
        if !element.enabled {
            return Err(PortalError::Disabled(id.to_string()));
        }
        match (self.route, id) {
            (Route::ProposalSubmission, test_ids::SUBMISSION_CHECKBOX_ID) => {
                self.proposal_view.acknowledged = !self.proposal_view.acknowledged;
                Ok(())
            }
            _ => Err(PortalError::NoSuchElement(id.to_string())),
        }
    }

    /// Escape key: dismiss the modal unless it is undismissable.
    pub fn press_escape(&mut self) -> bool {
        self.modals.dismiss()
    }

    // ── Submission ─────────────────────────────────────────────────────

    async fn submit(&mut self, request: &SubmissionRequest) -> Result<TxSubmission, BridgeError> {
        sign_and_submit(&self.signer, &self.bridge, request).await
    }

    /// Track `tx_id` as the pending transaction until it is final.
    async fn await_confirmation(&mut self, tx_id: TxId, kind: TxKind) -> Result<(), BridgeError> {
        if let Err(e) = self.session.begin_transaction(PendingTransaction { tx_id, kind }) {
            tracing::warn!(tx = %tx_id, error = %e, "could not record pending transaction");
        }
        let started = Instant::now();
        let result = poll_transaction(&self.bridge, &tx_id, &self.config.bridge()).await;
        self.session.finish_transaction(&tx_id);
        if result.is_ok() {
            tracing::info!(
                tx = %tx_id,
                kind = ?kind,
                waited = %format_duration(started.elapsed()),
                "transaction final"
            );
        }
        result
    }

    /// Bridge failures become a modal; a declined signature shows nothing.
    fn show_failure(&mut self, error: &BridgeError) {
        match error {
            BridgeError::UserDeclined => {}
            BridgeError::UrlNotFound => self.modals.open(Modal::UrlError {
                title: error.user_title().to_string(),
                message: error.user_message(),
            }),
            other => self.modals.open(Modal::StatusError {
                message: other.user_message(),
            }),
        }
    }

    async fn submit_proposal(&mut self) -> Result<(), PortalError> {
        self.ensure_idle()?;
        let request = SubmissionRequest::Proposal(self.proposal.confirm()?);
        let submission = match self.submit(&request).await {
            Ok(submission) => submission,
            Err(BridgeError::UserDeclined) => {
                self.proposal.on_signing_declined()?;
                return Ok(());
            }
            Err(e) => {
                self.proposal.on_failed(e.user_message())?;
                self.show_failure(&e);
                return Ok(());
            }
        };
        let tx_id = submission.tx_id;
        self.proposal.on_submitted(tx_id)?;
        match self.await_confirmation(tx_id, TxKind::ProposalSubmission).await {
            Ok(()) => self.proposal.on_confirmed(tx_id)?,
            Err(e) => {
                self.proposal.on_failed(e.user_message())?;
                self.show_failure(&e);
            }
        }
        Ok(())
    }

    fn vote_form_mut(&mut self) -> Result<&mut VoteForm, PortalError> {
        self.vote
            .as_mut()
            .ok_or_else(|| PortalError::NoSuchElement(test_ids::VOTE.to_string()))
    }

    async fn submit_vote(&mut self) -> Result<(), PortalError> {
        self.ensure_idle()?;
        let eligible = self.can_vote();
        let payload = self.vote_form_mut()?.submit(eligible)?;
        let action = payload.action;
        let request = SubmissionRequest::Vote(payload);
        let submission = match self.submit(&request).await {
            Ok(submission) => submission,
            Err(e) => {
                let form = self.vote_form_mut()?;
                if e.is_user_declined() {
                    form.on_declined();
                } else {
                    form.on_failed(&e.user_message());
                }
                self.show_failure(&e);
                return Ok(());
            }
        };
        let tx_id = submission.tx_id;
        match self.await_confirmation(tx_id, TxKind::Vote).await {
            Ok(()) => {
                let choice = self.vote_form_mut()?.on_confirmed(tx_id)?;
                if let Some(previous) = self.voted.record(action, CastVote { choice, tx_id }) {
                    tracing::info!(%action, from = previous.key(), to = choice.key(), "vote changed");
                }
                self.modals.open(Modal::VoteSuccess { tx_id });
            }
            Err(e) => {
                self.vote_form_mut()?.on_failed(&e.user_message());
                self.show_failure(&e);
            }
        }
        Ok(())
    }

    async fn submit_metadata_update(&mut self) -> Result<(), PortalError> {
        self.ensure_idle()?;
        let request = SubmissionRequest::DRepUpdate(self.metadata.submit()?);
        let outcome = self.submit_and_confirm(&request, TxKind::DRepUpdate).await;
        self.metadata.on_settled();
        match outcome {
            Ok(()) => {
                self.navigate(Route::Dashboard);
            }
            Err(e) => self.show_failure(&e),
        }
        Ok(())
    }

    async fn submit_drep_profile(&mut self) -> Result<(), PortalError> {
        self.ensure_idle()?;
        let request = SubmissionRequest::DRepUpdate(self.drep.submit()?);
        let outcome = self.submit_and_confirm(&request, TxKind::DRepUpdate).await;
        self.drep.on_settled();
        match outcome {
            Ok(()) => {
                self.navigate(Route::Dashboard);
            }
            Err(e) => self.show_failure(&e),
        }
        Ok(())
    }

    async fn submit_and_confirm(
        &mut self,
        request: &SubmissionRequest,
        kind: TxKind,
    ) -> Result<(), BridgeError> {
        let submission = self.submit(request).await?;
        self.await_confirmation(submission.tx_id, kind).await
    }
}

/// Validation failures are shown inline by the next render; the click
/// itself succeeded.
fn tolerate_invalid(result: Result<(), GovernanceError>) -> Result<(), PortalError> {
    match result {
        Err(GovernanceError::Invalid(issues)) => {
            tracing::debug!(count = issues.len(), "form not ready");
            Ok(())
        }
        Err(GovernanceError::Field(e)) => {
            tracing::debug!(error = %e, "form not ready");
            Ok(())
        }
        other => other.map_err(PortalError::from),
    }
}
