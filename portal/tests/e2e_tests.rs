//! End-to-end tests: the page objects drive a portal wired to the nullable
//! wallet, bridge, storage and backend, the way the browser suite drives a
//! deployed front-end.

use govtool_bridge::TxStatus;
use govtool_governance::{FormState, GovernanceAction, VotePhase};
use govtool_nullables::{NullBridge, NullSigner, NullStorage, NullTabs, NullVotingPower};
use govtool_portal::harness::fixtures::{self, ProposalFields};
use govtool_portal::harness::{
    EditDRepPage, GovernanceActionsPage, LoginPage, ProposalSubmissionPage, UpdateMetadataPage,
};
use govtool_portal::{Driver, Portal, PortalConfig, PortalError, WalletInfo};
use govtool_session::WALLET_LS_KEY;
use govtool_types::{GovActionId, Lovelace, NetworkId, ProposalType, TxId, VoteChoice};
use govtool_ui::{test_ids, Route};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

type TestPortal = Portal<NullStorage, NullBridge, NullSigner, NullTabs, NullVotingPower>;

const NETWORK: NetworkId = NetworkId::Preview;
const WALLET: &str = "lace";

fn portal_with(storage: NullStorage) -> TestPortal {
    let config = PortalConfig {
        network: NETWORK,
        poll_interval_ms: 1,
        tx_timeout_secs: 5,
        ..PortalConfig::default()
    };
    Portal::new(
        config,
        storage,
        NullBridge::new(),
        NullSigner::new(),
        NullTabs::new(),
        NullVotingPower::new(),
    )
}

fn action(seed: u8, title: &str) -> GovernanceAction {
    GovernanceAction {
        id: GovActionId::new(TxId::new([seed; 32]), 0),
        action_type: "Info".into(),
        title: title.into(),
        submitted_date: "2024-05-01".into(),
        expiry_date: "2024-08-01".into(),
        metadata_url: format!("https://metadata{seed}.example.com/ga.jsonld"),
    }
}

fn wallet() -> WalletInfo {
    fixtures::wallet(WALLET, 1, NETWORK)
}

async fn logged_in(register_drep: bool) -> TestPortal {
    let mut portal = portal_with(NullStorage::new());
    let wallet = wallet();
    if register_drep {
        portal
            .backend()
            .register_drep(wallet.drep_id, Lovelace::from_ada(1_000));
    } else {
        portal
            .backend()
            .set_ada_holder_power(wallet.stake_key, Lovelace::from_ada(40));
    }
    portal.install_wallet(wallet);
    portal.set_actions(vec![action(1, "Fund the docs"), action(2, "Raise the cap")]);
    let mut login = LoginPage::new(&mut portal);
    login.login(WALLET).await.expect("login");
    assert!(login.is_logged_in());
    portal
}

/// Valid proposal filled in and moved on to the metadata anchor step.
async fn at_anchor_step(portal: &mut TestPortal) -> ProposalFields {
    let fields = fixtures::valid_proposal(ProposalType::Info, 3, NETWORK);
    let mut page = ProposalSubmissionPage::new(portal);
    page.goto().unwrap();
    page.add_link().await.unwrap();
    page.fill_form(&fields).unwrap();
    page.continue_to_review().await.unwrap();
    page.acknowledge_and_continue().await.unwrap();
    fields
}

// ---------------------------------------------------------------------------
// Proposal submission
// ---------------------------------------------------------------------------

#[tokio::test]
async fn proposal_form_accepts_valid_data_and_caps_links() {
    for proposal_type in ProposalType::ALL {
        let mut portal = logged_in(false).await;
        let mut page = ProposalSubmissionPage::new(&mut portal);
        assert_eq!(page.goto().unwrap(), Route::ProposalSubmission);
        page.select_type(proposal_type).unwrap();
        page.add_link().await.unwrap();

        for seed in 0..100 {
            let fields = fixtures::valid_proposal(proposal_type, seed, NETWORK);
            let errors = page.validate_form(&fields).unwrap();
            assert!(errors.is_empty(), "{proposal_type}: {errors:?} for {fields:?}");
            assert!(page.can_continue());
        }

        for _ in 1..6 {
            assert!(page.add_link_visible());
            page.add_link().await.unwrap();
        }
        assert!(!page.add_link_visible());
        assert!(matches!(
            page.add_link().await,
            Err(PortalError::NoSuchElement(_))
        ));
    }
}

#[tokio::test]
async fn proposal_form_rejects_invalid_data() {
    for proposal_type in ProposalType::ALL {
        let mut portal = logged_in(false).await;
        let mut page = ProposalSubmissionPage::new(&mut portal);
        page.goto().unwrap();
        page.select_type(proposal_type).unwrap();
        page.add_link().await.unwrap();

        for seed in 0..20 {
            let fields = fixtures::invalid_proposal(proposal_type, seed);
            let errors = page.validate_form(&fields).unwrap();
            for input in [
                test_ids::TITLE_INPUT,
                test_ids::ABSTRACT_INPUT,
                test_ids::MOTIVATION_INPUT,
                test_ids::RATIONALE_INPUT,
            ] {
                assert!(errors.contains(&test_ids::field_error(input)), "{input}: {errors:?}");
            }
            if proposal_type.requires_withdrawal() {
                assert!(errors.contains(&test_ids::field_error(test_ids::AMOUNT_INPUT)));
                assert!(errors.contains(&test_ids::field_error(test_ids::RECEIVING_ADDRESS_INPUT)));
            }
            assert!(!page.can_continue());
        }
    }
}

#[tokio::test]
async fn review_shows_every_entered_field() {
    for proposal_type in ProposalType::ALL {
        let mut portal = logged_in(false).await;
        let fields = fixtures::valid_proposal(proposal_type, 11, NETWORK);
        let mut page = ProposalSubmissionPage::new(&mut portal);
        page.goto().unwrap();
        page.click_type_radio(proposal_type).await.unwrap();
        page.add_link().await.unwrap();
        page.fill_form(&fields).unwrap();
        page.continue_to_review().await.unwrap();

        let driver = page.driver();
        for text in [
            &fields.title,
            &fields.abstract_text,
            &fields.motivation,
            &fields.rationale,
            &fields.link_text,
        ] {
            assert!(driver.has_text(text), "missing {text:?}");
        }
        if let (Some(address), Some(amount)) = (&fields.receiving_address, &fields.amount) {
            assert!(driver.has_text(address));
            assert!(driver.has_text(amount));
        }
        assert!(driver.frame().by_exact_text(proposal_type.label()).is_some());
    }
}

#[tokio::test]
async fn editing_from_review_keeps_the_other_fields() {
    let mut portal = logged_in(false).await;
    let fields = fixtures::valid_proposal(ProposalType::Treasury, 5, NETWORK);
    let mut page = ProposalSubmissionPage::new(&mut portal);
    page.goto().unwrap();
    page.click_type_radio(ProposalType::Treasury).await.unwrap();
    page.add_link().await.unwrap();
    assert!(page.validate_form(&fields).unwrap().is_empty());
    page.continue_to_review().await.unwrap();

    page.edit_submission().await.unwrap();
    page.fill_form(&ProposalFields {
        title: "Renamed".into(),
        ..fields.clone()
    })
    .unwrap();
    page.continue_to_review().await.unwrap();

    let driver = page.driver();
    assert!(driver.has_text("Renamed"));
    assert!(driver.has_text(&fields.abstract_text));
    assert!(driver.has_text(&fields.link_url));
    assert!(driver.has_text(&fields.link_text));
    assert!(driver.has_text(fields.receiving_address.as_deref().unwrap()));
}

#[tokio::test]
async fn proposal_metadata_anchor_is_validated() {
    let mut portal = logged_in(false).await;
    at_anchor_step(&mut portal).await;
    let mut page = ProposalSubmissionPage::new(&mut portal);

    for seed in 0..100 {
        page.fill_metadata_url(&fixtures::valid_url(seed)).unwrap();
        assert!(!page.url_error_visible(), "{}", fixtures::valid_url(seed));
    }
    for seed in 0..100 {
        page.fill_metadata_url(&fixtures::invalid_url(seed)).unwrap();
        assert!(page.url_error_visible(), "{}", fixtures::invalid_url(seed));
    }
    page.fill_metadata_url(&fixtures::oversized_url()).unwrap();
    assert!(page.url_error_visible());
}

#[tokio::test]
async fn unreachable_metadata_url_opens_the_url_error_modal() {
    let mut portal = logged_in(false).await;
    at_anchor_step(&mut portal).await;
    let url = fixtures::valid_url(42);
    portal.bridge().mark_unreachable(&url);

    let mut page = ProposalSubmissionPage::new(&mut portal);
    page.fill_metadata_url(&url).unwrap();
    page.fill_metadata_hash(&fixtures::valid_hash(42)).unwrap();
    page.submit().await.unwrap();

    let frame = portal.frame();
    let title = frame
        .by_test_id(test_ids::URL_ERROR_MODAL_TITLE)
        .expect("url error modal title");
    assert!(title
        .text
        .to_lowercase()
        .contains("the url you entered cannot be found"));
    assert!(matches!(portal.proposal().state(), FormState::Rejected { .. }));
    assert!(!portal.session().is_pending_transaction());
    assert_eq!(portal.bridge().submission_count(), 0);
}

#[tokio::test]
async fn proposal_submission_is_confirmed() {
    let mut portal = logged_in(false).await;
    at_anchor_step(&mut portal).await;
    portal.bridge().set_pending_polls(3);

    let mut page = ProposalSubmissionPage::new(&mut portal);
    page.fill_metadata_url(&fixtures::valid_url(7)).unwrap();
    page.fill_metadata_hash(&fixtures::valid_hash(7)).unwrap();
    page.submit().await.unwrap();

    assert!(matches!(portal.proposal().state(), FormState::Confirmed { .. }));
    assert!(portal.has_text("Governance action submitted"));
    assert_eq!(portal.bridge().submission_count(), 1);
    assert_eq!(portal.signer().signed().len(), 1);
    assert!(!portal.session().is_pending_transaction());
}

#[tokio::test]
async fn declined_signature_returns_to_review_silently() {
    let mut portal = logged_in(false).await;
    at_anchor_step(&mut portal).await;
    portal.signer().set_decline(true);

    let mut page = ProposalSubmissionPage::new(&mut portal);
    page.fill_metadata_url(&fixtures::valid_url(8)).unwrap();
    page.fill_metadata_hash(&fixtures::valid_hash(8)).unwrap();
    page.submit().await.unwrap();

    assert_eq!(portal.proposal().state(), &FormState::Reviewing);
    assert!(!portal.modals().is_open());
    assert_eq!(portal.bridge().submission_count(), 0);
}

// ---------------------------------------------------------------------------
// Governance actions and voting
// ---------------------------------------------------------------------------

#[tokio::test]
async fn drep_sees_vote_controls_and_context_modal() {
    let mut portal = logged_in(true).await;
    let mut actions = GovernanceActionsPage::new(&mut portal);
    actions.goto().unwrap();
    let mut details = actions.view_first_proposal().await.unwrap();

    assert!(details.vote_visible());
    assert!(details.radios_visible());
    assert!(details.driver().is_visible(test_ids::GOVERNANCE_ACTION_TYPE));
    assert!(details.driver().is_visible(test_ids::SUBMISSION_DATE));
    assert!(details.driver().is_visible(test_ids::EXPIRY_DATE));
    assert!(!details.vote_enabled());

    details.open_context().await.unwrap();
    assert!(details.context_input_visible());
    details.cancel_modal().await.unwrap();
    assert!(!details.context_input_visible());

    details.choose(VoteChoice::Yes).await.unwrap();
    assert!(details.vote_enabled());
}

#[tokio::test]
async fn wallet_without_voting_power_gets_no_vote_panel() {
    let mut portal = portal_with(NullStorage::new());
    portal.install_wallet(wallet());
    portal.set_actions(vec![action(1, "Fund the docs")]);
    LoginPage::new(&mut portal).login(WALLET).await.unwrap();

    let mut actions = GovernanceActionsPage::new(&mut portal);
    actions.goto().unwrap();
    let details = actions.view_first_proposal().await.unwrap();
    assert!(!details.vote_visible());
    assert!(details.driver().has_text("Fund the docs"));
}

#[tokio::test]
async fn external_link_shows_a_warning() {
    let mut portal = logged_in(true).await;
    let mut actions = GovernanceActionsPage::new(&mut portal);
    actions.goto().unwrap();
    let mut details = actions.view_first_proposal().await.unwrap();

    details.open_external().await.unwrap();
    assert!(details.external_link_modal_visible());
    assert!(details.driver().has_text("Be Careful"));
    assert!(details.driver().has_text("https://metadata1.example.com/ga.jsonld"));
}

#[tokio::test]
async fn external_link_continue_opens_exactly_one_tab() {
    let mut portal = logged_in(true).await;
    let mut actions = GovernanceActionsPage::new(&mut portal);
    actions.goto().unwrap();
    let mut details = actions.view_first_proposal().await.unwrap();

    details.open_external().await.unwrap();
    details.cancel_modal().await.unwrap();
    details.open_external().await.unwrap();
    details.close_modal().await.unwrap();
    assert_eq!(portal.tabs().count(), 0);

    let mut actions = GovernanceActionsPage::new(&mut portal);
    actions.goto().unwrap();
    let mut details = actions.view_first_proposal().await.unwrap();
    details.open_external().await.unwrap();
    details.continue_modal().await.unwrap();
    assert!(!details.external_link_modal_visible());
    assert_eq!(portal.tabs().count(), 1);
    assert_eq!(
        portal.tabs().opened(),
        vec!["https://metadata1.example.com/ga.jsonld".to_string()]
    );
}

#[tokio::test]
async fn scheme_relative_metadata_link_still_warns() {
    let mut portal = logged_in(true).await;
    portal.set_actions(vec![GovernanceAction {
        metadata_url: "//evil.com/ga.jsonld".into(),
        ..action(1, "Fund the docs")
    }]);
    let mut actions = GovernanceActionsPage::new(&mut portal);
    actions.goto().unwrap();
    let mut details = actions.view_first_proposal().await.unwrap();

    details.open_external().await.unwrap();
    assert!(details.external_link_modal_visible());
    details.cancel_modal().await.unwrap();
    assert_eq!(portal.tabs().count(), 0);
}

#[tokio::test]
async fn vote_shows_success_notification() {
    let mut portal = logged_in(true).await;
    let mut actions = GovernanceActionsPage::new(&mut portal);
    actions.goto().unwrap();
    let mut details = actions.view_first_proposal().await.unwrap();

    details.vote().await.unwrap();
    assert!(details.vote_success_visible());
    assert!(matches!(
        portal.vote_form().map(|f| f.phase()),
        Some(VotePhase::Confirmed(_))
    ));
}

#[tokio::test]
async fn re_vote_replaces_the_previous_choice() {
    let mut portal = logged_in(true).await;
    portal.bridge().set_pending_polls(2);

    let mut actions = GovernanceActionsPage::new(&mut portal);
    actions.goto().unwrap();
    let mut details = actions.view_first_proposal().await.unwrap();
    details.vote().await.unwrap();

    let mut actions = GovernanceActionsPage::new(&mut portal);
    actions.goto().unwrap();
    actions.voted_tab().await.unwrap();
    assert_eq!(actions.my_votes(), vec!["Yes".to_string()]);

    let mut details = actions.view_first_voted_proposal().await.unwrap();
    assert!(details.driver().has_text("You voted Yes"));
    details.re_vote().await.unwrap();

    let mut actions = GovernanceActionsPage::new(&mut portal);
    actions.goto().unwrap();
    actions.voted_tab().await.unwrap();
    assert_eq!(actions.my_votes(), vec!["No".to_string()]);
    assert_eq!(portal.voted().len(), 1);
    assert_eq!(portal.bridge().submission_count(), 2);
}

#[tokio::test]
async fn vote_rationale_travels_with_the_vote() {
    let mut portal = logged_in(true).await;
    let mut actions = GovernanceActionsPage::new(&mut portal);
    actions.goto().unwrap();
    let mut details = actions.view_first_proposal().await.unwrap();

    details.choose(VoteChoice::Abstain).await.unwrap();
    details.open_context().await.unwrap();
    details.fill_context("https://rationale.example.com/why").unwrap();
    details.confirm_context().await.unwrap();
    assert!(details.driver().has_text("https://rationale.example.com/why"));
    details.cast(VoteChoice::Abstain).await.unwrap();

    let submitted = portal.bridge().submitted();
    let json = serde_json::to_value(&submitted[0].1).unwrap();
    assert_eq!(json["kind"], "vote");
    assert_eq!(json["payload"]["rationale"], "https://rationale.example.com/why");
}

#[tokio::test]
async fn declined_vote_stays_editable() {
    let mut portal = logged_in(true).await;
    portal.signer().set_decline(true);
    let mut actions = GovernanceActionsPage::new(&mut portal);
    actions.goto().unwrap();
    let mut details = actions.view_first_proposal().await.unwrap();

    details.vote().await.unwrap();
    assert!(!details.vote_success_visible());
    assert!(details.vote_enabled());
    assert!(portal.voted().is_empty());
}

#[tokio::test]
async fn failed_vote_transaction_shows_status_error() {
    let mut portal = logged_in(true).await;
    portal.bridge().set_outcome(TxStatus::Failed {
        reason: "insufficient_funds".into(),
    });
    let mut actions = GovernanceActionsPage::new(&mut portal);
    actions.goto().unwrap();
    let mut details = actions.view_first_proposal().await.unwrap();

    details.vote().await.unwrap();
    assert!(details.driver().is_visible(test_ids::STATUS_ERROR_MODAL));
    assert!(!portal.session().is_pending_transaction());
    assert_eq!(portal.vote_form().map(|f| f.phase()), Some(VotePhase::Editing));
    assert!(portal.voted().is_empty());
}

// ---------------------------------------------------------------------------
// DRep profile and metadata
// ---------------------------------------------------------------------------

#[tokio::test]
async fn edit_drep_accepts_valid_data_and_caps_links() {
    let mut portal = logged_in(true).await;
    let mut page = EditDRepPage::new(&mut portal);
    assert_eq!(page.goto().unwrap(), Route::EditDRep);

    for seed in 0..100 {
        let errors = page
            .validate_form(
                &fixtures::valid_drep_name(seed),
                &fixtures::valid_email(seed),
                &fixtures::sentence(seed, 30),
                &fixtures::valid_url(seed),
            )
            .await
            .unwrap();
        assert!(errors.is_empty(), "{errors:?}");
    }

    for _ in 1..6 {
        assert!(page.add_link_visible());
        page.add_link().await.unwrap();
    }
    assert!(!page.add_link_visible());
}

#[tokio::test]
async fn edit_drep_rejects_invalid_data() {
    let mut portal = logged_in(true).await;
    let mut page = EditDRepPage::new(&mut portal);
    page.goto().unwrap();

    for seed in 0..100 {
        let errors = page
            .validate_form(
                &fixtures::invalid_drep_name(seed),
                &fixtures::invalid_email(seed),
                &fixtures::sentence(seed, 120),
                &fixtures::invalid_url(seed),
            )
            .await
            .unwrap();
        for input in [
            test_ids::NAME_INPUT.to_string(),
            test_ids::EMAIL_INPUT.to_string(),
            test_ids::BIO_INPUT.to_string(),
            test_ids::link_url_input(0),
        ] {
            assert!(errors.contains(&test_ids::field_error(&input)), "{input}: {errors:?}");
        }
    }
}

#[tokio::test]
async fn edit_drep_metadata_anchor_is_validated() {
    let mut portal = logged_in(true).await;
    let mut page = EditDRepPage::new(&mut portal);
    page.goto().unwrap();
    page.to_anchor_step("Test_DRep").await.unwrap();

    for seed in 0..100 {
        page.fill_metadata_url(&fixtures::valid_url(seed)).unwrap();
        assert!(!page.url_error_visible());
    }
    for seed in 0..100 {
        page.fill_metadata_url(&fixtures::invalid_url(seed)).unwrap();
        assert!(page.url_error_visible());
    }
    page.fill_metadata_url(&fixtures::oversized_url()).unwrap();
    assert!(page.url_error_visible());
}

#[tokio::test]
async fn edit_drep_submits_profile_with_anchor() {
    let mut portal = logged_in(true).await;
    let mut page = EditDRepPage::new(&mut portal);
    page.goto().unwrap();
    page.to_anchor_step("Test_DRep").await.unwrap();
    page.fill_metadata_url("https://drep.example.com/profile.jsonld").unwrap();
    page.fill_metadata_hash(&fixtures::valid_hash(1)).unwrap();
    page.confirm().await.unwrap();

    assert_eq!(portal.route(), Route::Dashboard);
    let json = serde_json::to_value(&portal.bridge().submitted()[0].1).unwrap();
    assert_eq!(json["kind"], "dRepUpdate");
    assert_eq!(json["payload"]["profile"]["name"], "Test_DRep");
}

#[tokio::test]
async fn update_metadata_redirects_home_without_session() {
    let mut portal = portal_with(NullStorage::new());
    let mut page = UpdateMetadataPage::new(&mut portal);
    assert_eq!(page.goto().unwrap(), Route::Home);

    let stake_key = format!("{WALLET_LS_KEY}_stake_key");
    let half = NullStorage::with_items([(stake_key.as_str(), "e0")]);
    let mut portal = portal_with(half);
    assert_eq!(UpdateMetadataPage::new(&mut portal).goto().unwrap(), Route::Home);
}

#[tokio::test]
async fn unreadable_storage_redirects_home() {
    let mut portal = logged_in(true).await;
    portal.session().store().inner().set_unavailable(true);
    assert_eq!(portal.goto(Route::Dashboard.path()).unwrap(), Route::Home);
}

#[tokio::test]
async fn update_metadata_confirms_and_returns_to_dashboard() {
    let mut portal = logged_in(true).await;
    let mut page = UpdateMetadataPage::new(&mut portal);
    assert_eq!(page.goto().unwrap(), Route::UpdateMetadata);
    assert!(!page.confirm_enabled());

    page.fill("https://testdotcom", "abc").unwrap();
    assert!(page.url_error_visible());
    assert!(page.hash_error_visible());
    assert!(!page.confirm_enabled());

    page.fill("https://test.com", &fixtures::valid_hash(9)).unwrap();
    assert!(!page.url_error_visible());
    assert!(page.confirm_enabled());
    page.confirm().await.unwrap();

    assert_eq!(portal.route(), Route::Dashboard);
    assert_eq!(portal.bridge().submission_count(), 1);
}

#[tokio::test]
async fn metadata_howto_link_opens_the_guide_after_warning() {
    let mut portal = logged_in(true).await;
    let mut page = UpdateMetadataPage::new(&mut portal);
    page.goto().unwrap();
    page.fill("https://test.com", &fixtures::valid_hash(4)).unwrap();

    page.open_howto().await.unwrap();
    assert!(page.external_link_modal_visible());
    page.continue_modal().await.unwrap();
    assert!(!page.external_link_modal_visible());
    assert!(page.confirm_enabled());

    assert_eq!(portal.route(), Route::UpdateMetadata);
    assert_eq!(
        portal.tabs().opened(),
        vec![govtool_ui::metadata_page::METADATA_ANCHOR_HOWTO.to_string()]
    );
}

#[tokio::test]
async fn dashboard_chip_shows_drep_voting_power() {
    let portal = logged_in(true).await;
    let frame = portal.frame();
    assert_eq!(portal.route(), Route::Dashboard);
    assert!(frame.is_visible(test_ids::VOTING_POWER_INFO));
    assert_eq!(
        frame
            .by_test_id(test_ids::VOTING_POWER_VALUE)
            .map(|e| e.text.as_str()),
        Some("₳ 1000")
    );
    assert!(frame.is_visible(test_ids::UPDATE_METADATA));
}
