//! Page objects, one per screen.

use govtool_types::{ProposalType, VoteChoice};
use govtool_ui::action_view::choice_radio;
use govtool_ui::{test_ids, ElementKind, Route};

use crate::error::PortalError;
use crate::harness::fixtures::ProposalFields;
use crate::harness::Driver;

/// Test ids of every inline field error currently shown.
fn visible_field_errors<D: Driver>(driver: &D) -> Vec<String> {
    driver
        .frame()
        .elements()
        .iter()
        .filter(|e| e.visible)
        .filter_map(|e| e.test_id.as_deref())
        .filter(|id| id.ends_with(test_ids::FIELD_ERROR_SUFFIX) || *id == test_ids::INVALID_URL_ERROR)
        .map(str::to_string)
        .collect()
}

pub struct LoginPage<'a, D> {
    driver: &'a mut D,
}

impl<'a, D: Driver> LoginPage<'a, D> {
    pub fn new(driver: &'a mut D) -> Self {
        Self { driver }
    }

    /// Connect through the hero button and the wallet picker.
    pub async fn login(&mut self, wallet_name: &str) -> Result<(), PortalError> {
        self.driver.goto(Route::Home.path())?;
        self.driver.click(test_ids::HERO_CONNECT_WALLET).await?;
        self.driver.click(&test_ids::wallet_button(wallet_name)).await
    }

    pub fn is_logged_in(&self) -> bool {
        self.driver.is_visible(test_ids::DISCONNECT)
    }

    pub async fn logout(&mut self) -> Result<(), PortalError> {
        self.driver.goto(Route::Dashboard.path())?;
        self.driver.click(test_ids::DISCONNECT).await
    }
}

pub struct ProposalSubmissionPage<'a, D> {
    driver: &'a mut D,
}

impl<'a, D: Driver> ProposalSubmissionPage<'a, D> {
    pub fn new(driver: &'a mut D) -> Self {
        Self { driver }
    }

    pub fn goto(&mut self) -> Result<Route, PortalError> {
        self.driver.goto(Route::ProposalSubmission.path())
    }

    pub fn driver(&self) -> &D {
        &*self.driver
    }

    pub fn select_type(&mut self, proposal_type: ProposalType) -> Result<(), PortalError> {
        self.driver
            .select_option(test_ids::GOVERNANCE_ACTION_TYPE, proposal_type.label())
    }

    pub async fn click_type_radio(&mut self, proposal_type: ProposalType) -> Result<(), PortalError> {
        self.driver.click(&test_ids::radio(proposal_type.label())).await
    }

    pub async fn add_link(&mut self) -> Result<(), PortalError> {
        self.driver.click(test_ids::ADD_LINK).await
    }

    pub fn add_link_visible(&self) -> bool {
        self.driver.is_visible(test_ids::ADD_LINK)
    }

    pub fn can_continue(&self) -> bool {
        self.driver.is_enabled(test_ids::CONTINUE)
    }

    /// Fill every field; the first link row must already exist.
    pub fn fill_form(&mut self, fields: &ProposalFields) -> Result<(), PortalError> {
        self.driver.fill(test_ids::TITLE_INPUT, &fields.title)?;
        self.driver.fill(test_ids::ABSTRACT_INPUT, &fields.abstract_text)?;
        self.driver.fill(test_ids::MOTIVATION_INPUT, &fields.motivation)?;
        self.driver.fill(test_ids::RATIONALE_INPUT, &fields.rationale)?;
        if let Some(address) = &fields.receiving_address {
            self.driver.fill(test_ids::RECEIVING_ADDRESS_INPUT, address)?;
        }
        if let Some(amount) = &fields.amount {
            self.driver.fill(test_ids::AMOUNT_INPUT, amount)?;
        }
        self.driver.fill(&test_ids::link_url_input(0), &fields.link_url)?;
        self.driver.fill(&test_ids::link_text_input(0), &fields.link_text)
    }

    /// Fill and report the field errors left on screen.
    pub fn validate_form(&mut self, fields: &ProposalFields) -> Result<Vec<String>, PortalError> {
        self.fill_form(fields)?;
        Ok(visible_field_errors(&*self.driver))
    }

    pub async fn continue_to_review(&mut self) -> Result<(), PortalError> {
        self.driver.click(test_ids::CONTINUE).await
    }

    pub async fn edit_submission(&mut self) -> Result<(), PortalError> {
        self.driver.click(test_ids::EDIT_SUBMISSION).await
    }

    /// Tick the acknowledgement and move on to the metadata anchor step.
    pub async fn acknowledge_and_continue(&mut self) -> Result<(), PortalError> {
        self.driver.check_by_id(test_ids::SUBMISSION_CHECKBOX_ID)?;
        self.driver.click(test_ids::CONTINUE).await
    }

    pub fn fill_metadata_url(&mut self, url: &str) -> Result<(), PortalError> {
        self.driver.fill(test_ids::URL_INPUT, url)
    }

    pub fn fill_metadata_hash(&mut self, hash: &str) -> Result<(), PortalError> {
        self.driver.fill(test_ids::HASH_INPUT, hash)
    }

    pub fn url_error_visible(&self) -> bool {
        self.driver.is_visible(test_ids::INVALID_URL_ERROR)
    }

    pub async fn submit(&mut self) -> Result<(), PortalError> {
        self.driver.click(test_ids::SUBMIT).await
    }
}

pub struct GovernanceActionsPage<'a, D> {
    driver: &'a mut D,
}

impl<'a, D: Driver> GovernanceActionsPage<'a, D> {
    pub fn new(driver: &'a mut D) -> Self {
        Self { driver }
    }

    pub fn goto(&mut self) -> Result<Route, PortalError> {
        self.driver.goto(Route::GovernanceActions.path())
    }

    pub async fn voted_tab(&mut self) -> Result<(), PortalError> {
        self.driver.click(test_ids::VOTED_TAB).await
    }

    fn first_view_button(&self) -> Result<String, PortalError> {
        self.driver
            .frame()
            .elements()
            .iter()
            .filter(|e| e.visible && e.kind == ElementKind::Button)
            .filter_map(|e| e.test_id.as_deref())
            .find(|id| id.starts_with("govaction-") && id.ends_with("-view-detail"))
            .map(str::to_string)
            .ok_or_else(|| PortalError::NoSuchElement("govaction view-detail".into()))
    }

    /// Open the first listed action.
    pub async fn view_first_proposal(self) -> Result<GovernanceActionDetailsPage<'a, D>, PortalError> {
        let button = self.first_view_button()?;
        self.driver.click(&button).await?;
        Ok(GovernanceActionDetailsPage::new(self.driver))
    }

    /// Open the first action on the voted tab.
    pub async fn view_first_voted_proposal(
        mut self,
    ) -> Result<GovernanceActionDetailsPage<'a, D>, PortalError> {
        if self.driver.route() != Route::VotedActions {
            self.voted_tab().await?;
        }
        self.view_first_proposal().await
    }

    /// Labels shown under `my-vote`, in list order.
    pub fn my_votes(&self) -> Vec<String> {
        self.driver
            .frame()
            .all_by_test_id(test_ids::MY_VOTE)
            .filter(|e| e.visible)
            .map(|e| e.text.clone())
            .collect()
    }
}

pub struct GovernanceActionDetailsPage<'a, D> {
    driver: &'a mut D,
}

impl<'a, D: Driver> GovernanceActionDetailsPage<'a, D> {
    pub fn new(driver: &'a mut D) -> Self {
        Self { driver }
    }

    pub fn driver(&self) -> &D {
        &*self.driver
    }

    pub fn into_driver(self) -> &'a mut D {
        self.driver
    }

    pub fn vote_visible(&self) -> bool {
        self.driver.is_visible(test_ids::VOTE)
    }

    pub fn vote_enabled(&self) -> bool {
        self.driver.is_enabled(test_ids::VOTE)
    }

    pub fn radios_visible(&self) -> bool {
        VoteChoice::ALL
            .into_iter()
            .all(|c| self.driver.is_visible(choice_radio(c)))
    }

    pub async fn choose(&mut self, choice: VoteChoice) -> Result<(), PortalError> {
        self.driver.click(choice_radio(choice)).await
    }

    /// Vote `choice` and wait for the transaction to settle.
    pub async fn cast(&mut self, choice: VoteChoice) -> Result<(), PortalError> {
        self.choose(choice).await?;
        self.driver.click(test_ids::VOTE).await
    }

    pub async fn vote(&mut self) -> Result<(), PortalError> {
        self.cast(VoteChoice::Yes).await
    }

    pub async fn re_vote(&mut self) -> Result<(), PortalError> {
        self.cast(VoteChoice::No).await
    }

    pub async fn open_context(&mut self) -> Result<(), PortalError> {
        self.driver.click(test_ids::PROVIDE_CONTEXT).await
    }

    pub fn fill_context(&mut self, url: &str) -> Result<(), PortalError> {
        self.driver.fill(test_ids::CONTEXT_INPUT, url)
    }

    pub async fn confirm_context(&mut self) -> Result<(), PortalError> {
        self.driver.click(test_ids::CONTEXT_CONFIRM).await
    }

    pub fn context_input_visible(&self) -> bool {
        self.driver.is_visible(test_ids::CONTEXT_INPUT)
    }

    pub async fn open_external(&mut self) -> Result<(), PortalError> {
        self.driver.click(test_ids::EXTERNAL_MODAL_BUTTON).await
    }

    pub fn external_link_modal_visible(&self) -> bool {
        self.driver.is_visible(test_ids::EXTERNAL_LINK_MODAL)
    }

    pub fn vote_success_visible(&self) -> bool {
        self.driver.is_visible(test_ids::VOTE_SUCCESS_MODAL)
    }

    pub async fn continue_modal(&mut self) -> Result<(), PortalError> {
        self.driver.click(test_ids::CONTINUE_MODAL).await
    }

    pub async fn cancel_modal(&mut self) -> Result<(), PortalError> {
        self.driver.click(test_ids::CANCEL_MODAL).await
    }

    pub async fn close_modal(&mut self) -> Result<(), PortalError> {
        self.driver.click(test_ids::CLOSE_MODAL).await
    }
}

pub struct EditDRepPage<'a, D> {
    driver: &'a mut D,
}

impl<'a, D: Driver> EditDRepPage<'a, D> {
    pub fn new(driver: &'a mut D) -> Self {
        Self { driver }
    }

    pub fn goto(&mut self) -> Result<Route, PortalError> {
        self.driver.goto(Route::EditDRep.path())
    }

    pub async fn add_link(&mut self) -> Result<(), PortalError> {
        self.driver.click(test_ids::ADD_LINK).await
    }

    pub fn add_link_visible(&self) -> bool {
        self.driver.is_visible(test_ids::ADD_LINK)
    }

    /// Fill the profile step, adding a link row if none exists, and report
    /// the field errors left on screen.
    pub async fn validate_form(
        &mut self,
        name: &str,
        email: &str,
        bio: &str,
        link: &str,
    ) -> Result<Vec<String>, PortalError> {
        self.driver.fill(test_ids::NAME_INPUT, name)?;
        self.driver.fill(test_ids::EMAIL_INPUT, email)?;
        self.driver.fill(test_ids::BIO_INPUT, bio)?;
        let first_link = test_ids::link_url_input(0);
        if !self.driver.is_visible(&first_link) {
            self.add_link().await?;
        }
        self.driver.fill(&first_link, link)?;
        Ok(visible_field_errors(&*self.driver))
    }

    /// Name only, storage acknowledgement, then on to the anchor step.
    pub async fn to_anchor_step(&mut self, name: &str) -> Result<(), PortalError> {
        self.driver.fill(test_ids::NAME_INPUT, name)?;
        self.driver.click(test_ids::CONTINUE).await?;
        self.driver.click(test_ids::STORE_DATA_CHECKBOX).await?;
        self.driver.click(test_ids::CONTINUE).await
    }

    pub fn fill_metadata_url(&mut self, url: &str) -> Result<(), PortalError> {
        self.driver.fill(test_ids::URL_INPUT, url)
    }

    pub fn fill_metadata_hash(&mut self, hash: &str) -> Result<(), PortalError> {
        self.driver.fill(test_ids::HASH_INPUT, hash)
    }

    pub fn url_error_visible(&self) -> bool {
        self.driver.is_visible(test_ids::INVALID_URL_ERROR)
    }

    pub async fn confirm(&mut self) -> Result<(), PortalError> {
        self.driver.click(test_ids::CONFIRM).await
    }
}

pub struct UpdateMetadataPage<'a, D> {
    driver: &'a mut D,
}

impl<'a, D: Driver> UpdateMetadataPage<'a, D> {
    pub fn new(driver: &'a mut D) -> Self {
        Self { driver }
    }

    pub fn goto(&mut self) -> Result<Route, PortalError> {
        self.driver.goto(Route::UpdateMetadata.path())
    }

    pub fn fill(&mut self, url: &str, hash: &str) -> Result<(), PortalError> {
        self.driver.fill(test_ids::URL_INPUT, url)?;
        self.driver.fill(test_ids::HASH_INPUT, hash)
    }

    pub fn confirm_enabled(&self) -> bool {
        self.driver.is_enabled(test_ids::CONFIRM)
    }

    pub fn url_error_visible(&self) -> bool {
        self.driver.is_visible(test_ids::INVALID_URL_ERROR)
    }

    pub fn hash_error_visible(&self) -> bool {
        self.driver.is_visible(test_ids::INVALID_HASH_ERROR)
    }

    pub async fn confirm(&mut self) -> Result<(), PortalError> {
        self.driver.click(test_ids::CONFIRM).await
    }

    pub async fn cancel(&mut self) -> Result<(), PortalError> {
        self.driver.click(test_ids::CANCEL).await
    }

    pub async fn open_howto(&mut self) -> Result<(), PortalError> {
        self.driver.click(test_ids::ANCHOR_HOWTO_LINK).await
    }

    pub fn external_link_modal_visible(&self) -> bool {
        self.driver.is_visible(test_ids::EXTERNAL_LINK_MODAL)
    }

    pub async fn continue_modal(&mut self) -> Result<(), PortalError> {
        self.driver.click(test_ids::CONTINUE_MODAL).await
    }
}
