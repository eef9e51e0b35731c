//! DRep metadata forms: the bare anchor update and the full profile editor.

use serde::{Deserialize, Serialize};

use govtool_types::MetadataAnchor;
use govtool_validation::drep::{validate_bio, validate_drep_name, validate_email};
use govtool_validation::{
    anchor_url_validity, validate_anchor, validate_anchor_hash, AnchorError, FieldError, Validity,
};

use crate::error::GovernanceError;
use crate::links::{Link, LinkList};

/// Profile details published in the DRep metadata document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DRepProfile {
    pub name: String,
    pub email: Option<String>,
    pub bio: String,
    pub links: Vec<Link>,
}

/// What the submission bridge receives for a DRep update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DRepUpdatePayload {
    pub anchor: MetadataAnchor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<DRepProfile>,
}

/// URL + hash inputs shared by the update-metadata page and the last
/// step of the profile editor.
#[derive(Clone, Debug, Default)]
pub struct AnchorInput {
    url: String,
    hash: String,
    url_touched: bool,
    hash_touched: bool,
}

impl AnchorInput {
    pub fn set_url(&mut self, url: &str) {
        self.url = url.to_string();
        self.url_touched = true;
    }

    pub fn set_hash(&mut self, hash: &str) {
        self.hash = hash.to_string();
        self.hash_touched = true;
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn url_validity(&self) -> Validity<AnchorError> {
        anchor_url_validity(&self.url, self.url_touched)
    }

    pub fn hash_validity(&self) -> Validity<AnchorError> {
        if self.hash.is_empty() && !self.hash_touched {
            return Validity::Neutral;
        }
        Validity::from_result(validate_anchor_hash(&self.hash))
    }

    /// Both halves valid: the confirm button is enabled.
    pub fn is_valid(&self) -> bool {
        self.url_validity().is_valid() && self.hash_validity().is_valid()
    }

    pub fn anchor(&self) -> Result<MetadataAnchor, AnchorError> {
        validate_anchor(&self.url, &self.hash)
    }
}

/// The update-metadata page form.
#[derive(Clone, Debug, Default)]
pub struct MetadataUpdateForm {
    input: AnchorInput,
    submitting: bool,
}

impl MetadataUpdateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &AnchorInput {
        &self.input
    }

    pub fn set_url(&mut self, url: &str) {
        self.input.set_url(url);
    }

    pub fn set_hash(&mut self, hash: &str) {
        self.input.set_hash(hash);
    }

    pub fn can_confirm(&self) -> bool {
        !self.submitting && self.input.is_valid()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit(&mut self) -> Result<DRepUpdatePayload, GovernanceError> {
        if self.submitting {
            return Err(GovernanceError::SubmissionInFlight);
        }
        let anchor = self.input.anchor()?;
        tracing::info!(url = %anchor.url, "submitting metadata update");
        self.submitting = true;
        Ok(DRepUpdatePayload {
            anchor,
            profile: None,
        })
    }

    /// The bridge call finished either way; the inputs become editable again.
    pub fn on_settled(&mut self) {
        self.submitting = false;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileStep {
    Profile,
    StoreData,
    Anchor,
}

/// Edit-DRep form: profile fields, storage acknowledgement, then the anchor.
#[derive(Clone, Debug)]
pub struct DRepProfileForm {
    pub name: String,
    pub email: String,
    pub bio: String,
    links: LinkList,
    step: ProfileStep,
    anchor: AnchorInput,
    submitting: bool,
}

impl Default for DRepProfileForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            bio: String::new(),
            links: LinkList::new(),
            step: ProfileStep::Profile,
            anchor: AnchorInput::default(),
            submitting: false,
        }
    }
}

impl DRepProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill from the currently published profile.
    pub fn from_profile(profile: &DRepProfile) -> Result<Self, GovernanceError> {
        let mut form = Self {
            name: profile.name.clone(),
            email: profile.email.clone().unwrap_or_default(),
            bio: profile.bio.clone(),
            ..Self::default()
        };
        for link in &profile.links {
            let i = form.links.add()?;
            form.links.set(i, &link.url, &link.text)?;
        }
        Ok(form)
    }

    pub fn step(&self) -> ProfileStep {
        self.step
    }

    pub fn links(&self) -> &LinkList {
        &self.links
    }

    pub fn links_mut(&mut self) -> &mut LinkList {
        &mut self.links
    }

    pub fn anchor(&self) -> &AnchorInput {
        &self.anchor
    }

    pub fn anchor_mut(&mut self) -> &mut AnchorInput {
        &mut self.anchor
    }

    fn profile_errors(&self) -> Vec<FieldError> {
        let link_checks = self.links.iter().filter(|l| !l.url.is_empty()).map(|l| {
            govtool_validation::anchor::validate_anchor_url(&l.url).map_err(FieldError::from)
        });
        [
            validate_drep_name(&self.name),
            validate_email(&self.email),
            validate_bio(&self.bio),
        ]
        .into_iter()
        .chain(link_checks)
        .filter_map(Result::err)
        .collect()
    }

    pub fn profile(&self) -> DRepProfile {
        DRepProfile {
            name: self.name.clone(),
            email: (!self.email.is_empty()).then(|| self.email.clone()),
            bio: self.bio.clone(),
            links: self.links.filled(),
        }
    }

    /// `Profile → StoreData` once the profile fields validate.
    pub fn continue_to_storage(&mut self) -> Result<(), GovernanceError> {
        if self.step != ProfileStep::Profile {
            return Err(GovernanceError::WrongState("not on profile step"));
        }
        if let Some(first) = self.profile_errors().into_iter().next() {
            return Err(first.into());
        }
        self.step = ProfileStep::StoreData;
        Ok(())
    }

    /// `StoreData → Anchor` requires the storage acknowledgement.
    pub fn acknowledge_storage(&mut self, consent: bool) -> Result<(), GovernanceError> {
        if self.step != ProfileStep::StoreData {
            return Err(GovernanceError::WrongState("not on storage step"));
        }
        if !consent {
            return Err(GovernanceError::ConsentRequired);
        }
        self.step = ProfileStep::Anchor;
        Ok(())
    }

    pub fn back(&mut self) {
        self.step = match self.step {
            ProfileStep::Anchor => ProfileStep::StoreData,
            _ => ProfileStep::Profile,
        };
    }

    pub fn submit(&mut self) -> Result<DRepUpdatePayload, GovernanceError> {
        if self.step != ProfileStep::Anchor {
            return Err(GovernanceError::WrongState("not on anchor step"));
        }
        if self.submitting {
            return Err(GovernanceError::SubmissionInFlight);
        }
        let anchor = self.anchor.anchor()?;
        self.submitting = true;
        Ok(DRepUpdatePayload {
            anchor,
            profile: Some(self.profile()),
        })
    }

    pub fn on_settled(&mut self) {
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

    #[test]
    fn metadata_confirm_needs_both_inputs() {
        let mut form = MetadataUpdateForm::new();
        assert!(!form.can_confirm());
        assert_eq!(form.input().url_validity(), Validity::Neutral);

        form.set_url("https://example.com/drep.jsonld");
        assert!(!form.can_confirm());
        form.set_hash("abc");
        assert!(form.input().hash_validity().shows_error());
        form.set_hash(HASH);
        assert!(form.can_confirm());

        let payload = form.submit().unwrap();
        assert_eq!(payload.anchor.hash.to_string(), HASH);
        assert_eq!(payload.profile, None);
        assert!(!form.can_confirm());
        assert_eq!(form.submit(), Err(GovernanceError::SubmissionInFlight));
        form.on_settled();
        assert!(form.can_confirm());
    }

    #[test]
    fn cleared_url_shows_error_after_touch() {
        let mut form = MetadataUpdateForm::new();
        form.set_url("https://example.com");
        form.set_url("");
        assert_eq!(
            form.input().url_validity(),
            Validity::Invalid(AnchorError::Empty)
        );
    }

    #[test]
    fn profile_steps() {
        let mut form = DRepProfileForm::new();
        assert_eq!(
            form.continue_to_storage(),
            Err(GovernanceError::Field(FieldError::Required))
        );
        form.name = "Some Name".into();
        assert_eq!(
            form.continue_to_storage(),
            Err(GovernanceError::Field(FieldError::ContainsWhitespace))
        );
        form.name = "SomeName".into();
        form.email = "someone@example.com".into();
        form.continue_to_storage().unwrap();
        assert_eq!(
            form.acknowledge_storage(false),
            Err(GovernanceError::ConsentRequired)
        );
        form.acknowledge_storage(true).unwrap();
        assert_eq!(form.step(), ProfileStep::Anchor);

        form.anchor_mut().set_url("https://example.com/me.jsonld");
        form.anchor_mut().set_hash(HASH);
        let payload = form.submit().unwrap();
        let profile = payload.profile.unwrap();
        assert_eq!(profile.name, "SomeName");
        assert_eq!(profile.email.as_deref(), Some("someone@example.com"));
    }

    #[test]
    fn bad_profile_link_blocks_progress() {
        let mut form = DRepProfileForm::new();
        form.name = "SomeName".into();
        let i = form.links_mut().add().unwrap();
        form.links_mut().set(i, "nope", "").unwrap();
        assert_eq!(
            form.continue_to_storage(),
            Err(GovernanceError::Field(FieldError::Url(AnchorError::Malformed)))
        );
    }

    #[test]
    fn prefill_round_trips_profile() {
        let profile = DRepProfile {
            name: "SomeName".into(),
            email: None,
            bio: "hi".into(),
            links: vec![Link {
                url: "https://example.com".into(),
                text: "site".into(),
            }],
        };
        let form = DRepProfileForm::from_profile(&profile).unwrap();
        assert_eq!(form.profile(), profile);
    }
}
