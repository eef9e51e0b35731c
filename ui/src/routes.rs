//! Portal routes.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Dashboard,
    GovernanceActions,
    GovernanceActionDetails,
    VotedActions,
    ProposalSubmission,
    EditDRep,
    UpdateMetadata,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::Dashboard,
        Route::GovernanceActions,
        Route::GovernanceActionDetails,
        Route::VotedActions,
        Route::ProposalSubmission,
        Route::EditDRep,
        Route::UpdateMetadata,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Dashboard => "/dashboard",
            Self::GovernanceActions => "/governance_actions",
            Self::GovernanceActionDetails => "/governance_actions/:proposalId",
            Self::VotedActions => "/governance_actions/voted",
            Self::ProposalSubmission => "/proposal_discussion/create",
            Self::EditDRep => "/edit_drep",
            Self::UpdateMetadata => "/update_metadata",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let trimmed = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        if let Some(route) = Self::ALL.into_iter().find(|r| r.path() == trimmed) {
            return Some(route);
        }
        match trimmed.strip_prefix("/governance_actions/") {
            Some(id) if !id.is_empty() && !id.contains('/') => Some(Self::GovernanceActionDetails),
            _ => None,
        }
    }

    /// Concrete path of a governance action's details page.
    pub fn action_path(action_id: &str) -> String {
        format!("/governance_actions/{action_id}")
    }

    /// Pages that need a connected wallet.
    pub fn requires_session(&self) -> bool {
        !matches!(self, Self::Home | Self::GovernanceActions | Self::GovernanceActionDetails)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
