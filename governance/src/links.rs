//! Reference links attached to proposals and DRep profiles.

use serde::{Deserialize, Serialize};

use crate::error::GovernanceError;

/// Maximum number of links a form accepts.
pub const MAX_LINKS: usize = 6;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub text: String,
}

/// An ordered list of at most [`MAX_LINKS`] links.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkList {
    links: Vec<Link>,
}

impl LinkList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Whether the add-link control is shown.
    pub fn can_add(&self) -> bool {
        self.links.len() < MAX_LINKS
    }

    /// Append an empty link row and return its index.
    pub fn add(&mut self) -> Result<usize, GovernanceError> {
        if !self.can_add() {
            return Err(GovernanceError::TooManyLinks { max: MAX_LINKS });
        }
        self.links.push(Link::default());
        Ok(self.links.len() - 1)
    }

    pub fn set(&mut self, index: usize, url: &str, text: &str) -> Result<(), GovernanceError> {
        let link = self
            .links
            .get_mut(index)
            .ok_or(GovernanceError::NoSuchLink(index))?;
        link.url = url.to_string();
        link.text = text.to_string();
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Link, GovernanceError> {
        if index >= self.links.len() {
            return Err(GovernanceError::NoSuchLink(index));
        }
        Ok(self.links.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.links.iter()
    }

    /// Rows with a URL filled in. Blank rows are dropped from payloads.
    pub fn filled(&self) -> Vec<Link> {
        self.links
            .iter()
            .filter(|l| !l.url.trim().is_empty())
            .cloned()
            .collect()
    }
}
