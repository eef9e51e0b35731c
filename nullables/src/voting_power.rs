//! Nullable backend for voting-power and DRep queries.

use std::cell::RefCell;
use std::collections::HashMap;

use govtool_session::{DRepStatus, SessionError, VotingPowerSource};
use govtool_types::{DRepId, Lovelace, StakeKey};

/// Answers from in-memory tables. Unknown keys have zero power and
/// unregistered DReps.
#[derive(Default)]
pub struct NullVotingPower {
    ada_holder: RefCell<HashMap<StakeKey, Lovelace>>,
    drep_power: RefCell<HashMap<DRepId, Lovelace>>,
    registered: RefCell<Vec<DRepId>>,
    unavailable: RefCell<bool>,
}

impl NullVotingPower {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_ada_holder_power(&self, stake_key: StakeKey, power: Lovelace) {
        self.ada_holder.borrow_mut().insert(stake_key, power);
    }

    /// Register `drep_id` as a DRep with `power` delegated to it.
    pub fn register_drep(&self, drep_id: DRepId, power: Lovelace) {
        self.registered.borrow_mut().push(drep_id);
        self.drep_power.borrow_mut().insert(drep_id, power);
    }

    /// Make every query fail, as when the backend is down.
    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.borrow_mut() = unavailable;
    }

    fn check(&self) -> Result<(), SessionError> {
        if *self.unavailable.borrow() {
            Err(SessionError::Backend("backend returned HTTP 503".into()))
        } else {
            Ok(())
        }
    }
}

impl VotingPowerSource for NullVotingPower {
    async fn ada_holder_voting_power(&self, stake_key: &StakeKey) -> Result<Lovelace, SessionError> {
        self.check()?;
        Ok(self
            .ada_holder
            .borrow()
            .get(stake_key)
            .copied()
            .unwrap_or(Lovelace::ZERO))
    }

    async fn drep_voting_power(&self, drep_id: &DRepId) -> Result<Lovelace, SessionError> {
        self.check()?;
        Ok(self
            .drep_power
            .borrow()
            .get(drep_id)
            .copied()
            .unwrap_or(Lovelace::ZERO))
    }

    async fn drep_status(&self, drep_id: &DRepId) -> Result<DRepStatus, SessionError> {
        self.check()?;
        Ok(DRepStatus {
            drep_id: *drep_id,
            is_registered: self.registered.borrow().contains(drep_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use govtool_types::NetworkId;

    #[tokio::test]
    async fn unknown_keys_have_no_power() {
        let backend = NullVotingPower::new();
        let key = StakeKey::from_credential(NetworkId::Preview, [1; 28]);
        assert_eq!(backend.ada_holder_voting_power(&key).await.unwrap(), Lovelace::ZERO);
        let status = backend.drep_status(&DRepId::new([1; 28])).await.unwrap();
        assert!(!status.is_registered);
    }

    #[tokio::test]
    async fn registered_drep_reports_power() {
        let backend = NullVotingPower::new();
        let id = DRepId::new([2; 28]);
        backend.register_drep(id, Lovelace::from_ada(10));
        assert!(backend.drep_status(&id).await.unwrap().is_registered);
        assert_eq!(backend.drep_voting_power(&id).await.unwrap(), Lovelace::from_ada(10));
        backend.set_unavailable(true);
        assert!(backend.drep_voting_power(&id).await.is_err());
    }
}
