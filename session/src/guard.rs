//! Navigation guard for authenticated pages.

use crate::error::SessionError;
use crate::session::SessionContext;
use crate::storage::KeyValueStore;

/// Where the guard sends the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectHome,
}

/// Decide whether an authenticated page may open.
///
/// Redirects home when either persisted identifier is missing, or when a
/// transaction is still pending. Storage is read once per check. A storage
/// read error also redirects: guard failures never surface as errors.
pub fn guard_authenticated_page<S: KeyValueStore>(ctx: &SessionContext<S>) -> GuardOutcome {
    let has_session = match ctx.store().has_session() {
        Ok(v) => v,
        Err(e) => {
            log_storage_error(&e);
            false
        }
    };
    if !has_session {
        tracing::debug!("no persisted session, redirecting home");
        return GuardOutcome::RedirectHome;
    }
    if ctx.is_pending_transaction() {
        tracing::debug!("transaction pending, redirecting home");
        return GuardOutcome::RedirectHome;
    }
    GuardOutcome::Allow
}

fn log_storage_error(e: &SessionError) {
    tracing::warn!(error = %e, "session storage unreadable");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{PendingTransaction, TxKind};
    use crate::storage::tests::MemoryStore;
    use crate::storage::SessionStore;
    use govtool_types::{NetworkId, StakeKey, TxId};

    fn context() -> SessionContext<MemoryStore> {
        SessionContext::new(
            SessionStore::new(MemoryStore::default(), "wallet_data"),
            NetworkId::Preview,
        )
    }

    #[test]
    fn redirects_without_stored_identifiers() {
        let ctx = context();
        assert_eq!(guard_authenticated_page(&ctx), GuardOutcome::RedirectHome);
    }

    #[test]
    fn redirects_when_only_stake_key_is_stored() {
        let ctx = context();
        ctx.store()
            .inner()
            .set_item("wallet_data_stake_key", "e0")
            .unwrap();
        assert_eq!(guard_authenticated_page(&ctx), GuardOutcome::RedirectHome);
    }

    #[test]
    fn allows_connected_wallet() {
        let mut ctx = context();
        ctx.connect(StakeKey::from_credential(NetworkId::Preview, [1; 28]), "lace")
            .unwrap();
        assert_eq!(guard_authenticated_page(&ctx), GuardOutcome::Allow);
    }

    #[test]
    fn redirects_while_transaction_pending() {
        let mut ctx = context();
        ctx.connect(StakeKey::from_credential(NetworkId::Preview, [1; 28]), "lace")
            .unwrap();
        ctx.begin_transaction(PendingTransaction {
            tx_id: TxId::new([5; 32]),
            kind: TxKind::DRepUpdate,
        })
        .unwrap();
        assert_eq!(guard_authenticated_page(&ctx), GuardOutcome::RedirectHome);
    }
}
