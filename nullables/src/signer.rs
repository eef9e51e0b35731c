//! Nullable wallet extension.

use std::cell::{Cell, RefCell};

use govtool_bridge::{BridgeError, SubmissionRequest, WalletSigner, Witness};

/// Signs everything unless told to decline.
#[derive(Default)]
pub struct NullSigner {
    decline: Cell<bool>,
    signed: RefCell<Vec<SubmissionRequest>>,
}

impl NullSigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decline every request until reset, like a user pressing "Cancel".
    pub fn set_decline(&self, decline: bool) {
        self.decline.set(decline);
    }

    /// Requests the user signed.
    pub fn signed(&self) -> Vec<SubmissionRequest> {
        self.signed.borrow().clone()
    }
}

impl WalletSigner for NullSigner {
    async fn sign(&self, request: &SubmissionRequest) -> Result<Witness, BridgeError> {
        if self.decline.get() {
            return Err(BridgeError::UserDeclined);
        }
        self.signed.borrow_mut().push(request.clone());
        Ok(Witness(format!("a1{:04x}", self.signed.borrow().len())))
    }
}
