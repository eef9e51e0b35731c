use thiserror::Error;

use govtool_bridge::BridgeError;
use govtool_governance::GovernanceError;
use govtool_session::SessionError;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("config error: {0}")]
    Config(String),

    #[error("session error: {0}")]
    Session(#[from] SessionError),

    #[error("governance error: {0}")]
    Governance(#[from] GovernanceError),

    #[error("bridge error: {0}")]
    Bridge(#[from] BridgeError),

    /// No visible element with this test id on the current screen.
    #[error("no visible element {0:?}")]
    NoSuchElement(String),

    #[error("element {0:?} is disabled")]
    Disabled(String),

    #[error("{0:?} is not an option of {1:?}")]
    InvalidOption(String, String),

    #[error("unknown route {0:?}")]
    UnknownRoute(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
