//! GovTool portal: the composition root.
//!
//! [`Portal`] owns the session context, every form, the modal layer and the
//! external collaborators (storage, wallet signer, submission bridge, tab
//! opener, backend queries), and renders the current route into a
//! [`govtool_ui::Frame`]. The [`harness`] module drives it the way the
//! browser suite drives the web front-end.

pub mod app;
pub mod config;
pub mod error;
pub mod harness;

pub use app::{Portal, WalletInfo};
pub use config::PortalConfig;
pub use error::PortalError;
pub use harness::Driver;
