//! Headless view layer for GovTool.
//!
//! Views are pure functions from state to a [`Frame`]; nothing here performs
//! I/O. The `data-testid` values in [`test_ids`] are the automation contract
//! the end-to-end harness drives.

pub mod action_view;
pub mod chips;
pub mod dashboard;
pub mod drep_view;
pub mod external_link;
pub mod frame;
pub mod hero;
pub mod metadata_page;
pub mod modal;
pub mod proposal_view;
pub mod routes;
pub mod size_tier;
pub mod test_ids;

pub use external_link::{confirm_external, is_external, request_navigation, TabOpener};
pub use frame::{Element, ElementKind, Frame};
pub use hero::HeroAction;
pub use modal::{Modal, ModalController};
pub use routes::Route;
pub use size_tier::{HeroLayout, SizeTier, Viewport};
