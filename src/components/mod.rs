//! UI components for roster-dioxus.
//!
//! This module contains all Dioxus UI components for the roster interface.

mod drop_confirmation;
mod kbd;
mod modal_overlay;
mod notification;
mod roster_view;

pub use drop_confirmation::DropConfirmationDialog;
pub use kbd::KbdKey;
pub use modal_overlay::ModalOverlay;
pub use notification::NotificationContainer;
pub use roster_view::RosterView;
