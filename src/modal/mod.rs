// SPDX-License-Identifier: MPL-2.0
//! Modal dialogs.
//!
//! At most one modal session exists at a time. Opening a new one evicts the
//! current session first; there is no stacking or queueing.
//!
//! Confirm and cancel are deliberately asymmetric: cancel always closes, while
//! confirm closes unless its callback returns [`ConfirmOutcome::KeepOpen`]
//! (which is what a literal `false` converts to). Calling
//! [`ModalController::close`] directly skips both callbacks.
//!
//! # Usage
//!
//! ```ignore
//! use iced_feedback::modal::{ModalController, ModalOptions};
//!
//! let mut modal = ModalController::new(&mut scene);
//! modal.open(
//!     &mut scene,
//!     ModalOptions::new()
//!         .title("Confirm")
//!         .content("Are you sure?")
//!         .show_cancel(true)
//!         .on_confirm(|| true),
//! );
//! ```

mod controller;
mod options;

pub use controller::{Key, ModalBehavior, ModalController, ModalEvent, SessionId};
pub use options::{ConfirmOutcome, Content, ModalLabels, ModalOptions};
