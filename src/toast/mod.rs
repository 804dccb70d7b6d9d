// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Toasts are transient cards stacked in a single container that is created
//! on first use and kept for the lifetime of the surface. Each toast enters,
//! stays for its [`ToastDuration`](crate::domain::timing::ToastDuration) (or
//! until closed when the duration is zero), then exits and is detached.
//!
//! # Usage
//!
//! ```ignore
//! use iced_feedback::toast::{ToastManager, ToastOptions};
//!
//! let mut toasts = ToastManager::new();
//! toasts.show(&mut scene, ToastOptions::success("Saved").duration_ms(1000));
//!
//! // From the host's tick handler
//! toasts.advance(&mut scene, elapsed);
//! ```

mod manager;
mod options;

pub use manager::{ToastDefaults, ToastManager, CONTAINER_KEY};
pub use options::{ToastId, ToastKind, ToastOptions};
