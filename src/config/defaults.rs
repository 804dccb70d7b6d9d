// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.
//!
//! Animation timings are not configurable: exit delays must match the exit
//! transitions exactly, so they live with the lifecycle rules in
//! [`crate::domain::timing`].

pub use crate::domain::timing::DEFAULT_TOAST_DURATION_MS;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Longest accepted toast duration from a settings file (ten minutes).
pub const MAX_TOAST_DURATION_MS: u64 = 600_000;

/// Whether toasts show a depleting progress bar unless told otherwise.
pub const DEFAULT_TOAST_SHOW_PROGRESS: bool = false;

// ==========================================================================
// Modal Defaults
// ==========================================================================

/// Whether a direct click on the modal backdrop cancels the modal.
pub const DEFAULT_DISMISS_ON_BACKDROP: bool = true;

/// Whether Escape cancels the modal.
pub const DEFAULT_DISMISS_ON_ESCAPE: bool = true;

// ==========================================================================
// Locale
// ==========================================================================

/// Locale used when neither CLI, config, nor the OS pick an available one.
pub const DEFAULT_LOCALE: &str = "en-US";
