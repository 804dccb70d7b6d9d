// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo.

use crate::modal::Key;
use crate::toast::ToastKind;
use crate::ui::overlay;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    ShowToast(ToastKind),
    ShowPersistentToast,
    ShowProgressToast,
    DismissAllToasts,
    OpenInfoModal,
    OpenConfirmModal,
    OpenRenameModal,
    Overlay(overlay::Message),
    /// Key press not captured by a widget.
    Key(Key),
    /// Animation frame.
    Tick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP 47 form (e.g., `id`).
    pub lang: Option<String>,
    /// Optional config directory override.
    pub config_dir: Option<PathBuf>,
}
