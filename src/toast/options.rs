// SPDX-License-Identifier: MPL-2.0
//! Toast identifiers, kinds and display options.

use crate::domain::timing::ToastDuration;
use std::fmt;

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Kind of toast. Only changes the icon and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    /// Parses a kind name, falling back to [`ToastKind::Info`] for anything
    /// unrecognized.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            "warning" => ToastKind::Warning,
            _ => ToastKind::Info,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }
}

impl From<&str> for ToastKind {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to show and for how long.
///
/// Unset `duration` and `show_progress` fall back to the manager's
/// [`ToastDefaults`](super::ToastDefaults).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastOptions {
    kind: ToastKind,
    title: String,
    message: String,
    duration: Option<ToastDuration>,
    show_progress: Option<bool>,
}

impl ToastOptions {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: ToastDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Shorthand for [`ToastOptions::duration`] in milliseconds. `0` keeps
    /// the toast until it is closed.
    #[must_use]
    pub fn duration_ms(self, millis: u64) -> Self {
        self.duration(ToastDuration::from_millis(millis))
    }

    /// Keeps the toast until it is closed by hand.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.duration(ToastDuration::PERSISTENT)
    }

    /// Adds a bar that depletes in sync with the auto-dismiss timer.
    #[must_use]
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = Some(show);
        self
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn title_text(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn resolved_duration(&self, fallback: ToastDuration) -> ToastDuration {
        self.duration.unwrap_or(fallback)
    }

    pub(crate) fn resolved_progress(&self, fallback: bool) -> bool {
        self.show_progress.unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        assert_ne!(ToastId::new(), ToastId::new());
    }

    #[test]
    fn unknown_kind_falls_back_to_info() {
        assert_eq!(ToastKind::parse("success"), ToastKind::Success);
        assert_eq!(ToastKind::parse(" Warning "), ToastKind::Warning);
        assert_eq!(ToastKind::parse("fatal"), ToastKind::Info);
        assert_eq!(ToastKind::parse(""), ToastKind::Info);
    }

    #[test]
    fn defaults_match_show_toast_contract() {
        let options = ToastOptions::default();
        assert_eq!(options.kind(), ToastKind::Info);
        assert_eq!(options.title_text(), "");
        assert_eq!(options.message(), "");
        assert_eq!(
            options.resolved_duration(ToastDuration::default()),
            ToastDuration::from_millis(3000)
        );
        assert!(!options.resolved_progress(false));
    }

    #[test]
    fn builder_overrides_defaults() {
        let options = ToastOptions::error("Upload failed")
            .title("Network")
            .persistent()
            .show_progress(true);

        assert_eq!(options.kind(), ToastKind::Error);
        assert_eq!(options.title_text(), "Network");
        assert!(options
            .resolved_duration(ToastDuration::default())
            .is_persistent());
        assert!(options.resolved_progress(false));
    }
}
