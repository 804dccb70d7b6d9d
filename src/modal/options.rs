// SPDX-License-Identifier: MPL-2.0
//! Modal content, labels and callbacks.

use crate::error::{Error, Result};
use crate::surface::NodeId;
use std::fmt;

/// Body of a modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Plain text.
    Text(String),
    /// Raw markup, inserted verbatim.
    Markup(String),
    /// A node already built on the surface, attached as-is.
    Node(NodeId),
}

impl Default for Content {
    fn default() -> Self {
        Content::Markup(String::new())
    }
}

impl From<&str> for Content {
    fn from(markup: &str) -> Self {
        Content::Markup(markup.to_owned())
    }
}

impl From<String> for Content {
    fn from(markup: String) -> Self {
        Content::Markup(markup)
    }
}

impl From<NodeId> for Content {
    fn from(node: NodeId) -> Self {
        Content::Node(node)
    }
}

/// What the confirm callback asks for.
///
/// Converting from `bool` maps only `false` to [`ConfirmOutcome::KeepOpen`];
/// `()` and `true` both close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmOutcome {
    #[default]
    Close,
    /// Validation rejected the input; the modal stays as it is.
    KeepOpen,
}

impl From<()> for ConfirmOutcome {
    fn from((): ()) -> Self {
        ConfirmOutcome::Close
    }
}

impl From<bool> for ConfirmOutcome {
    fn from(close: bool) -> Self {
        if close {
            ConfirmOutcome::Close
        } else {
            ConfirmOutcome::KeepOpen
        }
    }
}

/// Text used when a [`ModalOptions`] leaves title or button labels unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalLabels {
    pub title: String,
    pub confirm: String,
    pub cancel: String,
    /// Accessible name of the header close button.
    pub close: String,
}

impl Default for ModalLabels {
    fn default() -> Self {
        Self {
            title: "Info".to_owned(),
            confirm: "Confirm".to_owned(),
            cancel: "Cancel".to_owned(),
            close: "Close".to_owned(),
        }
    }
}

pub(crate) type ConfirmFn = Box<dyn FnMut() -> ConfirmOutcome>;
pub(crate) type CancelFn = Box<dyn FnMut() -> Result<()>>;

/// Everything needed to open a modal.
pub struct ModalOptions {
    pub(crate) title: Option<String>,
    pub(crate) content: Content,
    pub(crate) show_cancel: bool,
    pub(crate) confirm_text: Option<String>,
    pub(crate) cancel_text: Option<String>,
    pub(crate) on_confirm: ConfirmFn,
    pub(crate) on_cancel: CancelFn,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            title: None,
            content: Content::default(),
            show_cancel: false,
            confirm_text: None,
            cancel_text: None,
            on_confirm: Box::new(|| ConfirmOutcome::Close),
            on_cancel: Box::new(|| Ok(())),
        }
    }
}

impl fmt::Debug for ModalOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalOptions")
            .field("title", &self.title)
            .field("content", &self.content)
            .field("show_cancel", &self.show_cancel)
            .field("confirm_text", &self.confirm_text)
            .field("cancel_text", &self.cancel_text)
            .finish_non_exhaustive()
    }
}

impl ModalOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<Content>) -> Self {
        self.content = content.into();
        self
    }

    #[must_use]
    pub fn show_cancel(mut self, show: bool) -> Self {
        self.show_cancel = show;
        self
    }

    #[must_use]
    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    /// Runs on confirm. Return `false` (or [`ConfirmOutcome::KeepOpen`]) to
    /// keep the modal open; anything else closes it.
    #[must_use]
    pub fn on_confirm<F, R>(mut self, mut callback: F) -> Self
    where
        F: FnMut() -> R + 'static,
        R: Into<ConfirmOutcome>,
    {
        self.on_confirm = Box::new(move || callback().into());
        self
    }

    /// Runs on cancel, backdrop click or Escape, before the modal closes.
    #[must_use]
    pub fn on_cancel<F>(mut self, mut callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_cancel = Box::new(move || {
            callback();
            Ok(())
        });
        self
    }

    /// Fallible variant of [`ModalOptions::on_cancel`]. A failure is logged
    /// and the modal closes anyway.
    #[must_use]
    pub fn try_on_cancel<F, E>(mut self, mut callback: F) -> Self
    where
        F: FnMut() -> std::result::Result<(), E> + 'static,
        E: fmt::Display,
    {
        self.on_cancel = Box::new(move || callback().map_err(|err| Error::Callback(err.to_string())));
        self
    }
}
