// SPDX-License-Identifier: MPL-2.0
//! Node descriptions handed to [`Surface::create`](super::Surface::create).

use crate::toast::{ToastId, ToastKind};

/// What a surface node represents.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Stack holding every toast, newest last.
    ToastContainer,
    /// A single notification card.
    Toast(ToastView),
    /// Depleting bar at the bottom of a toast.
    Progress(ToastKind),
    /// Dimmed full-surface layer behind a modal card.
    Backdrop,
    /// Dialog card; header, body and footer are its children.
    Card(CardView),
    /// Clickable affordance with a fixed role.
    Button(ButtonRole, String),
    /// Plain text content.
    Text(String),
    /// Raw markup content, kept verbatim.
    Markup(String),
    /// Single-line editable field.
    TextInput(TextInputView),
}

impl Element {
    /// Returns whether the element accepts typed text.
    #[must_use]
    pub fn is_text_input(&self) -> bool {
        match self {
            Element::TextInput(_) => true,
            Element::Markup(markup) => markup.to_ascii_lowercase().contains("<input"),
            _ => false,
        }
    }
}

/// Content of a toast node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub id: ToastId,
    pub kind: ToastKind,
    /// Omitted when empty; the message is then rendered emphasized.
    pub title: Option<String>,
    pub message: String,
}

/// Header of a modal card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
}

/// Role of a modal button, used to route clicks back to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonRole {
    /// Header "×".
    Close,
    /// Footer cancel, only present when requested.
    Cancel,
    /// Footer confirm.
    Confirm,
}

/// Editable field state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInputView {
    pub placeholder: String,
    pub value: String,
}

impl TextInputView {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            value: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_is_focusable_input() {
        assert!(Element::TextInput(TextInputView::new("Name")).is_text_input());
    }

    #[test]
    fn markup_with_input_tag_counts_as_input() {
        assert!(Element::Markup("<label>Name <INPUT type=\"text\"></label>".into()).is_text_input());
        assert!(!Element::Markup("<p>Are you sure?</p>".into()).is_text_input());
    }

    #[test]
    fn buttons_and_text_are_not_inputs() {
        assert!(!Element::Text("hello".into()).is_text_input());
        assert!(!Element::Button(ButtonRole::Confirm, "OK".into()).is_text_input());
    }
}
