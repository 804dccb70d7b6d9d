// SPDX-License-Identifier: MPL-2.0
//! Modal session lifecycle.
//!
//! The controller owns the single modal slot. A session is installed by
//! [`ModalController::open`], becomes active right away, and is torn down
//! [`MODAL_CARD_EXIT`] after [`ModalController::close`] starts its exit. A
//! session evicted by a newer `open` finishes its exit off-slot so the
//! teardown timer can never clear its successor.

use super::options::{CancelFn, ConfirmFn, ConfirmOutcome, Content, ModalLabels, ModalOptions};
use crate::domain::lifecycle::{Lifecycle, VisualState};
use crate::domain::timing::{MODAL_BACKDROP_FADE, MODAL_CARD_ENTER, MODAL_CARD_EXIT};
use crate::surface::{ButtonRole, CardView, Element, NodeId, Parent, Surface};
use crate::timeline::Timeline;
use std::fmt;
use std::time::Duration;

/// Identifier of one modal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "modal-{}", self.0)
    }
}

/// Key presses routed to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Other,
}

/// User interaction with the modal, as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    /// Footer confirm button.
    Confirm,
    /// Footer cancel button.
    Cancel,
    /// Header close button.
    CloseButton,
    /// Pointer press on the backdrop layer. `on_card` is set when the press
    /// started on the card and only bubbled up.
    Backdrop { on_card: bool },
    /// Key press anywhere in the window.
    Key(Key),
}

/// Which implicit dismissal triggers are honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalBehavior {
    pub dismiss_on_backdrop: bool,
    pub dismiss_on_escape: bool,
}

impl Default for ModalBehavior {
    fn default() -> Self {
        Self {
            dismiss_on_backdrop: true,
            dismiss_on_escape: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalTimer {
    Teardown(SessionId),
}

struct ModalSession {
    id: SessionId,
    backdrop: NodeId,
    card: NodeId,
    confirm: NodeId,
    lifecycle: Lifecycle,
    on_confirm: ConfirmFn,
    on_cancel: CancelFn,
}

impl fmt::Debug for ModalSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalSession")
            .field("id", &self.id)
            .field("backdrop", &self.backdrop)
            .field("card", &self.card)
            .field("state", &self.lifecycle.state())
            .finish_non_exhaustive()
    }
}

/// Opens and closes the single modal session.
#[derive(Debug)]
pub struct ModalController {
    active: Option<ModalSession>,
    evicted: Vec<ModalSession>,
    timeline: Timeline<ModalTimer>,
    labels: ModalLabels,
    behavior: ModalBehavior,
    next_session: u64,
}

impl ModalController {
    /// Creates the controller and installs its keyboard listener.
    ///
    /// The listener lives as long as the controller and is inert while no
    /// session is open.
    pub fn new<S: Surface + ?Sized>(surface: &mut S) -> Self {
        Self::with_settings(surface, ModalLabels::default(), ModalBehavior::default())
    }

    /// Same as [`ModalController::new`] with localized labels and dismissal
    /// settings.
    pub fn with_settings<S: Surface + ?Sized>(
        surface: &mut S,
        labels: ModalLabels,
        behavior: ModalBehavior,
    ) -> Self {
        surface.listen_keyboard();
        Self {
            active: None,
            evicted: Vec::new(),
            timeline: Timeline::new(),
            labels,
            behavior,
            next_session: 0,
        }
    }

    /// Replaces the fallback labels, e.g. after a locale change.
    pub fn set_labels(&mut self, labels: ModalLabels) {
        self.labels = labels;
    }

    #[must_use]
    pub fn labels(&self) -> &ModalLabels {
        &self.labels
    }

    /// Opens a modal, closing the current one first.
    ///
    /// The evicted session's cancel callback is not called.
    pub fn open<S: Surface + ?Sized>(&mut self, surface: &mut S, options: ModalOptions) -> SessionId {
        if let Some(previous) = self.active.as_ref().map(|session| session.id) {
            tracing::debug!(session = %previous, "evicting open modal");
            self.close(surface);
            if let Some(session) = self.active.take() {
                self.evicted.push(session);
            }
        }

        let id = SessionId(self.next_session);
        self.next_session += 1;

        let ModalOptions {
            title,
            content,
            show_cancel,
            confirm_text,
            cancel_text,
            on_confirm,
            on_cancel,
        } = options;

        let backdrop = surface.create(Element::Backdrop);
        surface.set_transition(backdrop, MODAL_BACKDROP_FADE);

        let card = surface.create(Element::Card(CardView {
            title: title.unwrap_or_else(|| self.labels.title.clone()),
        }));
        surface.set_transition(card, MODAL_CARD_ENTER);

        let close = surface.create(Element::Button(
            ButtonRole::Close,
            self.labels.close.clone(),
        ));
        surface.append(Parent::Node(card), close);

        let body = match content {
            Content::Text(text) => surface.create(Element::Text(text)),
            Content::Markup(markup) => surface.create(Element::Markup(markup)),
            Content::Node(node) => node,
        };
        surface.append(Parent::Node(card), body);

        if show_cancel {
            let label = cancel_text.unwrap_or_else(|| self.labels.cancel.clone());
            let cancel = surface.create(Element::Button(ButtonRole::Cancel, label));
            surface.append(Parent::Node(card), cancel);
        }

        let label = confirm_text.unwrap_or_else(|| self.labels.confirm.clone());
        let confirm = surface.create(Element::Button(ButtonRole::Confirm, label));
        surface.append(Parent::Node(card), confirm);

        surface.append(Parent::Node(backdrop), card);
        surface.append(Parent::Root, backdrop);

        let mut session = ModalSession {
            id,
            backdrop,
            card,
            confirm,
            lifecycle: Lifecycle::new(),
            on_confirm,
            on_cancel,
        };

        surface.force_reflow(card);
        session.lifecycle.activate();
        surface.set_visual_state(backdrop, session.lifecycle.state());
        surface.set_visual_state(card, session.lifecycle.state());

        match surface.first_text_input(card) {
            Some(input) => surface.focus(input),
            None => surface.focus(confirm),
        }

        tracing::debug!(session = %id, "modal opened");
        self.active = Some(session);
        id
    }

    /// Starts closing the open modal without running any callback.
    ///
    /// No-op when nothing is open or the exit already started.
    pub fn close<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        let Some(session) = self.active.as_mut() else {
            return false;
        };
        if !session.lifecycle.begin_exit() {
            return false;
        }

        surface.set_transition(session.card, MODAL_CARD_EXIT);
        surface.set_transition(session.backdrop, MODAL_BACKDROP_FADE);
        surface.set_visual_state(session.backdrop, session.lifecycle.state());
        surface.set_visual_state(session.card, session.lifecycle.state());
        self.timeline
            .schedule(MODAL_CARD_EXIT.duration, ModalTimer::Teardown(session.id));

        tracing::debug!(session = %session.id, "modal closing");
        true
    }

    /// Runs the confirm callback and closes unless it vetoed.
    ///
    /// Returns `None` when no modal is accepting input.
    pub fn confirm<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<ConfirmOutcome> {
        let session = self.interactive()?;
        let id = session.id;
        let outcome = (session.on_confirm)();
        match outcome {
            ConfirmOutcome::Close => {
                self.close(surface);
            }
            ConfirmOutcome::KeepOpen => {
                tracing::debug!(session = %id, "confirm vetoed, modal stays open");
            }
        }
        Some(outcome)
    }

    /// Runs the cancel callback, then closes regardless of its result.
    ///
    /// Returns `false` when no modal is accepting input.
    pub fn cancel<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        let Some(session) = self.interactive() else {
            return false;
        };
        let id = session.id;
        if let Err(err) = (session.on_cancel)() {
            tracing::warn!(session = %id, error = %err, "cancel callback failed");
        }
        self.close(surface);
        true
    }

    /// Routes a user interaction to the confirm or cancel path.
    pub fn handle<S: Surface + ?Sized>(&mut self, surface: &mut S, event: ModalEvent) {
        match event {
            ModalEvent::Confirm => {
                self.confirm(surface);
            }
            ModalEvent::Cancel | ModalEvent::CloseButton => {
                self.cancel(surface);
            }
            ModalEvent::Backdrop { on_card: false } if self.behavior.dismiss_on_backdrop => {
                self.cancel(surface);
            }
            ModalEvent::Key(Key::Escape) if self.behavior.dismiss_on_escape => {
                self.cancel(surface);
            }
            ModalEvent::Backdrop { .. } | ModalEvent::Key(_) => {}
        }
    }

    /// Moves time forward, tearing down sessions whose exit finished.
    pub fn advance<S: Surface + ?Sized>(&mut self, surface: &mut S, delta: Duration) {
        let Self {
            active,
            evicted,
            timeline,
            ..
        } = self;
        timeline.advance(delta, |_, ModalTimer::Teardown(id)| {
            let session = if active.as_ref().is_some_and(|session| session.id == id) {
                active.take()
            } else {
                evicted
                    .iter()
                    .position(|session| session.id == id)
                    .map(|index| evicted.remove(index))
            };
            if let Some(session) = session {
                if surface.is_attached(session.backdrop) {
                    surface.detach(session.backdrop);
                }
                tracing::debug!(session = %id, "modal removed");
            }
        });
    }

    /// Returns whether a session occupies the slot (possibly exiting).
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// ID of the session in the slot.
    #[must_use]
    pub fn session(&self) -> Option<SessionId> {
        self.active.as_ref().map(|session| session.id)
    }

    /// Visual state of the session in the slot.
    #[must_use]
    pub fn state(&self) -> Option<VisualState> {
        self.active.as_ref().map(|session| session.lifecycle.state())
    }

    /// Backdrop and card nodes of the session in the slot.
    #[must_use]
    pub fn nodes(&self) -> Option<(NodeId, NodeId)> {
        self.active
            .as_ref()
            .map(|session| (session.backdrop, session.card))
    }

    /// Confirm button of the session in the slot.
    #[must_use]
    pub fn confirm_button(&self) -> Option<NodeId> {
        self.active.as_ref().map(|session| session.confirm)
    }

    /// Virtual time elapsed since the controller was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timeline.now()
    }

    /// Pending teardown timers, including those of evicted sessions.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timeline.pending()
    }

    /// Session accepting confirm/cancel: present and not already exiting.
    fn interactive(&mut self) -> Option<&mut ModalSession> {
        self.active
            .as_mut()
            .filter(|session| session.lifecycle.state() == VisualState::Active)
    }
}
