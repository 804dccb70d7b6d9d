// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastManager` owns the shared container, every live toast and the
//! timers that move them through their lifecycle. Toasts are independent:
//! several can be in different phases at once, each guarded by its own
//! [`Lifecycle`].

use super::options::{ToastId, ToastOptions};
use crate::domain::easing::Easing;
use crate::domain::lifecycle::{Lifecycle, Transition, VisualState};
use crate::domain::timing::{ToastDuration, TOAST_ENTER, TOAST_EXIT};
use crate::surface::{Element, NodeId, Parent, Surface, ToastView};
use crate::timeline::{Timeline, TimerId};
use std::time::Duration;

/// Fixed key of the toast container on the surface.
pub const CONTAINER_KEY: &str = "toast-container";

/// Values used when a [`ToastOptions`] leaves them unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToastDefaults {
    pub duration: ToastDuration,
    pub show_progress: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToastEvent {
    StartProgress(ToastId),
    AutoDismiss(ToastId),
    Remove(ToastId),
}

#[derive(Debug)]
struct LiveToast {
    id: ToastId,
    node: NodeId,
    progress: Option<NodeId>,
    duration: ToastDuration,
    lifecycle: Lifecycle,
    auto_dismiss: Option<TimerId>,
}

/// Live toasts in append order, plus the container they hang in.
#[derive(Debug, Default)]
struct ToastStack {
    container: Option<NodeId>,
    toasts: Vec<LiveToast>,
}

/// Creates, shows, auto-dismisses and removes toasts.
#[derive(Debug, Default)]
pub struct ToastManager {
    stack: ToastStack,
    timeline: Timeline<ToastEvent>,
    defaults: ToastDefaults,
}

impl ToastManager {
    /// Creates an empty manager with the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty manager with custom defaults (usually from config).
    #[must_use]
    pub fn with_defaults(defaults: ToastDefaults) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    /// Shows a toast and returns its ID.
    ///
    /// The toast is attached in the entering state, laid out, and switched to
    /// active right away so the entrance transition plays. Its auto-dismiss
    /// timer starts now unless the duration is zero.
    pub fn show<S: Surface + ?Sized>(&mut self, surface: &mut S, options: ToastOptions) -> ToastId {
        let container = self.stack.ensure_container(surface);

        let id = ToastId::new();
        let duration = options.resolved_duration(self.defaults.duration);
        let title = Some(options.title_text())
            .filter(|title| !title.is_empty())
            .map(str::to_owned);

        let node = surface.create(Element::Toast(ToastView {
            id,
            kind: options.kind(),
            title,
            message: options.message().to_owned(),
        }));
        surface.set_transition(node, TOAST_ENTER);

        let progress = match duration.auto_dismiss() {
            Some(_) if options.resolved_progress(self.defaults.show_progress) => {
                let bar = surface.create(Element::Progress(options.kind()));
                surface.append(Parent::Node(node), bar);
                self.timeline.next_frame(ToastEvent::StartProgress(id));
                Some(bar)
            }
            _ => None,
        };

        surface.append(Parent::Node(container), node);
        surface.force_reflow(node);

        let mut lifecycle = Lifecycle::new();
        lifecycle.activate();
        surface.set_visual_state(node, lifecycle.state());

        let auto_dismiss = duration
            .auto_dismiss()
            .map(|after| self.timeline.schedule(after, ToastEvent::AutoDismiss(id)));

        tracing::debug!(
            toast = %id,
            kind = %options.kind(),
            duration_ms = duration.as_millis(),
            "toast shown"
        );

        self.stack.toasts.push(LiveToast {
            id,
            node,
            progress,
            duration,
            lifecycle,
            auto_dismiss,
        });
        id
    }

    /// Starts the exit of a toast.
    ///
    /// Returns `false` when the toast is unknown or already exiting; only the
    /// first call schedules the removal.
    pub fn dismiss<S: Surface + ?Sized>(&mut self, surface: &mut S, id: ToastId) -> bool {
        self.stack.begin_exit(surface, &mut self.timeline, id)
    }

    /// Starts the exit of every toast that is not already leaving.
    pub fn dismiss_all<S: Surface + ?Sized>(&mut self, surface: &mut S) -> usize {
        let ids: Vec<ToastId> = self.visible().collect();
        ids.into_iter()
            .filter(|id| self.dismiss(surface, *id))
            .count()
    }

    /// Moves time forward, running next-frame work and due timers.
    pub fn advance<S: Surface + ?Sized>(&mut self, surface: &mut S, delta: Duration) {
        let Self {
            stack, timeline, ..
        } = self;
        timeline.advance(delta, |timeline, event| stack.fire(surface, timeline, event));
    }

    /// IDs of toasts still in the container, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = ToastId> + '_ {
        self.stack.toasts.iter().map(|toast| toast.id)
    }

    /// Number of toasts still in the container (including exiting ones).
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.toasts.is_empty()
    }

    /// Visual state of a toast, `None` once it has been removed.
    #[must_use]
    pub fn state(&self, id: ToastId) -> Option<VisualState> {
        self.stack.get(id).map(|toast| toast.lifecycle.state())
    }

    /// Returns whether the toast started its exit.
    #[must_use]
    pub fn is_exiting(&self, id: ToastId) -> bool {
        self.stack
            .get(id)
            .is_some_and(|toast| toast.lifecycle.is_exiting())
    }

    /// Surface node of a toast.
    #[must_use]
    pub fn node(&self, id: ToastId) -> Option<NodeId> {
        self.stack.get(id).map(|toast| toast.node)
    }

    /// Container node, once the first toast was shown.
    #[must_use]
    pub fn container(&self) -> Option<NodeId> {
        self.stack.container
    }

    /// Virtual time elapsed since the manager was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timeline.now()
    }

    /// Pending timers and frame callbacks.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timeline.pending()
    }

    #[must_use]
    pub fn defaults(&self) -> ToastDefaults {
        self.defaults
    }
}

impl ToastStack {
    fn get(&self, id: ToastId) -> Option<&LiveToast> {
        self.toasts.iter().find(|toast| toast.id == id)
    }

    /// Reuses the container registered on the surface, creating it once.
    fn ensure_container<S: Surface + ?Sized>(&mut self, surface: &mut S) -> NodeId {
        if let Some(node) = self.container.filter(|node| surface.is_attached(*node)) {
            return node;
        }
        let node = match surface.find(CONTAINER_KEY) {
            Some(node) => node,
            None => {
                let node = surface.create(Element::ToastContainer);
                surface.set_key(node, CONTAINER_KEY);
                surface.append(Parent::Root, node);
                tracing::debug!(node = %node, "toast container created");
                node
            }
        };
        self.container = Some(node);
        node
    }

    fn begin_exit<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        timeline: &mut Timeline<ToastEvent>,
        id: ToastId,
    ) -> bool {
        let Some(toast) = self.toasts.iter_mut().find(|toast| toast.id == id) else {
            return false;
        };
        if !toast.lifecycle.begin_exit() {
            return false;
        }
        if let Some(timer) = toast.auto_dismiss.take() {
            timeline.cancel(timer);
        }

        surface.set_transition(toast.node, TOAST_EXIT);
        surface.set_visual_state(toast.node, toast.lifecycle.state());
        timeline.schedule(TOAST_EXIT.duration, ToastEvent::Remove(id));

        tracing::debug!(toast = %id, "toast exiting");
        true
    }

    fn fire<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        timeline: &mut Timeline<ToastEvent>,
        event: ToastEvent,
    ) {
        match event {
            ToastEvent::StartProgress(id) => {
                let Some(toast) = self.get(id) else { return };
                if let (Some(bar), Some(length)) = (toast.progress, toast.duration.auto_dismiss()) {
                    surface.start_progress(bar, Transition::new(Easing::Linear, length));
                }
            }
            ToastEvent::AutoDismiss(id) => {
                if let Some(toast) = self.toasts.iter_mut().find(|toast| toast.id == id) {
                    // The timer is firing, nothing left to cancel.
                    toast.auto_dismiss = None;
                }
                self.begin_exit(surface, timeline, id);
            }
            ToastEvent::Remove(id) => {
                if let Some(index) = self.toasts.iter().position(|toast| toast.id == id) {
                    let toast = self.toasts.remove(index);
                    if surface.is_attached(toast.node) {
                        surface.detach(toast.node);
                    }
                    tracing::debug!(toast = %id, "toast removed");
                }
            }
        }
    }
}
