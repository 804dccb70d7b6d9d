// SPDX-License-Identifier: MPL-2.0
//! Three-state visual lifecycle shared by toasts and modal sessions.
//!
//! Every overlay element goes through the same ordered phases:
//!
//! ```text
//! Entering ──activate()──▶ Active ──begin_exit()──▶ Exiting ──(delay)──▶ removed
//! ```
//!
//! [`Lifecycle`] keeps the current [`VisualState`] private so the two
//! transition methods are the only way to move forward. Both return whether
//! the transition actually happened, which callers use as the guard that
//! keeps exit side effects (removal timers) from being scheduled twice.

use super::easing::Easing;
use std::fmt;
use std::time::Duration;

/// Visual state applied to an element on the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualState {
    /// Just attached, still styled with its off-screen/transparent look.
    #[default]
    Entering,
    /// Fully shown.
    Active,
    /// Leaving; terminal until the element is detached.
    Exiting,
}

impl fmt::Display for VisualState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisualState::Entering => write!(f, "entering"),
            VisualState::Active => write!(f, "active"),
            VisualState::Exiting => write!(f, "exiting"),
        }
    }
}

/// Guarded state holder for one toast or modal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lifecycle {
    state: VisualState,
}

impl Lifecycle {
    /// Creates a lifecycle in the [`VisualState::Entering`] state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(self) -> VisualState {
        self.state
    }

    /// Moves `Entering → Active`.
    ///
    /// Returns `false` (and leaves the state untouched) from any other state.
    pub fn activate(&mut self) -> bool {
        if self.state == VisualState::Entering {
            self.state = VisualState::Active;
            true
        } else {
            false
        }
    }

    /// Moves `Active → Exiting`.
    ///
    /// Returns `false` when the exit already started or the element never
    /// became active, so repeated dismissals are no-ops.
    pub fn begin_exit(&mut self) -> bool {
        if self.state == VisualState::Active {
            self.state = VisualState::Exiting;
            true
        } else {
            false
        }
    }

    /// Returns whether the exit leg has started.
    #[must_use]
    pub fn is_exiting(self) -> bool {
        self.state == VisualState::Exiting
    }
}

/// One leg of a time-based animation: which curve, for how long.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub easing: Easing,
    pub duration: Duration,
}

impl Transition {
    #[must_use]
    pub const fn new(easing: Easing, duration: Duration) -> Self {
        Self { easing, duration }
    }

    /// Linear progress through the leg after `elapsed`, clamped to `[0, 1]`.
    #[must_use]
    pub fn linear_progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Eased progress through the leg after `elapsed`.
    ///
    /// May leave `[0, 1]` for overshooting curves such as [`Easing::Pop`].
    #[must_use]
    pub fn eased_progress(&self, elapsed: Duration) -> f32 {
        self.easing.apply(self.linear_progress(elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lifecycle_is_entering() {
        assert_eq!(Lifecycle::new().state(), VisualState::Entering);
    }

    #[test]
    fn states_move_forward_in_order() {
        let mut lifecycle = Lifecycle::new();
        assert!(lifecycle.activate());
        assert_eq!(lifecycle.state(), VisualState::Active);
        assert!(lifecycle.begin_exit());
        assert_eq!(lifecycle.state(), VisualState::Exiting);
    }

    #[test]
    fn begin_exit_is_idempotent() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.activate();
        assert!(lifecycle.begin_exit());
        assert!(!lifecycle.begin_exit());
        assert!(lifecycle.is_exiting());
    }

    #[test]
    fn entering_cannot_skip_to_exiting() {
        let mut lifecycle = Lifecycle::new();
        assert!(!lifecycle.begin_exit());
        assert_eq!(lifecycle.state(), VisualState::Entering);
    }

    #[test]
    fn exiting_cannot_reactivate() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.activate();
        lifecycle.begin_exit();
        assert!(!lifecycle.activate());
        assert!(lifecycle.is_exiting());
    }

    #[test]
    fn zero_length_transition_is_complete() {
        let transition = Transition::new(Easing::Linear, Duration::ZERO);
        assert_eq!(transition.linear_progress(Duration::ZERO), 1.0);
    }

    #[test]
    fn linear_progress_clamps_past_the_end() {
        let transition = Transition::new(Easing::Linear, Duration::from_millis(300));
        assert_eq!(transition.linear_progress(Duration::from_millis(150)), 0.5);
        assert_eq!(transition.linear_progress(Duration::from_secs(2)), 1.0);
    }
}
