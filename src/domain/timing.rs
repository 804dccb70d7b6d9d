// SPDX-License-Identifier: MPL-2.0
//! Fixed animation timings and the toast display duration newtype.
//!
//! Removal delays are defined here once and used both for the exit
//! [`Transition`] handed to the surface and for the timer that detaches the
//! element, so the two can never drift apart.

use super::easing::Easing;
use super::lifecycle::Transition;
use std::time::Duration;

/// Toast entrance leg.
pub const TOAST_ENTER: Transition = Transition::new(Easing::Pop, Duration::from_millis(500));

/// Toast exit leg; the toast is detached when it ends.
pub const TOAST_EXIT: Transition = Transition::new(Easing::Standard, Duration::from_millis(300));

/// Modal card entrance leg.
pub const MODAL_CARD_ENTER: Transition = Transition::new(Easing::Pop, Duration::from_millis(300));

/// Modal backdrop fade, both directions.
pub const MODAL_BACKDROP_FADE: Transition =
    Transition::new(Easing::Linear, Duration::from_millis(300));

/// Modal card exit leg; the session is torn down when it ends.
pub const MODAL_CARD_EXIT: Transition = Transition::new(Easing::EaseIn, Duration::from_millis(200));

/// Default toast display time in milliseconds.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// How long a toast stays before dismissing itself.
///
/// Zero means the toast stays until it is closed by hand.
///
/// # Example
///
/// ```
/// use iced_feedback::domain::timing::ToastDuration;
/// use std::time::Duration;
///
/// assert_eq!(ToastDuration::default().auto_dismiss(), Some(Duration::from_secs(3)));
/// assert_eq!(ToastDuration::PERSISTENT.auto_dismiss(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastDuration(u64);

impl ToastDuration {
    /// A toast that never dismisses itself.
    pub const PERSISTENT: Self = Self(0);

    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn is_persistent(self) -> bool {
        self.0 == 0
    }

    /// Delay before the automatic dismissal, `None` when persistent.
    #[must_use]
    pub fn auto_dismiss(self) -> Option<Duration> {
        (self.0 > 0).then(|| Duration::from_millis(self.0))
    }
}

impl Default for ToastDuration {
    fn default() -> Self {
        Self(DEFAULT_TOAST_DURATION_MS)
    }
}

impl From<Duration> for ToastDuration {
    fn from(duration: Duration) -> Self {
        Self(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }
}
