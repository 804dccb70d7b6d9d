// SPDX-License-Identifier: MPL-2.0
//! Virtual clock with delayed timers and next-frame callbacks.
//!
//! Controllers never sleep or spawn. They schedule plain events on a
//! [`Timeline`] and the host event loop moves time forward with
//! [`Timeline::advance`], typically from an `iced::time::every` tick.
//! Keeping time virtual makes every lifecycle deterministic under test.

use std::collections::{BTreeMap, VecDeque};
use std::time::Duration;

/// Identifier of a scheduled timer, unique per timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Event queue ordered by deadline, then by scheduling order.
#[derive(Debug)]
pub struct Timeline<E> {
    now: Duration,
    next_seq: u64,
    timers: BTreeMap<(Duration, u64), E>,
    frame: VecDeque<E>,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            timers: BTreeMap::new(),
            frame: VecDeque::new(),
        }
    }
}

impl<E> Timeline<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Fires `event` once `after` has elapsed from now.
    pub fn schedule(&mut self, after: Duration, event: E) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.insert((self.now + after, seq), event);
        TimerId(seq)
    }

    /// Fires `event` on the next paint, before any time passes.
    pub fn next_frame(&mut self, event: E) {
        self.frame.push_back(event);
    }

    /// Drops a pending timer. Returns `false` if it already fired.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let key = self.timers.keys().find(|(_, seq)| *seq == id.0).copied();
        key.and_then(|key| self.timers.remove(&key)).is_some()
    }

    /// Number of pending timers and frame callbacks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.timers.len() + self.frame.len()
    }

    /// Moves the clock forward by `delta`, handing each due event to `fire`.
    ///
    /// Frame callbacks queued before the call run first. Timers then fire in
    /// deadline order with the clock parked on each deadline, so a handler
    /// that schedules a follow-up inside the window sees it fire in the same
    /// call. Frame callbacks queued by handlers wait for the next advance.
    pub fn advance(&mut self, delta: Duration, mut fire: impl FnMut(&mut Self, E)) {
        let target = self.now + delta;

        let frame: Vec<E> = self.frame.drain(..).collect();
        for event in frame {
            fire(self, event);
        }

        while let Some(entry) = self.timers.first_entry() {
            let (deadline, _) = *entry.key();
            if deadline > target {
                break;
            }
            let event = entry.remove();
            self.now = self.now.max(deadline);
            fire(self, event);
        }

        self.now = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn collect(timeline: &mut Timeline<&'static str>, delta: Duration) -> Vec<&'static str> {
        let mut fired = Vec::new();
        timeline.advance(delta, |_, event| fired.push(event));
        fired
    }

    #[test]
    fn timer_fires_only_when_due() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(100), "a");

        assert!(collect(&mut timeline, ms(99)).is_empty());
        assert_eq!(collect(&mut timeline, ms(1)), vec!["a"]);
        assert_eq!(timeline.pending(), 0);
    }

    #[test]
    fn timers_fire_in_deadline_then_insertion_order() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(200), "late");
        timeline.schedule(ms(100), "first");
        timeline.schedule(ms(100), "second");

        assert_eq!(collect(&mut timeline, ms(500)), vec!["first", "second", "late"]);
    }

    #[test]
    fn frame_callbacks_run_before_timers() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(0), "timer");
        timeline.next_frame("frame");

        assert_eq!(collect(&mut timeline, ms(0)), vec!["frame", "timer"]);
    }

    #[test]
    fn chained_timer_inside_window_fires_in_same_advance() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(100), 1_u32);

        let mut fired = Vec::new();
        timeline.advance(ms(1000), |timeline, event| {
            fired.push((event, timeline.now()));
            if event == 1 {
                timeline.schedule(ms(300), 2);
            }
        });

        assert_eq!(fired, vec![(1, ms(100)), (2, ms(400))]);
        assert_eq!(timeline.now(), ms(1000));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timeline = Timeline::new();
        let id = timeline.schedule(ms(10), "gone");

        assert!(timeline.cancel(id));
        assert!(!timeline.cancel(id));
        assert!(collect(&mut timeline, ms(50)).is_empty());
    }
}
