// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo.
//!
//! Escape always reaches the modal controller, even when a focused text
//! input consumed it to drop its own focus. Other keys are routed only when
//! no widget captured them, so typing in an input never confirms the modal.

use super::Message;
use crate::modal::Key;
use iced::keyboard::{self, key::Named};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval between animation frames while overlays are moving.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
            return None;
        };
        map_key(&key, status).map(Message::Key)
    })
}

fn map_key(key: &keyboard::Key, status: event::Status) -> Option<Key> {
    match key.as_ref() {
        keyboard::Key::Named(Named::Escape) => Some(Key::Escape),
        _ if matches!(status, event::Status::Captured) => None,
        keyboard::Key::Named(Named::Enter) => Some(Key::Enter),
        _ => Some(Key::Other),
    }
}

/// Frame ticks, only while something is animating or waiting on a timer.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
