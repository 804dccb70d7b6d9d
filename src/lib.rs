// SPDX-License-Identifier: MPL-2.0
//! `iced_feedback` shows transient toast notifications and single-slot modal
//! dialogs in Iced applications.
//!
//! The lifecycle logic is toolkit-free: [`toast::ToastManager`] and
//! [`modal::ModalController`] drive nodes on a [`surface::Surface`] and keep
//! time on a virtual [`timeline::Timeline`]. [`ui::scene::Scene`] is the
//! retained surface that [`ui::overlay`] renders with Iced.
//!
//! ```
//! use iced_feedback::surface::Surface;
//! use iced_feedback::toast::{ToastManager, ToastOptions};
//! use iced_feedback::ui::scene::Scene;
//! use std::time::Duration;
//!
//! let mut scene = Scene::new();
//! let mut toasts = ToastManager::new();
//! let id = toasts.show(&mut scene, ToastOptions::success("Saved").duration_ms(1000));
//!
//! toasts.advance(&mut scene, Duration::from_millis(1300));
//! assert!(toasts.state(id).is_none());
//! assert!(scene.find("toast-container").is_some());
//! ```

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod modal;
pub mod surface;
pub mod timeline;
pub mod toast;
pub mod ui;
