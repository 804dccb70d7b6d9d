// SPDX-License-Identifier: MPL-2.0
//! Domain layer - overlay lifecycle rules with no GUI dependencies.
//!
//! This module contains the pure value types shared by the toast manager and
//! the modal controller. It depends on nothing but `std`, so the lifecycle
//! rules can be tested without a renderer.
//!
//! # Modules
//!
//! - [`lifecycle`]: [`VisualState`](lifecycle::VisualState), the guarded
//!   [`Lifecycle`](lifecycle::Lifecycle) and animation [`Transition`](lifecycle::Transition)s
//! - [`easing`]: [`Easing`](easing::Easing) timing curves
//! - [`timing`]: fixed animation legs and [`ToastDuration`](timing::ToastDuration)

pub mod easing;
pub mod lifecycle;
pub mod timing;
