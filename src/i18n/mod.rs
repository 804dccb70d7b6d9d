// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! Localizes the fallback modal labels and the demo window using the Fluent
//! localization system.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files
//! - Runtime language switching

pub mod fluent;

pub use fluent::I18n;
