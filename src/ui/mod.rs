// SPDX-License-Identifier: MPL-2.0
//! Iced side of the overlays.
//!
//! - [`scene`] - Retained node tree implementing the surface port
//! - [`overlay`] - Iced widgets rendered from the scene
//! - [`design_tokens`] - Colors, spacing and sizing constants

pub mod design_tokens;
pub mod overlay;
pub mod scene;
