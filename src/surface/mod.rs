// SPDX-License-Identifier: MPL-2.0
//! Rendering surface port.
//!
//! The toast manager and the modal controller never talk to a widget toolkit
//! directly. They describe what should exist through the [`Surface`] trait:
//! create nodes, hang them in a tree, switch their [`VisualState`], and move
//! focus. [`crate::ui::scene::Scene`] is the retained implementation rendered
//! by the Iced overlay; tests drive the controllers against it as well.
//!
//! # Design Notes
//!
//! - The trait uses domain types only (no Iced handles)
//! - Nothing here is fallible: the surface is assumed to always be available
//! - Scheduling lives in [`crate::timeline`], not on the surface

mod element;

pub use element::{ButtonRole, CardView, Element, TextInputView, ToastView};

use crate::domain::lifecycle::{Transition, VisualState};
use std::fmt;

/// Handle to a node created on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Wraps a raw index. Only surfaces should mint node ids.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a node gets attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    /// Top level of the surface (the page body).
    Root,
    /// Inside another node, after its existing children.
    Node(NodeId),
}

/// Port for the tree the overlays are drawn into.
///
/// # Lifecycle
///
/// 1. `create()` a node (detached)
/// 2. `append()` it under a parent
/// 3. `force_reflow()` so the entering look is laid out
/// 4. `set_visual_state()` to start the transition
/// 5. `detach()` once the exit transition is over
pub trait Surface {
    /// Creates a detached node.
    fn create(&mut self, element: Element) -> NodeId;

    /// Attaches `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    fn append(&mut self, parent: Parent, child: NodeId);

    /// Removes `node` and its subtree from the tree. No-op if detached.
    fn detach(&mut self, node: NodeId);

    /// Returns whether `node` currently hangs in the tree.
    fn is_attached(&self, node: NodeId) -> bool;

    /// Looks a node up by the fixed key it was registered under.
    fn find(&self, key: &str) -> Option<NodeId>;

    /// Registers `node` under `key` for later [`Surface::find`] calls.
    fn set_key(&mut self, node: NodeId, key: &str);

    /// Synchronously lays `node` out so that a state switched right after is
    /// animated instead of being folded into the same paint.
    fn force_reflow(&mut self, node: NodeId);

    /// Sets the timing curve used by the next state change on `node`.
    fn set_transition(&mut self, node: NodeId, transition: Transition);

    /// Applies a visual state, starting the transition set for `node`.
    fn set_visual_state(&mut self, node: NodeId, state: VisualState);

    /// Starts shrinking a progress node from full to empty over `transition`.
    fn start_progress(&mut self, node: NodeId, transition: Transition);

    /// First text-input-like node in the subtree of `root`, if any.
    fn first_text_input(&self, root: NodeId) -> Option<NodeId>;

    /// Moves keyboard focus to `node`.
    fn focus(&mut self, node: NodeId);

    /// Starts routing key presses to the host. Called once per controller.
    fn listen_keyboard(&mut self);
}
