// SPDX-License-Identifier: MPL-2.0
//! Retained node tree implementing [`Surface`].
//!
//! The scene remembers, per node, which visual state it is in, which
//! transition drives it and when the state last changed. The overlay view
//! samples it every frame to derive opacity, slide offset and progress bar
//! fill, so the controllers never see a widget.
//!
//! Detaching a node discards its subtree; ids are never reused.

use crate::domain::lifecycle::{Transition, VisualState};
use crate::surface::{Element, NodeId, Parent, Surface};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone)]
struct SceneNode {
    element: Element,
    parent: Option<Parent>,
    children: Vec<NodeId>,
    state: VisualState,
    transition: Transition,
    changed_at: Duration,
    reflows: u32,
    progress: Option<(Transition, Duration)>,
}

impl SceneNode {
    fn new(element: Element) -> Self {
        Self {
            element,
            parent: None,
            children: Vec::new(),
            state: VisualState::Entering,
            transition: Transition::new(Default::default(), Duration::ZERO),
            changed_at: Duration::ZERO,
            reflows: 0,
            progress: None,
        }
    }
}

/// In-memory surface rendered by [`crate::ui::overlay`].
#[derive(Debug, Default)]
pub struct Scene {
    nodes: HashMap<NodeId, SceneNode>,
    roots: Vec<NodeId>,
    keys: HashMap<String, NodeId>,
    clock: Duration,
    focused: Option<NodeId>,
    keyboard_listeners: usize,
    next_id: u64,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the scene clock used to sample transitions.
    pub fn advance(&mut self, delta: Duration) {
        self.clock += delta;
    }

    #[must_use]
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Element a node was created with.
    #[must_use]
    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(&node).map(|n| &n.element)
    }

    /// Children of `node` in insertion order; empty for unknown nodes.
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(&node)
            .map_or(&[][..], |n| n.children.as_slice())
    }

    /// Top-level nodes in insertion order.
    #[must_use]
    pub fn root_children(&self) -> &[NodeId] {
        &self.roots
    }

    #[must_use]
    pub fn state(&self, node: NodeId) -> Option<VisualState> {
        self.nodes.get(&node).map(|n| n.state)
    }

    #[must_use]
    pub fn transition(&self, node: NodeId) -> Option<Transition> {
        self.nodes.get(&node).map(|n| n.transition)
    }

    /// How many times `node` was force-laid-out.
    #[must_use]
    pub fn reflow_count(&self, node: NodeId) -> u32 {
        self.nodes.get(&node).map_or(0, |n| n.reflows)
    }

    #[must_use]
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Number of keyboard listeners installed so far.
    #[must_use]
    pub fn keyboard_listeners(&self) -> usize {
        self.keyboard_listeners
    }

    /// Number of live nodes, attached or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// How far `node` is shown, `0.0` hidden to `1.0` fully visible.
    ///
    /// Entering nodes are hidden; active nodes ease in and exiting nodes ease
    /// out along their current transition. The value may overshoot `1.0`
    /// briefly for springy curves.
    #[must_use]
    pub fn presence(&self, node: NodeId) -> f32 {
        let Some(n) = self.nodes.get(&node) else {
            return 0.0;
        };
        let eased = n
            .transition
            .eased_progress(self.clock.saturating_sub(n.changed_at));
        match n.state {
            VisualState::Entering => 0.0,
            VisualState::Active => eased,
            VisualState::Exiting => 1.0 - eased,
        }
    }

    /// Opacity to draw `node` with: [`Scene::presence`] clamped to `[0, 1]`.
    #[must_use]
    pub fn opacity(&self, node: NodeId) -> f32 {
        self.presence(node).clamp(0.0, 1.0)
    }

    /// Remaining fill of a progress node, `1.0` until started.
    #[must_use]
    pub fn progress(&self, node: NodeId) -> Option<f32> {
        let n = self.nodes.get(&node)?;
        Some(match n.progress {
            Some((transition, started)) => {
                1.0 - transition.linear_progress(self.clock.saturating_sub(started))
            }
            None => 1.0,
        })
    }

    /// Current text of an input node.
    #[must_use]
    pub fn input_value(&self, node: NodeId) -> Option<&str> {
        match self.nodes.get(&node).map(|n| &n.element) {
            Some(Element::TextInput(input)) => Some(input.value.as_str()),
            _ => None,
        }
    }

    /// Stores typed text. Returns `false` if `node` is not an input.
    pub fn set_input_value(&mut self, node: NodeId, value: impl Into<String>) -> bool {
        match self.nodes.get_mut(&node).map(|n| &mut n.element) {
            Some(Element::TextInput(input)) => {
                input.value = value.into();
                true
            }
            _ => false,
        }
    }

    /// Detaches `node` from its parent without discarding it.
    fn unlink(&mut self, node: NodeId) {
        let Some(parent) = self.nodes.get_mut(&node).and_then(|n| n.parent.take()) else {
            return;
        };
        let siblings = match parent {
            Parent::Root => Some(&mut self.roots),
            Parent::Node(parent) => self.nodes.get_mut(&parent).map(|p| &mut p.children),
        };
        if let Some(siblings) = siblings {
            siblings.retain(|&child| child != node);
        }
    }

    fn discard(&mut self, node: NodeId) {
        let Some(removed) = self.nodes.remove(&node) else {
            return;
        };
        if self.focused == Some(node) {
            self.focused = None;
        }
        self.keys.retain(|_, keyed| *keyed != node);
        for child in removed.children {
            self.discard(child);
        }
    }
}

impl Surface for Scene {
    fn create(&mut self, element: Element) -> NodeId {
        let id = NodeId::from_raw(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, SceneNode::new(element));
        id
    }

    fn append(&mut self, parent: Parent, child: NodeId) {
        if !self.nodes.contains_key(&child) {
            return;
        }
        if let Parent::Node(parent) = parent {
            if parent == child || !self.nodes.contains_key(&parent) {
                return;
            }
        }
        self.unlink(child);
        match parent {
            Parent::Root => self.roots.push(child),
            Parent::Node(parent) => {
                if let Some(p) = self.nodes.get_mut(&parent) {
                    p.children.push(child);
                }
            }
        }
        if let Some(n) = self.nodes.get_mut(&child) {
            n.parent = Some(parent);
        }
    }

    fn detach(&mut self, node: NodeId) {
        if !self.is_attached(node) {
            return;
        }
        self.unlink(node);
        self.discard(node);
    }

    fn is_attached(&self, node: NodeId) -> bool {
        let mut current = node;
        loop {
            match self.nodes.get(&current).and_then(|n| n.parent) {
                Some(Parent::Root) => return true,
                Some(Parent::Node(parent)) => current = parent,
                None => return false,
            }
        }
    }

    fn find(&self, key: &str) -> Option<NodeId> {
        self.keys.get(key).copied()
    }

    fn set_key(&mut self, node: NodeId, key: &str) {
        if self.nodes.contains_key(&node) {
            self.keys.insert(key.to_owned(), node);
        }
    }

    fn force_reflow(&mut self, node: NodeId) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.reflows += 1;
        }
    }

    fn set_transition(&mut self, node: NodeId, transition: Transition) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.transition = transition;
        }
    }

    fn set_visual_state(&mut self, node: NodeId, state: VisualState) {
        if let Some(n) = self.nodes.get_mut(&node) {
            if n.state != state {
                n.state = state;
                n.changed_at = self.clock;
            }
        }
    }

    fn start_progress(&mut self, node: NodeId, transition: Transition) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.progress = Some((transition, self.clock));
        }
    }

    fn first_text_input(&self, root: NodeId) -> Option<NodeId> {
        self.children(root).iter().find_map(|&child| {
            match self.nodes.get(&child) {
                Some(n) if n.element.is_text_input() => Some(child),
                Some(_) => self.first_text_input(child),
                None => None,
            }
        })
    }

    fn focus(&mut self, node: NodeId) {
        if self.nodes.contains_key(&node) {
            self.focused = Some(node);
        }
    }

    fn listen_keyboard(&mut self) {
        self.keyboard_listeners += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::easing::Easing;
    use crate::surface::{ButtonRole, TextInputView};
    use approx::assert_abs_diff_eq;

    const LINEAR_100: Transition = Transition::new(Easing::Linear, Duration::from_millis(100));

    #[test]
    fn created_nodes_start_detached() {
        let mut scene = Scene::new();
        let node = scene.create(Element::Backdrop);
        assert!(!scene.is_attached(node));
        assert_eq!(scene.state(node), Some(VisualState::Entering));
    }

    #[test]
    fn attachment_follows_the_parent_chain() {
        let mut scene = Scene::new();
        let outer = scene.create(Element::Backdrop);
        let inner = scene.create(Element::Text("hi".into()));
        scene.append(Parent::Node(outer), inner);
        assert!(!scene.is_attached(inner));

        scene.append(Parent::Root, outer);
        assert!(scene.is_attached(inner));
        assert_eq!(scene.root_children(), &[outer]);
        assert_eq!(scene.children(outer), &[inner]);
    }

    #[test]
    fn append_moves_node_between_parents() {
        let mut scene = Scene::new();
        let a = scene.create(Element::ToastContainer);
        let b = scene.create(Element::ToastContainer);
        let child = scene.create(Element::Text("x".into()));
        scene.append(Parent::Node(a), child);
        scene.append(Parent::Node(b), child);
        assert!(scene.children(a).is_empty());
        assert_eq!(scene.children(b), &[child]);
    }

    #[test]
    fn detach_discards_subtree_and_focus() {
        let mut scene = Scene::new();
        let outer = scene.create(Element::Backdrop);
        let inner = scene.create(Element::Button(ButtonRole::Confirm, "OK".into()));
        scene.append(Parent::Node(outer), inner);
        scene.append(Parent::Root, outer);
        scene.focus(inner);

        scene.detach(outer);
        assert!(scene.is_empty());
        assert!(scene.root_children().is_empty());
        assert_eq!(scene.focused(), None);
        assert!(scene.element(inner).is_none());
    }

    #[test]
    fn detach_of_detached_node_keeps_it() {
        let mut scene = Scene::new();
        let node = scene.create(Element::Backdrop);
        scene.detach(node);
        assert!(scene.element(node).is_some());
    }

    #[test]
    fn keys_resolve_until_detached() {
        let mut scene = Scene::new();
        let node = scene.create(Element::ToastContainer);
        scene.set_key(node, "toast-container");
        scene.append(Parent::Root, node);
        assert_eq!(scene.find("toast-container"), Some(node));

        scene.detach(node);
        assert_eq!(scene.find("toast-container"), None);
    }

    #[test]
    fn presence_eases_in_and_out() {
        let mut scene = Scene::new();
        let node = scene.create(Element::Backdrop);
        scene.set_transition(node, LINEAR_100);
        assert_abs_diff_eq!(scene.presence(node), 0.0);

        scene.set_visual_state(node, VisualState::Active);
        scene.advance(Duration::from_millis(50));
        assert_abs_diff_eq!(scene.presence(node), 0.5, epsilon = 1e-4);

        scene.advance(Duration::from_millis(100));
        assert_abs_diff_eq!(scene.opacity(node), 1.0);

        scene.set_visual_state(node, VisualState::Exiting);
        scene.advance(Duration::from_millis(25));
        assert_abs_diff_eq!(scene.presence(node), 0.75, epsilon = 1e-4);
    }

    #[test]
    fn progress_depletes_once_started() {
        let mut scene = Scene::new();
        let bar = scene.create(Element::Text(String::new()));
        assert_eq!(scene.progress(bar), Some(1.0));

        scene.start_progress(bar, LINEAR_100);
        scene.advance(Duration::from_millis(75));
        assert_abs_diff_eq!(scene.progress(bar).unwrap_or_default(), 0.25, epsilon = 1e-4);
    }

    #[test]
    fn first_text_input_searches_depth_first() {
        let mut scene = Scene::new();
        let card = scene.create(Element::Backdrop);
        let text = scene.create(Element::Text("Name".into()));
        let group = scene.create(Element::Backdrop);
        let input = scene.create(Element::TextInput(TextInputView::new("name")));
        let later = scene.create(Element::TextInput(TextInputView::new("other")));
        scene.append(Parent::Node(card), text);
        scene.append(Parent::Node(group), input);
        scene.append(Parent::Node(card), group);
        scene.append(Parent::Node(card), later);

        assert_eq!(scene.first_text_input(card), Some(input));
        assert_eq!(scene.first_text_input(text), None);
    }

    #[test]
    fn input_values_are_stored_on_inputs_only() {
        let mut scene = Scene::new();
        let input = scene.create(Element::TextInput(TextInputView::new("name")));
        let text = scene.create(Element::Text("x".into()));

        assert!(scene.set_input_value(input, "report.pdf"));
        assert!(!scene.set_input_value(text, "nope"));
        assert_eq!(scene.input_value(input), Some("report.pdf"));
        assert_eq!(scene.input_value(text), None);
    }

    #[test]
    fn repeated_state_keeps_original_timestamp() {
        let mut scene = Scene::new();
        let node = scene.create(Element::Backdrop);
        scene.set_transition(node, LINEAR_100);
        scene.set_visual_state(node, VisualState::Active);
        scene.advance(Duration::from_millis(60));
        scene.set_visual_state(node, VisualState::Active);
        assert_abs_diff_eq!(scene.presence(node), 0.6, epsilon = 1e-4);
    }
}
