// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! The widget arena: creation, parent/child links, absolute-bound derivation, and
//! hit testing, grounded on `tui_widget_add_child`/`tui_widget_get_absolute_bounds`/
//! `tui_widget_contains_point`/`tui_widget_find_by_{id,name}` in
//! `original_source/tui.h`.

use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::widget::node::{Bounds, Node, WidgetId, WidgetKind};
use crate::widget::state::WidgetState;

/// Owns every [`Node`] by stable [`WidgetId`]. Detached nodes (no parent, not the root)
/// are valid arena entries until explicitly destroyed.
pub struct Tree {
    nodes: Vec<Option<Node>>,
    max_children: usize,
}

impl Tree {
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            nodes: Vec::new(),
            max_children: config.max_children,
        }
    }

    /// Allocate a new detached node and return its id.
    pub fn create(&mut self, kind: WidgetKind, state: WidgetState) -> WidgetId {
        let id = WidgetId(self.nodes.len() as u32);
        self.nodes.push(Some(Node::new(id, kind, state)));
        id
    }

    #[must_use]
    pub fn get(&self, id: WidgetId) -> Option<&Node> {
        self.nodes.get(id.index())?.as_ref()
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())?.as_mut()
    }

    pub fn set_bounds(&mut self, id: WidgetId, bounds: Bounds) {
        if let Some(n) = self.get_mut(id) {
            n.bounds = bounds;
        }
    }

    /// Attach `child` under `parent`, detaching it from any current parent first so the
    /// single-parent invariant holds.
    pub fn add_child(&mut self, parent: WidgetId, child: WidgetId) -> Result<()> {
        self.detach(child);

        let count = self.get(parent).map(|p| p.children.len()).unwrap_or(0);
        if count >= self.max_children {
            return Err(Error::Capacity("widget children"));
        }

        if let Some(p) = self.get_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.get_mut(child) {
            c.parent = Some(parent);
        }
        Ok(())
    }

    /// Remove `child` from `parent`'s child list without destroying it.
    pub fn detach(&mut self, child: WidgetId) {
        let Some(parent) = self.get(child).and_then(|c| c.parent) else {
            return;
        };
        if let Some(p) = self.get_mut(parent) {
            p.children.retain(|&c| c != child);
        }
        if let Some(c) = self.get_mut(child) {
            c.parent = None;
        }
    }

    /// Destroy `id` and every descendant, freeing their arena slots.
    pub fn destroy_recursive(&mut self, id: WidgetId) {
        self.detach(id);
        self.destroy_subtree(id);
    }

    fn destroy_subtree(&mut self, id: WidgetId) {
        let children = self.get(id).map(|n| n.children.clone()).unwrap_or_default();
        for child in children {
            self.destroy_subtree(child);
        }
        if let Some(slot) = self.nodes.get_mut(id.index()) {
            *slot = None;
        }
    }

    #[must_use]
    pub fn find_by_id(&self, root: WidgetId, user_id: i32) -> Option<WidgetId> {
        let node = self.get(root)?;
        if node.user_id == Some(user_id) {
            return Some(root);
        }
        node.children.iter().find_map(|&c| self.find_by_id(c, user_id))
    }

    #[must_use]
    pub fn find_by_name(&self, root: WidgetId, name: &str) -> Option<WidgetId> {
        let node = self.get(root)?;
        if node.name.as_deref() == Some(name) {
            return Some(root);
        }
        node.children.iter().find_map(|&c| self.find_by_name(c, name))
    }

    /// Sum bounds along the parent chain; bounds are not cached.
    #[must_use]
    pub fn absolute_bounds(&self, id: WidgetId) -> Bounds {
        let Some(node) = self.get(id) else {
            return Bounds::default();
        };
        let mut x = node.bounds.x;
        let mut y = node.bounds.y;
        let mut cursor = node.parent;
        while let Some(p) = cursor {
            let Some(pn) = self.get(p) else { break };
            x += pn.bounds.x;
            y += pn.bounds.y;
            cursor = pn.parent;
        }
        Bounds { x, y, width: node.bounds.width, height: node.bounds.height }
    }

    #[must_use]
    pub fn contains_point(&self, id: WidgetId, px: i32, py: i32) -> bool {
        let b = self.absolute_bounds(id);
        px >= b.x && px < b.x + b.width && py >= b.y && py < b.y + b.height
    }

    /// Depth-first search for the deepest visible widget under `root` whose absolute
    /// rectangle contains `(px, py)`.
    #[must_use]
    pub fn hit_test(&self, root: WidgetId, px: i32, py: i32) -> Option<WidgetId> {
        let node = self.get(root)?;
        if !node.flags.visible {
            return None;
        }
        if !self.contains_point(root, px, py) {
            return None;
        }
        for &child in node.children.iter().rev() {
            if let Some(hit) = self.hit_test(child, px, py) {
                return Some(hit);
            }
        }
        Some(root)
    }

    /// Collect focusable descendants (`visible ∧ enabled ∧ focusable`) under `scope_root`
    /// in DFS order, stable-sorted by ascending `tab_index`.
    #[must_use]
    pub fn collect_focusables(&self, scope_root: WidgetId) -> Vec<WidgetId> {
        let mut out = Vec::new();
        self.collect_focusables_into(scope_root, &mut out);
        out.sort_by_key(|&id| self.get(id).map(|n| n.tab_index).unwrap_or(i32::MAX));
        out
    }

    fn collect_focusables_into(&self, id: WidgetId, out: &mut Vec<WidgetId>) {
        let Some(node) = self.get(id) else { return };
        if node.flags.visible && node.flags.enabled && node.flags.focusable {
            out.push(id);
        }
        for &child in &node.children {
            self.collect_focusables_into(child, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Tree {
        Tree::new(&EngineConfig::default())
    }

    #[test]
    fn add_child_detaches_from_previous_parent() {
        let mut t = tree();
        let a = t.create(WidgetKind::Container, WidgetState::Container);
        let b = t.create(WidgetKind::Container, WidgetState::Container);
        let child = t.create(WidgetKind::Container, WidgetState::Container);
        t.add_child(a, child).unwrap();
        assert_eq!(t.get(a).unwrap().children(), &[child]);
        t.add_child(b, child).unwrap();
        assert!(t.get(a).unwrap().children().is_empty());
        assert_eq!(t.get(b).unwrap().children(), &[child]);
    }

    #[test]
    fn absolute_bounds_sums_parent_chain() {
        let mut t = tree();
        let root = t.create(WidgetKind::Container, WidgetState::Container);
        let child = t.create(WidgetKind::Container, WidgetState::Container);
        t.set_bounds(root, Bounds { x: 10, y: 5, width: 40, height: 20 });
        t.set_bounds(child, Bounds { x: 2, y: 3, width: 6, height: 1 });
        t.add_child(root, child).unwrap();
        assert_eq!(t.absolute_bounds(child), Bounds { x: 12, y: 8, width: 6, height: 1 });
    }

    #[test]
    fn hit_test_prefers_deepest_child() {
        let mut t = tree();
        let root = t.create(WidgetKind::Container, WidgetState::Container);
        let child = t.create(WidgetKind::Button, WidgetState::Button { text: "ok".into(), pressed: false });
        t.set_bounds(root, Bounds { x: 0, y: 0, width: 20, height: 10 });
        t.set_bounds(child, Bounds { x: 2, y: 2, width: 4, height: 1 });
        t.add_child(root, child).unwrap();
        assert_eq!(t.hit_test(root, 3, 2), Some(child));
        assert_eq!(t.hit_test(root, 15, 8), Some(root));
        assert_eq!(t.hit_test(root, 99, 99), None);
    }

    #[test]
    fn destroy_recursive_frees_descendants() {
        let mut t = tree();
        let root = t.create(WidgetKind::Container, WidgetState::Container);
        let child = t.create(WidgetKind::Container, WidgetState::Container);
        t.add_child(root, child).unwrap();
        t.destroy_recursive(root);
        assert!(t.get(root).is_none());
        assert!(t.get(child).is_none());
    }

    #[test]
    fn find_by_name_searches_depth_first() {
        let mut t = tree();
        let root = t.create(WidgetKind::Container, WidgetState::Container);
        let child = t.create(WidgetKind::Container, WidgetState::Container);
        t.get_mut(child).unwrap().name = Some("target".into());
        t.add_child(root, child).unwrap();
        assert_eq!(t.find_by_name(root, "target"), Some(child));
        assert_eq!(t.find_by_name(root, "missing"), None);
    }

    #[test]
    fn collect_focusables_is_sorted_by_tab_index() {
        let mut t = tree();
        let root = t.create(WidgetKind::Container, WidgetState::Container);
        let a = t.create(WidgetKind::Button, WidgetState::Button { text: "a".into(), pressed: false });
        let b = t.create(WidgetKind::Button, WidgetState::Button { text: "b".into(), pressed: false });
        for &id in &[a, b] {
            let n = t.get_mut(id).unwrap();
            n.flags.focusable = true;
        }
        t.get_mut(a).unwrap().tab_index = 2;
        t.get_mut(b).unwrap().tab_index = 0;
        t.add_child(root, a).unwrap();
        t.add_child(root, b).unwrap();
        assert_eq!(t.collect_focusables(root), vec![b, a]);
    }
}
