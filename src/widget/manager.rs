// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Root/focus/hover tracking and the modal focus-scope stack, grounded on
//! `tui_widget_manager` and `tui_wm_*`/`tui_focus_*` in `original_source/tui.h`.

use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::event::hotkeys::HotkeyEntry;
use crate::widget::node::WidgetId;
use crate::widget::tree::Tree;

/// Owns the root pointer, current focus/hover, the modal focus-scope stack, and the
/// hotkey table — everything `tui_widget_manager` groups outside the tree itself.
pub struct WidgetManager {
    pub tree: Tree,
    root: Option<WidgetId>,
    focus: Option<WidgetId>,
    hover: Option<WidgetId>,
    focus_stack: Vec<WidgetId>,
    max_focus_stack: usize,
    hotkeys: Vec<HotkeyEntry>,
    max_hotkeys: usize,
}

impl WidgetManager {
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            tree: Tree::new(config),
            root: None,
            focus: None,
            hover: None,
            focus_stack: Vec::new(),
            max_focus_stack: config.max_focus_stack,
            hotkeys: Vec::new(),
            max_hotkeys: config.max_hotkeys,
        }
    }

    #[must_use]
    pub fn root(&self) -> Option<WidgetId> {
        self.root
    }

    pub fn set_root(&mut self, root: WidgetId) {
        self.root = Some(root);
    }

    #[must_use]
    pub fn focus(&self) -> Option<WidgetId> {
        self.focus
    }

    /// Set `focus` directly without going through the tab-order DFS, clearing the
    /// previous focused widget's flag. Used by click-to-focus and focus-scope pushes.
    pub fn set_focus(&mut self, id: Option<WidgetId>) {
        if let Some(prev) = self.focus {
            if let Some(n) = self.tree.get_mut(prev) {
                n.flags.focused = false;
            }
        }
        tracing::debug!(from = ?self.focus, to = ?id, "focus changed");
        self.focus = id;
        if let Some(id) = id {
            if let Some(n) = self.tree.get_mut(id) {
                n.flags.focused = true;
            }
        }
    }

    #[must_use]
    pub fn hover(&self) -> Option<WidgetId> {
        self.hover
    }

    pub fn set_hover(&mut self, id: Option<WidgetId>) {
        self.hover = id;
    }

    fn scope_root(&self) -> Option<WidgetId> {
        self.focus_stack.last().copied().or(self.root)
    }

    /// Advance focus to the next focusable under the current scope; wraps modulo the
    /// collected length, and picks the first element if the current focus isn't found
    /// under this scope.
    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.step_focus(-1);
    }

    fn step_focus(&mut self, delta: i32) {
        let Some(scope) = self.scope_root() else { return };
        let focusables = self.tree.collect_focusables(scope);
        if focusables.is_empty() {
            return;
        }
        let len = focusables.len() as i32;
        let current = self.focus.and_then(|f| focusables.iter().position(|&id| id == f));
        let next = match current {
            Some(i) => ((i as i32 + delta).rem_euclid(len)) as usize,
            None => 0,
        };
        self.set_focus(Some(focusables[next]));
    }

    /// Push a modal focus scope: the previous focus is preserved on the stack and the
    /// first focusable under `modal_root` becomes focused.
    pub fn push_focus(&mut self, modal_root: WidgetId) -> Result<()> {
        if self.focus_stack.len() >= self.max_focus_stack {
            return Err(Error::Capacity("focus scope stack"));
        }
        self.focus_stack.push(modal_root);
        let first = self.tree.collect_focusables(modal_root).first().copied();
        self.set_focus(first);
        Ok(())
    }

    /// Pop the current modal scope and return focus to the first focusable under the
    /// (new) top scope, or the tree root.
    pub fn pop_focus(&mut self) {
        self.focus_stack.pop();
        let Some(scope) = self.scope_root() else {
            self.set_focus(None);
            return;
        };
        let first = self.tree.collect_focusables(scope).first().copied();
        self.set_focus(first);
    }

    pub fn register_hotkey(&mut self, entry: HotkeyEntry) -> Result<()> {
        if self.hotkeys.len() >= self.max_hotkeys {
            return Err(Error::Capacity("hotkey table"));
        }
        self.hotkeys.push(entry);
        Ok(())
    }

    #[must_use]
    pub fn hotkeys(&self) -> &[HotkeyEntry] {
        &self.hotkeys
    }

    pub fn hotkeys_mut(&mut self) -> &mut [HotkeyEntry] {
        &mut self.hotkeys
    }
}
