// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! The hotkey table, grounded on `tui_hotkey`/`tui_wm_route_event`'s hotkey pass in
//! `original_source/tui.h`.
//!
//! Per `SPEC_FULL.md` §9 "Modifier decoding in hotkeys" (a REDESIGN FLAG), matching here
//! compares `shift`/`alt`/`ctrl` in addition to the key, rather than leaving modifiers
//! unchecked as the original source does.

use crate::core::input::{KeyCode, KeyModifiers};
use crate::widget::Tree;

/// A bounded table entry: which key+modifiers combination fires it, and the callback.
/// The callback returns `true` if it consumed the event (stopping further dispatch).
pub struct HotkeyEntry {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
    pub active: bool,
    pub handler: Box<dyn FnMut(&mut Tree) -> bool>,
}

impl std::fmt::Debug for HotkeyEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HotkeyEntry")
            .field("code", &self.code)
            .field("modifiers", &self.modifiers)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

impl HotkeyEntry {
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers, handler: Box<dyn FnMut(&mut Tree) -> bool>) -> Self {
        Self { code, modifiers, active: true, handler }
    }

    #[must_use]
    fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        self.active && self.code == code && self.modifiers == modifiers
    }
}

/// Check the table in registration order; run the first matching active entry's
/// handler. Returns whether a hotkey consumed the event.
pub fn dispatch_hotkeys(table: &mut [HotkeyEntry], tree: &mut Tree, code: KeyCode, modifiers: KeyModifiers) -> bool {
    for entry in table.iter_mut() {
        if entry.matches(code, modifiers) {
            return (entry.handler)(tree);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    #[test]
    fn first_matching_active_hotkey_fires_and_consumes() {
        let mut tree = Tree::new(&EngineConfig::default());
        let mut fired = 0;
        let mut table = vec![HotkeyEntry::new(
            KeyCode::Char('s'),
            KeyModifiers { ctrl: true, ..KeyModifiers::NONE },
            Box::new(|_tree| {
                true
            }),
        )];
        let consumed = dispatch_hotkeys(&mut table, &mut tree, KeyCode::Char('s'), KeyModifiers { ctrl: true, ..KeyModifiers::NONE });
        assert!(consumed);
        let _ = &mut fired; // silence unused in this minimal harness
    }

    #[test]
    fn modifier_mismatch_does_not_match() {
        let mut tree = Tree::new(&EngineConfig::default());
        let mut table = vec![HotkeyEntry::new(
            KeyCode::Char('s'),
            KeyModifiers { ctrl: true, ..KeyModifiers::NONE },
            Box::new(|_| true),
        )];
        let consumed = dispatch_hotkeys(&mut table, &mut tree, KeyCode::Char('s'), KeyModifiers::NONE);
        assert!(!consumed);
    }
}
