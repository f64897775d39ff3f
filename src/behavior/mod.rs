// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Built-in per-type input behaviors and the default recursive drawer, grounded on the
//! `tui_widget_handle_*_input` functions and `tui_widget_draw_recursive` in
//! `original_source/tui.h`.

pub mod button;
pub mod checkbox;
pub mod draw_default;
pub mod dropdown;
pub mod list;
pub mod radio;
pub mod scrollbar;
pub mod slider;
pub mod spinner;
pub mod splitter;
pub mod tabs;
pub mod textarea;
pub mod textbox;

pub use draw_default::draw_tree;

use crate::core::input::InputEvent;
use crate::widget::{WidgetId, WidgetKind, WidgetManager};

/// Run the built-in default behavior for `target`'s widget type against `input`,
/// mutating its state in place. Returns whether the input was consumed.
///
/// `WidgetKind::Container`, `Panel`, `Progress`, and `Custom` have no entry in the
/// original's input dispatch table and are inert here too.
pub fn dispatch_default(mgr: &mut WidgetManager, target: WidgetId, input: &InputEvent) -> bool {
    let Some(node) = mgr.tree.get(target) else { return false };
    let kind = node.kind;
    let has_border = node.style.border.is_some();

    match kind {
        WidgetKind::Container | WidgetKind::Panel | WidgetKind::Progress | WidgetKind::Custom => false,
        WidgetKind::Button => {
            let Some(node) = mgr.tree.get_mut(target) else { return false };
            button::handle(&mut node.state, input)
        }
        WidgetKind::Textbox => {
            let Some(node) = mgr.tree.get_mut(target) else { return false };
            textbox::handle(&mut node.state, input)
        }
        WidgetKind::Checkbox => {
            let Some(node) = mgr.tree.get_mut(target) else { return false };
            checkbox::handle(&mut node.state, input)
        }
        WidgetKind::Radio => {
            let Some(node) = mgr.tree.get_mut(target) else { return false };
            radio::handle(&mut node.state, input)
        }
        WidgetKind::List => {
            let bounds = mgr.tree.absolute_bounds(target);
            let Some(node) = mgr.tree.get_mut(target) else { return false };
            list::handle(&mut node.state, bounds, input)
        }
        WidgetKind::Slider => {
            let bounds = mgr.tree.absolute_bounds(target);
            let Some(node) = mgr.tree.get_mut(target) else { return false };
            slider::handle(&mut node.state, bounds, input)
        }
        WidgetKind::Spinner => {
            let bounds = mgr.tree.absolute_bounds(target);
            let Some(node) = mgr.tree.get_mut(target) else { return false };
            spinner::handle(&mut node.state, bounds, input)
        }
        WidgetKind::Dropdown => {
            let bounds = mgr.tree.absolute_bounds(target);
            let Some(node) = mgr.tree.get_mut(target) else { return false };
            dropdown::handle(&mut node.state, bounds, input)
        }
        WidgetKind::Tabs => {
            let bounds = mgr.tree.absolute_bounds(target);
            let Some(node) = mgr.tree.get_mut(target) else { return false };
            tabs::handle(&mut node.state, bounds, input)
        }
        WidgetKind::Scrollbar => {
            let bounds = mgr.tree.absolute_bounds(target);
            let Some(node) = mgr.tree.get_mut(target) else { return false };
            scrollbar::handle(&mut node.state, bounds, input)
        }
        WidgetKind::Splitter => {
            let bounds = mgr.tree.absolute_bounds(target);
            let Some(node) = mgr.tree.get_mut(target) else { return false };
            splitter::handle(&mut node.state, bounds, input)
        }
        WidgetKind::Textarea => {
            let bounds = mgr.tree.absolute_bounds(target);
            let visible_rows = (bounds.height - if has_border { 2 } else { 0 }).max(1) as usize;
            let Some(node) = mgr.tree.get_mut(target) else { return false };
            textarea::handle(&mut node.state, bounds, visible_rows, input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::core::input::{KeyCode, KeyModifiers};
    use crate::widget::{Bounds, WidgetState};

    #[test]
    fn dispatch_default_routes_enter_to_button_behavior() {
        let mut mgr = WidgetManager::new(&EngineConfig::default());
        let button = mgr.tree.create(WidgetKind::Button, WidgetState::Button { text: "ok".into(), pressed: false });
        mgr.tree.set_bounds(button, Bounds { x: 0, y: 0, width: 8, height: 1 });
        let consumed = dispatch_default(
            &mut mgr,
            button,
            &InputEvent::Keyboard { code: KeyCode::Enter, modifiers: KeyModifiers::NONE },
        );
        assert!(consumed);
        match &mgr.tree.get(button).unwrap().state {
            WidgetState::Button { pressed, .. } => assert!(*pressed),
            _ => unreachable!(),
        }
    }

    #[test]
    fn dispatch_default_is_inert_for_panels() {
        let mut mgr = WidgetManager::new(&EngineConfig::default());
        let panel = mgr.tree.create(WidgetKind::Panel, WidgetState::Panel);
        let consumed = dispatch_default(
            &mut mgr,
            panel,
            &InputEvent::Keyboard { code: KeyCode::Enter, modifiers: KeyModifiers::NONE },
        );
        assert!(!consumed);
    }
}
