// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Phased event dispatch, grounded on `tui_wm_route_event` in
//! `original_source/tui.h`.
//!
//! Per `SPEC_FULL.md` §9 "Shift+Tab" (a REDESIGN FLAG), `Tab` with `shift == true`
//! routes to `focus_prev`, unlike the original source which always calls `focus_next`.

use crate::behavior;
use crate::core::input::{InputEvent, KeyCode, MouseAction};
use crate::event::handlers::{Phase, RoutedEvent};
use crate::event::hotkeys::dispatch_hotkeys;
use crate::widget::{WidgetId, WidgetManager};

/// Route one decoded input event through the widget manager: Tab handling, hotkeys,
/// target selection, and the capture/target/bubble phases.
pub fn route_event(mgr: &mut WidgetManager, input: InputEvent) {
    if let InputEvent::Keyboard { code: KeyCode::Tab, modifiers } = input {
        if modifiers.shift {
            mgr.focus_prev();
        } else {
            mgr.focus_next();
        }
        return;
    }
    if let InputEvent::Keyboard { code: KeyCode::BackTab, .. } = input {
        mgr.focus_prev();
        return;
    }

    if let InputEvent::Keyboard { code, modifiers } = input {
        let consumed = dispatch_hotkeys(mgr.hotkeys_mut(), &mut mgr.tree, code, modifiers);
        if consumed {
            return;
        }
    }

    let Some(target) = select_target(mgr, &input) else { return };

    if let InputEvent::Mouse { action: MouseAction::Press, .. } = input {
        if mgr.tree.get(target).is_some_and(|n| n.flags.focusable) {
            mgr.set_focus(Some(target));
        }
    }

    let path = ancestor_path(mgr, target);
    let mut event = RoutedEvent::new(input, target);

    event.phase = Phase::Capture;
    for &ancestor in &path {
        if ancestor == target {
            continue;
        }
        run_handlers(mgr, ancestor, &mut event, true);
        if event.stopped {
            return;
        }
    }

    event.phase = Phase::Target;
    event.current = target;
    run_handlers(mgr, target, &mut event, true);
    if !event.stopped && !event.prevented {
        behavior::dispatch_default(mgr, target, &event.input);
    }
    if event.stopped {
        return;
    }
    run_handlers(mgr, target, &mut event, false);
    if event.stopped {
        return;
    }

    event.phase = Phase::Bubble;
    for &ancestor in path.iter().rev() {
        if ancestor == target {
            continue;
        }
        event.current = ancestor;
        run_handlers(mgr, ancestor, &mut event, false);
        if event.stopped {
            return;
        }
    }
}

fn select_target(mgr: &WidgetManager, input: &InputEvent) -> Option<WidgetId> {
    match *input {
        InputEvent::Mouse { x, y, .. } => {
            let root = mgr.root()?;
            mgr.tree.hit_test(root, i32::from(x), i32::from(y)).or(Some(root))
        }
        _ => mgr.focus().or_else(|| mgr.root()),
    }
}

fn ancestor_path(mgr: &WidgetManager, target: WidgetId) -> Vec<WidgetId> {
    let mut path = vec![target];
    let mut cursor = mgr.tree.get(target).and_then(|n| n.parent());
    while let Some(id) = cursor {
        path.push(id);
        cursor = mgr.tree.get(id).and_then(|n| n.parent());
    }
    path.reverse();
    path
}

fn run_handlers(mgr: &mut WidgetManager, id: WidgetId, event: &mut RoutedEvent, capture: bool) {
    let Some(node) = mgr.tree.get_mut(id) else { return };
    // Handlers are taken out for the duration of the call so a handler can still borrow
    // `tree` mutably (e.g. to change a sibling's state) without aliasing `node.handlers`.
    let mut handlers = std::mem::take(&mut node.handlers);
    for entry in handlers.iter_mut().filter(|h| h.capture == capture && (h.matches)(&event.input)) {
        (entry.callback)(&mut mgr.tree, id, event);
        if event.stopped {
            break;
        }
    }
    if let Some(node) = mgr.tree.get_mut(id) {
        node.handlers = handlers;
    }
}
