// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Default Scrollbar input behavior, grounded on `tui_widget_handle_scrollbar_input` in
//! `original_source/tui.h`.

use crate::core::input::{InputEvent, MouseAction, MouseButton, ScrollDirection};
use crate::widget::{Bounds, WidgetState};

pub fn handle(state: &mut WidgetState, bounds: Bounds, input: &InputEvent) -> bool {
    let WidgetState::Scrollbar { content_size, view_size, scroll, vertical, dragging, .. } = state else {
        return false;
    };
    let max_scroll = (*content_size - *view_size).max(0);

    match input {
        InputEvent::Mouse { button: MouseButton::Left, action: MouseAction::Press, x, y, .. } => {
            let ratio = if *vertical {
                (i32::from(*y) - bounds.y) as f32 / (bounds.height - 1).max(1) as f32
            } else {
                (i32::from(*x) - bounds.x) as f32 / (bounds.width - 1).max(1) as f32
            };
            *scroll = ((ratio * max_scroll as f32) + 0.5).clamp(0.0, max_scroll as f32) as i32;
            *dragging = true;
            true
        }
        InputEvent::Mouse { action: MouseAction::Scroll(dir), .. } => {
            *scroll = match dir {
                ScrollDirection::Up => (*scroll - 3).max(0),
                ScrollDirection::Down => (*scroll + 3).min(max_scroll),
            };
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyModifiers;

    #[test]
    fn click_sets_scroll_from_ratio_over_bar_length() {
        let mut state = WidgetState::Scrollbar {
            content_size: 100,
            view_size: 10,
            scroll: 0,
            vertical: true,
            dragging: false,
            drag_start: 0,
        };
        let bounds = Bounds { x: 0, y: 0, width: 1, height: 10 };
        handle(&mut state, bounds, &InputEvent::Mouse {
            button: MouseButton::Left,
            x: 0,
            y: 9,
            action: MouseAction::Press,
            modifiers: KeyModifiers::NONE,
        });
        let WidgetState::Scrollbar { scroll, dragging, .. } = state else { unreachable!() };
        assert_eq!(scroll, 90);
        assert!(dragging);
    }
}
