// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Default Tabs input behavior, grounded on `tui_widget_handle_tabs_input` in
//! `original_source/tui.h`.

use crate::core::input::{InputEvent, KeyCode, MouseAction, MouseButton};
use crate::core::width::text_width;
use crate::widget::{Bounds, WidgetState};

pub fn handle(state: &mut WidgetState, bounds: Bounds, input: &InputEvent) -> bool {
    let WidgetState::Tabs { labels, selected } = state else { return false };
    let count = labels.len();

    match input {
        InputEvent::Keyboard { code: KeyCode::Left, .. } => {
            *selected = selected.saturating_sub(1);
            true
        }
        InputEvent::Keyboard { code: KeyCode::Right, .. } => {
            if *selected + 1 < count {
                *selected += 1;
            }
            true
        }
        InputEvent::Mouse { button: MouseButton::Left, action: MouseAction::Press, x, .. } => {
            let rel_x = i32::from(*x) - bounds.x;
            let mut tab_x = 0i32;
            for (i, label) in labels.iter().enumerate() {
                let tab_width = text_width(label) as i32 + 2;
                if rel_x >= tab_x && rel_x < tab_x + tab_width {
                    *selected = i;
                    return true;
                }
                tab_x += tab_width + 1;
            }
            false
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyModifiers;

    #[test]
    fn click_selects_the_tab_under_the_pointer() {
        let mut state = WidgetState::Tabs { labels: vec!["ab".into(), "cde".into()], selected: 0 };
        // Tab 0 occupies columns [0, 4) ("ab" + 2 padding), separator at 4, tab 1 starts at 5.
        let handled = handle(&mut state, Bounds { x: 0, y: 0, width: 20, height: 1 }, &InputEvent::Mouse {
            button: MouseButton::Left,
            x: 6,
            y: 0,
            action: MouseAction::Press,
            modifiers: KeyModifiers::NONE,
        });
        assert!(handled);
        let WidgetState::Tabs { selected, .. } = state else { unreachable!() };
        assert_eq!(selected, 1);
    }
}
