// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Default Dropdown input behavior, grounded on `tui_widget_handle_dropdown_input` in
//! `original_source/tui.h`.

use crate::core::input::{InputEvent, KeyCode, MouseAction, MouseButton};
use crate::widget::{Bounds, WidgetState};

/// Closed ↔ open state machine. When open, Up/Down move selection and Enter/Space/Esc
/// close; when closed, Enter/Space open. A click while open either selects a visible
/// row (at most 5) or closes without changing the selection.
pub fn handle(state: &mut WidgetState, bounds: Bounds, input: &InputEvent) -> bool {
    let WidgetState::Dropdown { items, selected, scroll, open } = state else { return false };
    let count = items.len();

    match input {
        InputEvent::Keyboard { code, .. } if *open => match code {
            KeyCode::Up => {
                *selected = selected.saturating_sub(1);
                true
            }
            KeyCode::Down => {
                if *selected + 1 < count {
                    *selected += 1;
                }
                true
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Escape => {
                *open = false;
                true
            }
            _ => false,
        },
        InputEvent::Keyboard { code: KeyCode::Enter | KeyCode::Char(' '), .. } if !*open => {
            *open = true;
            true
        }
        InputEvent::Mouse { button: MouseButton::Left, action: MouseAction::Press, y, .. } => {
            if *open {
                let clicked_row = i32::from(*y) - bounds.y - 1;
                if clicked_row >= 0 && (clicked_row as usize) < count && clicked_row < 5 {
                    *selected = *scroll + clicked_row as usize;
                }
                *open = false;
            } else {
                *open = true;
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyModifiers;

    fn sample(open: bool) -> WidgetState {
        WidgetState::Dropdown { items: vec!["a".into(), "b".into(), "c".into()], selected: 0, scroll: 0, open }
    }

    #[test]
    fn enter_opens_when_closed() {
        let mut state = sample(false);
        handle(&mut state, Bounds::default(), &InputEvent::Keyboard { code: KeyCode::Enter, modifiers: KeyModifiers::NONE });
        assert!(matches!(state, WidgetState::Dropdown { open: true, .. }));
    }

    #[test]
    fn escape_closes_without_changing_selection() {
        let mut state = sample(true);
        handle(&mut state, Bounds::default(), &InputEvent::Keyboard { code: KeyCode::Escape, modifiers: KeyModifiers::NONE });
        let WidgetState::Dropdown { open, selected, .. } = state else { unreachable!() };
        assert!(!open);
        assert_eq!(selected, 0);
    }
}
