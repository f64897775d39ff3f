// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Default Spinner input behavior, grounded on `tui_widget_handle_spinner_input` in
//! `original_source/tui.h`.

use crate::core::input::{InputEvent, KeyCode, MouseAction, MouseButton};
use crate::widget::{Bounds, WidgetState};

pub fn handle(state: &mut WidgetState, bounds: Bounds, input: &InputEvent) -> bool {
    let WidgetState::Spinner { value, min, max, step } = state else { return false };
    let step = if *step > 0 { *step } else { 1 };

    match input {
        InputEvent::Keyboard { code, .. } => match code {
            KeyCode::Left | KeyCode::Down => {
                *value = (*value - step).max(*min);
                true
            }
            KeyCode::Right | KeyCode::Up => {
                *value = (*value + step).min(*max);
                true
            }
            _ => false,
        },
        InputEvent::Mouse { button: MouseButton::Left, action: MouseAction::Press, x, .. } => {
            let rel_x = i32::from(*x) - bounds.x;
            if rel_x < bounds.width / 3 {
                *value = (*value - step).max(*min);
            } else if rel_x > 2 * bounds.width / 3 {
                *value = (*value + step).min(*max);
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

    #[test]
    fn click_on_right_third_increments() {
        let mut state = WidgetState::Spinner { value: 0, min: 0, max: 10, step: 0 };
        let bounds = Bounds { x: 0, y: 0, width: 9, height: 1 };
        handle(&mut state, bounds, &InputEvent::Mouse {
            button: MouseButton::Left,
            x: 8,
            y: 0,
            action: MouseAction::Press,
            modifiers: KeyModifiers::NONE,
        });
        let WidgetState::Spinner { value, .. } = state else { unreachable!() };
        assert_eq!(value, 1);
    }

    #[test]
    fn value_clamps_at_max() {
        let mut state = WidgetState::Spinner { value: 10, min: 0, max: 10, step: 1 };
        handle(&mut state, Bounds::default(), &InputEvent::Keyboard { code: KeyCode::Up, modifiers: KeyModifiers::NONE });
        let WidgetState::Spinner { value, .. } = state else { unreachable!() };
        assert_eq!(value, 10);
    }
}
