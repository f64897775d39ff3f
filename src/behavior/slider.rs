// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Default Slider input behavior, grounded on `tui_widget_handle_slider_input` in
//! `original_source/tui.h`.

use crate::core::input::{InputEvent, KeyCode, MouseAction, MouseButton};
use crate::widget::{Bounds, WidgetState};

pub fn handle(state: &mut WidgetState, bounds: Bounds, input: &InputEvent) -> bool {
    let WidgetState::Slider { value, min, max, step, dragging } = state else { return false };
    let step = if *step > 0.0 { *step } else { (*max - *min) / 20.0 };

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
            KeyCode::Home => {
                *value = *min;
                true
            }
            KeyCode::End => {
                *value = *max;
                true
            }
            _ => false,
        },
        InputEvent::Mouse { button: MouseButton::Left, action: MouseAction::Press, x, .. } => {
            let ratio = ((i32::from(*x) - bounds.x) as f32 / (bounds.width - 1).max(1) as f32).clamp(0.0, 1.0);
            *value = *min + ratio * (*max - *min);
            *dragging = true;
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
    fn left_click_sets_value_from_ratio_and_latches_dragging() {
        let mut state = WidgetState::Slider { value: 0.0, min: 0.0, max: 10.0, step: 0.0, dragging: false };
        let bounds = Bounds { x: 0, y: 0, width: 11, height: 1 };
        handle(&mut state, bounds, &InputEvent::Mouse {
            button: MouseButton::Left,
            x: 5,
            y: 0,
            action: MouseAction::Press,
            modifiers: KeyModifiers::NONE,
        });
        let WidgetState::Slider { value, dragging, .. } = state else { unreachable!() };
        assert!((value - 5.0).abs() < 0.01);
        assert!(dragging);
    }

    #[test]
    fn default_step_is_one_twentieth_of_range() {
        let mut state = WidgetState::Slider { value: 0.0, min: 0.0, max: 20.0, step: 0.0, dragging: false };
        handle(&mut state, Bounds::default(), &InputEvent::Keyboard { code: KeyCode::Right, modifiers: KeyModifiers::NONE });
        let WidgetState::Slider { value, .. } = state else { unreachable!() };
        assert!((value - 1.0).abs() < 0.01);
    }
}
