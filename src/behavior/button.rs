// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Default Button input behavior, grounded on the button branch of
//! `tui_widget_handle_default_input` in `original_source/tui.h`.

use crate::core::input::{InputEvent, KeyCode, MouseAction, MouseButton};
use crate::widget::WidgetState;

/// Enter/Space/left-click sets `pressed = true` for one frame; the drawer is
/// responsible for clearing it after rendering.
pub fn handle(state: &mut WidgetState, input: &InputEvent) -> bool {
    let WidgetState::Button { pressed, .. } = state else { return false };
    let fire = matches!(
        input,
        InputEvent::Keyboard { code: KeyCode::Enter | KeyCode::Char(' '), .. }
    ) || matches!(
        input,
        InputEvent::Mouse { button: MouseButton::Left, action: MouseAction::Press, .. }
    );
    if fire {
        *pressed = true;
    }
    fire
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyModifiers;

    #[test]
    fn enter_presses_button() {
        let mut state = WidgetState::Button { text: "ok".into(), pressed: false };
        let handled = handle(&mut state, &InputEvent::Keyboard { code: KeyCode::Enter, modifiers: KeyModifiers::NONE });
        assert!(handled);
        assert!(matches!(state, WidgetState::Button { pressed: true, .. }));
    }

    #[test]
    fn unrelated_key_does_not_press() {
        let mut state = WidgetState::Button { text: "ok".into(), pressed: false };
        let handled = handle(&mut state, &InputEvent::Keyboard { code: KeyCode::Tab, modifiers: KeyModifiers::NONE });
        assert!(!handled);
        assert!(matches!(state, WidgetState::Button { pressed: false, .. }));
    }
}
