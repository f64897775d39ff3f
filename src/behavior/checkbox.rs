// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Default Checkbox input behavior, grounded on `tui_widget_handle_checkbox_input` in
//! `original_source/tui.h`.

use crate::core::input::{InputEvent, KeyCode, MouseAction, MouseButton};
use crate::widget::WidgetState;

pub fn handle(state: &mut WidgetState, input: &InputEvent) -> bool {
    let WidgetState::Checkbox { checked, .. } = state else { return false };
    let toggle = matches!(
        input,
        InputEvent::Keyboard { code: KeyCode::Enter | KeyCode::Char(' '), .. }
    ) || matches!(
        input,
        InputEvent::Mouse { button: MouseButton::Left, action: MouseAction::Press, .. }
    );
    if toggle {
        *checked = !*checked;
    }
    toggle
}
