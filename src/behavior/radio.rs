// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Default Radio input behavior, grounded on `tui_widget_handle_radio_input` in
//! `original_source/tui.h`.

use crate::core::input::{InputEvent, KeyCode, MouseAction, MouseButton};
use crate::widget::WidgetState;

/// Enter/Space/left-click sets the shared group value to this node's value.
pub fn handle(state: &mut WidgetState, input: &InputEvent) -> bool {
    let WidgetState::Radio { group, value, .. } = state else { return false };
    let select = matches!(
        input,
        InputEvent::Keyboard { code: KeyCode::Enter | KeyCode::Char(' '), .. }
    ) || matches!(
        input,
        InputEvent::Mouse { button: MouseButton::Left, action: MouseAction::Press, .. }
    );
    if select {
        group.set(*value);
    }
    select
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyModifiers;
    use crate::widget::RadioGroup;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn selecting_sets_shared_group_value() {
        let group: RadioGroup = Rc::new(Cell::new(0));
        let mut state = WidgetState::Radio { text: "b".into(), group: group.clone(), value: 2 };
        handle(&mut state, &InputEvent::Keyboard { code: KeyCode::Enter, modifiers: KeyModifiers::NONE });
        assert_eq!(group.get(), 2);
    }
}
