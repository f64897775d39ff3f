// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Default Splitter input behavior, grounded on `tui_widget_handle_splitter_input` in
//! `original_source/tui.h`. Child-pane layout from `ratio` is computed at draw time by
//! the default drawer, not here.

use crate::core::input::{InputEvent, KeyCode, MouseAction, MouseButton};
use crate::widget::{Bounds, WidgetState};

const MIN_RATIO: f32 = 0.1;
const MAX_RATIO: f32 = 0.9;
const NUDGE: f32 = 0.05;

pub fn handle(state: &mut WidgetState, bounds: Bounds, input: &InputEvent) -> bool {
    let WidgetState::Splitter { vertical, ratio, dragging, .. } = state else { return false };

    match input {
        InputEvent::Mouse { button: MouseButton::Left, action: MouseAction::Press, x, y, .. } => {
            *ratio = ratio_from_point(*vertical, bounds, *x, *y);
            *dragging = true;
            true
        }
        InputEvent::Mouse { action: MouseAction::Drag, x, y, .. } => {
            if *dragging {
                *ratio = ratio_from_point(*vertical, bounds, *x, *y);
            }
            true
        }
        InputEvent::Mouse { action: MouseAction::Release, .. } => {
            *dragging = false;
            true
        }
        InputEvent::Keyboard { code, modifiers } if modifiers.ctrl => {
            let delta = match (*vertical, code) {
                (true, KeyCode::Up) => -NUDGE,
                (true, KeyCode::Down) => NUDGE,
                (false, KeyCode::Left) => -NUDGE,
                (false, KeyCode::Right) => NUDGE,
                _ => return false,
            };
            *ratio = (*ratio + delta).clamp(MIN_RATIO, MAX_RATIO);
            true
        }
        _ => false,
    }
}

fn ratio_from_point(vertical: bool, bounds: Bounds, x: u16, y: u16) -> f32 {
    let ratio = if vertical {
        (i32::from(y) - bounds.y) as f32 / bounds.height.max(1) as f32
    } else {
        (i32::from(x) - bounds.x) as f32 / bounds.width.max(1) as f32
    };
    ratio.clamp(MIN_RATIO, MAX_RATIO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyModifiers;

    #[test]
    fn click_sets_ratio_from_position_over_extent() {
        let mut state = WidgetState::Splitter { vertical: true, ratio: 0.5, min_size: 2, dragging: false };
        let bounds = Bounds { x: 0, y: 0, width: 10, height: 20 };
        handle(&mut state, bounds, &InputEvent::Mouse {
            button: MouseButton::Left,
            x: 0,
            y: 10,
            action: MouseAction::Press,
            modifiers: KeyModifiers::NONE,
        });
        let WidgetState::Splitter { ratio, dragging, .. } = state else { unreachable!() };
        assert!((ratio - 0.5).abs() < 0.01);
        assert!(dragging);
    }

    #[test]
    fn ctrl_arrow_nudges_ratio_and_clamps() {
        let mut state = WidgetState::Splitter { vertical: false, ratio: 0.88, min_size: 2, dragging: false };
        handle(&mut state, Bounds::default(), &InputEvent::Keyboard {
            code: KeyCode::Right,
            modifiers: KeyModifiers { ctrl: true, ..KeyModifiers::NONE },
        });
        let WidgetState::Splitter { ratio, .. } = state else { unreachable!() };
        assert!((ratio - MAX_RATIO).abs() < 0.001);
    }
}
