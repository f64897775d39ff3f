// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Default List input behavior, grounded on `tui_widget_handle_list_input` in
//! `original_source/tui.h`.

use crate::core::input::{InputEvent, KeyCode, MouseAction, MouseButton};
use crate::widget::{Bounds, WidgetState};

pub fn handle(state: &mut WidgetState, bounds: Bounds, input: &InputEvent) -> bool {
    let WidgetState::List { items, selected, scroll, visible } = state else { return false };
    let count = items.len();
    if count == 0 {
        return false;
    }

    match input {
        InputEvent::Keyboard { code, .. } => match code {
            KeyCode::Up => {
                if *selected > 0 {
                    *selected -= 1;
                    if *selected < *scroll {
                        *scroll = *selected;
                    }
                }
                true
            }
            KeyCode::Down => {
                if *selected < count - 1 {
                    *selected += 1;
                    if *selected >= *scroll + *visible {
                        *scroll = *selected + 1 - *visible;
                    }
                }
                true
            }
            KeyCode::PageUp => {
                *selected = selected.saturating_sub(*visible);
                *scroll = (*scroll).min(*selected);
                true
            }
            KeyCode::PageDown => {
                *selected = (*selected + *visible).min(count - 1);
                if *selected >= *scroll + *visible {
                    *scroll = *selected + 1 - *visible;
                }
                true
            }
            KeyCode::Home => {
                *selected = 0;
                *scroll = 0;
                true
            }
            KeyCode::End => {
                *selected = count - 1;
                if *selected >= *visible {
                    *scroll = *selected + 1 - *visible;
                }
                true
            }
            _ => false,
        },
        InputEvent::Mouse { button: MouseButton::Left, action: MouseAction::Press, y, .. } => {
            let clicked_row = i32::from(*y) - bounds.y;
            let clicked_item = *scroll as i32 + clicked_row;
            if clicked_item >= 0 && (clicked_item as usize) < count {
                *selected = clicked_item as usize;
                true
            } else {
                false
            }
        }
        InputEvent::Mouse { action: MouseAction::Scroll(dir), .. } => {
            let max_scroll = count.saturating_sub(*visible);
            match dir {
                crate::core::input::ScrollDirection::Up => *scroll = scroll.saturating_sub(1),
                crate::core::input::ScrollDirection::Down => *scroll = (*scroll + 1).min(max_scroll),
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyModifiers, ScrollDirection};

    fn sample() -> WidgetState {
        WidgetState::List {
            items: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            selected: 0,
            scroll: 0,
            visible: 2,
        }
    }

    #[test]
    fn down_moves_selection_and_scrolls_to_keep_it_visible() {
        let mut state = sample();
        handle(&mut state, Bounds::default(), &InputEvent::Keyboard { code: KeyCode::Down, modifiers: KeyModifiers::NONE });
        handle(&mut state, Bounds::default(), &InputEvent::Keyboard { code: KeyCode::Down, modifiers: KeyModifiers::NONE });
        let WidgetState::List { selected, scroll, .. } = state else { unreachable!() };
        assert_eq!(selected, 2);
        assert_eq!(scroll, 1);
    }

    #[test]
    fn wheel_down_advances_scroll_within_bound() {
        let mut state = sample();
        handle(&mut state, Bounds::default(), &InputEvent::Mouse {
            button: MouseButton::Unknown,
            x: 0,
            y: 0,
            action: MouseAction::Scroll(ScrollDirection::Down),
            modifiers: KeyModifiers::NONE,
        });
        let WidgetState::List { scroll, .. } = state else { unreachable!() };
        assert_eq!(scroll, 1);
    }

    #[test]
    fn click_selects_scroll_plus_relative_row() {
        let mut state = sample();
        if let WidgetState::List { scroll, .. } = &mut state {
            *scroll = 1;
        }
        let bounds = Bounds { x: 0, y: 5, width: 10, height: 4 };
        handle(&mut state, bounds, &InputEvent::Mouse {
            button: MouseButton::Left,
            x: 2,
            y: 6,
            action: MouseAction::Press,
            modifiers: KeyModifiers::NONE,
        });
        let WidgetState::List { selected, .. } = state else { unreachable!() };
        assert_eq!(selected, 2);
    }
}
