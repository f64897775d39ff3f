// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Default Textbox input behavior, grounded on `tui_widget_handle_textbox_input` in
//! `original_source/tui.h`.

use crate::core::input::{InputEvent, KeyCode};
use crate::widget::WidgetState;

/// Single-line editing: arrow movement, Home/End, Backspace/Delete, and printable
/// ASCII insertion bounded by `capacity`.
pub fn handle(state: &mut WidgetState, input: &InputEvent) -> bool {
    let WidgetState::Textbox { buffer, capacity, cursor, .. } = state else { return false };
    let InputEvent::Keyboard { code, .. } = input else { return false };

    match *code {
        KeyCode::Left => {
            *cursor = cursor.saturating_sub(1);
            true
        }
        KeyCode::Right => {
            if *cursor < buffer.chars().count() {
                *cursor += 1;
            }
            true
        }
        KeyCode::Home => {
            *cursor = 0;
            true
        }
        KeyCode::End => {
            *cursor = buffer.chars().count();
            true
        }
        KeyCode::Backspace => {
            if *cursor > 0 {
                remove_char_at(buffer, *cursor - 1);
                *cursor -= 1;
            }
            true
        }
        KeyCode::Delete => {
            if *cursor < buffer.chars().count() {
                remove_char_at(buffer, *cursor);
            }
            true
        }
        KeyCode::Char(ch) if (' '..='~').contains(&ch) => {
            if buffer.chars().count() < capacity.saturating_sub(1) {
                insert_char_at(buffer, *cursor, ch);
                *cursor += 1;
            }
            true
        }
        _ => false,
    }
}

fn insert_char_at(buffer: &mut String, index: usize, ch: char) {
    let byte_index = buffer.char_indices().nth(index).map_or(buffer.len(), |(i, _)| i);
    buffer.insert(byte_index, ch);
}

fn remove_char_at(buffer: &mut String, index: usize) {
    if let Some((byte_index, ch)) = buffer.char_indices().nth(index) {
        buffer.drain(byte_index..byte_index + ch.len_utf8());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyModifiers;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Keyboard { code, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn printable_inserts_at_cursor() {
        let mut state = WidgetState::Textbox { buffer: "ac".into(), capacity: 16, cursor: 1, scroll: 0 };
        handle(&mut state, &key(KeyCode::Char('b')));
        let WidgetState::Textbox { buffer, cursor, .. } = state else { unreachable!() };
        assert_eq!(buffer, "abc");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        let mut state = WidgetState::Textbox { buffer: "ab".into(), capacity: 16, cursor: 0, scroll: 0 };
        handle(&mut state, &key(KeyCode::Backspace));
        let WidgetState::Textbox { buffer, cursor, .. } = state else { unreachable!() };
        assert_eq!(buffer, "ab");
        assert_eq!(cursor, 0);
    }

    #[test]
    fn insertion_stops_at_capacity_minus_one() {
        let mut state = WidgetState::Textbox { buffer: "ab".into(), capacity: 3, cursor: 2, scroll: 0 };
        handle(&mut state, &key(KeyCode::Char('c')));
        let WidgetState::Textbox { buffer, .. } = state else { unreachable!() };
        assert_eq!(buffer, "ab");
    }
}
