// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Default Textarea input behavior, grounded on `tui_widget_handle_textarea_input` in
//! `original_source/tui.h`.

use crate::core::input::{InputEvent, KeyCode, MouseAction, MouseButton, ScrollDirection};
use crate::widget::{Bounds, WidgetState};

/// `visible_rows`/`has_gutter` are computed by the caller from the widget's bounds and
/// border flag, mirroring the original's `w->height - (has_border ? 2 : 0)`.
pub fn handle(state: &mut WidgetState, bounds: Bounds, visible_rows: usize, input: &InputEvent) -> bool {
    let WidgetState::Textarea {
        lines,
        cursor_row,
        cursor_col,
        scroll_row,
        line_numbers,
        editable,
        max_line_len,
        ..
    } = state
    else {
        return false;
    };
    if lines.is_empty() {
        return false;
    }
    let line_count = lines.len();
    let gutter_width = if *line_numbers { 5 } else { 0 };
    let max_line_len = if *max_line_len > 0 { *max_line_len } else { 256 };

    if let InputEvent::Mouse { button, x, y, action, .. } = input {
        return match (button, action) {
            (MouseButton::Left, MouseAction::Press) => {
                let click_row = i32::from(*y) - bounds.y + *scroll_row as i32;
                let click_col = i32::from(*x) - bounds.x - gutter_width as i32;
                if click_row >= 0 && (click_row as usize) < line_count {
                    *cursor_row = click_row as usize;
                    let line_len = lines[*cursor_row].chars().count();
                    *cursor_col = click_col.max(0) as usize;
                    *cursor_col = (*cursor_col).min(line_len);
                }
                true
            }
            (_, MouseAction::Scroll(ScrollDirection::Up)) => {
                *scroll_row = scroll_row.saturating_sub(3);
                true
            }
            (_, MouseAction::Scroll(ScrollDirection::Down)) => {
                let max_scroll = line_count.saturating_sub(visible_rows);
                *scroll_row = (*scroll_row + 3).min(max_scroll);
                true
            }
            _ => false,
        };
    }

    let InputEvent::Keyboard { code, modifiers } = input else { return false };
    let current_len = lines[*cursor_row].chars().count();

    match code {
        KeyCode::Up => {
            if *cursor_row > 0 {
                *cursor_row -= 1;
                *cursor_col = (*cursor_col).min(lines[*cursor_row].chars().count());
                *scroll_row = (*scroll_row).min(*cursor_row);
            }
            true
        }
        KeyCode::Down => {
            if *cursor_row + 1 < line_count {
                *cursor_row += 1;
                *cursor_col = (*cursor_col).min(lines[*cursor_row].chars().count());
                if *cursor_row >= *scroll_row + visible_rows {
                    *scroll_row = *cursor_row + 1 - visible_rows;
                }
            }
            true
        }
        KeyCode::Left => {
            if *cursor_col > 0 {
                *cursor_col -= 1;
            } else if *cursor_row > 0 {
                *cursor_row -= 1;
                *cursor_col = lines[*cursor_row].chars().count();
                *scroll_row = (*scroll_row).min(*cursor_row);
            }
            true
        }
        KeyCode::Right => {
            if *cursor_col < current_len {
                *cursor_col += 1;
            } else if *cursor_row + 1 < line_count {
                *cursor_row += 1;
                *cursor_col = 0;
                if *cursor_row >= *scroll_row + visible_rows {
                    *scroll_row = *cursor_row + 1 - visible_rows;
                }
            }
            true
        }
        KeyCode::Home => {
            if modifiers.ctrl {
                *cursor_row = 0;
                *cursor_col = 0;
                *scroll_row = 0;
            } else {
                *cursor_col = 0;
            }
            true
        }
        KeyCode::End => {
            if modifiers.ctrl {
                *cursor_row = line_count - 1;
                *cursor_col = lines[*cursor_row].chars().count();
                if *cursor_row >= *scroll_row + visible_rows {
                    *scroll_row = *cursor_row + 1 - visible_rows;
                }
            } else {
                *cursor_col = current_len;
            }
            true
        }
        KeyCode::PageUp => {
            *cursor_row = cursor_row.saturating_sub(visible_rows);
            *scroll_row = scroll_row.saturating_sub(visible_rows);
            *cursor_col = (*cursor_col).min(lines[*cursor_row].chars().count());
            true
        }
        KeyCode::PageDown => {
            *cursor_row = (*cursor_row + visible_rows).min(line_count - 1);
            let max_scroll = line_count.saturating_sub(visible_rows);
            *scroll_row = (*scroll_row + visible_rows).min(max_scroll);
            *cursor_col = (*cursor_col).min(lines[*cursor_row].chars().count());
            true
        }
        _ if !*editable => false,
        KeyCode::Backspace => {
            if *cursor_col > 0 {
                remove_char_at(&mut lines[*cursor_row], *cursor_col - 1);
                *cursor_col -= 1;
            } else if *cursor_row > 0 {
                let current = lines.remove(*cursor_row);
                let prev_len = lines[*cursor_row - 1].chars().count();
                if lines[*cursor_row - 1].chars().count() + current.chars().count() < max_line_len {
                    lines[*cursor_row - 1].push_str(&current);
                    *cursor_row -= 1;
                    *cursor_col = prev_len;
                    *scroll_row = (*scroll_row).min(*cursor_row);
                } else {
                    lines.insert(*cursor_row, current);
                }
            }
            true
        }
        KeyCode::Delete => {
            if *cursor_col < current_len {
                remove_char_at(&mut lines[*cursor_row], *cursor_col);
            } else if *cursor_row + 1 < line_count {
                let next = lines.remove(*cursor_row + 1);
                if lines[*cursor_row].chars().count() + next.chars().count() < max_line_len {
                    lines[*cursor_row].push_str(&next);
                } else {
                    lines.insert(*cursor_row + 1, next);
                }
            }
            true
        }
        KeyCode::Enter => {
            let tail: String = lines[*cursor_row].chars().skip(*cursor_col).collect();
            let tail: String = tail.chars().take(max_line_len.saturating_sub(1)).collect();
            lines[*cursor_row] = lines[*cursor_row].chars().take(*cursor_col).collect();
            lines.insert(*cursor_row + 1, tail);
            *cursor_row += 1;
            *cursor_col = 0;
            if *cursor_row >= *scroll_row + visible_rows {
                *scroll_row = *cursor_row + 1 - visible_rows;
            }
            true
        }
        KeyCode::Tab => {
            if current_len + 4 < max_line_len {
                insert_str_at(&mut lines[*cursor_row], *cursor_col, "    ");
                *cursor_col += 4;
            }
            true
        }
        KeyCode::Char(ch) => {
            if current_len < max_line_len.saturating_sub(1) {
                insert_char_at(&mut lines[*cursor_row], *cursor_col, *ch);
                *cursor_col += 1;
            }
            true
        }
        _ => false,
    }
}

fn insert_char_at(line: &mut String, index: usize, ch: char) {
    let byte_index = line.char_indices().nth(index).map_or(line.len(), |(i, _)| i);
    line.insert(byte_index, ch);
}

fn insert_str_at(line: &mut String, index: usize, s: &str) {
    let byte_index = line.char_indices().nth(index).map_or(line.len(), |(i, _)| i);
    line.insert_str(byte_index, s);
}

fn remove_char_at(line: &mut String, index: usize) {
    if let Some((byte_index, ch)) = line.char_indices().nth(index) {
        line.drain(byte_index..byte_index + ch.len_utf8());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyModifiers;

    fn sample(lines: &[&str], row: usize, col: usize) -> WidgetState {
        WidgetState::Textarea {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            cursor_row: row,
            cursor_col: col,
            scroll_row: 0,
            scroll_col: 0,
            selection: None,
            line_numbers: false,
            word_wrap: false,
            editable: true,
            max_line_len: 256,
        }
    }

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Keyboard { code, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn enter_splits_line_preserving_total_character_count() {
        let mut state = sample(&["Hello World"], 0, 5);
        handle(&mut state, Bounds::default(), 10, &key(KeyCode::Enter));
        let WidgetState::Textarea { lines, cursor_row, cursor_col, .. } = state else { unreachable!() };
        assert_eq!(lines[0], "Hello");
        assert_eq!(lines[1], " World");
        assert_eq!(cursor_row, 1);
        assert_eq!(cursor_col, 0);
        assert_eq!(lines[0].chars().count() + lines[1].chars().count(), "Hello World".chars().count());
    }

    #[test]
    fn backspace_at_column_zero_joins_with_previous_line() {
        let mut state = sample(&["foo", "bar"], 1, 0);
        handle(&mut state, Bounds::default(), 10, &key(KeyCode::Backspace));
        let WidgetState::Textarea { lines, cursor_row, cursor_col, .. } = state else { unreachable!() };
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], "foobar");
        assert_eq!(cursor_row, 0);
        assert_eq!(cursor_col, 3);
    }

    #[test]
    fn tab_inserts_four_spaces() {
        let mut state = sample(&["ab"], 0, 1);
        handle(&mut state, Bounds::default(), 10, &key(KeyCode::Tab));
        let WidgetState::Textarea { lines, cursor_col, .. } = state else { unreachable!() };
        assert_eq!(lines[0], "a    b");
        assert_eq!(cursor_col, 5);
    }
}
