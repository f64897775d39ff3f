// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! CSI and SS3 keyboard sequence parsing: arrow keys, function keys, and the CSI
//! modifier-bitmask encoding (`param = 1 + Shift(1) + Alt(2) + Ctrl(4)`), per
//! `SPEC_FULL.md` §4.4.

use super::events::{InputEvent, KeyCode, KeyModifiers};
use crate::core::ansi::constants::{CSI_BRACKET, ESC, FUNCTION_KEY_FINAL, SS3_O};

const PARAM_SEPARATOR: u8 = b';';
const MODIFIER_OFFSET: u16 = 1;
const MODIFIER_SHIFT: u16 = 1;
const MODIFIER_ALT: u16 = 2;
const MODIFIER_CTRL: u16 = 4;

fn decode_modifiers(param: u16) -> KeyModifiers {
    let bits = param.saturating_sub(MODIFIER_OFFSET);
    KeyModifiers {
        shift: bits & MODIFIER_SHIFT != 0,
        ctrl: bits & MODIFIER_CTRL != 0,
        alt: bits & MODIFIER_ALT != 0,
    }
}

/// Parse `ESC <printable>` or `ESC DEL` as Alt+key.
#[must_use]
pub fn parse_alt_letter(buffer: &[u8]) -> Option<(InputEvent, usize)> {
    if buffer.len() < 2 || buffer[0] != ESC {
        return None;
    }
    let second = buffer[1];
    if second == 0x7F {
        return Some((
            InputEvent::Keyboard {
                code: KeyCode::Backspace,
                modifiers: KeyModifiers { alt: true, ..KeyModifiers::NONE },
            },
            2,
        ));
    }
    if !(0x20..=0x7E).contains(&second) {
        return None;
    }
    Some((
        InputEvent::Keyboard {
            code: KeyCode::Char(second as char),
            modifiers: KeyModifiers { alt: true, ..KeyModifiers::NONE },
        },
        2,
    ))
}

/// Parse a CSI keyboard sequence: `ESC [ <params> <final>`.
#[must_use]
pub fn parse_keyboard_sequence(buffer: &[u8]) -> Option<(InputEvent, usize)> {
    if buffer.len() < 3 || buffer[0] != ESC || buffer[1] != CSI_BRACKET {
        return None;
    }

    if buffer.len() == 3 {
        if let Some(code) = single_char_code(buffer[2]) {
            return Some((InputEvent::Keyboard { code, modifiers: KeyModifiers::NONE }, 3));
        }
    }

    parse_csi_parameters(buffer)
}

/// Parse an SS3 sequence: `ESC O <char>`. SS3 never carries modifiers.
#[must_use]
pub fn parse_ss3_sequence(buffer: &[u8]) -> Option<(InputEvent, usize)> {
    if buffer.len() < 3 || buffer[0] != ESC || buffer[1] != SS3_O {
        return None;
    }
    let code = match buffer[2] {
        b'A' => KeyCode::Up,
        b'B' => KeyCode::Down,
        b'C' => KeyCode::Right,
        b'D' => KeyCode::Left,
        b'H' => KeyCode::Home,
        b'F' => KeyCode::End,
        b'P' => KeyCode::Function(1),
        b'Q' => KeyCode::Function(2),
        b'R' => KeyCode::Function(3),
        b'S' => KeyCode::Function(4),
        b'M' => KeyCode::Enter,
        _ => return None,
    };
    Some((InputEvent::Keyboard { code, modifiers: KeyModifiers::NONE }, 3))
}

fn single_char_code(byte: u8) -> Option<KeyCode> {
    Some(match byte {
        b'A' => KeyCode::Up,
        b'B' => KeyCode::Down,
        b'C' => KeyCode::Right,
        b'D' => KeyCode::Left,
        b'H' => KeyCode::Home,
        b'F' => KeyCode::End,
        b'Z' => KeyCode::BackTab,
        _ => return None,
    })
}

fn parse_csi_parameters(buffer: &[u8]) -> Option<(InputEvent, usize)> {
    let mut params: Vec<u16> = Vec::new();
    let mut acc: u16 = 0;
    let mut final_byte = 0u8;
    let mut scanned = 0usize;

    for (idx, &byte) in buffer[2..].iter().enumerate() {
        scanned = idx + 1;
        if byte.is_ascii_digit() {
            acc = acc.saturating_mul(10).saturating_add((byte - b'0') as u16);
        } else if byte == PARAM_SEPARATOR {
            params.push(acc);
            acc = 0;
        } else if byte == FUNCTION_KEY_FINAL
            || byte.is_ascii_uppercase()
            || byte.is_ascii_lowercase()
        {
            params.push(acc);
            final_byte = byte;
            break;
        } else {
            return None;
        }
    }

    if final_byte == 0 {
        return None;
    }
    let consumed = 2 + scanned;

    let event = match (params.len(), final_byte) {
        (0, b'Z') => InputEvent::Keyboard { code: KeyCode::BackTab, modifiers: KeyModifiers::NONE },
        (2, b'A') if params[0] == 1 => InputEvent::Keyboard { code: KeyCode::Up, modifiers: decode_modifiers(params[1]) },
        (2, b'B') if params[0] == 1 => InputEvent::Keyboard { code: KeyCode::Down, modifiers: decode_modifiers(params[1]) },
        (2, b'C') if params[0] == 1 => InputEvent::Keyboard { code: KeyCode::Right, modifiers: decode_modifiers(params[1]) },
        (2, b'D') if params[0] == 1 => InputEvent::Keyboard { code: KeyCode::Left, modifiers: decode_modifiers(params[1]) },
        (1, FUNCTION_KEY_FINAL) => InputEvent::Keyboard {
            code: function_or_special(params[0])?,
            modifiers: KeyModifiers::NONE,
        },
        (2, FUNCTION_KEY_FINAL) => InputEvent::Keyboard {
            code: function_or_special(params[0])?,
            modifiers: decode_modifiers(params[1]),
        },
        _ => return None,
    };

    Some((event, consumed))
}

fn function_or_special(code: u16) -> Option<KeyCode> {
    Some(match code {
        2 => KeyCode::Insert,
        3 => KeyCode::Delete,
        5 => KeyCode::PageUp,
        6 => KeyCode::PageDown,
        7 | 1 => KeyCode::Home,
        8 | 4 => KeyCode::End,
        11 => KeyCode::Function(1),
        12 => KeyCode::Function(2),
        13 => KeyCode::Function(3),
        14 => KeyCode::Function(4),
        15 => KeyCode::Function(5),
        17 => KeyCode::Function(6),
        18 => KeyCode::Function(7),
        19 => KeyCode::Function(8),
        20 => KeyCode::Function(9),
        21 => KeyCode::Function(10),
        23 => KeyCode::Function(11),
        24 => KeyCode::Function(12),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_up_arrow() {
        let (event, n) = parse_keyboard_sequence(b"\x1b[A").unwrap();
        assert_eq!(n, 3);
        assert_eq!(event, InputEvent::Keyboard { code: KeyCode::Up, modifiers: KeyModifiers::NONE });
    }

    #[test]
    fn ctrl_up_arrow_decodes_modifier_bitmask() {
        let (event, n) = parse_keyboard_sequence(b"\x1b[1;5A").unwrap();
        assert_eq!(n, 6);
        assert_eq!(
            event,
            InputEvent::Keyboard {
                code: KeyCode::Up,
                modifiers: KeyModifiers { ctrl: true, ..KeyModifiers::NONE }
            }
        );
    }

    #[test]
    fn shift_tab_is_backtab() {
        let (event, n) = parse_keyboard_sequence(b"\x1b[Z").unwrap();
        assert_eq!(n, 3);
        assert_eq!(event, InputEvent::Keyboard { code: KeyCode::BackTab, modifiers: KeyModifiers::NONE });
    }

    #[test]
    fn function_key_f5_via_tilde() {
        let (event, n) = parse_keyboard_sequence(b"\x1b[15~").unwrap();
        assert_eq!(n, 5);
        assert_eq!(event, InputEvent::Keyboard { code: KeyCode::Function(5), modifiers: KeyModifiers::NONE });
    }

    #[test]
    fn ss3_f1_has_no_modifiers() {
        let (event, n) = parse_ss3_sequence(b"\x1bOP").unwrap();
        assert_eq!(n, 3);
        assert_eq!(event, InputEvent::Keyboard { code: KeyCode::Function(1), modifiers: KeyModifiers::NONE });
    }

    #[test]
    fn alt_b_is_two_bytes() {
        let (event, n) = parse_alt_letter(b"\x1bb").unwrap();
        assert_eq!(n, 2);
        assert_eq!(
            event,
            InputEvent::Keyboard { code: KeyCode::Char('b'), modifiers: KeyModifiers { alt: true, ..KeyModifiers::NONE } }
        );
    }

    #[test]
    fn incomplete_csi_sequence_returns_none() {
        assert_eq!(parse_keyboard_sequence(b"\x1b[1;5"), None);
    }
}
