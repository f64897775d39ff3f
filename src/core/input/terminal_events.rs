// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Focus-in/out and bracketed-paste boundary parsing, per `SPEC_FULL.md` §4.4.
//!
//! Resize is not parsed from input bytes here — it arrives through the
//! [`crate::backend::ResizeSource`] latch, not the terminal input stream.

use super::events::{FocusState, InputEvent, PasteMode};
use crate::core::ansi::constants::{CSI_BRACKET, ESC, FOCUS_GAINED_FINAL, FOCUS_LOST_FINAL, FUNCTION_KEY_FINAL, PASTE_END_PARAM, PASTE_START_PARAM};

/// Parse `CSI I` / `CSI O` (focus) or `CSI 200~` / `CSI 201~` (bracketed paste).
#[must_use]
pub fn parse_terminal_event(buffer: &[u8]) -> Option<(InputEvent, usize)> {
    if buffer.len() < 3 || buffer[0] != ESC || buffer[1] != CSI_BRACKET {
        return None;
    }

    if buffer.len() == 3 {
        return match buffer[2] {
            FOCUS_GAINED_FINAL => Some((InputEvent::Focus(FocusState::Gained), 3)),
            FOCUS_LOST_FINAL => Some((InputEvent::Focus(FocusState::Lost), 3)),
            _ => None,
        };
    }

    let mut acc: u16 = 0;
    let mut scanned = 0usize;
    let mut final_byte = 0u8;
    for (idx, &byte) in buffer[2..].iter().enumerate() {
        scanned = idx + 1;
        if byte.is_ascii_digit() {
            acc = acc.saturating_mul(10).saturating_add((byte - b'0') as u16);
        } else if byte == FUNCTION_KEY_FINAL {
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

    match acc {
        PASTE_START_PARAM => Some((InputEvent::Paste(PasteMode::Start), consumed)),
        PASTE_END_PARAM => Some((InputEvent::Paste(PasteMode::End), consumed)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_gained() {
        assert_eq!(parse_terminal_event(b"\x1b[I"), Some((InputEvent::Focus(FocusState::Gained), 3)));
    }

    #[test]
    fn focus_lost() {
        assert_eq!(parse_terminal_event(b"\x1b[O"), Some((InputEvent::Focus(FocusState::Lost), 3)));
    }

    #[test]
    fn paste_start_and_end() {
        assert_eq!(parse_terminal_event(b"\x1b[200~"), Some((InputEvent::Paste(PasteMode::Start), 6)));
        assert_eq!(parse_terminal_event(b"\x1b[201~"), Some((InputEvent::Paste(PasteMode::End), 6)));
    }

    #[test]
    fn unrelated_param_is_rejected() {
        assert_eq!(parse_terminal_event(b"\x1b[5~"), None);
    }
}
