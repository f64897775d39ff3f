// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Control-byte and UTF-8 fallback parsing, per `SPEC_FULL.md` §4.4.

use super::events::{InputEvent, KeyCode, KeyModifiers};
use crate::core::ansi::constants::{BACKSPACE_BS, BACKSPACE_DEL, CR, CTRL_SPACE, LF, TAB};
use crate::core::utf8::{self, Utf8Decode};

const CTRL_RANGE_MAX: u8 = 0x1F;
const CTRL_TO_LOWERCASE_MASK: u8 = 0x60;

/// Parse a single control byte (`0x00..=0x1F` or DEL) into a dedicated key or a
/// Ctrl+letter combination.
#[must_use]
pub fn parse_control_character(buffer: &[u8]) -> Option<(InputEvent, usize)> {
    let byte = *buffer.first()?;

    if byte == BACKSPACE_DEL {
        return Some((
            InputEvent::Keyboard { code: KeyCode::Backspace, modifiers: KeyModifiers::NONE },
            1,
        ));
    }
    if byte > CTRL_RANGE_MAX {
        return None;
    }

    match byte {
        CTRL_SPACE => Some((
            InputEvent::Keyboard {
                code: KeyCode::Char(' '),
                modifiers: KeyModifiers { ctrl: true, ..KeyModifiers::NONE },
            },
            1,
        )),
        TAB => Some((
            InputEvent::Keyboard { code: KeyCode::Tab, modifiers: KeyModifiers::NONE },
            1,
        )),
        LF | CR => Some((
            InputEvent::Keyboard { code: KeyCode::Enter, modifiers: KeyModifiers::NONE },
            1,
        )),
        BACKSPACE_BS => Some((
            InputEvent::Keyboard { code: KeyCode::Backspace, modifiers: KeyModifiers::NONE },
            1,
        )),
        _ => {
            let letter = char::from(byte | CTRL_TO_LOWERCASE_MASK);
            Some((
                InputEvent::Keyboard {
                    code: KeyCode::Char(letter),
                    modifiers: KeyModifiers { ctrl: true, ..KeyModifiers::NONE },
                },
                1,
            ))
        }
    }
}

/// Outcome of attempting to decode plain UTF-8 text from the front of a buffer, mirroring
/// [`Utf8Decode`] one level up so the decoder can tell "wait for more bytes" apart from
/// "drop this byte, no event" per `SPEC_FULL.md` §7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOutcome {
    Event(InputEvent, usize),
    /// A structurally valid sequence is still missing bytes; consume nothing.
    Incomplete,
    /// A byte that can never start or continue a valid sequence; drop one byte.
    Invalid,
}

/// Decode one UTF-8 code point as plain text input.
///
/// Returns `None` only for an empty slice; the caller is expected to have already ruled
/// that out.
#[must_use]
pub fn parse_utf8_text(buffer: &[u8]) -> Option<TextOutcome> {
    Some(match utf8::decode_one(buffer)? {
        Utf8Decode::Complete(decoded) => TextOutcome::Event(
            InputEvent::Keyboard { code: KeyCode::Char(decoded.ch), modifiers: KeyModifiers::NONE },
            decoded.len,
        ),
        Utf8Decode::Incomplete => TextOutcome::Incomplete,
        Utf8Decode::Invalid => TextOutcome::Invalid,
    })
}
