// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Top-level input byte router, per `SPEC_FULL.md` §4.4.
//!
//! A lone `ESC` at the end of the buffer is emitted immediately as the Escape key,
//! with no inter-byte timeout: local terminals write a full escape sequence in one
//! syscall, so by the time a second `try_parse_input_event` call sees only `[0x1B]` the
//! rest of the sequence (if any) has already had its chance to arrive.

use super::control::{parse_control_character, parse_utf8_text, TextOutcome};
use super::events::{DecodeOutcome, InputEvent, KeyCode, KeyModifiers};
use super::keyboard::{parse_alt_letter, parse_keyboard_sequence, parse_ss3_sequence};
use super::mouse::parse_sgr_mouse;
use super::terminal_events::parse_terminal_event;
use crate::core::ansi::constants::{CSI_BRACKET, ESC, SS3_O};

/// Try to parse one event from the front of `buffer`.
///
/// Returns [`DecodeOutcome::Event`] with the event and bytes consumed,
/// [`DecodeOutcome::Incomplete`] if the buffer holds a structurally valid but not yet
/// complete sequence (consume nothing, wait for more bytes), or
/// [`DecodeOutcome::Invalid`] if the leading byte can never start a valid sequence
/// (drop exactly one byte and try again), per `SPEC_FULL.md` §7.
#[must_use]
pub fn try_parse_input_event(buffer: &[u8]) -> DecodeOutcome {
    let Some(&first) = buffer.first() else { return DecodeOutcome::Incomplete };

    match first {
        ESC => {
            if buffer.len() == 1 {
                return DecodeOutcome::Event(
                    InputEvent::Keyboard { code: KeyCode::Escape, modifiers: KeyModifiers::NONE },
                    1,
                );
            }
            let matched = match buffer[1] {
                CSI_BRACKET => parse_keyboard_sequence(buffer)
                    .or_else(|| parse_sgr_mouse(buffer))
                    .or_else(|| parse_terminal_event(buffer)),
                SS3_O => parse_ss3_sequence(buffer),
                _ => parse_alt_letter(buffer).or(Some((
                    InputEvent::Keyboard { code: KeyCode::Escape, modifiers: KeyModifiers::NONE },
                    1,
                ))),
            };
            match matched {
                Some((event, consumed)) => DecodeOutcome::Event(event, consumed),
                None => DecodeOutcome::Incomplete,
            }
        }
        _ => {
            if let Some((event, consumed)) = parse_terminal_event(buffer)
                .or_else(|| parse_sgr_mouse(buffer))
                .or_else(|| parse_control_character(buffer))
            {
                return DecodeOutcome::Event(event, consumed);
            }
            match parse_utf8_text(buffer) {
                Some(TextOutcome::Event(event, consumed)) => DecodeOutcome::Event(event, consumed),
                Some(TextOutcome::Invalid) => DecodeOutcome::Invalid,
                Some(TextOutcome::Incomplete) | None => DecodeOutcome::Incomplete,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_esc_is_immediate() {
        assert_eq!(
            try_parse_input_event(&[0x1B]),
            DecodeOutcome::Event(InputEvent::Keyboard { code: KeyCode::Escape, modifiers: KeyModifiers::NONE }, 1)
        );
    }

    #[test]
    fn csi_routes_to_keyboard() {
        let DecodeOutcome::Event(event, n) = try_parse_input_event(b"\x1b[A") else { panic!("expected an event") };
        assert_eq!(n, 3);
        assert_eq!(event, InputEvent::Keyboard { code: KeyCode::Up, modifiers: KeyModifiers::NONE });
    }

    #[test]
    fn plain_text_routes_to_utf8() {
        let DecodeOutcome::Event(event, n) = try_parse_input_event(b"Hi") else { panic!("expected an event") };
        assert_eq!(n, 1);
        assert_eq!(event, InputEvent::Keyboard { code: KeyCode::Char('H'), modifiers: KeyModifiers::NONE });
    }

    #[test]
    fn ctrl_byte_takes_priority_over_utf8() {
        let DecodeOutcome::Event(event, n) = try_parse_input_event(&[0x04]) else { panic!("expected an event") };
        assert_eq!(n, 1);
        assert_eq!(
            event,
            InputEvent::Keyboard { code: KeyCode::Char('d'), modifiers: KeyModifiers { ctrl: true, ..KeyModifiers::NONE } }
        );
    }

    #[test]
    fn empty_buffer_is_incomplete() {
        assert_eq!(try_parse_input_event(&[]), DecodeOutcome::Incomplete);
    }

    #[test]
    fn multibyte_character_split_across_two_reads_decodes_once_the_rest_arrives() {
        let bytes = "\u{20AC}".as_bytes();
        assert_eq!(try_parse_input_event(&bytes[..1]), DecodeOutcome::Incomplete);
        assert_eq!(
            try_parse_input_event(bytes),
            DecodeOutcome::Event(InputEvent::Keyboard { code: KeyCode::Char('\u{20AC}'), modifiers: KeyModifiers::NONE }, bytes.len())
        );
    }

    #[test]
    fn invalid_lead_byte_is_reported_as_invalid_and_never_surfaces_an_event() {
        assert_eq!(try_parse_input_event(&[0xFF]), DecodeOutcome::Invalid);
    }

    #[test]
    fn byte_by_byte_feeding_matches_one_shot_feeding() {
        let bytes = "a\u{20AC}b".as_bytes();

        let mut one_shot = Vec::new();
        let mut rest = bytes;
        while !rest.is_empty() {
            match try_parse_input_event(rest) {
                DecodeOutcome::Event(event, n) => {
                    one_shot.push(event);
                    rest = &rest[n..];
                }
                DecodeOutcome::Invalid => rest = &rest[1..],
                DecodeOutcome::Incomplete => break,
            }
        }

        // Feed the same stream byte-by-byte through a growing window, as a ring would.
        let mut incremental = Vec::new();
        let mut ring: Vec<u8> = Vec::new();
        for &byte in bytes {
            ring.push(byte);
            loop {
                match try_parse_input_event(&ring) {
                    DecodeOutcome::Event(event, n) => {
                        incremental.push(event);
                        ring.drain(..n);
                    }
                    DecodeOutcome::Invalid => {
                        ring.drain(..1);
                    }
                    DecodeOutcome::Incomplete => break,
                }
            }
        }

        assert_eq!(one_shot, incremental);
    }
}
