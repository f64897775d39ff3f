// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! SGR mouse protocol parsing (`CSI < Cb ; Cx ; Cy M/m`), per `SPEC_FULL.md` §4.4.
//!
//! Only the SGR encoding is recognized; the legacy X10 and RXVT mouse protocols are out
//! of scope, matching `EngineConfig`'s single `mouse_enabled` toggle which always
//! requests SGR mode (`CSI ?1006 h`) from the terminal.

use super::events::{InputEvent, KeyModifiers, MouseAction, MouseButton, ScrollDirection};

const SGR_PREFIX: &[u8] = b"\x1b[<";

/// Parse one SGR mouse report from the front of `buffer`.
#[must_use]
pub fn parse_sgr_mouse(buffer: &[u8]) -> Option<(InputEvent, usize)> {
    if !buffer.starts_with(SGR_PREFIX) {
        return None;
    }

    let mut consumed = None;
    for (idx, &byte) in buffer.iter().enumerate().skip(3) {
        if byte == b'M' || byte == b'm' {
            consumed = Some(idx + 1);
            break;
        }
    }
    let consumed = consumed?;
    let is_press = buffer[consumed - 1] == b'M';

    let body = std::str::from_utf8(&buffer[3..consumed - 1]).ok()?;
    let mut parts = body.split(';');
    let cb: u16 = parts.next()?.parse().ok()?;
    let cx: u16 = parts.next()?.parse().ok()?;
    let cy: u16 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    let modifiers = KeyModifiers {
        shift: cb & 4 != 0,
        alt: cb & 8 != 0,
        ctrl: cb & 16 != 0,
    };
    let x = cx.saturating_sub(1);
    let y = cy.saturating_sub(1);

    if cb & 0x40 != 0 {
        let direction = if cb & 1 == 0 { ScrollDirection::Up } else { ScrollDirection::Down };
        return Some((
            InputEvent::Mouse { button: MouseButton::Unknown, x, y, action: MouseAction::Scroll(direction), modifiers },
            consumed,
        ));
    }

    let button = match cb & 0x3 {
        0 => MouseButton::Left,
        1 => MouseButton::Middle,
        2 => MouseButton::Right,
        _ => MouseButton::Unknown,
    };
    let action = if cb & 0x20 != 0 {
        MouseAction::Drag
    } else if is_press {
        MouseAction::Press
    } else {
        MouseAction::Release
    };

    Some((InputEvent::Mouse { button, x, y, action, modifiers }, consumed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_click_at_origin() {
        let (event, n) = parse_sgr_mouse(b"\x1b[<0;1;1M").unwrap();
        assert_eq!(n, 9);
        assert_eq!(
            event,
            InputEvent::Mouse { button: MouseButton::Left, x: 0, y: 0, action: MouseAction::Press, modifiers: KeyModifiers::NONE }
        );
    }

    #[test]
    fn release_uses_lowercase_m() {
        let (event, _) = parse_sgr_mouse(b"\x1b[<0;5;5m").unwrap();
        assert_eq!(
            event,
            InputEvent::Mouse { button: MouseButton::Left, x: 4, y: 4, action: MouseAction::Release, modifiers: KeyModifiers::NONE }
        );
    }

    #[test]
    fn scroll_up() {
        let (event, _) = parse_sgr_mouse(b"\x1b[<64;10;10M").unwrap();
        assert_eq!(
            event,
            InputEvent::Mouse { button: MouseButton::Unknown, x: 9, y: 9, action: MouseAction::Scroll(ScrollDirection::Up), modifiers: KeyModifiers::NONE }
        );
    }

    #[test]
    fn drag_sets_drag_action() {
        let (event, _) = parse_sgr_mouse(b"\x1b[<32;1;1M").unwrap();
        assert!(matches!(event, InputEvent::Mouse { action: MouseAction::Drag, .. }));
    }

    #[test]
    fn incomplete_sequence_returns_none() {
        assert_eq!(parse_sgr_mouse(b"\x1b[<0;1;1"), None);
    }

    #[test]
    fn non_sgr_prefix_returns_none() {
        assert_eq!(parse_sgr_mouse(b"\x1b[M\x00!!"), None);
    }
}
