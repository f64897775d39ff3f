// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Backend-agnostic input event types produced by [`super::decoder::try_parse_input_event`],
//! per `SPEC_FULL.md` §4.4/§6.

/// Keyboard modifier bits. Hotkey matching (`SPEC_FULL.md` §9) compares all three fields,
/// not just the key code — `Ctrl+A` and plain `A` are distinct hotkeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyModifiers {
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false };

    #[must_use]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

/// Mouse buttons reported by the SGR mouse protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Unknown,
}

/// Scroll wheel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Bracketed-paste boundary marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteMode {
    Start,
    End,
}

/// Terminal focus-in/focus-out notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusState {
    Gained,
    Lost,
}

/// Keyboard key identity, decoded from a control byte, CSI/SS3 sequence, or UTF-8 text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// A printable character, already case-folded by any Shift the terminal applied.
    Char(char),
    /// `F1`..`F12`.
    Function(u8),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    Tab,
    /// Shift+Tab, reported by terminals as `CSI Z`.
    BackTab,
    Enter,
    Escape,
    Backspace,
}

/// Mouse event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    Press,
    Release,
    Drag,
    Motion,
    Scroll(ScrollDirection),
}

/// A decoded input event, independent of the byte protocol it arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Keyboard {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    Mouse {
        button: MouseButton,
        x: u16,
        y: u16,
        action: MouseAction,
        modifiers: KeyModifiers,
    },
    Resize {
        cols: u16,
        rows: u16,
    },
    Focus(FocusState),
    Paste(PasteMode),
}

/// Outcome of one [`super::decoder::try_parse_input_event`] call, per `SPEC_FULL.md`
/// §4.4/§7: a byte stream can yield a complete event, ask the caller to wait for more
/// bytes, or call for a single malformed byte to be dropped before retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// A complete event; advance the input ring by this many bytes.
    Event(InputEvent, usize),
    /// A structurally valid sequence is in progress; consume nothing and wait for the
    /// next read.
    Incomplete,
    /// A byte that can never start or continue a valid sequence; drop exactly one byte
    /// and try again.
    Invalid,
}
