// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Centralized ANSI/VT100 escape-sequence constants, grouped by protocol domain, per
//! `SPEC_FULL.md` §4.1 (output) and §4.4 (input).

#![cfg_attr(rustfmt, rustfmt_skip)]

// --- Lead bytes -------------------------------------------------------------------

pub const ESC: u8 = 0x1B;
pub const CSI_BRACKET: u8 = b'[';
pub const SS3_O: u8 = b'O';
pub const OSC_BRACKET: u8 = b']';

// --- C0 controls the decoder recognizes directly -----------------------------------

pub const CR: u8 = b'\r';
pub const LF: u8 = b'\n';
pub const TAB: u8 = b'\t';
pub const BACKSPACE_DEL: u8 = 0x7F;
pub const BACKSPACE_BS: u8 = 0x08;
pub const CTRL_SPACE: u8 = 0x00;

// --- CSI parameter/terminator bytes --------------------------------------------------

pub const PARAM_SEPARATOR: u8 = b';';
pub const CSI_PARAM_MARKER: u8 = b'<'; // SGR mouse introducer: `CSI <`
pub const DIGIT_0: u8 = b'0';
pub const DIGIT_9: u8 = b'9';
pub const FUNCTION_KEY_FINAL: u8 = b'~';
pub const RESIZE_FINAL: u8 = b't';
pub const MOUSE_PRESS_FINAL: u8 = b'M';
pub const MOUSE_RELEASE_FINAL: u8 = b'm';
pub const FOCUS_GAINED_FINAL: u8 = b'I';
pub const FOCUS_LOST_FINAL: u8 = b'O';

// --- Bracketed paste params ---------------------------------------------------------

pub const PASTE_START_PARAM: u16 = 200;
pub const PASTE_END_PARAM: u16 = 201;

// --- Output sequences ----------------------------------------------------------------

pub const SGR_RESET: &[u8] = b"\x1b[0m";
pub const CURSOR_SHOW: &[u8] = b"\x1b[?25h";
pub const CURSOR_HIDE: &[u8] = b"\x1b[?25l";

pub const ALT_SCREEN_ENTER: &[u8] = b"\x1b[?1049h";
pub const ALT_SCREEN_LEAVE: &[u8] = b"\x1b[?1049l";

pub const MOUSE_BASIC_ENABLE: &[u8] = b"\x1b[?1000h";
pub const MOUSE_BASIC_DISABLE: &[u8] = b"\x1b[?1000l";
pub const MOUSE_MOTION_ENABLE: &[u8] = b"\x1b[?1002h";
pub const MOUSE_MOTION_DISABLE: &[u8] = b"\x1b[?1002l";
pub const MOUSE_SGR_ENABLE: &[u8] = b"\x1b[?1006h";
pub const MOUSE_SGR_DISABLE: &[u8] = b"\x1b[?1006l";

pub const BRACKETED_PASTE_ENABLE: &[u8] = b"\x1b[?2004h";
pub const BRACKETED_PASTE_DISABLE: &[u8] = b"\x1b[?2004l";
pub const FOCUS_EVENTS_ENABLE: &[u8] = b"\x1b[?1004h";
pub const FOCUS_EVENTS_DISABLE: &[u8] = b"\x1b[?1004l";
pub const SYNC_OUTPUT_BEGIN: &[u8] = b"\x1b[?2026h";
pub const SYNC_OUTPUT_END: &[u8] = b"\x1b[?2026l";

pub const ERASE_DISPLAY: &[u8] = b"\x1b[2J";
pub const CURSOR_HOME: &[u8] = b"\x1b[H";

pub const OSC52_CLIPBOARD_PREFIX: &[u8] = b"\x1b]52;c;";
pub const OSC8_HYPERLINK_PREFIX: &[u8] = b"\x1b]8;;";
pub const ST_TERMINATOR: &[u8] = b"\x1b\\";
pub const BEL_TERMINATOR: u8 = 0x07;

/// `CSI n SP q` cursor-shape parameter, indexed by `CursorShape as usize`.
pub const CURSOR_SHAPE_PARAMS: [u8; 7] = [b'0', b'1', b'2', b'3', b'4', b'5', b'6'];

/// Border glyph tables (single/double/rounded/bold/ascii), indexed
/// `[top_left, top_right, bottom_left, bottom_right, horizontal, vertical]`.
pub const BORDER_SINGLE: [char; 6] = ['\u{250C}', '\u{2510}', '\u{2514}', '\u{2518}', '\u{2500}', '\u{2502}'];
pub const BORDER_DOUBLE: [char; 6] = ['\u{2554}', '\u{2557}', '\u{255A}', '\u{255D}', '\u{2550}', '\u{2551}'];
pub const BORDER_ROUNDED: [char; 6] = ['\u{256D}', '\u{256E}', '\u{2570}', '\u{256F}', '\u{2500}', '\u{2502}'];
pub const BORDER_BOLD: [char; 6] = ['\u{250F}', '\u{2513}', '\u{2517}', '\u{251B}', '\u{2501}', '\u{2503}'];
pub const BORDER_ASCII: [char; 6] = ['+', '+', '+', '+', '-', '|'];
