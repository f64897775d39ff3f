// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Buffered output encoder: every escape sequence the engine emits funnels through
//! here, per `SPEC_FULL.md` §4.1. No heap allocation on the per-cell hot path; integers
//! are formatted into a small stack buffer the way the original's `tui_output_int` does.

use base64::{engine::general_purpose::STANDARD, Engine};

use super::constants as c;
use crate::core::color::RgbColor;
use crate::core::style::StyleFlags;
use crate::error::Result;

/// Cursor shapes recognized by DECSCUSR (`CSI n SP q`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CursorShape {
    Default = 0,
    BlockBlink = 1,
    Block = 2,
    UnderlineBlink = 3,
    Underline = 4,
    BarBlink = 5,
    Bar = 6,
}

/// Something bytes can be written to and flushed through — implemented by
/// [`crate::backend::TtyHandle`] and by `Vec<u8>` for tests.
pub trait ByteSink {
    fn write_bytes(&mut self, data: &[u8]) -> Result<()>;
}

impl ByteSink for Vec<u8> {
    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.extend_from_slice(data);
        Ok(())
    }
}

/// Accumulates escape sequences and raw glyph bytes in a fixed-capacity buffer,
/// flushing to the underlying sink when full or on explicit [`Encoder::flush`].
pub struct Encoder<W: ByteSink> {
    sink: W,
    buf: Vec<u8>,
    capacity: usize,
}

impl<W: ByteSink> Encoder<W> {
    #[must_use]
    pub fn new(sink: W, capacity: usize) -> Self {
        Self { sink, buf: Vec::with_capacity(capacity), capacity }
    }

    pub fn flush(&mut self) -> Result<()> {
        if !self.buf.is_empty() {
            self.sink.write_bytes(&self.buf)?;
            self.buf.clear();
        }
        Ok(())
    }

    pub fn into_sink(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.sink)
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        if self.buf.len() + data.len() > self.capacity {
            self.flush()?;
        }
        if data.len() > self.capacity {
            // Larger than the whole buffer: write straight through.
            return self.sink.write_bytes(data);
        }
        self.buf.extend_from_slice(data);
        Ok(())
    }

    fn write_uint(&mut self, value: u32) -> Result<()> {
        let mut digits = [0u8; 10];
        let mut pos = digits.len();
        let mut v = value;
        if v == 0 {
            pos -= 1;
            digits[pos] = b'0';
        } else {
            while v > 0 {
                pos -= 1;
                digits[pos] = b'0' + (v % 10) as u8;
                v /= 10;
            }
        }
        self.write(&digits[pos..])
    }

    pub fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.write(b"\x1b[")?;
        self.write_uint(u32::from(y) + 1)?;
        self.write(b";")?;
        self.write_uint(u32::from(x) + 1)?;
        self.write(b"H")
    }

    pub fn show_cursor(&mut self, visible: bool) -> Result<()> {
        self.write(if visible { c::CURSOR_SHOW } else { c::CURSOR_HIDE })
    }

    pub fn reset_attributes(&mut self) -> Result<()> {
        self.write(c::SGR_RESET)
    }

    pub fn set_fg(&mut self, color: RgbColor) -> Result<()> {
        self.set_component_color(color, b"38")
    }

    pub fn set_bg(&mut self, color: RgbColor) -> Result<()> {
        self.set_component_color(color, b"48")
    }

    pub fn set_underline_color(&mut self, color: RgbColor) -> Result<()> {
        if color.is_default() {
            return self.write(b"\x1b[59m");
        }
        let (r, g, b) = color.components();
        self.write(b"\x1b[58;2;")?;
        self.write_uint(u32::from(r))?;
        self.write(b";")?;
        self.write_uint(u32::from(g))?;
        self.write(b";")?;
        self.write_uint(u32::from(b))?;
        self.write(b"m")
    }

    fn set_component_color(&mut self, color: RgbColor, sgr_base: &[u8]) -> Result<()> {
        if color.is_default() {
            return self.write(if sgr_base == b"38" { b"\x1b[39m" } else { b"\x1b[49m" });
        }
        let (r, g, b) = color.components();
        self.write(b"\x1b[")?;
        self.write(sgr_base)?;
        self.write(b";2;")?;
        self.write_uint(u32::from(r))?;
        self.write(b";")?;
        self.write_uint(u32::from(g))?;
        self.write(b";")?;
        self.write_uint(u32::from(b))?;
        self.write(b"m")
    }

    pub fn set_style(&mut self, style: StyleFlags) -> Result<()> {
        for &(flag, param) in crate::core::style::SGR_TABLE {
            if style.contains(flag) {
                self.write(b"\x1b[")?;
                self.write(param)?;
                self.write(b"m")?;
            }
        }
        if style.is_undercurl() {
            self.write(b"\x1b[4:3m")?;
        }
        Ok(())
    }

    pub fn set_cursor_shape(&mut self, shape: CursorShape) -> Result<()> {
        self.write(b"\x1b[")?;
        self.write(&[c::CURSOR_SHAPE_PARAMS[shape as usize]])?;
        self.write(b" q")
    }

    pub fn write_char(&mut self, ch: char) -> Result<()> {
        let mut bytes = [0u8; 4];
        let n = crate::core::utf8::encode(ch, &mut bytes);
        self.write(&bytes[..n])
    }

    pub fn enter_alt_screen(&mut self) -> Result<()> {
        self.write(c::ALT_SCREEN_ENTER)
    }

    pub fn leave_alt_screen(&mut self) -> Result<()> {
        self.write(c::ALT_SCREEN_LEAVE)
    }

    pub fn clear_screen(&mut self) -> Result<()> {
        self.write(c::SGR_RESET)?;
        self.write(c::ERASE_DISPLAY)?;
        self.write(c::CURSOR_HOME)
    }

    pub fn enable_mouse(&mut self) -> Result<()> {
        self.write(c::MOUSE_BASIC_ENABLE)?;
        self.write(c::MOUSE_MOTION_ENABLE)?;
        self.write(c::MOUSE_SGR_ENABLE)
    }

    pub fn disable_mouse(&mut self) -> Result<()> {
        self.write(c::MOUSE_SGR_DISABLE)?;
        self.write(c::MOUSE_MOTION_DISABLE)?;
        self.write(c::MOUSE_BASIC_DISABLE)
    }

    pub fn enable_bracketed_paste(&mut self, enabled: bool) -> Result<()> {
        self.write(if enabled { c::BRACKETED_PASTE_ENABLE } else { c::BRACKETED_PASTE_DISABLE })
    }

    pub fn enable_focus_events(&mut self, enabled: bool) -> Result<()> {
        self.write(if enabled { c::FOCUS_EVENTS_ENABLE } else { c::FOCUS_EVENTS_DISABLE })
    }

    pub fn begin_sync(&mut self) -> Result<()> {
        self.write(c::SYNC_OUTPUT_BEGIN)
    }

    pub fn end_sync(&mut self) -> Result<()> {
        self.write(c::SYNC_OUTPUT_END)
    }

    pub fn set_clipboard(&mut self, text: &str) -> Result<()> {
        self.write(c::OSC52_CLIPBOARD_PREFIX)?;
        self.write(STANDARD.encode(text.as_bytes()).as_bytes())?;
        self.write(c::ST_TERMINATOR)
    }

    pub fn hyperlink_start(&mut self, url: &str) -> Result<()> {
        self.write(c::OSC8_HYPERLINK_PREFIX)?;
        self.write(url.as_bytes())?;
        self.write(c::ST_TERMINATOR)
    }

    pub fn hyperlink_end(&mut self) -> Result<()> {
        self.write(c::OSC8_HYPERLINK_PREFIX)?;
        self.write(c::ST_TERMINATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode<F: FnOnce(&mut Encoder<Vec<u8>>) -> Result<()>>(f: F) -> Vec<u8> {
        let mut enc = Encoder::new(Vec::new(), 4096);
        f(&mut enc).unwrap();
        enc.into_sink().unwrap()
    }

    #[test]
    fn move_cursor_is_one_indexed() {
        assert_eq!(encode(|e| e.move_cursor(0, 0)), b"\x1b[1;1H");
        assert_eq!(encode(|e| e.move_cursor(9, 4)), b"\x1b[5;10H");
    }

    #[test]
    fn default_fg_emits_39() {
        assert_eq!(encode(|e| e.set_fg(RgbColor::DEFAULT)), b"\x1b[39m");
    }

    #[test]
    fn rgb_fg_emits_truecolor_sgr() {
        assert_eq!(encode(|e| e.set_fg(RgbColor::rgb(1, 2, 3))), b"\x1b[38;2;1;2;3m");
    }

    #[test]
    fn undercurl_uses_colon_variant() {
        assert_eq!(encode(|e| e.set_style(StyleFlags::UNDERCURL)), b"\x1b[4:3m");
    }

    #[test]
    fn set_clipboard_base64_encodes_the_payload() {
        let out = encode(|e| e.set_clipboard("hello"));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("aGVsbG8="));
    }

    #[test]
    fn buffer_flushes_when_full() {
        let mut enc = Encoder::new(Vec::new(), 4);
        enc.move_cursor(0, 0).unwrap();
        let out = enc.into_sink().unwrap();
        assert_eq!(out, b"\x1b[1;1H");
    }
}
