// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Border glyph selection, grounded on `tui_border_style` and the glyph tables in
//! `original_source/tui.h`'s `tui_box`.

use crate::core::ansi::constants as c;

/// Border glyph set. `None` draws no frame at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    None,
    Single,
    Double,
    Rounded,
    Bold,
    Ascii,
}

/// `[top_left, top_right, bottom_left, bottom_right, horizontal, vertical]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderStyle {
    #[must_use]
    pub fn glyphs(self) -> Option<BorderGlyphs> {
        let table = match self {
            BorderStyle::None => return None,
            BorderStyle::Single => c::BORDER_SINGLE,
            BorderStyle::Double => c::BORDER_DOUBLE,
            BorderStyle::Rounded => c::BORDER_ROUNDED,
            BorderStyle::Bold => c::BORDER_BOLD,
            BorderStyle::Ascii => c::BORDER_ASCII,
        };
        Some(BorderGlyphs {
            top_left: table[0],
            top_right: table[1],
            bottom_left: table[2],
            bottom_right: table[3],
            horizontal: table[4],
            vertical: table[5],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_has_no_glyphs() {
        assert!(BorderStyle::None.glyphs().is_none());
    }

    #[test]
    fn single_matches_box_drawing_corners() {
        let g = BorderStyle::Single.glyphs().unwrap();
        assert_eq!(g.top_left, '\u{250C}');
        assert_eq!(g.bottom_right, '\u{2518}');
    }

    #[test]
    fn ascii_is_plain_punctuation() {
        let g = BorderStyle::Ascii.glyphs().unwrap();
        assert_eq!(g.horizontal, '-');
        assert_eq!(g.vertical, '|');
    }
}
