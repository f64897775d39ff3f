// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! The grid's unit value: a glyph plus its rendition, per `SPEC_FULL.md` §3.

use crate::core::color::RgbColor;
use crate::core::style::StyleFlags;

/// One terminal cell: code point, fg/bg/underline color, style flags.
///
/// Equality is member-wise and is the sole signal the diff flush (`render::context`)
/// uses to decide a cell needs redrawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub codepoint: char,
    pub fg: RgbColor,
    pub bg: RgbColor,
    pub underline_color: RgbColor,
    pub style: StyleFlags,
}

impl Cell {
    /// A blank cell: space glyph, all colors default, no style flags. This is what
    /// `begin_frame` scrubs the back-buffer scratch area to.
    pub const BLANK: Cell = Cell {
        codepoint: ' ',
        fg: RgbColor::DEFAULT,
        bg: RgbColor::DEFAULT,
        underline_color: RgbColor::DEFAULT,
        style: StyleFlags::NONE,
    };

    /// A cell with the given glyph and the rest taken from the current drawing state.
    #[must_use]
    pub fn new(
        codepoint: char,
        fg: RgbColor,
        bg: RgbColor,
        underline_color: RgbColor,
        style: StyleFlags,
    ) -> Self {
        Self {
            codepoint,
            fg,
            bg,
            underline_color,
            style,
        }
    }

    /// A continuation cell following a wide glyph: same rendition, space glyph.
    ///
    /// `set_cell_wide` writes this at `x + 1` so the diff engine still sees the
    /// occupied column change if the underlying wide glyph changes, without emitting a
    /// second visible glyph for it.
    #[must_use]
    pub fn continuation(of: Cell) -> Self {
        Cell {
            codepoint: ' ',
            ..of
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::BLANK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_default() {
        assert_eq!(Cell::default(), Cell::BLANK);
    }

    #[test]
    fn equality_is_member_wise() {
        let a = Cell::new('x', RgbColor::RED, RgbColor::DEFAULT, RgbColor::DEFAULT, StyleFlags::NONE);
        let b = Cell::new('x', RgbColor::RED, RgbColor::DEFAULT, RgbColor::DEFAULT, StyleFlags::NONE);
        let c = Cell::new('x', RgbColor::BLUE, RgbColor::DEFAULT, RgbColor::DEFAULT, StyleFlags::NONE);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn continuation_keeps_rendition_blanks_glyph() {
        let wide = Cell::new('\u{6c49}', RgbColor::GREEN, RgbColor::DEFAULT, RgbColor::DEFAULT, StyleFlags::BOLD);
        let cont = Cell::continuation(wide);
        assert_eq!(cont.codepoint, ' ');
        assert_eq!(cont.fg, RgbColor::GREEN);
        assert_eq!(cont.style, StyleFlags::BOLD);
    }
}
