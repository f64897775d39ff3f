// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Theme value records and the five built-in palettes, grounded on `tui_theme` and
//! `TUI_THEME_DEFAULT`/`DARK`/`LIGHT`/`BLUE`/`GREEN` in `original_source/tui.h`.
//!
//! A [`Theme`] is an inert value: drawing primitives accept colors directly, and a
//! [`crate::render::Context`] merely holds the active theme for widgets to consult via
//! [`crate::render::Context::theme`]. Nothing in this crate interprets or resolves theme
//! values on a widget's behalf (`SPEC_FULL.md` §3, Non-goals).

use crate::core::color::RgbColor;
use crate::render::borders::BorderStyle;

/// A named palette plus a default border style, consulted by widget drawers but never
/// interpreted by the engine itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub bg: RgbColor,
    pub fg: RgbColor,
    pub fg_dim: RgbColor,
    pub widget_bg: RgbColor,
    pub widget_fg: RgbColor,
    pub widget_border: RgbColor,
    pub focus_bg: RgbColor,
    pub focus_fg: RgbColor,
    pub select_bg: RgbColor,
    pub select_fg: RgbColor,
    pub accent: RgbColor,
    pub accent_dim: RgbColor,
    pub success: RgbColor,
    pub warning: RgbColor,
    pub error: RgbColor,
    pub info: RgbColor,
    pub border_style: BorderStyle,
}

impl Theme {
    pub const DEFAULT: Theme = Theme {
        bg: RgbColor::DEFAULT,
        fg: RgbColor::DEFAULT,
        fg_dim: RgbColor::rgb(128, 128, 128),
        widget_bg: RgbColor::rgb(40, 40, 40),
        widget_fg: RgbColor::rgb(220, 220, 220),
        widget_border: RgbColor::rgb(80, 80, 80),
        focus_bg: RgbColor::rgb(60, 60, 100),
        focus_fg: RgbColor::WHITE,
        select_bg: RgbColor::rgb(0, 120, 180),
        select_fg: RgbColor::WHITE,
        accent: RgbColor::rgb(100, 150, 255),
        accent_dim: RgbColor::rgb(60, 90, 160),
        success: RgbColor::rgb(100, 200, 100),
        warning: RgbColor::rgb(220, 180, 50),
        error: RgbColor::rgb(220, 80, 80),
        info: RgbColor::rgb(100, 180, 220),
        border_style: BorderStyle::Single,
    };

    pub const DARK: Theme = Theme {
        bg: RgbColor::rgb(20, 20, 25),
        fg: RgbColor::rgb(200, 200, 200),
        fg_dim: RgbColor::rgb(100, 100, 100),
        widget_bg: RgbColor::rgb(35, 35, 40),
        widget_fg: RgbColor::rgb(200, 200, 200),
        widget_border: RgbColor::rgb(60, 60, 70),
        focus_bg: RgbColor::rgb(50, 80, 120),
        focus_fg: RgbColor::WHITE,
        select_bg: RgbColor::rgb(70, 100, 140),
        select_fg: RgbColor::WHITE,
        accent: RgbColor::rgb(80, 140, 220),
        accent_dim: RgbColor::rgb(50, 90, 140),
        success: RgbColor::rgb(80, 180, 80),
        warning: RgbColor::rgb(200, 160, 40),
        error: RgbColor::rgb(200, 60, 60),
        info: RgbColor::rgb(80, 160, 200),
        border_style: BorderStyle::Rounded,
    };

    pub const LIGHT: Theme = Theme {
        bg: RgbColor::rgb(240, 240, 240),
        fg: RgbColor::rgb(30, 30, 30),
        fg_dim: RgbColor::rgb(120, 120, 120),
        widget_bg: RgbColor::rgb(255, 255, 255),
        widget_fg: RgbColor::rgb(30, 30, 30),
        widget_border: RgbColor::rgb(180, 180, 180),
        focus_bg: RgbColor::rgb(200, 220, 255),
        focus_fg: RgbColor::rgb(20, 20, 20),
        select_bg: RgbColor::rgb(0, 120, 200),
        select_fg: RgbColor::WHITE,
        accent: RgbColor::rgb(0, 100, 180),
        accent_dim: RgbColor::rgb(100, 150, 200),
        success: RgbColor::rgb(40, 160, 40),
        warning: RgbColor::rgb(200, 140, 0),
        error: RgbColor::rgb(200, 40, 40),
        info: RgbColor::rgb(40, 140, 200),
        border_style: BorderStyle::Single,
    };

    pub const BLUE: Theme = Theme {
        bg: RgbColor::rgb(15, 25, 45),
        fg: RgbColor::rgb(180, 200, 230),
        fg_dim: RgbColor::rgb(80, 100, 140),
        widget_bg: RgbColor::rgb(25, 40, 70),
        widget_fg: RgbColor::rgb(180, 200, 230),
        widget_border: RgbColor::rgb(50, 80, 130),
        focus_bg: RgbColor::rgb(40, 80, 140),
        focus_fg: RgbColor::WHITE,
        select_bg: RgbColor::rgb(60, 120, 200),
        select_fg: RgbColor::WHITE,
        accent: RgbColor::rgb(100, 180, 255),
        accent_dim: RgbColor::rgb(60, 120, 180),
        success: RgbColor::rgb(80, 200, 120),
        warning: RgbColor::rgb(230, 180, 60),
        error: RgbColor::rgb(230, 80, 80),
        info: RgbColor::rgb(100, 180, 240),
        border_style: BorderStyle::Double,
    };

    pub const GREEN: Theme = Theme {
        bg: RgbColor::rgb(15, 30, 20),
        fg: RgbColor::rgb(180, 230, 180),
        fg_dim: RgbColor::rgb(80, 120, 80),
        widget_bg: RgbColor::rgb(25, 50, 35),
        widget_fg: RgbColor::rgb(180, 230, 180),
        widget_border: RgbColor::rgb(60, 100, 70),
        focus_bg: RgbColor::rgb(40, 100, 60),
        focus_fg: RgbColor::WHITE,
        select_bg: RgbColor::rgb(60, 140, 80),
        select_fg: RgbColor::WHITE,
        accent: RgbColor::rgb(100, 220, 130),
        accent_dim: RgbColor::rgb(60, 150, 90),
        success: RgbColor::rgb(100, 230, 130),
        warning: RgbColor::rgb(220, 200, 80),
        error: RgbColor::rgb(220, 100, 100),
        info: RgbColor::rgb(100, 200, 180),
        border_style: BorderStyle::Bold,
    };
}

impl Default for Theme {
    fn default() -> Self {
        Theme::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_uses_terminal_default_background() {
        assert!(Theme::DEFAULT.bg.is_default());
    }

    #[test]
    fn dark_theme_picks_rounded_borders() {
        assert_eq!(Theme::DARK.border_style, BorderStyle::Rounded);
    }

    #[test]
    fn themes_are_distinct() {
        assert_ne!(Theme::DEFAULT.widget_bg, Theme::BLUE.widget_bg);
    }
}
