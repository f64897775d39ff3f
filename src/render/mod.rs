// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! The frame buffer, theme, border glyphs, frame lifecycle, and drawing primitives.

pub mod borders;
pub mod buffer;
pub mod context;
pub mod draw;
pub mod theme;

pub use borders::{BorderGlyphs, BorderStyle};
pub use buffer::Grid;
pub use context::{Context, DrawState};
pub use draw::{draw_box, fill, hline, label, label_aligned, popup_box, vline, wrap_text, Align};
pub use theme::Theme;
