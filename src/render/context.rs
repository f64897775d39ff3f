// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! The frame lifecycle and diff-based flush, grounded on `tui_begin_frame`/
//! `tui_end_frame` in `original_source/tui.h`.

use crate::config::EngineConfig;
use crate::core::ansi::encoder::{ByteSink, CursorShape, Encoder};
use crate::core::cell::Cell;
use crate::core::color::RgbColor;
use crate::core::style::StyleFlags;
use crate::error::Result;
use crate::render::buffer::Grid;
use crate::render::theme::Theme;

/// Current drawing state: the pen a `label`/`set_cell` call paints with, set by the
/// caller before issuing draw calls within a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawState {
    pub fg: RgbColor,
    pub bg: RgbColor,
    pub underline_color: RgbColor,
    pub style: StyleFlags,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            fg: RgbColor::DEFAULT,
            bg: RgbColor::DEFAULT,
            underline_color: RgbColor::DEFAULT,
            style: StyleFlags::NONE,
        }
    }
}

/// Owns the front/back buffers, the active theme, cursor state, and the output
/// encoder. One frame is `begin_frame()` .. draw calls .. `end_frame()`.
pub struct Context<W: ByteSink> {
    config: EngineConfig,
    front: Grid,
    back: Grid,
    theme: Theme,
    draw_state: DrawState,
    cursor_x: u16,
    cursor_y: u16,
    cursor_visible: bool,
    cursor_shape: CursorShape,
    needs_redraw: bool,
    in_frame: bool,
    mouse_enabled: bool,
    bracketed_paste_enabled: bool,
    focus_events_enabled: bool,
    encoder: Encoder<W>,
}

impl<W: ByteSink> Context<W> {
    #[must_use]
    pub fn new(sink: W, config: EngineConfig) -> Self {
        let front = Grid::new(config.max_width, config.max_height);
        let back = Grid::new(config.max_width, config.max_height);
        let encoder = Encoder::new(sink, config.output_buffer_capacity);
        Self {
            config,
            front,
            back,
            theme: Theme::DEFAULT,
            draw_state: DrawState::default(),
            cursor_x: 0,
            cursor_y: 0,
            cursor_visible: false,
            cursor_shape: CursorShape::Default,
            needs_redraw: true,
            in_frame: false,
            mouse_enabled: false,
            bracketed_paste_enabled: false,
            focus_events_enabled: false,
            encoder,
        }
    }

    /// Enter the alternate screen, hide the cursor, and clear the display — the
    /// terminal-side setup `tui_init` performs once before the first frame. Distinct from
    /// [`Context::new`] so constructing a `Context` never touches the sink by itself
    /// (tests build one over a `Vec<u8>` without a real terminal on the other end).
    pub fn start(&mut self) -> Result<()> {
        self.encoder.enter_alt_screen()?;
        self.encoder.show_cursor(false)?;
        self.encoder.clear_screen()?;
        self.encoder.flush()
    }

    /// Mirror of `tui_destroy`'s terminal teardown: disable features in reverse of the
    /// order they're commonly enabled in, reset cursor shape, show the cursor, reset SGR,
    /// leave the alternate screen, flush, and hand the sink back to the caller (who is
    /// responsible for releasing raw mode on its tty handle).
    pub fn destroy(mut self) -> Result<W> {
        if self.mouse_enabled {
            self.encoder.disable_mouse()?;
        }
        if self.bracketed_paste_enabled {
            self.encoder.enable_bracketed_paste(false)?;
        }
        if self.focus_events_enabled {
            self.encoder.enable_focus_events(false)?;
        }
        self.encoder.set_cursor_shape(CursorShape::Default)?;
        self.encoder.show_cursor(true)?;
        self.encoder.reset_attributes()?;
        self.encoder.leave_alt_screen()?;
        self.encoder.flush()?;
        self.encoder.into_sink()
    }

    /// Toggle SGR mouse reporting, emitting the enable/disable sequence immediately and
    /// flushing. A no-op if the feature is already in the requested state.
    pub fn set_mouse_enabled(&mut self, enabled: bool) -> Result<()> {
        if enabled == self.mouse_enabled {
            return Ok(());
        }
        self.mouse_enabled = enabled;
        if enabled { self.encoder.enable_mouse()? } else { self.encoder.disable_mouse()? }
        self.encoder.flush()
    }

    #[must_use]
    pub fn mouse_enabled(&self) -> bool {
        self.mouse_enabled
    }

    /// Toggle bracketed-paste mode, emitting the sequence immediately and flushing.
    pub fn set_bracketed_paste_enabled(&mut self, enabled: bool) -> Result<()> {
        if enabled == self.bracketed_paste_enabled {
            return Ok(());
        }
        self.bracketed_paste_enabled = enabled;
        self.encoder.enable_bracketed_paste(enabled)?;
        self.encoder.flush()
    }

    #[must_use]
    pub fn bracketed_paste_enabled(&self) -> bool {
        self.bracketed_paste_enabled
    }

    /// Toggle focus-in/out reporting, emitting the sequence immediately and flushing.
    pub fn set_focus_events_enabled(&mut self, enabled: bool) -> Result<()> {
        if enabled == self.focus_events_enabled {
            return Ok(());
        }
        self.focus_events_enabled = enabled;
        self.encoder.enable_focus_events(enabled)?;
        self.encoder.flush()
    }

    #[must_use]
    pub fn focus_events_enabled(&self) -> bool {
        self.focus_events_enabled
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.back.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.back.height()
    }

    #[must_use]
    pub fn draw_state(&self) -> DrawState {
        self.draw_state
    }

    pub fn set_draw_state(&mut self, state: DrawState) {
        self.draw_state = state;
    }

    pub fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    /// Set the cursor shape, emitting `CSI n SP q` immediately and flushing, per
    /// `SPEC_FULL.md` §4.3 "Features".
    pub fn set_cursor_shape(&mut self, shape: CursorShape) -> Result<()> {
        self.cursor_shape = shape;
        self.encoder.set_cursor_shape(shape)?;
        self.encoder.flush()
    }

    /// Called by the [`crate::backend::ResizeSource`] pump when the terminal size
    /// changes: resizes both buffers in place and schedules a full redraw, matching the
    /// original's "clear front buffer so all cells will be redrawn" behavior.
    pub fn notify_resize(&mut self, width: usize, height: usize) {
        self.front.resize(width, height);
        self.back.resize(width, height);
        self.needs_redraw = true;
    }

    /// Begin a frame: clears the back buffer to blank and resets the current draw
    /// state to neutral, per `SPEC_FULL.md` §4.3, so a color or style set during one
    /// frame never leaks into the next for a draw call that doesn't re-set it.
    pub fn begin_frame(&mut self) {
        self.back.clear();
        self.draw_state = DrawState::default();
        self.in_frame = true;
    }

    #[must_use]
    pub fn in_frame(&self) -> bool {
        self.in_frame
    }

    /// No-op outside a frame or past the live viewport, per `SPEC_FULL.md` §7
    /// "Drawing outside frame or outside visible rect".
    pub fn set_cell(&mut self, x: usize, y: usize, ch: char) {
        if !self.in_frame || x >= self.width() || y >= self.height() {
            return;
        }
        let state = self.draw_state;
        self.back.set(
            x,
            y,
            Cell::new(ch, state.fg, state.bg, state.underline_color, state.style),
        );
    }

    /// Write a wide (2-column) glyph at `x`, and a matching continuation cell at
    /// `x + 1` so the diff engine tracks the occupied column without emitting a second
    /// visible glyph. Refuses if `x + 1` would fall outside the live viewport.
    pub fn set_cell_wide(&mut self, x: usize, y: usize, ch: char) {
        if !self.in_frame || x + 1 >= self.width() || y >= self.height() {
            return;
        }
        let state = self.draw_state;
        let cell = Cell::new(ch, state.fg, state.bg, state.underline_color, state.style);
        self.back.set(x, y, cell);
        self.back.set(x + 1, y, Cell::continuation(cell));
    }

    /// Flush the diff between front and back buffers to the encoder and swap them in,
    /// following `tui_end_frame`'s sentinel-reset diff loop exactly: a full-screen clear
    /// on a pending resize, synchronized-output wrapping, and style-change-triggers-
    /// attribute-reset-and-recolor.
    pub fn end_frame(&mut self) -> Result<()> {
        if !self.in_frame {
            return Ok(());
        }

        if self.needs_redraw {
            self.needs_redraw = false;
            self.encoder.reset_attributes()?;
            self.encoder.clear_screen()?;
            self.encoder.flush()?;
            self.front.clear();
        }

        if self.config.synchronized_output {
            self.encoder.begin_sync()?;
        }

        let mut last_fg: Option<RgbColor> = None;
        let mut last_bg: Option<RgbColor> = None;
        let mut last_underline: Option<RgbColor> = None;
        let mut last_style: Option<StyleFlags> = None;
        let mut last_pos: Option<(usize, usize)> = None;
        let mut dirty_cells = 0usize;

        let width = self.back.width();
        let height = self.back.height();
        for y in 0..height {
            for x in 0..width {
                let front = self.front.get(x, y).unwrap_or(Cell::BLANK);
                let back = self.back.get(x, y).unwrap_or(Cell::BLANK);
                if front == back {
                    continue;
                }
                dirty_cells += 1;

                let adjacent = matches!(last_pos, Some((lx, ly)) if lx + 1 == x && ly == y);
                if !adjacent {
                    self.encoder.move_cursor(x as u16, y as u16)?;
                }

                if last_style != Some(back.style) {
                    self.encoder.reset_attributes()?;
                    self.encoder.set_style(back.style)?;
                    last_style = Some(back.style);
                    last_fg = None;
                    last_bg = None;
                    last_underline = None;
                }

                if last_fg != Some(back.fg) {
                    self.encoder.set_fg(back.fg)?;
                    last_fg = Some(back.fg);
                }
                if last_bg != Some(back.bg) {
                    self.encoder.set_bg(back.bg)?;
                    last_bg = Some(back.bg);
                }
                if last_underline != Some(back.underline_color) {
                    self.encoder.set_underline_color(back.underline_color)?;
                    last_underline = Some(back.underline_color);
                }

                self.encoder.write_char(back.codepoint)?;
                self.front.set(x, y, back);
                last_pos = Some((x, y));
            }
        }

        if self.cursor_visible {
            self.encoder.move_cursor(self.cursor_x, self.cursor_y)?;
            self.encoder.set_cursor_shape(self.cursor_shape)?;
            self.encoder.show_cursor(true)?;
        }

        if self.config.synchronized_output {
            self.encoder.end_sync()?;
        }
        tracing::trace!(dirty_cells, width, height, "frame flushed");
        self.encoder.flush()?;
        self.in_frame = false;
        Ok(())
    }

    pub fn into_sink(self) -> Result<W> {
        self.encoder.into_sink()
    }
}
