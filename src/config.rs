// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Capacity bounds and feature defaults, turning the original's compile-time constants
//! (`TUI_MAX_WIDTH`, `TUI_MAX_CHILDREN`, ...) into a runtime-configurable struct, per
//! `SPEC_FULL.md` §2.

/// Capacity bounds and feature defaults for a [`crate::render::Context`] and the
/// [`crate::widget::WidgetManager`] it drives.
///
/// All fields have defaults matching the original C implementation's compile-time
/// constants, so `EngineConfig::default()` reproduces its behavior exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum supported terminal width; the back/front buffer stride.
    pub max_width: usize,
    /// Maximum supported terminal height.
    pub max_height: usize,
    /// Input ring buffer capacity in bytes.
    pub input_ring_capacity: usize,
    /// Output encoder buffer capacity in bytes, flushed when full.
    pub output_buffer_capacity: usize,
    /// Maximum children per widget node.
    pub max_children: usize,
    /// Maximum event handlers per widget node.
    pub max_handlers: usize,
    /// Maximum entries in the hotkey table.
    pub max_hotkeys: usize,
    /// Maximum depth of the modal focus-scope stack.
    pub max_focus_stack: usize,
    /// Start with mouse reporting enabled.
    pub mouse_enabled: bool,
    /// Start with bracketed paste enabled.
    pub bracketed_paste_enabled: bool,
    /// Start with focus-in/out reporting enabled.
    pub focus_events_enabled: bool,
    /// Wrap each frame's diff in `CSI ?2026 h` / `CSI ?2026 l` (synchronized output).
    pub synchronized_output: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_width: 512,
            max_height: 256,
            input_ring_capacity: 64,
            output_buffer_capacity: 65536,
            max_children: 64,
            max_handlers: 8,
            max_hotkeys: 32,
            max_focus_stack: 16,
            mouse_enabled: false,
            bracketed_paste_enabled: false,
            focus_events_enabled: false,
            synchronized_output: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_constants() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.max_width, 512);
        assert_eq!(cfg.max_height, 256);
        assert_eq!(cfg.input_ring_capacity, 64);
        assert_eq!(cfg.max_children, 64);
        assert_eq!(cfg.max_handlers, 8);
        assert_eq!(cfg.max_hotkeys, 32);
        assert_eq!(cfg.max_focus_stack, 16);
    }
}
