// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Handler entries and the routed event wrapper, grounded on `tui_handler_entry` /
//! `tui_widget_event` / `tui_widget_event_{stop,prevent,consume}` in
//! `original_source/tui.h`.

use crate::core::input::InputEvent;
use crate::widget::{Tree, WidgetId};

/// Which lifecycle phase an incoming event is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Capture,
    Target,
    Bubble,
}

/// A single dispatch of an [`InputEvent`] against the tree: phase, target/current
/// widget, and the three propagation flags handlers can set.
#[derive(Debug)]
pub struct RoutedEvent {
    pub input: InputEvent,
    pub phase: Phase,
    pub target: WidgetId,
    pub current: WidgetId,
    pub stopped: bool,
    pub prevented: bool,
    pub consumed: bool,
}

impl RoutedEvent {
    #[must_use]
    pub fn new(input: InputEvent, target: WidgetId) -> Self {
        Self {
            input,
            phase: Phase::Capture,
            target,
            current: target,
            stopped: false,
            prevented: false,
            consumed: false,
        }
    }

    /// Halt further propagation (no more handlers for this event, in any phase).
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Suppress the built-in per-type default behavior for this event.
    pub fn prevent(&mut self) {
        self.prevented = true;
    }

    /// `stop` + `prevent`: the event is fully handled and nothing else should react.
    pub fn consume(&mut self) {
        self.stopped = true;
        self.prevented = true;
        self.consumed = true;
    }
}

/// A registered handler: which event it wants, whether it fires on capture or bubble,
/// and the callback itself.
pub struct HandlerEntry {
    pub matches: fn(&InputEvent) -> bool,
    pub capture: bool,
    pub callback: Box<dyn FnMut(&mut Tree, WidgetId, &mut RoutedEvent)>,
}

impl std::fmt::Debug for HandlerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerEntry").field("capture", &self.capture).finish_non_exhaustive()
    }
}
