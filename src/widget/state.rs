// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! The per-type state payload, grounded on the `union state` member of `tui_widget` in
//! `original_source/tui.h`.
//!
//! Redesign note (`SPEC_FULL.md` §9 "Dynamic dispatch / unions"): modeled as a sum type
//! with one arm per widget type, rather than a C union plus discriminant. Text storage
//! that the original borrows from caller-owned buffers (`textbox.buffer`,
//! `textarea.lines`) is owned directly by the node instead — an arena-owned tree has no
//! use for the original's borrowed-pointer contract.

use std::cell::Cell as StdCell;
use std::rc::Rc;

use crate::render::Align;

/// Shared mutable cell backing a radio group's selected value, replacing the original's
/// caller-owned `int*`.
pub type RadioGroup = Rc<StdCell<i32>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    pub row: usize,
    pub col: usize,
}

/// The type-tagged state payload. `Container`/`Panel`/`Custom` carry no widget-specific
/// state; everything else mirrors a member of the original union.
pub enum WidgetState {
    Container,
    Panel,
    Label { text: String, align: Align },
    Button { text: String, pressed: bool },
    Textbox { buffer: String, capacity: usize, cursor: usize, scroll: usize },
    Textarea {
        lines: Vec<String>,
        cursor_row: usize,
        cursor_col: usize,
        scroll_row: usize,
        scroll_col: usize,
        selection: Option<(SelectionRange, SelectionRange)>,
        line_numbers: bool,
        word_wrap: bool,
        editable: bool,
        max_line_len: usize,
    },
    Checkbox { text: String, checked: bool },
    Radio { text: String, group: RadioGroup, value: i32 },
    List { items: Vec<String>, selected: usize, scroll: usize, visible: usize },
    Progress { value: f32, min: f32, max: f32 },
    Slider { value: f32, min: f32, max: f32, step: f32, dragging: bool },
    Spinner { value: i32, min: i32, max: i32, step: i32 },
    Dropdown { items: Vec<String>, selected: usize, scroll: usize, open: bool },
    Tabs { labels: Vec<String>, selected: usize },
    Scrollbar {
        content_size: i32,
        view_size: i32,
        scroll: i32,
        vertical: bool,
        dragging: bool,
        drag_start: i32,
    },
    Splitter { vertical: bool, ratio: f32, min_size: i32, dragging: bool },
    Custom,
}

impl std::fmt::Debug for WidgetState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Each arm's field set is already visible on `Node::kind`; keep this terse.
        f.write_str(match self {
            WidgetState::Container => "Container",
            WidgetState::Panel => "Panel",
            WidgetState::Label { .. } => "Label",
            WidgetState::Button { .. } => "Button",
            WidgetState::Textbox { .. } => "Textbox",
            WidgetState::Textarea { .. } => "Textarea",
            WidgetState::Checkbox { .. } => "Checkbox",
            WidgetState::Radio { .. } => "Radio",
            WidgetState::List { .. } => "List",
            WidgetState::Progress { .. } => "Progress",
            WidgetState::Slider { .. } => "Slider",
            WidgetState::Spinner { .. } => "Spinner",
            WidgetState::Dropdown { .. } => "Dropdown",
            WidgetState::Tabs { .. } => "Tabs",
            WidgetState::Scrollbar { .. } => "Scrollbar",
            WidgetState::Splitter { .. } => "Splitter",
            WidgetState::Custom => "Custom",
        })
    }
}
