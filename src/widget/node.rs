// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Node identity, bounds, and flags, grounded on `struct tui_widget` in
//! `original_source/tui.h`.

use smallvec::SmallVec;

use crate::core::color::RgbColor;
use crate::event::handlers::HandlerEntry;
use crate::render::BorderStyle;
use crate::widget::state::WidgetState;

/// Most widgets have a handful of children; inline storage avoids a heap allocation per
/// node for the common case, spilling to the heap past 8.
pub(crate) type ChildVec = SmallVec<[WidgetId; 8]>;

/// A stable index into a [`crate::widget::Tree`]'s arena.
///
/// Per `SPEC_FULL.md` §9's redesign note, the parent/focus/hover back-references that
/// the original expresses as raw pointers are indices of this type instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub(crate) u32);

impl WidgetId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Discriminant mirroring `tui_widget_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIter)]
pub enum WidgetKind {
    Container,
    Panel,
    Label,
    Button,
    Textbox,
    Textarea,
    Checkbox,
    Radio,
    List,
    Progress,
    Slider,
    Spinner,
    Dropdown,
    Tabs,
    Scrollbar,
    Splitter,
    Custom,
}

/// Bounds relative to the parent, per `SPEC_FULL.md` §3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Visibility/interaction flags, plus the tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    pub visible: bool,
    pub enabled: bool,
    pub focusable: bool,
    pub focused: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            visible: true,
            enabled: true,
            focusable: false,
            focused: false,
        }
    }
}

/// Color/border overrides a widget applies over the active theme; `None` defers to the
/// theme's value for that slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleOverride {
    pub bg: Option<RgbColor>,
    pub fg: Option<RgbColor>,
    pub border: Option<BorderStyle>,
}

/// One node in the widget tree.
pub struct Node {
    pub(crate) id: WidgetId,
    pub kind: WidgetKind,
    pub user_id: Option<i32>,
    pub name: Option<String>,
    pub bounds: Bounds,
    pub(crate) parent: Option<WidgetId>,
    pub(crate) children: ChildVec,
    pub flags: Flags,
    pub tab_index: i32,
    pub(crate) handlers: Vec<HandlerEntry>,
    pub style: StyleOverride,
    pub state: WidgetState,
}

impl Node {
    pub(crate) fn new(id: WidgetId, kind: WidgetKind, state: WidgetState) -> Self {
        Self {
            id,
            kind,
            user_id: None,
            name: None,
            bounds: Bounds::default(),
            parent: None,
            children: ChildVec::new(),
            flags: Flags::default(),
            tab_index: -1,
            handlers: Vec::new(),
            style: StyleOverride::default(),
            state,
        }
    }

    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    #[must_use]
    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    #[must_use]
    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("bounds", &self.bounds)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::WidgetKind;

    #[test]
    fn every_kind_has_a_non_empty_display_name() {
        for kind in WidgetKind::iter() {
            assert!(!kind.to_string().is_empty());
        }
    }

    #[test]
    fn progress_is_included_as_a_draw_only_kind() {
        assert!(WidgetKind::iter().any(|k| k == WidgetKind::Progress));
    }
}
