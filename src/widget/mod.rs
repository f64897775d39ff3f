// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! The hierarchical widget tree: node identity, the type-tagged state payload, the
//! arena, and root/focus/hover/hotkey tracking.

pub mod manager;
pub mod node;
pub mod state;
pub mod tree;

pub use manager::WidgetManager;
pub use node::{Bounds, Flags, Node, StyleOverride, WidgetId, WidgetKind};
pub use state::{RadioGroup, SelectionRange, WidgetState};
pub use tree::Tree;
