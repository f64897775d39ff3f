// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Phased event dispatch, hotkeys, and handler registration.

pub mod handlers;
pub mod hotkeys;
pub mod router;

pub use handlers::{HandlerEntry, Phase, RoutedEvent};
pub use hotkeys::HotkeyEntry;
pub use router::route_event;
