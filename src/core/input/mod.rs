// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Incremental VT100/ANSI input decoding, per `SPEC_FULL.md` §4.4.

mod control;
mod decoder;
mod keyboard;
mod mouse;
mod ring;
mod terminal_events;

pub mod events;

pub use decoder::try_parse_input_event;
pub use events::{
    DecodeOutcome, FocusState, InputEvent, KeyCode, KeyModifiers, MouseAction, MouseButton, PasteMode,
    ScrollDirection,
};
pub use ring::InputRing;
