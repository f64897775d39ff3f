// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! ANSI/VT100 escape-sequence constants and the buffered output encoder built on them.

pub mod constants;
pub mod encoder;

pub use encoder::{ByteSink, CursorShape, Encoder};
