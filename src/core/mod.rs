// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! Protocol-agnostic primitives: color, style, cells, UTF-8, display width, the ANSI
//! wire format, and input decoding. Nothing in `core` touches a tty or a widget tree.

pub mod ansi;
pub mod cell;
pub mod color;
pub mod input;
pub mod style;
pub mod utf8;
pub mod width;

pub use cell::Cell;
pub use color::RgbColor;
pub use style::StyleFlags;
