// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! A terminal UI engine: a double-buffered cell grid with diff-driven ANSI output, an
//! incremental input decoder, and a hierarchical widget tree with phased event
//! dispatch.
//!
//! The engine never touches a terminal directly. [`render::Context`] writes to any
//! [`core::ansi::ByteSink`], and [`backend`] defines the two collaborators a host
//! supplies: a [`backend::TtyHandle`] and a [`backend::ResizeSource`]. The bundled
//! [`backend::posix`] backend (on by default, via the `posix-backend` feature) covers
//! real POSIX terminals; anything else — a PTY in tests, a different platform — is free
//! to implement the two traits itself.
//!
//! ```text
//! backend (tty, resize) -> core (cells, ansi, input) -> render (buffer, context)
//!                                                     -> widget (tree, manager)
//!                                                     -> event (router, hotkeys)
//!                                                     -> behavior (defaults, drawing)
//! ```

pub mod backend;
pub mod behavior;
pub mod config;
pub mod core;
pub mod error;
pub mod event;
pub mod render;
pub mod widget;

pub use config::EngineConfig;
pub use error::{Error, Result};
