// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! The handful of error kinds that cross an API boundary, per `SPEC_FULL.md` §7.
//!
//! Everything else in `spec.md` §7 (malformed input byte, incomplete escape, drawing
//! outside a frame/rect, widget ops on a detached tree) is a silent no-op by design and
//! never reaches this type — it surfaces only as the next frame's image.

use thiserror::Error;

/// Errors that can cross the construction/flush boundary of [`crate::render::Context`].
#[derive(Debug, Error)]
pub enum Error {
    /// A bounded array (children, handlers, hotkeys, focus-scope stack, ...) is at
    /// capacity; the operation was rejected rather than silently growing past the
    /// compile-time bound.
    #[error("capacity exceeded: {0}")]
    Capacity(&'static str),

    /// TTY acquisition (raw mode, size query) failed during construction; no partial
    /// state was left on the terminal.
    #[error("failed to acquire tty: {0}")]
    TtyAcquire(String),

    /// A write to the tty failed for a reason other than `EINTR` after the flusher's
    /// retry loop gave up; the back buffer is left unchanged so the next frame may
    /// retry.
    #[error("tty io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
