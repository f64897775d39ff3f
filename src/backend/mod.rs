// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! The two collaborators `spec.md` §1 calls out as deliberately external: a tty handle
//! and a resize source. The engine never depends on a concrete terminal; it depends on
//! these two traits, so hosts can supply their own (a PTY in tests, a Windows console,
//! ...) without touching `core`/`render`/`widget`.
//!
//! [`posix`] bundles a real implementation for POSIX terminals, gated behind the
//! `posix-backend` feature (on by default).

#[cfg(all(unix, feature = "posix-backend"))]
pub mod posix;

use crate::error::Result;

/// Blocking write / non-blocking read against a terminal, and a size query. Implemented
/// by [`posix::PosixTty`] and by test doubles over an in-memory buffer.
pub trait TtyHandle {
    /// Write the full buffer, retrying on short writes and `EINTR`.
    fn write_all(&mut self, data: &[u8]) -> Result<()>;

    /// Read up to `buf.len()` bytes without blocking; `Ok(0)` means nothing was
    /// available, not EOF.
    fn read_nonblocking(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Current terminal size as `(columns, rows)`.
    fn size(&self) -> Result<(u16, u16)>;
}

impl<T: TtyHandle> crate::core::ansi::encoder::ByteSink for T {
    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.write_all(data)
    }
}

/// A latch the frame loop polls once per `begin_frame`: true exactly once per resize,
/// then clears. `spec.md` §5 calls this "the only async write the core observes".
pub trait ResizeSource {
    /// Returns whether a resize occurred since the last call, clearing the latch.
    fn poll_and_clear(&mut self) -> bool;
}

/// A [`ResizeSource`] that never fires, for hosts that resize only at startup or drive
/// their own polling loop.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverResizes;

impl ResizeSource for NeverResizes {
    fn poll_and_clear(&mut self) -> bool {
        false
    }
}
