// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::TerminalSessionError;

/// The syscalls a [`super::TerminalSession`] needs from the device it owns.
///
/// The real implementation is [`super::RustixTerminalBackend`]. Tests swap in
/// [`crate::test_fixtures::FakeTerminalBackend`], which scripts the input and records
/// every call.
pub trait TerminalBackend {
    /// Snapshot of the terminal configuration, taken at acquisition and handed back on
    /// release.
    type Attributes;

    /// Query the current terminal configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalSessionError::GetAttributes`] if the query fails.
    fn capture(&mut self) -> Result<Self::Attributes, TerminalSessionError>;

    /// Switch to raw mode, starting from `original`: no line buffering, no echo, no
    /// signal-generating control characters.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalSessionError::SetRawMode`] if the terminal rejects it.
    fn make_raw(&mut self, original: &Self::Attributes)
    -> Result<(), TerminalSessionError>;

    /// Put `original` back in place.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalSessionError::RestoreAttributes`] if the terminal rejects it.
    fn restore(&mut self, original: &Self::Attributes)
    -> Result<(), TerminalSessionError>;

    /// Write all of `bytes` and flush.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalSessionError::Write`] on an I/O failure.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), TerminalSessionError>;

    /// One blocking read into `buffer`. `Ok(0)` means end of input.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalSessionError::Read`] on an I/O failure.
    fn read_bytes(&mut self, buffer: &mut [u8]) -> Result<usize, TerminalSessionError>;
}
