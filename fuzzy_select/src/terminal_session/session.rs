// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::TerminalBackend;
use crate::{constants::CLEAR_CURRENT_LINE,
            input_decoder::{DecodedInput, READ_BUFFER_SIZE, decode_key_press}};
use std::fmt::{self, Debug};

/// Exclusive ownership of the terminal in raw mode, for the length of one selection.
///
/// - [`TerminalSession::acquire`] captures the current configuration and switches to raw
///   mode.
/// - [`TerminalSession::release`] puts the captured configuration back. It is idempotent:
///   only the first call touches the terminal.
///
/// Callers are expected to call [`TerminalSession::release`] themselves, on every exit
/// path, and treat its error as fatal. If a session is dropped while still holding the
/// terminal, [`Drop`] releases it anyway and reports the leak on stderr and in the log.
/// A restore that fails on this path is only reported: `drop` can't return the error,
/// and it may be running during an unwind.
///
/// Not [`Clone`]. Moving it moves the ownership of the terminal along with it.
pub struct TerminalSession<B: TerminalBackend> {
    backend: B,
    /// [`Some`] until released.
    original: Option<B::Attributes>,
}

impl<B: TerminalBackend> TerminalSession<B> {
    /// # Errors
    ///
    /// Returns an error if the terminal configuration can't be queried, or raw mode can't
    /// be set. The terminal is left as it was in both cases.
    pub fn acquire(mut backend: B) -> miette::Result<Self> {
        let original = backend.capture()?;
        backend.make_raw(&original)?;
        tracing::debug!(message = "Terminal session acquired, raw mode enabled");
        Ok(Self {
            backend,
            original: Some(original),
        })
    }

    #[must_use]
    pub fn is_released(&self) -> bool { self.original.is_none() }

    /// Erase the current line and return the cursor to column zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn clear_current_line(&mut self) -> miette::Result<()> {
        self.write(CLEAR_CURRENT_LINE)
    }

    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn write(&mut self, text: &str) -> miette::Result<()> {
        self.backend.write_bytes(text.as_bytes())?;
        Ok(())
    }

    /// Block for one read of up to [`READ_BUFFER_SIZE`] bytes and decode it.
    /// [`DecodedInput::NoInput`] means the input was closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    pub fn read_one(&mut self) -> miette::Result<DecodedInput> {
        let mut buffer = [0_u8; READ_BUFFER_SIZE];
        let bytes_read = self.backend.read_bytes(&mut buffer)?;
        let decoded = decode_key_press(&buffer[..bytes_read.min(READ_BUFFER_SIZE)]);
        tracing::trace!(message = "Read from terminal", bytes_read, decoded = ?decoded);
        Ok(decoded)
    }

    /// Restore the configuration captured by [`TerminalSession::acquire`]. Calling this
    /// on a released session does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal rejects the restore. The session counts as
    /// released either way; there is nothing left to retry with.
    pub fn release(&mut self) -> miette::Result<()> {
        let Some(original) = self.original.take() else {
            return Ok(());
        };
        self.backend.restore(&original)?;
        tracing::debug!(message = "Terminal session released, original attributes restored");
        Ok(())
    }
}

impl<B: TerminalBackend> Drop for TerminalSession<B> {
    fn drop(&mut self) {
        if self.is_released() {
            return;
        }

        tracing::error!(
            message = "Terminal session dropped without being released, restoring it now"
        );
        eprintln!("fuzzy_select: terminal session was not released, restoring it now");

        if let Err(report) = self.release() {
            tracing::error!(message = "Could not restore the terminal", error = ?report);
            eprintln!("{report:?}");
        }
    }
}

impl<B: TerminalBackend> Debug for TerminalSession<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalSession")
            .field("is_released", &self.is_released())
            .finish_non_exhaustive()
    }
}
