// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::terminal_session::{TerminalBackend, TerminalSessionError};
use std::{collections::VecDeque,
          io,
          sync::{Arc, Mutex, MutexGuard, PoisonError}};

/// Raw bytes the terminal sends for the arrow keys.
pub const ARROW_UP: &str = "\x1b[A";
pub const ARROW_DOWN: &str = "\x1b[B";
pub const ARROW_RIGHT: &str = "\x1b[C";
pub const ARROW_LEFT: &str = "\x1b[D";

/// One entry per [`TerminalBackend`] method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendCall {
    Capture,
    MakeRaw,
    Restore,
    Write,
    Read,
}

/// What [`FakeTerminalBackend::capture`](TerminalBackend::capture) hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeAttributes {
    pub raw: bool,
}

#[derive(Debug, Default)]
struct Recorded {
    calls: Vec<BackendCall>,
    output: Vec<u8>,
    raw: bool,
}

/// Read side of a [`FakeTerminalBackend`]. Clones share the same recording, so it can
/// be inspected after the backend has been moved into a session.
#[derive(Debug, Clone, Default)]
pub struct TerminalRecording {
    inner: Arc<Mutex<Recorded>>,
}

impl TerminalRecording {
    fn lock(&self) -> MutexGuard<'_, Recorded> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Every backend call made so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<BackendCall> { self.lock().calls.clone() }

    #[must_use]
    pub fn count(&self, call: BackendCall) -> usize {
        self.lock().calls.iter().filter(|it| **it == call).count()
    }

    /// Is the fake terminal in raw mode right now.
    #[must_use]
    pub fn is_raw(&self) -> bool { self.lock().raw }

    /// Everything written, lossily decoded as UTF-8, escape sequences included.
    #[must_use]
    pub fn output(&self) -> String { String::from_utf8_lossy(&self.lock().output).into() }
}

/// Scripted stand-in for the real terminal.
///
/// Each read hands back the next input chunk in one piece, the way a real terminal
/// delivers one keypress per read in raw mode. Once the chunks run out (or an empty
/// chunk comes up) reads return 0 bytes, i.e. end of input.
///
/// ```
/// use fuzzy_select::test_fixtures::{BackendCall, FakeTerminalBackend};
///
/// let (backend, recording) = FakeTerminalBackend::new_mock(["l", "c", "\r"]);
/// let candidates = ["Leclerc", "Hamilton", "Norris"];
/// let chosen = fuzzy_select::select_with(
///     &candidates,
///     backend,
///     &fuzzy_select::SelectOptions::default(),
///     &mut std::io::sink(),
/// )
/// .unwrap();
///
/// assert_eq!(chosen, Some(0));
/// assert_eq!(recording.count(BackendCall::Restore), 1);
/// ```
#[derive(Debug)]
pub struct FakeTerminalBackend {
    input_chunks: VecDeque<Vec<u8>>,
    fail_on: Option<(BackendCall, usize)>,
    recording: TerminalRecording,
}

impl FakeTerminalBackend {
    #[must_use]
    pub fn new_mock(
        input_chunks: impl IntoIterator<Item = impl Into<Vec<u8>>>,
    ) -> (Self, TerminalRecording) {
        let recording = TerminalRecording::default();
        let backend = Self {
            input_chunks: input_chunks.into_iter().map(Into::into).collect(),
            fail_on: None,
            recording: recording.clone(),
        };
        (backend, recording)
    }

    /// Make the `nth` (1-based) call of kind `call` fail with an I/O error.
    #[must_use]
    pub fn fail_on_nth(mut self, call: BackendCall, nth: usize) -> Self {
        self.fail_on = Some((call, nth));
        self
    }

    /// Record `call`, then check whether it was scripted to fail.
    fn record(&self, call: BackendCall) -> Result<(), TerminalSessionError> {
        let mut recorded = self.recording.lock();
        recorded.calls.push(call);

        let Some((fail_call, nth)) = self.fail_on else {
            return Ok(());
        };
        if fail_call != call
            || recorded.calls.iter().filter(|it| **it == call).count() != nth
        {
            return Ok(());
        }

        let error = io::Error::other(format!("injected failure on {call:?} #{nth}"));
        Err(match call {
            BackendCall::Capture => TerminalSessionError::GetAttributes(error),
            BackendCall::MakeRaw => TerminalSessionError::SetRawMode(error),
            BackendCall::Restore => TerminalSessionError::RestoreAttributes(error),
            BackendCall::Write => TerminalSessionError::Write(error),
            BackendCall::Read => TerminalSessionError::Read(error),
        })
    }
}

impl TerminalBackend for FakeTerminalBackend {
    type Attributes = FakeAttributes;

    fn capture(&mut self) -> Result<FakeAttributes, TerminalSessionError> {
        self.record(BackendCall::Capture)?;
        Ok(FakeAttributes {
            raw: self.recording.is_raw(),
        })
    }

    fn make_raw(&mut self, _original: &FakeAttributes) -> Result<(), TerminalSessionError> {
        self.record(BackendCall::MakeRaw)?;
        self.recording.lock().raw = true;
        Ok(())
    }

    fn restore(&mut self, original: &FakeAttributes) -> Result<(), TerminalSessionError> {
        self.record(BackendCall::Restore)?;
        self.recording.lock().raw = original.raw;
        Ok(())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), TerminalSessionError> {
        self.record(BackendCall::Write)?;
        self.recording.lock().output.extend_from_slice(bytes);
        Ok(())
    }

    fn read_bytes(&mut self, buffer: &mut [u8]) -> Result<usize, TerminalSessionError> {
        self.record(BackendCall::Read)?;
        let Some(chunk) = self.input_chunks.pop_front() else {
            return Ok(0);
        };
        let bytes_read = chunk.len().min(buffer.len());
        buffer[..bytes_read].copy_from_slice(&chunk[..bytes_read]);
        Ok(bytes_read)
    }
}
