// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Unix/Linux/macOS terminal backend using rustix's safe termios API.

use super::{TerminalBackend, TerminalSessionError};
use rustix::{fd::{AsFd, BorrowedFd},
             io::Errno,
             termios::{self, OptionalActions, Termios}};
use std::{fs::File,
          io::{self, Write}};

/// Represents either stdin or `/dev/tty` for terminal operations.
///
/// Stdin is used when it is a tty. When stdin is redirected (candidates piped in), keys
/// are read from `/dev/tty` instead.
#[derive(Debug)]
enum TerminalFd {
    Stdin(io::Stdin),
    DevTty(File),
}

impl AsFd for TerminalFd {
    fn as_fd(&self) -> BorrowedFd<'_> {
        match self {
            TerminalFd::Stdin(stdin) => stdin.as_fd(),
            TerminalFd::DevTty(file) => file.as_fd(),
        }
    }
}

/// Gets a file descriptor for the controlling terminal: stdin if it's a tty, otherwise
/// `/dev/tty`.
fn get_terminal_fd() -> io::Result<TerminalFd> {
    let stdin = io::stdin();
    if termios::isatty(&stdin) {
        Ok(TerminalFd::Stdin(stdin))
    } else {
        let file = File::options().read(true).write(true).open("/dev/tty")?;
        Ok(TerminalFd::DevTty(file))
    }
}

/// Where the UI is drawn: stdout, unless it is redirected (the choice is being captured
/// by a pipe), in which case `/dev/tty`. The echoed choice goes to the same place, so it
/// lands on the line the UI was drawn on.
#[derive(Debug)]
pub enum TerminalOutput {
    Stdout(io::Stdout),
    DevTty(File),
}

impl TerminalOutput {
    /// # Errors
    ///
    /// Returns [`TerminalSessionError::OpenTerminal`] if stdout is not a tty and
    /// `/dev/tty` cannot be opened.
    pub fn try_new() -> Result<Self, TerminalSessionError> {
        let stdout = io::stdout();
        let stdout_is_tty = termios::isatty(&stdout);
        Self::pick(stdout, stdout_is_tty, || {
            File::options().write(true).open("/dev/tty")
        })
        .map_err(TerminalSessionError::OpenTerminal)
    }

    fn pick(
        stdout: io::Stdout,
        stdout_is_tty: bool,
        open_dev_tty: impl FnOnce() -> io::Result<File>,
    ) -> io::Result<Self> {
        if stdout_is_tty {
            Ok(TerminalOutput::Stdout(stdout))
        } else {
            Ok(TerminalOutput::DevTty(open_dev_tty()?))
        }
    }
}

impl Write for TerminalOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            TerminalOutput::Stdout(stdout) => stdout.write(buf),
            TerminalOutput::DevTty(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            TerminalOutput::Stdout(stdout) => stdout.flush(),
            TerminalOutput::DevTty(file) => file.flush(),
        }
    }
}

/// Raw mode on the controlling terminal, keys read from it, UI written to it.
#[derive(Debug)]
pub struct RustixTerminalBackend {
    input: TerminalFd,
    output: TerminalOutput,
}

impl RustixTerminalBackend {
    /// # Errors
    ///
    /// Returns [`TerminalSessionError::OpenTerminal`] if stdin (or stdout) is not a tty
    /// and `/dev/tty` cannot be opened.
    pub fn try_new() -> Result<Self, TerminalSessionError> {
        let input = get_terminal_fd().map_err(TerminalSessionError::OpenTerminal)?;
        let output = TerminalOutput::try_new()?;
        tracing::debug!(
            message = "Opened controlling terminal",
            input = ?input,
            output = ?output
        );
        Ok(Self { input, output })
    }
}

impl TerminalBackend for RustixTerminalBackend {
    type Attributes = Termios;

    fn capture(&mut self) -> Result<Termios, TerminalSessionError> {
        termios::tcgetattr(&self.input)
            .map_err(|errno| TerminalSessionError::GetAttributes(errno.into()))
    }

    fn make_raw(&mut self, original: &Termios) -> Result<(), TerminalSessionError> {
        // make_raw() matches cfmakeraw: no ICANON, no ECHO, no ISIG, VMIN=1, VTIME=0.
        let mut raw = original.clone();
        raw.make_raw();
        termios::tcsetattr(&self.input, OptionalActions::Now, &raw)
            .map_err(|errno| TerminalSessionError::SetRawMode(errno.into()))
    }

    fn restore(&mut self, original: &Termios) -> Result<(), TerminalSessionError> {
        termios::tcsetattr(&self.input, OptionalActions::Now, original)
            .map_err(|errno| TerminalSessionError::RestoreAttributes(errno.into()))
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), TerminalSessionError> {
        self.output
            .write_all(bytes)
            .and_then(|()| self.output.flush())
            .map_err(TerminalSessionError::Write)
    }

    fn read_bytes(&mut self, buffer: &mut [u8]) -> Result<usize, TerminalSessionError> {
        loop {
            match rustix::io::read(&self.input, &mut *buffer) {
                Ok(bytes_read) => return Ok(bytes_read),
                Err(Errno::INTR) => {}
                Err(errno) => return Err(TerminalSessionError::Read(errno.into())),
            }
        }
    }
}
