// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;

// ╭──────────────────────────────────────────────────────────╮
// │ Diagnostic error types for terminal session failures     │
// ╰──────────────────────────────────────────────────────────╯

/// Everything that can go wrong while owning the terminal. None of these are
/// recoverable: there is no usable terminal to fall back to.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum TerminalSessionError {
    #[error("Failed to open the controlling terminal")]
    #[diagnostic(
        code(fuzzy_select::terminal::open),
        help("stdin is not a tty and /dev/tty could not be opened; run from an interactive terminal")
    )]
    OpenTerminal(#[source] std::io::Error),

    #[error("Failed to retrieve terminal attributes")]
    #[diagnostic(
        code(fuzzy_select::terminal::get_attributes),
        help("Make sure the input is an interactive terminal")
    )]
    GetAttributes(#[source] std::io::Error),

    #[error("Failed to switch the terminal to raw mode")]
    #[diagnostic(code(fuzzy_select::terminal::set_raw_mode))]
    SetRawMode(#[source] std::io::Error),

    #[error("Failed to restore the original terminal attributes")]
    #[diagnostic(
        code(fuzzy_select::terminal::restore),
        help("The shell may be left in raw mode; run `reset` to recover")
    )]
    RestoreAttributes(#[source] std::io::Error),

    #[error("Failed to read from the terminal")]
    #[diagnostic(code(fuzzy_select::terminal::read))]
    Read(#[source] std::io::Error),

    #[error("Failed to write to the terminal")]
    #[diagnostic(code(fuzzy_select::terminal::write))]
    Write(#[source] std::io::Error),

    #[error("Interactive selection is not supported on this platform")]
    #[diagnostic(code(fuzzy_select::terminal::unsupported_platform))]
    UnsupportedPlatform,
}
