// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::run_selection_loop;
use crate::{constants::DEFAULT_PROMPT,
            highlight::StyleSheet,
            terminal_session::{TerminalBackend, TerminalSession}};
use miette::IntoDiagnostic;
use std::io::Write;

/// Knobs for one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOptions {
    pub style_sheet: StyleSheet,
    /// When `true`, the chosen candidate is printed as `> <choice>` once the terminal has
    /// been restored. When `false`, the UI line is erased before the terminal is
    /// restored and nothing is printed, leaving the caller to print whatever it likes.
    pub echo_choice: bool,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            style_sheet: StyleSheet::default(),
            echo_choice: true,
        }
    }
}

impl From<StyleSheet> for SelectOptions {
    fn from(style_sheet: StyleSheet) -> Self {
        Self {
            style_sheet,
            ..Self::default()
        }
    }
}

impl SelectOptions {
    /// Defaults, with colors turned off if `NO_COLOR` is set.
    #[must_use]
    pub fn from_env() -> Self { StyleSheet::from_env().into() }
}

/// Run one interactive selection over `backend` and return the position of the chosen
/// candidate. Everything else in this module is a wrapper around this.
///
/// The session is released before this returns, whether the loop finished or failed.
/// Only after that is the final line written to `final_output`.
///
/// # Errors
///
/// Returns an error if the terminal can't be put in raw mode, read from, written to, or
/// restored. When both the loop and the restore fail, the restore error wins.
pub fn select_with<B: TerminalBackend, S: AsRef<str>>(
    candidates: &[S],
    backend: B,
    options: &SelectOptions,
    final_output: &mut impl Write,
) -> miette::Result<Option<usize>> {
    let mut session = TerminalSession::acquire(backend)?;

    let result = run_selection_loop(&mut session, candidates, &options.style_sheet)
        .and_then(|chosen| {
            if !options.echo_choice {
                session.clear_current_line()?;
            }
            Ok(chosen)
        });
    if let Err(report) = &result {
        tracing::error!(message = "Selection loop failed", error = ?report);
    }

    session.release()?;
    let chosen = result?;

    if options.echo_choice {
        write_final_line(
            final_output,
            chosen.and_then(|index| candidates.get(index)).map(AsRef::as_ref),
        )?;
    }

    Ok(chosen)
}

/// `> <choice>` over the last rendered line, or just a line break when cancelled.
fn write_final_line(final_output: &mut impl Write, chosen: Option<&str>) -> miette::Result<()> {
    let written = match chosen {
        Some(choice) => writeln!(final_output, "\r{DEFAULT_PROMPT}{choice}"),
        None => writeln!(final_output),
    };
    written.and_then(|()| final_output.flush()).into_diagnostic()
}

/// [`select_with`] on the real terminal. The final line is written where the UI was
/// drawn: stdout, or `/dev/tty` when stdout is redirected.
///
/// # Errors
///
/// Returns an error if there is no controlling terminal, or any terminal operation
/// fails.
#[cfg(unix)]
pub fn try_select_index_with_options<S: AsRef<str>>(
    candidates: &[S],
    options: &SelectOptions,
) -> miette::Result<Option<usize>> {
    use crate::terminal_session::{RustixTerminalBackend, TerminalOutput};

    let backend = RustixTerminalBackend::try_new()?;
    let mut final_output = TerminalOutput::try_new()?;
    select_with(candidates, backend, options, &mut final_output)
}

/// # Errors
///
/// Always; raw mode is only implemented for Unix.
#[cfg(not(unix))]
pub fn try_select_index_with_options<S: AsRef<str>>(
    _candidates: &[S],
    _options: &SelectOptions,
) -> miette::Result<Option<usize>> {
    Err(crate::terminal_session::TerminalSessionError::UnsupportedPlatform.into())
}

/// Recoverable version of [`select_from_list`].
///
/// # Errors
///
/// See [`try_select_index_with_options`].
pub fn try_select_from_list<S: AsRef<str>>(candidates: &[S]) -> miette::Result<Option<String>> {
    let chosen = try_select_index_with_options(candidates, &SelectOptions::from_env())?;
    Ok(chosen
        .and_then(|index| candidates.get(index))
        .map(|it| it.as_ref().to_string()))
}

/// Let the user pick one of `candidates` interactively. [`None`] if they cancelled.
///
/// Takes over the terminal for the duration and restores it before returning. If the
/// terminal can't be used (or restored) the process exits with status 1 after printing
/// a diagnostic to stderr.
#[must_use]
pub fn select_from_list<S: AsRef<str>>(candidates: &[S]) -> Option<String> {
    exit_on_error(try_select_from_list(candidates))
}

/// Like [`select_from_list`], but returns the position of the chosen candidate.
#[must_use]
pub fn select_index_from_list<S: AsRef<str>>(candidates: &[S]) -> Option<usize> {
    exit_on_error(try_select_index_with_options(
        candidates,
        &SelectOptions::from_env(),
    ))
}

/// Like [`select_from_list`], with explicit [`SelectOptions`].
#[must_use]
pub fn select_with_options<S: AsRef<str>>(
    candidates: &[S],
    options: &SelectOptions,
) -> Option<String> {
    exit_on_error(try_select_index_with_options(candidates, options))
        .and_then(|index| candidates.get(index))
        .map(|it| it.as_ref().to_string())
}

fn exit_on_error<T>(result: miette::Result<T>) -> T {
    match result {
        Ok(it) => it,
        Err(report) => {
            tracing::error!(message = "Unrecoverable terminal failure", error = ?report);
            eprintln!("{report:?}");
            std::process::exit(1);
        }
    }
}
