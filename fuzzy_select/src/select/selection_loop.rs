// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{SelectionState, Transition};
use crate::{constants::DEFAULT_PROMPT,
            highlight::{StyleSheet, render_highlighted, render_no_match},
            terminal_session::{TerminalBackend, TerminalSession}};

/// Drive the read / render cycle until the user selects or cancels. Returns the position
/// of the chosen candidate in `candidates`.
///
/// This does not release `session`; the caller owns that, so it happens on the error
/// path too.
///
/// # Errors
///
/// Returns an error if reading from or writing to the terminal fails.
pub fn run_selection_loop<B: TerminalBackend, S: AsRef<str>>(
    session: &mut TerminalSession<B>,
    candidates: &[S],
    style_sheet: &StyleSheet,
) -> miette::Result<Option<usize>> {
    let mut state = SelectionState::default();

    loop {
        render(session, &mut state, candidates, style_sheet)?;

        let input = session.read_one()?;
        tracing::debug!(message = "Input", input = ?input, query = %state.query());

        match state.apply(input, candidates) {
            Transition::Continue => {}
            Transition::Selected(index) => {
                tracing::debug!(message = "Selected", index);
                return Ok(Some(index));
            }
            Transition::Cancelled => {
                tracing::debug!(message = "Cancelled");
                return Ok(None);
            }
        }
    }
}

/// Paint the single line: prompt, then nothing (empty query), the highlighted selected
/// match, or the query flagged as having no match.
fn render<B: TerminalBackend, S: AsRef<str>>(
    session: &mut TerminalSession<B>,
    state: &mut SelectionState,
    candidates: &[S],
    style_sheet: &StyleSheet,
) -> miette::Result<()> {
    session.clear_current_line()?;
    session.write(DEFAULT_PROMPT)?;

    if state.query().is_empty() {
        return Ok(());
    }

    state.clamp_selection();
    let line = match state.current_match().and_then(|index| candidates.get(index)) {
        Some(candidate) => render_highlighted(candidate.as_ref(), state.query(), style_sheet),
        None => render_no_match(state.query(), style_sheet),
    };
    session.write(&line)
}
