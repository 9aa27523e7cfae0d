// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{fuzzy_match::{fuzzy_match_indices, is_skipped_query_char},
            input_decoder::{DecodedInput, EscapeCode, KeyPress}};

/// What the selection loop does after a key has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Stay in the editing state and render again.
    Continue,
    /// Done; holds the position (in the candidate list) of the chosen candidate.
    Selected(usize),
    /// Done, nothing chosen.
    Cancelled,
}

/// The mutable state of one interactive selection.
///
/// - `matches` holds positions into the candidate list, best first. It is replaced
///   wholesale every time the query changes, and is empty while the query is empty.
/// - `selection_index` points into `matches`. Arrow-Down may push it past the end;
///   [`SelectionState::clamp_selection`] pulls it back before every render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    query: String,
    selection_index: usize,
    matches: Vec<usize>,
}

impl SelectionState {
    #[must_use]
    pub fn query(&self) -> &str { &self.query }

    #[must_use]
    pub fn selection_index(&self) -> usize { self.selection_index }

    #[must_use]
    pub fn matches(&self) -> &[usize] { &self.matches }

    /// Bring the selection index back into `[0, matches.len() - 1]`. No-op when there
    /// are no matches.
    pub fn clamp_selection(&mut self) {
        if let Some(last) = self.matches.len().checked_sub(1) {
            self.selection_index = self.selection_index.min(last);
        }
    }

    /// Position (in the candidate list) of the currently selected match, after clamping.
    #[must_use]
    pub fn current_match(&self) -> Option<usize> {
        let last = self.matches.len().checked_sub(1)?;
        self.matches.get(self.selection_index.min(last)).copied()
    }

    /// Apply one decoded input and report what should happen next.
    pub fn apply<S: AsRef<str>>(
        &mut self,
        input: DecodedInput,
        candidates: &[S],
    ) -> Transition {
        match input {
            DecodedInput::Unrecognized => Transition::Continue,
            DecodedInput::NoInput => self.cancel(),
            DecodedInput::Key(KeyPress::Character(ch)) => {
                if !is_skipped_query_char(ch) {
                    self.query.push(ch);
                    self.selection_index = 0;
                    self.recompute_matches(candidates);
                }
                Transition::Continue
            }
            DecodedInput::Key(KeyPress::Escape(code)) => self.apply_escape(code, candidates),
        }
    }

    fn apply_escape<S: AsRef<str>>(
        &mut self,
        code: EscapeCode,
        candidates: &[S],
    ) -> Transition {
        match code {
            EscapeCode::Backspace | EscapeCode::Delete => {
                if self.query.pop().is_some() {
                    self.recompute_matches(candidates);
                }
                Transition::Continue
            }
            EscapeCode::ArrowUp => {
                self.selection_index = self.selection_index.saturating_sub(1);
                Transition::Continue
            }
            EscapeCode::ArrowDown => {
                self.selection_index = self.selection_index.saturating_add(1);
                Transition::Continue
            }
            EscapeCode::Tab | EscapeCode::CarriageReturn => {
                match (self.query.is_empty(), self.current_match()) {
                    (false, Some(index)) => Transition::Selected(index),
                    _ => Transition::Cancelled,
                }
            }
            _ => self.cancel(),
        }
    }

    fn cancel(&mut self) -> Transition {
        self.query.clear();
        self.matches = Vec::new();
        Transition::Cancelled
    }

    fn recompute_matches<S: AsRef<str>>(&mut self, candidates: &[S]) {
        self.matches = if self.query.is_empty() {
            Vec::new()
        } else {
            fuzzy_match_indices(candidates, &self.query)
        };
        tracing::debug!(
            message = "Matches recomputed",
            query = %self.query,
            match_count = self.matches.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const CANDIDATES: &[&str] = &["Leclerc", "Hamilton", "Norris", "Hulkenberg"];

    fn ch(ch: char) -> DecodedInput { DecodedInput::Key(KeyPress::Character(ch)) }

    fn esc(code: EscapeCode) -> DecodedInput { DecodedInput::Key(KeyPress::Escape(code)) }

    fn typed(text: &str) -> SelectionState {
        let mut state = SelectionState::default();
        for it in text.chars() {
            assert_eq!(state.apply(ch(it), CANDIDATES), Transition::Continue);
        }
        state
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = SelectionState::default();
        assert_eq!(state.query(), "");
        assert_eq!(state.selection_index(), 0);
        assert!(state.matches().is_empty());
        assert_eq!(state.current_match(), None);
    }

    #[test]
    fn test_typing_appends_and_recomputes() {
        let state = typed("h");
        assert_eq!(state.query(), "h");
        // Hamilton (distance 8) ranks ahead of Hulkenberg (distance 10).
        assert_eq!(state.matches(), &[1, 3]);
        assert_eq!(state.current_match(), Some(1));
    }

    #[test]
    fn test_typing_resets_selection_index() {
        let mut state = typed("h");
        state.apply(esc(EscapeCode::ArrowDown), CANDIDATES);
        assert_eq!(state.selection_index(), 1);

        state.apply(ch('u'), CANDIDATES);
        assert_eq!(state.selection_index(), 0);
        assert_eq!(state.matches(), &[3]);
    }

    #[test_case(' ' ; "space")]
    #[test_case('\t' ; "tab char")]
    fn test_skipped_chars_are_not_added(skipped: char) {
        let mut state = typed("h");
        assert_eq!(state.apply(ch(skipped), CANDIDATES), Transition::Continue);
        assert_eq!(state.query(), "h");
    }

    #[test_case(EscapeCode::Backspace ; "backspace")]
    #[test_case(EscapeCode::Delete ; "delete")]
    fn test_erase_last_char(code: EscapeCode) {
        let mut state = typed("hu");
        assert_eq!(state.apply(esc(code), CANDIDATES), Transition::Continue);
        assert_eq!(state.query(), "h");
        assert_eq!(state.matches(), &[1, 3]);

        state.apply(esc(code), CANDIDATES);
        assert_eq!(state.query(), "");
        assert!(state.matches().is_empty());

        // Already empty.
        assert_eq!(state.apply(esc(code), CANDIDATES), Transition::Continue);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_arrow_up_floors_at_zero() {
        let mut state = typed("h");
        state.apply(esc(EscapeCode::ArrowUp), CANDIDATES);
        assert_eq!(state.selection_index(), 0);
    }

    #[test]
    fn test_arrow_down_is_clamped_only_at_render() {
        let mut state = typed("h");
        for _ in 0..5 {
            state.apply(esc(EscapeCode::ArrowDown), CANDIDATES);
        }
        assert_eq!(state.selection_index(), 5);
        assert_eq!(state.current_match(), Some(3));

        state.clamp_selection();
        assert_eq!(state.selection_index(), 1);

        // One step up from the clamped index.
        state.apply(esc(EscapeCode::ArrowUp), CANDIDATES);
        assert_eq!(state.current_match(), Some(1));
    }

    #[test_case(EscapeCode::CarriageReturn ; "enter")]
    #[test_case(EscapeCode::Tab ; "tab")]
    fn test_accept_selects_current_match(code: EscapeCode) {
        let mut state = typed("h");
        state.apply(esc(EscapeCode::ArrowDown), CANDIDATES);
        assert_eq!(state.apply(esc(code), CANDIDATES), Transition::Selected(3));
    }

    #[test]
    fn test_accept_with_empty_query_cancels() {
        let mut state = SelectionState::default();
        assert_eq!(
            state.apply(esc(EscapeCode::CarriageReturn), CANDIDATES),
            Transition::Cancelled
        );
    }

    #[test]
    fn test_accept_without_matches_cancels() {
        let mut state = typed("xy");
        assert!(state.matches().is_empty());
        assert_eq!(
            state.apply(esc(EscapeCode::CarriageReturn), CANDIDATES),
            Transition::Cancelled
        );
    }

    #[test_case(DecodedInput::NoInput ; "end of input")]
    #[test_case(esc(EscapeCode::Escape) ; "escape")]
    #[test_case(esc(EscapeCode::EndOfText) ; "ctrl c")]
    #[test_case(esc(EscapeCode::ArrowLeft) ; "arrow left")]
    #[test_case(esc(EscapeCode::ArrowRight) ; "arrow right")]
    #[test_case(esc(EscapeCode::LineFeed) ; "line feed")]
    fn test_cancel_clears_query(input: DecodedInput) {
        let mut state = typed("h");
        assert_eq!(state.apply(input, CANDIDATES), Transition::Cancelled);
        assert_eq!(state.query(), "");
        assert!(state.matches().is_empty());
    }

    #[test]
    fn test_unrecognized_input_is_ignored() {
        let mut state = typed("h");
        let before = state.clone();
        assert_eq!(
            state.apply(DecodedInput::Unrecognized, CANDIDATES),
            Transition::Continue
        );
        assert_eq!(state, before);
    }
}
