// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Query characters that never narrow a match. They are not added to the query while
/// typing, and are dropped when a pattern is built.
pub const SKIPPED_QUERY_CHARS: [char; 2] = [' ', '\t'];

#[must_use]
pub fn is_skipped_query_char(ch: char) -> bool { SKIPPED_QUERY_CHARS.contains(&ch) }

#[must_use]
pub fn chars_eq_ignore_case(lhs: char, rhs: char) -> bool {
    lhs == rhs || lhs.to_lowercase().eq(rhs.to_lowercase())
}

/// Case-insensitive, start-anchored subsequence pattern built from a query.
///
/// The query `"lc"` behaves like the regular expression `^l.*c.*$` (case-insensitive):
/// - The candidate's first char has to be the first required char.
/// - Required chars appear in order, with anything in between.
/// - Anything may follow the last required char.
///
/// The test is done char by char, so query chars like `.` `*` `(` are always literal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubsequencePattern {
    required_chars: Vec<char>,
}

impl SubsequencePattern {
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            required_chars: query
                .chars()
                .filter(|ch| !is_skipped_query_char(*ch))
                .collect(),
        }
    }

    /// An empty pattern (query was empty or only skipped chars) matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.required_chars.is_empty() }

    #[must_use]
    pub fn required_chars(&self) -> &[char] { &self.required_chars }

    /// `true` if the whole `candidate` satisfies this pattern.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        let Some((first_required, rest_required)) = self.required_chars.split_first()
        else {
            return true;
        };

        let mut candidate_chars = candidate.chars();

        match candidate_chars.next() {
            Some(ch) if chars_eq_ignore_case(ch, *first_required) => {}
            _ => return false,
        }

        rest_required.iter().all(|required| {
            candidate_chars
                .by_ref()
                .any(|ch| chars_eq_ignore_case(ch, *required))
        })
    }
}
