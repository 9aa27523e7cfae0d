// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::StyleSheet;
use crate::{constants::NO_MATCH_ANNOTATION, fuzzy_match::chars_eq_ignore_case};

/// Paint `candidate` so the chars lining up with `query` stand out.
///
/// Greedy, left to right: a candidate char is "matched" when it case-insensitively equals
/// the next unconsumed query char, which then gets consumed. This highlights the first
/// subsequence occurrence of the query, which is not necessarily the alignment that
/// produced the ranking distance.
#[must_use]
pub fn render_highlighted(candidate: &str, query: &str, style_sheet: &StyleSheet) -> String {
    let query: Vec<char> = query.chars().collect();
    let mut query_cursor = 0;
    let mut acc = String::with_capacity(candidate.len() * 2);

    for ch in candidate.chars() {
        let style = match query.get(query_cursor) {
            Some(query_ch) if chars_eq_ignore_case(ch, *query_ch) => {
                query_cursor += 1;
                style_sheet.matched_style
            }
            _ => style_sheet.unmatched_style,
        };
        acc.push_str(&style.apply(ch).to_string());
    }

    acc
}

/// The query painted as an error, followed by the `(no match)` annotation.
#[must_use]
pub fn render_no_match(query: &str, style_sheet: &StyleSheet) -> String {
    format!(
        "{}{}",
        style_sheet.no_match_query_style.apply(query),
        style_sheet.no_match_annotation_style.apply(NO_MATCH_ANNOTATION)
    )
}
