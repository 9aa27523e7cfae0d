// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::{Color, ContentStyle};

/// Styles used to paint the single line the selector renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSheet {
    /// Candidate chars that line up with the query. Plain (terminal foreground) by
    /// default, so the muted unmatched chars make it stand out.
    pub matched_style: ContentStyle,
    /// Every other candidate char.
    pub unmatched_style: ContentStyle,
    /// The query, when nothing matches it.
    pub no_match_query_style: ContentStyle,
    /// The `(no match)` annotation after an unmatched query.
    pub no_match_annotation_style: ContentStyle,
}

impl Default for StyleSheet {
    fn default() -> Self {
        let matched_style = ContentStyle::default();
        let unmatched_style = ContentStyle {
            foreground_color: Some(Color::DarkGrey),
            ..ContentStyle::default()
        };
        let no_match_query_style = ContentStyle {
            foreground_color: Some(Color::Red),
            ..ContentStyle::default()
        };
        let no_match_annotation_style = ContentStyle {
            foreground_color: Some(Color::DarkGrey),
            ..ContentStyle::default()
        };
        StyleSheet {
            matched_style,
            unmatched_style,
            no_match_query_style,
            no_match_annotation_style,
        }
    }
}

impl StyleSheet {
    /// Every style is empty, so nothing but the text itself is written.
    #[must_use]
    pub fn no_color() -> Self {
        StyleSheet {
            matched_style: ContentStyle::default(),
            unmatched_style: ContentStyle::default(),
            no_match_query_style: ContentStyle::default(),
            no_match_annotation_style: ContentStyle::default(),
        }
    }

    /// [`StyleSheet::no_color`] when the `NO_COLOR` environment variable is set to a
    /// non-empty value, [`StyleSheet::default`] otherwise.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var_os(crate::constants::NO_COLOR_ENV_VAR) {
            Some(value) if !value.is_empty() => Self::no_color(),
            _ => Self::default(),
        }
    }
}
