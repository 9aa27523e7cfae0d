// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{SubsequencePattern, levenshtein_distance};

/// Positions (into `candidates`) of every candidate matching `query`, closest first.
///
/// 1. Filter with the [`SubsequencePattern`] built from `query`.
/// 2. Rank by [`levenshtein_distance`] to the literal `query` (skipped chars included).
///    The sort is stable, so candidates at the same distance keep their input order.
#[must_use]
pub fn fuzzy_match_indices<S: AsRef<str>>(candidates: &[S], query: &str) -> Vec<usize> {
    let pattern = SubsequencePattern::new(query);

    let mut indices: Vec<usize> = candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| pattern.matches(candidate.as_ref()))
        .map(|(index, _)| index)
        .collect();

    indices.sort_by_cached_key(|index| {
        levenshtein_distance(query, candidates[*index].as_ref())
    });

    indices
}

/// Same as [`fuzzy_match_indices`] but returns the matching candidates themselves.
#[must_use]
pub fn fuzzy_match<'a, S: AsRef<str>>(candidates: &'a [S], query: &str) -> Vec<&'a str> {
    fuzzy_match_indices(candidates, query)
        .into_iter()
        .map(|index| candidates[index].as_ref())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy_match::chars_eq_ignore_case;
    use pretty_assertions::assert_eq;

    const DRIVERS: &[&str] = &[
        "Leclerc",
        "Hamilton",
        "Norris",
        "Sainz",
        "Russell",
        "Verstappen",
        "Perez",
        "Alonso",
        "Stroll",
        "Ocon",
        "Gasly",
        "Albon",
        "Sargeant",
        "Hulkenberg",
        "Magnussen",
        "Bottas",
        "Zhou",
        "Tsunoda",
        "Ricciardo",
        "Piastri",
    ];

    fn is_case_insensitive_subsequence(query: &str, candidate: &str) -> bool {
        let mut candidate_chars = candidate.chars();
        query
            .chars()
            .all(|q| candidate_chars.any(|c| chars_eq_ignore_case(c, q)))
    }

    #[test]
    fn test_scenario_lc() {
        let candidates = ["Leclerc", "Hamilton", "Norris"];
        assert_eq!(fuzzy_match(&candidates, "lc"), vec!["Leclerc"]);
    }

    #[test]
    fn test_scenario_no_match() {
        let candidates = ["Leclerc", "Hamilton"];
        assert!(fuzzy_match(&candidates, "xy").is_empty());
    }

    #[test]
    fn test_empty_candidates() {
        let candidates: [&str; 0] = [];
        assert!(fuzzy_match(&candidates, "a").is_empty());
        assert!(fuzzy_match(&candidates, "").is_empty());
    }

    #[test]
    fn test_works_with_owned_strings() {
        let candidates = vec!["Leclerc".to_string(), "Hamilton".to_string()];
        assert_eq!(fuzzy_match(&candidates, "HAM"), vec!["Hamilton"]);
        assert_eq!(fuzzy_match_indices(&candidates, "HAM"), vec![1]);
    }

    #[test]
    fn test_every_match_contains_query_as_subsequence() {
        for query in ["a", "s", "sa", "sr", "ro", "AL", "pe", "ho", "zz", "tsu"] {
            for candidate in fuzzy_match(DRIVERS, query) {
                assert!(
                    is_case_insensitive_subsequence(query, candidate),
                    "{candidate:?} does not contain {query:?}"
                );
            }
        }
    }

    #[test]
    fn test_ranked_by_edit_distance() {
        let candidates = ["Stroll", "Sainz", "Sargeant"];
        // Distance is case-sensitive: "s" vs "Sainz" is 5, vs "Stroll" 6, vs "Sargeant" 8.
        assert_eq!(fuzzy_match(&candidates, "s"), vec!["Sainz", "Stroll", "Sargeant"]);
        // "Stroll" has no `a`.
        assert_eq!(fuzzy_match(&candidates, "sa"), vec!["Sainz", "Sargeant"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        // All three are at distance 2 from "ab".
        let candidates = ["abxy", "aZbq", "abyx"];
        assert_eq!(fuzzy_match(&candidates, "ab"), vec!["abxy", "aZbq", "abyx"]);

        let reversed = ["abyx", "aZbq", "abxy"];
        assert_eq!(fuzzy_match(&reversed, "ab"), vec!["abyx", "aZbq", "abxy"]);
    }

    #[test]
    fn test_exact_match_ranks_first() {
        let candidates = ["Alonsoo", "Alonso", "Albon"];
        assert_eq!(fuzzy_match(&candidates, "Alonso")[0], "Alonso");
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let candidates = ["axb", "a.b"];
        assert_eq!(fuzzy_match(&candidates, "a.b"), vec!["a.b"]);
        assert!(fuzzy_match(&candidates, "(").is_empty());
        assert!(fuzzy_match(&candidates, "*").is_empty());
    }

    #[test]
    fn test_skipped_chars_match_everything() {
        let candidates = ["Leclerc", "Hamilton"];
        assert_eq!(fuzzy_match(&candidates, " ").len(), 2);
    }
}
