// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Classic Levenshtein edit distance between `a` and `b`, counted in `char`s.
///
/// Unit cost for insert, delete, and substitute. Fills the whole
/// `(len(a) + 1) x (len(b) + 1)` table, where `distances[i][j]` is the distance between
/// the first `i` chars of `a` and the first `j` chars of `b`.
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut distances = vec![vec![0_usize; b.len() + 1]; a.len() + 1];

    // Transforming a prefix into the empty string (and back) takes one edit per char.
    for (i, row) in distances.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in distances[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            distances[i][j] = if a[i - 1] == b[j - 1] {
                distances[i - 1][j - 1]
            } else {
                let deletion = distances[i - 1][j];
                let insertion = distances[i][j - 1];
                let substitution = distances[i - 1][j - 1];
                deletion.min(insertion).min(substitution) + 1
            };
        }
    }

    distances[a.len()][b.len()]
}
