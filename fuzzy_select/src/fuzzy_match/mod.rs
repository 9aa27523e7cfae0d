// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Query to ranked candidates: subsequence filter, then Levenshtein ranking.

// Attach sources.
pub mod levenshtein;
pub mod match_engine;
pub mod subsequence_pattern;

// Re-export.
pub use levenshtein::*;
pub use match_engine::*;
pub use subsequence_pattern::*;
