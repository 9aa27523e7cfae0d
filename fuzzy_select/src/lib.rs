// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # fuzzy_select
//!
//! Interactive autocomplete in the terminal. Give it a list of candidates, let the user
//! type a few letters, get back the one they picked.
//!
//! ```no_run
//! let teams = ["Ferrari", "McLaren", "Mercedes", "Red Bull Racing", "Williams"];
//! match fuzzy_select::select_from_list(&teams) {
//!     Some(team) => println!("picked {team}"),
//!     None => println!("cancelled"),
//! }
//! ```
//!
//! ## How it works
//!
//! 1. [`TerminalSession::acquire`] switches the terminal to raw mode, so every keypress
//!    arrives as soon as it is typed, without echo.
//! 2. Each read is decoded by [`decode_key_press`] into a [`KeyPress`]: one printable
//!    ASCII char, a control char, or an arrow key.
//! 3. [`SelectionState`] applies the key to the query. When the query changes,
//!    [`fuzzy_match_indices`] recomputes the matches: candidates whose first char is the
//!    query's first char and that contain the rest of the query as a case-insensitive
//!    subsequence, ranked by [`levenshtein_distance`] to the query.
//! 4. The selected match is drawn on a single line by [`render_highlighted`], matched
//!    chars standing out from the muted rest.
//! 5. Enter or Tab picks the selected match; Escape, Ctrl+C, or end of input cancels.
//!    Either way the terminal is restored before anything is returned.
//!
//! | Key            | Effect                                        |
//! | -------------- | --------------------------------------------- |
//! | printable char | append to the query (space and tab ignored)   |
//! | Backspace, Del | erase the last query char                     |
//! | Up, Down       | move through the matches                      |
//! | Enter, Tab     | pick the selected match                       |
//! | anything else  | clear the query and cancel                    |
//!
//! Multi-byte UTF-8 input is not decoded; such keypresses are ignored.
//!
//! ## Testing without a terminal
//!
//! [`select_with`] takes any [`TerminalBackend`].
//! [`test_fixtures::FakeTerminalBackend`] scripts the keypresses and records what the
//! session did to the terminal.
//!
//! ## Logging
//!
//! Silent by default. Call [`log::try_initialize_logging_global`] to send `tracing`
//! output to a file or stderr.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod constants;
pub mod fuzzy_match;
pub mod highlight;
pub mod input_decoder;
pub mod log;
pub mod memory_allocator;
pub mod pick;
pub mod select;
pub mod terminal_session;
pub mod test_fixtures;

// Re-export.
pub use fuzzy_match::*;
pub use highlight::*;
pub use input_decoder::*;
pub use select::*;
pub use terminal_session::*;
