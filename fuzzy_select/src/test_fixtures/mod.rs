// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fakes for driving a selection without a real terminal. Used by the unit tests, the
//! integration tests in `tests/`, and available to callers that want to test their own
//! use of [`crate::select_with`].

// Attach sources.
pub mod fake_terminal_backend;
pub mod temp_dir;

// Re-export.
pub use fake_terminal_backend::*;
pub use temp_dir::*;
