// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The interactive part: [`SelectionState`] is the state machine,
//! [`run_selection_loop`] drives it against a terminal session, and
//! [`select_from_list`] is the entry point most callers want.

// Attach sources.
pub mod public_api;
pub mod selection_loop;
pub mod selection_state;

// Re-export.
pub use public_api::*;
pub use selection_loop::*;
pub use selection_state::*;
