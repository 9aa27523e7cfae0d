// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The `pick` command line tool: pick one line from arguments, a file, or stdin.

// Attach sources.
pub mod clap_config;
pub mod pick_command;

// Re-export.
pub use clap_config::*;
pub use pick_command::*;
