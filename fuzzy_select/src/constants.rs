// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI byte and sequence constants used by the selector.

/// ESC byte (27 in decimal, 0x1B in hex).
pub const ANSI_ESC: u8 = 0x1B;

/// Erase the entire line the cursor is on (`CSI 2 K`), then carriage return to column
/// zero.
pub const CLEAR_CURRENT_LINE: &str = "\x1b[2K\r";

/// Printed in front of the query on every render, and in front of the final choice.
pub const DEFAULT_PROMPT: &str = "> ";

/// Appended after an unmatched query.
pub const NO_MATCH_ANNOTATION: &str = " (no match)";

/// Environment variable that turns off colored output (<https://no-color.org>).
pub const NO_COLOR_ENV_VAR: &str = "NO_COLOR";
