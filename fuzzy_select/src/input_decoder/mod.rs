// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Raw terminal bytes to keypresses. See [`decode_key_press`].

// Attach sources.
pub mod decode;
pub mod key_press;

// Re-export.
pub use decode::*;
pub use key_press::*;
