// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Raw-mode ownership of the terminal. [`TerminalSession`] is the guard,
//! [`TerminalBackend`] is the seam between it and the actual device.

// Attach sources.
#[cfg(unix)]
pub mod rustix_backend;
pub mod session;
pub mod session_error;
pub mod terminal_backend;

// Re-export.
#[cfg(unix)]
pub use rustix_backend::*;
pub use session::*;
pub use session_error::*;
pub use terminal_backend::*;
