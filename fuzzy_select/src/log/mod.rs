// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Opt-in logging via `tracing`. Nothing is logged until
//! [`try_initialize_logging_global`] is called with an enabled [`TracingConfig`].

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
