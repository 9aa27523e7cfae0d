// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod highlight_renderer;
pub mod style_sheet;

// Re-export.
pub use highlight_renderer::*;
pub use style_sheet::*;
