// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// `mimalloc` is a replacement for the default global allocator. Call this once, at the
/// top of `main()` of a binary.
/// - <https://crates.io/crates/mimalloc>
#[macro_export]
macro_rules! set_mimalloc_in_main {
    () => {{
        use mimalloc::MiMalloc;

        #[global_allocator]
        static GLOBAL: MiMalloc = MiMalloc;
    }};
}
