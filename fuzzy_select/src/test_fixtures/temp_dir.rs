// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use std::{ops::Deref,
          path::PathBuf,
          sync::atomic::{AtomicUsize, Ordering},
          time::{SystemTime, UNIX_EPOCH}};

static NEXT_TEMP_DIR_ID: AtomicUsize = AtomicUsize::new(0);

/// A fresh directory under [`std::env::temp_dir`], deleted with everything in it when
/// dropped.
#[derive(Debug)]
pub struct TempDir {
    pub inner: PathBuf,
}

/// Create a [`TempDir`] whose name is unique to this process and call.
///
/// # Errors
///
/// Returns an error if the directory can't be created.
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos();
    let name = format!(
        "fuzzy_select_{}_{}_{nanos}",
        std::process::id(),
        NEXT_TEMP_DIR_ID.fetch_add(1, Ordering::Relaxed)
    );
    let new_temp_dir = std::env::temp_dir().join(name);
    std::fs::create_dir(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir {
        inner: new_temp_dir,
    })
}

impl Drop for TempDir {
    fn drop(&mut self) { std::fs::remove_dir_all(&self.inner).ok(); }
}

impl Deref for TempDir {
    type Target = PathBuf;

    fn deref(&self) -> &Self::Target { &self.inner }
}
