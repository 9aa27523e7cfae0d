// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// A file appender that never rolls over, writing to exactly `path_str`.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no parent directory
/// - The path has no file name
/// - The file can't be created or opened
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access the folder of log file {}. It might not exist.",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!("Log file path {} has no file name.", path.display())
    })?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .map_err(|e| miette::miette!("Can't create log file {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::try_create_temp_dir;

    #[test]
    fn test_creates_file_with_exact_name() {
        let temp_dir = try_create_temp_dir().unwrap();
        let file_path = temp_dir.join("exact_name.log");

        try_create(file_path.to_str().unwrap()).unwrap();
        assert!(file_path.exists());
    }

    #[test]
    fn test_path_without_file_name_is_rejected() {
        assert!(try_create("/").is_err());
        assert!(try_create("logs/..").is_err());
    }
}
