// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;
use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "fuzzy_select.log";

/// Where log output goes. Stdout is not an option: it carries the selector UI, and log
/// lines there would corrupt it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WriterConfig {
    #[default]
    None,
    Stderr,
    File(String),
    StderrAndFile(String),
}

/// Configure the tracing subscriber installed by
/// [`super::try_initialize_logging_global`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::OFF,
            writer_config: WriterConfig::None,
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    /// Nothing would be logged with this config.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.level_filter == LevelFilter::OFF || self.writer_config == WriterConfig::None
    }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self { LevelFilter::from_level(level).into() }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

impl Add<TracingConfig> for TracingConfig {
    type Output = Self;

    /// The more verbose level wins; writers are combined.
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

impl Add<WriterConfig> for WriterConfig {
    type Output = Self;

    /// Stderr is kept if either side has it. For the file, `rhs` wins.
    fn add(self, rhs: WriterConfig) -> Self::Output {
        use WriterConfig::{File, None, Stderr, StderrAndFile};

        match (self, rhs) {
            (None, it) | (it, None) => it,
            (Stderr, Stderr) => Stderr,
            (Stderr | StderrAndFile(_), File(file))
            | (File(file) | StderrAndFile(file), Stderr)
            | (_, StderrAndFile(file)) => StderrAndFile(file),
            (File(_), File(file)) => File(file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn file(name: &str) -> WriterConfig { WriterConfig::File(name.to_string()) }

    fn both(name: &str) -> WriterConfig { WriterConfig::StderrAndFile(name.to_string()) }

    #[test_case(WriterConfig::None, WriterConfig::None, WriterConfig::None ; "none none")]
    #[test_case(WriterConfig::Stderr, WriterConfig::None, WriterConfig::Stderr ; "stderr none")]
    #[test_case(WriterConfig::None, file("a"), file("a") ; "none file")]
    #[test_case(WriterConfig::Stderr, file("a"), both("a") ; "stderr file")]
    #[test_case(file("a"), WriterConfig::Stderr, both("a") ; "file stderr")]
    #[test_case(file("a"), file("b"), file("b") ; "file file rhs wins")]
    #[test_case(both("a"), file("b"), both("b") ; "both file")]
    #[test_case(both("a"), WriterConfig::Stderr, both("a") ; "both stderr")]
    #[test_case(file("a"), both("b"), both("b") ; "file both")]
    #[test_case(WriterConfig::Stderr, WriterConfig::Stderr, WriterConfig::Stderr ; "stderr stderr")]
    fn test_add_writer_configs(lhs: WriterConfig, rhs: WriterConfig, expected: WriterConfig) {
        assert_eq!(lhs + rhs, expected);
    }

    #[test]
    fn test_add_tracing_configs_keeps_most_verbose_level() {
        let lhs = TracingConfig::from(LevelFilter::INFO);
        let rhs = TracingConfig {
            level_filter: LevelFilter::TRACE,
            writer_config: WriterConfig::Stderr,
        };
        assert_eq!(
            lhs + rhs,
            TracingConfig {
                level_filter: LevelFilter::TRACE,
                writer_config: both(DEFAULT_LOG_FILE_NAME),
            }
        );
    }

    #[test]
    fn test_default_is_disabled() {
        assert!(TracingConfig::default().is_disabled());
        assert!(!TracingConfig::from(tracing::Level::WARN).is_disabled());
        assert!(TracingConfig::from(WriterConfig::None).is_disabled());
    }
}
