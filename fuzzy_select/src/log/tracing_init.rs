// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{TracingConfig, WriterConfig, rolling_file_appender_impl};
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Install a global subscriber for `options`. Does nothing if the config is
/// [disabled](TracingConfig::is_disabled), which is the default: the selector is
/// silent unless asked otherwise.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber is already
/// installed.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let tracing_config: TracingConfig = options.into();
    if tracing_config.is_disabled() {
        return Ok(());
    }

    let layers = try_create_layers(&tracing_config)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| miette::miette!("Could not install the tracing subscriber: {e}"))
}

/// Same as [`try_initialize_logging_global`], scoped to the current thread until the
/// returned guard is dropped. Returns [`None`] if the config is disabled.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let tracing_config: TracingConfig = options.into();
    if tracing_config.is_disabled() {
        return Ok(None);
    }

    let layers = try_create_layers(&tracing_config)?;
    Ok(Some(tracing_subscriber::registry().with(layers).set_default()))
}

/// One `fmt` layer per writer in the config, each filtered to the config's level.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let level_filter = tracing_config.get_level_filter();
    let mut layers: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    match tracing_config.get_writer_config() {
        WriterConfig::None => {}
        WriterConfig::Stderr => layers.push(create_stderr_layer(level_filter)),
        WriterConfig::File(path) => layers.push(try_create_file_layer(&path, level_filter)?),
        WriterConfig::StderrAndFile(path) => {
            layers.push(create_stderr_layer(level_filter));
            layers.push(try_create_file_layer(&path, level_filter)?);
        }
    }

    Ok(layers)
}

fn create_stderr_layer<S>(level_filter: LevelFilter) -> Box<DynLayer<S>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    Box::new(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(level_filter),
    )
}

fn try_create_file_layer<S>(
    path: &str,
    level_filter: LevelFilter,
) -> miette::Result<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let file = rolling_file_appender_impl::try_create(path)?;
    Ok(Box::new(
        tracing_subscriber::fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_filter(level_filter),
    ))
}
