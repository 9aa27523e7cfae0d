// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use fuzzy_select::{log::{TracingConfig, WriterConfig, try_initialize_logging_global},
                   pick::{CLIArg, PickResult, handle_pick_command},
                   set_mimalloc_in_main};
use std::process::ExitCode;

/// Nothing was chosen.
const EXIT_CANCELLED: u8 = 1;
/// The terminal or the candidate source could not be used.
const EXIT_FAILED: u8 = 2;

fn main() -> ExitCode {
    set_mimalloc_in_main!();

    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;

    should_log.then(|| {
        try_initialize_logging_global(TracingConfig {
            level_filter: tracing_core::LevelFilter::DEBUG,
            writer_config: WriterConfig::File(cli_arg.global_options.log_file.clone()),
        })
        .ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let exit_code = match handle_pick_command(cli_arg) {
        Ok(PickResult::Chosen(choice)) => {
            println!("{choice}");
            ExitCode::SUCCESS
        }
        Ok(PickResult::Cancelled) => ExitCode::from(EXIT_CANCELLED),
        Err(report) => {
            // % is Display, ? is Debug.
            tracing::error!(message = "pick failed", report = ?report);
            eprintln!("{report:?}");
            ExitCode::from(EXIT_FAILED)
        }
    };

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    exit_code
}
