// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::CLIArg;
use crate::{highlight::StyleSheet,
            select::{SelectOptions, try_select_index_with_options}};
use miette::IntoDiagnostic;
use std::{fs,
          io::{self, BufRead, IsTerminal}};

/// How a `pick` run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickResult {
    Chosen(String),
    Cancelled,
}

/// Collect the candidates, run the selector, and report the outcome. The caller prints
/// the choice and turns the outcome into an exit code.
///
/// # Errors
///
/// Returns an error if the candidate file or piped stdin can't be read, or the terminal
/// can't be used.
pub fn handle_pick_command(cli_arg: CLIArg) -> miette::Result<PickResult> {
    let stdin = io::stdin();
    let piped = (!stdin.is_terminal()).then(|| stdin.lock());
    let candidates = read_candidates(cli_arg.candidates, cli_arg.file.as_deref(), piped)?;

    tracing::debug!(message = "Candidates collected", count = candidates.len());
    if candidates.is_empty() {
        tracing::warn!(message = "No candidates; every query will show no match");
    }

    let style_sheet = if cli_arg.global_options.no_color {
        StyleSheet::no_color()
    } else {
        StyleSheet::from_env()
    };
    let options = SelectOptions {
        style_sheet,
        echo_choice: false,
    };

    let chosen = try_select_index_with_options(&candidates, &options)?;
    Ok(match chosen.and_then(|index| candidates.into_iter().nth(index)) {
        Some(choice) => PickResult::Chosen(choice),
        None => PickResult::Cancelled,
    })
}

/// Arguments first, then the file, then piped stdin. Blank lines are skipped and a
/// trailing `\r` is dropped.
///
/// # Errors
///
/// Returns an error if the file or stdin can't be read.
pub fn read_candidates(
    args: Vec<String>,
    file: Option<&std::path::Path>,
    piped: Option<impl BufRead>,
) -> miette::Result<Vec<String>> {
    let mut candidates = args;

    if let Some(path) = file {
        let text = fs::read_to_string(path).into_diagnostic()?;
        candidates.extend(text.lines().filter_map(parse_candidate_line));
    }

    if let Some(reader) = piped {
        for line in reader.lines() {
            let line = line.into_diagnostic()?;
            candidates.extend(parse_candidate_line(&line));
        }
    }

    Ok(candidates)
}

fn parse_candidate_line(line: &str) -> Option<String> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    (!line.trim().is_empty()).then(|| line.to_string())
}
