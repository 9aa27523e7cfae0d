// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};
use std::path::PathBuf;

use crate::log::DEFAULT_LOG_FILE_NAME;

#[derive(Debug, Parser)]
#[command(bin_name = "pick")]
#[command(
    about = "Type a few letters, get the closest match, press Enter.\nThe choice is printed to stdout; exits with 1 if nothing was chosen."
)]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nCandidates come from the arguments, from --file (one per line), or from piped stdin.\nUSAGE:\n  pick [\x1b[32mcandidates\x1b[0m] [\x1b[34moptions\x1b[0m]\n  ls | pick\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(name = "candidates")]
    pub candidates: Vec<String>,

    #[arg(
        long,
        short = 'f',
        help = "Read candidates from this file, one per line."
    )]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        help = "Don't color the matched and unmatched characters. Also on when NO_COLOR is set."
    )]
    pub no_color: bool,

    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log debug output to a file for debugging."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        default_value = DEFAULT_LOG_FILE_NAME,
        help = "Log file used with --enable-logging."
    )]
    pub log_file: String,
}
