// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the testrelay filter
//!
//! This module provides the command-line surface of the `testrelay` binary:
//! which encoder program to invoke, what to do when an invocation fails, and
//! logging verbosity.

use std::path::PathBuf;

use clap::Parser;
use testrelay_translate::encoder::DEFAULT_ENCODER_PROGRAM;

/// testrelay - translate verbose test-runner output into a subunit stream
///
/// Reads runner output on stdin, writes protocol bytes to stdout. Logs go to
/// stderr so the protocol stream stays clean.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "testrelay")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Encoder program invoked once per recognized event
    ///
    /// Called with two positional arguments: the event flag (--exists,
    /// --success, --fail or --skip) and the test identifier. Its stdout is
    /// forwarded verbatim. Defaults to `subunit-output` on PATH.
    #[arg(short, long, env = "TESTRELAY_ENCODER")]
    pub encoder: Option<PathBuf>,

    /// Log encoder failures and keep translating instead of aborting
    #[arg(short, long, default_value = "false")]
    pub keep_going: bool,

    /// Print a JSON summary of the stream to stderr at end of input
    #[arg(short, long, default_value = "false")]
    pub stats: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs every recognized event. Logs are written to stderr to avoid
    /// interfering with the protocol stream on stdout.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Get the encoder program, using the default if not specified
    #[must_use]
    pub fn encoder_program(&self) -> PathBuf {
        self.encoder
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ENCODER_PROGRAM))
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}
