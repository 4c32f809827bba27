// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! testrelay: stream filter turning verbose test-runner output into subunit
//!
//! Reads gocheck-style verbose runner output on stdin, forwards encoded
//! subunit records to stdout, and logs to stderr.

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use testrelay_cli::config::Config;
use testrelay_cli::pump::pump;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs must stay off stdout; that stream carries the protocol bytes.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(encoder = %config.encoder_program().display(), "starting testrelay");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let report = pump(&config, stdin.lock(), stdout.lock())?;

    if report.encoder_failures > 0 {
        warn!(
            failures = report.encoder_failures,
            "some events were lost to encoder failures"
        );
    }
    info!(
        events = report.summary.events(),
        dropped = report.summary.dropped,
        bytes = report.summary.bytes_forwarded,
        "stream finished"
    );

    if config.stats {
        let json = serde_json::to_string_pretty(&report.summary)
            .context("serializing stream summary")?;
        eprintln!("{json}");
    }

    Ok(())
}
