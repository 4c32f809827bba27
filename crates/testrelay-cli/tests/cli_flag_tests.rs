// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! CLI tests for the testrelay flags
//!
//! These tests verify flag parsing and interactions without running the
//! translation loop.

use clap::Parser;
use testrelay_cli::config::Config;
use tracing::Level;

// ============================================================================
// --encoder flag tests
// ============================================================================

#[test]
fn test_encoder_long_flag() {
    let config = Config::try_parse_from(["testrelay", "--encoder", "/opt/bin/subunit-output"])
        .expect("parse should succeed");
    assert_eq!(
        config.encoder_program(),
        std::path::PathBuf::from("/opt/bin/subunit-output")
    );
}

#[test]
fn test_encoder_defaults_to_subunit_output() {
    let config = Config::try_parse_from(["testrelay"]).expect("parse should succeed");
    assert_eq!(
        config.encoder_program(),
        std::path::PathBuf::from("subunit-output")
    );
}

// ============================================================================
// --verbose / --quiet flag tests
// ============================================================================

#[test]
fn test_verbose_short_flag_v() {
    let config = Config::try_parse_from(["testrelay", "-v"]).expect("parse should succeed");
    assert!(config.verbose);
    assert!(!config.quiet);
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_quiet_long_flag() {
    let config = Config::try_parse_from(["testrelay", "--quiet"]).expect("parse should succeed");
    assert!(config.quiet);
    assert_eq!(config.log_level(), Level::WARN);
}

#[test]
fn test_boolean_flag_value_syntax_not_supported() {
    // Boolean flags with default_value="false" are toggled by presence only
    let result = Config::try_parse_from(["testrelay", "--verbose=true"]);
    assert!(result.is_err(), "Boolean flags don't support =value syntax");
}

// ============================================================================
// --keep-going / --stats flag tests
// ============================================================================

#[test]
fn test_keep_going_flag() {
    let config =
        Config::try_parse_from(["testrelay", "--keep-going"]).expect("parse should succeed");
    assert!(config.keep_going);
}

#[test]
fn test_stats_flag() {
    let config = Config::try_parse_from(["testrelay", "--stats"]).expect("parse should succeed");
    assert!(config.stats);
}

#[test]
fn test_flags_combine() {
    let config = Config::try_parse_from(["testrelay", "-k", "-s", "-q"])
        .expect("parse should succeed");
    assert!(config.keep_going);
    assert!(config.stats);
    assert!(config.quiet);
}

#[test]
fn test_unknown_flag_rejected() {
    let result = Config::try_parse_from(["testrelay", "--no-such-flag"]);
    assert!(result.is_err());
}
