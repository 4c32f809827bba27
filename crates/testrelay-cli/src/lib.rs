// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! testrelay-cli library
//!
//! This module exports the core functionality of the testrelay binary for
//! use in integration tests and as a library.

pub mod config;
pub mod pump;
