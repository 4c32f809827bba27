// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for testrelay-translate

use thiserror::Error;

use crate::encoder::EncoderError;

/// Errors that can occur while translating a chunk
///
/// A chunk that matches no pattern is not an error; it is silently dropped.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The external encoder could not produce a payload
    #[error("encoder invocation failed: {0}")]
    Encoder(#[from] EncoderError),

    /// The downstream sink rejected the encoded payload
    #[error("downstream write failed: {0}")]
    Sink(std::io::Error),
}
