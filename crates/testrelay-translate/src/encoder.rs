// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Event encoding via an external subunit writer
//!
//! The translator's "computation" is delegated to an external program that
//! emits subunit v2 records on its standard output. The [`EventEncoder`]
//! trait models that step as an injected capability so translation logic can
//! be tested without spawning processes; [`CommandEncoder`] is the production
//! implementation wrapping `subunit-output`.

use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;
use tracing::debug;

use crate::event::EventKind;

/// Program used when no encoder is configured
pub const DEFAULT_ENCODER_PROGRAM: &str = "subunit-output";

/// Errors from an encoder invocation
#[derive(Debug, Error)]
pub enum EncoderError {
    /// The encoder program could not be spawned
    #[error("failed to run encoder `{program}`: {source}")]
    Spawn {
        /// The program that could not be run
        program: String,
        /// Underlying spawn error
        source: std::io::Error,
    },

    /// The encoder ran but signalled failure
    #[error("encoder `{program}` exited with {status}: {stderr}")]
    Failed {
        /// The program that failed
        program: String,
        /// Exit status reported by the process
        status: std::process::ExitStatus,
        /// Captured standard error, for diagnosis
        stderr: String,
    },
}

/// A pluggable step turning one recognized event into protocol bytes
pub trait EventEncoder {
    /// Encode one event, returning the protocol payload to forward
    ///
    /// # Errors
    ///
    /// Returns [`EncoderError`] if the encoding step could not produce a
    /// payload; the caller must forward nothing in that case.
    fn encode(&self, kind: EventKind, test_name: &str) -> Result<Vec<u8>, EncoderError>;
}

impl<F> EventEncoder for F
where
    F: Fn(EventKind, &str) -> Result<Vec<u8>, EncoderError>,
{
    fn encode(&self, kind: EventKind, test_name: &str) -> Result<Vec<u8>, EncoderError> {
        self(kind, test_name)
    }
}

/// Encoder that invokes an external subunit writer once per event
///
/// The program is called with two positional arguments: the flag for the
/// event kind and the captured test identifier. Its standard output is the
/// protocol payload; spawn failure or a nonzero exit is an encoding failure.
/// The invocation blocks; timeouts are the supervisor's concern, not this
/// layer's.
#[derive(Debug, Clone)]
pub struct CommandEncoder {
    program: PathBuf,
}

impl CommandEncoder {
    /// Create an encoder invoking the given program
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The configured program path
    #[must_use]
    pub fn program(&self) -> &std::path::Path {
        &self.program
    }
}

impl Default for CommandEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_ENCODER_PROGRAM)
    }
}

impl EventEncoder for CommandEncoder {
    fn encode(&self, kind: EventKind, test_name: &str) -> Result<Vec<u8>, EncoderError> {
        let program = self.program.display().to_string();
        debug!(%kind, test_name, program, "invoking encoder");

        let output = Command::new(&self.program)
            .arg(kind.encoder_flag())
            .arg(test_name)
            .output()
            .map_err(|source| EncoderError::Spawn {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(EncoderError::Failed {
                program,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(output.stdout)
    }
}
