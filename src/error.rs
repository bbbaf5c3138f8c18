#![forbid(unsafe_code)]

//! Error types for a stem generation run

use crate::config::ConfigError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run
///
/// Unreadable directories are not represented here: the walker recovers from
/// them locally.
#[derive(Debug, Error)]
pub enum StemError {
    /// A component source file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A test file could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The current working directory could not be determined
    #[error("failed to resolve working directory: {0}")]
    WorkingDir(#[source] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A built-in inference pattern failed to compile
    #[error("invalid export pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Writing to the console failed
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}
