//! Error types
//!
//! A scan can only fail on I/O. End of input is not an error; it ends the scan
//! normally. Discovery and orchestration errors wrap the underlying failure with
//! the path that caused it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single scan. Output already written is left in place.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("I/O error during scan: {0}")]
    Io(#[from] io::Error),
}

/// Failure to list the source files of a project directory.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("invalid source pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("cannot read directory entry: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("cannot stat '{}': {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure while instrumenting one file of a project.
#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error("failed to instrument '{}': {source}", .file.display())]
    Scan {
        file: PathBuf,
        #[source]
        source: ScanError,
    },

    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
