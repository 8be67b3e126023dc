use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading sources, computing ranks or writing output.
///
/// Every variant is fatal for a run. Conditions that only degrade a score
/// (no result, no baseline, a malformed row) are not errors.
#[derive(Error, Debug)]
pub enum KinchError {
    /// A ranks export or competitor list could not be opened
    #[error("Cannot open {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a source failed part way through
    #[error("Failed reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The directory the ranked table should be written to does not exist
    #[error("Output directory not found: {}", .0.display())]
    OutputDestinationInvalid(PathBuf),

    /// Writing the ranked table failed
    #[error("Failed writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown event code: {0}")]
    UnknownEvent(String),
}

pub type KinchResult<T> = Result<T, KinchError>;
