//! Error type for OBJ conversion

use std::io;
use std::path::PathBuf;

/// Failure modes of a single conversion run.
///
/// None of these are recovered from locally; they propagate to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Input file is missing or could not be read.
    #[error("Failed to read input {path:?}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output file could not be created, written or flushed.
    #[error("Failed to write output {path:?}")]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Input path {path:?} has no file stem to name the output after")]
    InvalidInputName { path: PathBuf },
}
