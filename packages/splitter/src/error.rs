//! Error types for the splitter.
//!
//! Every failure is fatal to the run: there is no retry and no cleanup of
//! parts that were already written.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// Reading the input document failed (missing file, not UTF-8, ...).
    #[error("Failed to read input {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a part file failed.
    #[error("Failed to write {}: {source}", .path.display())]
    WritePart {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output directory does not exist.
    #[error("Output directory does not exist: {}", .0.display())]
    OutputDirMissing(PathBuf),

    /// Output path exists but is not a directory.
    #[error("Output path is not a directory: {}", .0.display())]
    OutputNotDirectory(PathBuf),
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;
