use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the shipfitter library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Parts file could not be located at the given path.
    #[error("parts file '{path}' does not exist")]
    PartsFileNotFound { path: PathBuf },

    /// Parts file exists but could not be opened for reading.
    #[error("parts file '{path}' could not be opened: {source}")]
    PartsFileUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Wrapper for IO errors raised after the file was opened.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
