//! Global error handling for repodump
//!
//! Only fatal conditions surface here: an invalid root directory, an
//! unwritable output location, or a failed write to the output stream.
//! Recoverable conditions (unreadable directories, binary files) are
//! reported inline in the output itself and never become `Err`.

use std::io;
use thiserror::Error;

/// Global error type for repodump operations
#[derive(Error, Debug)]
pub enum Error {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Specialized Result type for repodump operations
pub type Result<T> = std::result::Result<T, Error>;

// Allow converting Error to io::Error for interoperability with tests
impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(e) => e,
            other => io::Error::new(io::ErrorKind::Other, other.to_string()),
        }
    }
}
