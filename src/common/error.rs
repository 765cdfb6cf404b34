//! Error types for framesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in framesim.
///
/// The simulator itself can only fail with [`Error::InvalidCapacity`]; the
/// other variants belong to the input and configuration layers around it.
#[derive(Debug, Error)]
pub enum Error {
    /// Frame capacity must be at least one frame.
    ///
    /// Raised before any reference is processed, so no partial trace exists.
    #[error("Invalid frame capacity {0}: at least 1 frame is required")]
    InvalidCapacity(usize),

    /// A token in a reference string is not an integer.
    #[error("Invalid page reference '{token}' at line {line}, column {column}")]
    InvalidReference {
        line: usize,
        column: usize,
        token: String,
    },

    /// Policy name did not match any known eviction policy.
    #[error("Unknown replacement policy '{0}' (expected fifo, lru or optimal)")]
    UnknownPolicy(String),

    /// I/O error while reading a reference file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
