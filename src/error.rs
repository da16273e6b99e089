//! Error types for LZW sessions.

use thiserror::Error;

use crate::dictionary::Code;

/// Error variants for LZW operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A code could neither be resolved in the dictionary nor reconstructed
    /// as the entry the encoder has just inserted.
    #[error("malformed code stream: code {code} at position {position} cannot be resolved")]
    MalformedStream {
        /// The offending code.
        code: Code,
        /// Index of the code within the session's code stream.
        position: u64,
    },

    /// A framed code stream ended in the middle of a code.
    #[error("truncated code stream: {len} bytes is not a multiple of the code width")]
    TruncatedCode {
        /// Number of bytes in the framed input.
        len: u64,
    },

    /// The session was closed, explicitly or after a malformed stream.
    #[error("session is closed")]
    SessionClosed,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An I/O error occurred while reading input or writing output.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for LZW operations.
pub type Result<T> = std::result::Result<T, Error>;
