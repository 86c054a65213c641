//! Error types for the bitgen library.

use thiserror::Error;

/// Errors produced by the frequency test and its options file.
#[derive(Debug, Error)]
pub enum Error {
    /// A character other than `'0'` or `'1'` appeared in a bit sequence.
    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit { position: usize, found: char },
    /// The bit sequence was empty after trimming whitespace.
    #[error("bit sequence is empty")]
    EmptySequence,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed options file: {0}")]
    Options(#[from] serde_json::Error),
}
