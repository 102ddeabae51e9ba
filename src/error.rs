//! Error types for sequence operations

use thiserror::Error;

/// Error raised by a materializer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// `item_at_index` asked for a position the sequence never reaches
    #[error("index {index} is out of range for a sequence of {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type alias for sequence operations
pub type Result<T> = std::result::Result<T, SeqError>;
