//! Definition of the selection error and result.

use thiserror::Error;

/// The error returned when a selection request cannot be served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// `k` has to count at least one and at most `len` elements.
    #[error("k = {k} is outside of the valid range [1, {len}]")]
    OutOfRange {
        /// The requested number of elements.
        k: usize,
        /// The length of the collection.
        len: usize,
    },
}

/// Result type of the selection entry points.
pub type Result<T> = std::result::Result<T, SelectError>;
