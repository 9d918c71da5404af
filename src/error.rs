//! Error types shared by every part of the maze core.

use thiserror::Error;

/// Failures the maze core can report.
///
/// An unreachable goal is not part of this enumeration: searches report it with an empty path
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// A removal was attempted on a collection with no elements left.
    #[error("cannot {operation} on an empty collection")]
    EmptyCollection {
        /// Name of the removal that was attempted.
        operation: &'static str,
    },
    /// A required reference was missing or did not point at a live element.
    ///
    /// This covers deque links that would be left dangling as well as cell identifiers that do
    /// not belong to the maze they were passed with.
    #[error("missing or dangling {argument}")]
    NullArgument {
        /// Description of the argument that was missing.
        argument: &'static str,
    },
    /// The requested grid has no cells or too many of them to address.
    #[error("invalid maze dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested number of columns.
        width: usize,
        /// Requested number of rows.
        height: usize,
    },
}
