//! Error types for tensor-rs

use thiserror::Error;

/// Result type alias using [`TensorError`].
pub type TensorResult<T> = std::result::Result<T, TensorError>;

/// Errors surfaced at the boundary of every fallible tensor operation.
#[derive(Error, Debug)]
pub enum TensorError {
    /// Element-wise operation on tensors of different shapes
    #[error("Shape mismatch in '{op}': {lhs:?} vs {rhs:?}")]
    ShapeMismatch {
        /// Operation name
        op: &'static str,
        /// Left-hand side shape
        lhs: Vec<usize>,
        /// Right-hand side shape
        rhs: Vec<usize>,
    },

    /// Coordinate count differs from the tensor's rank
    #[error("Expected {expected} coordinates, got {got}")]
    RankMismatch {
        /// Rank of the tensor
        expected: usize,
        /// Number of coordinates supplied
        got: usize,
    },

    /// A coordinate is past the end of its dimension
    #[error("Index {index} out of range for axis {axis} of size {size}")]
    IndexOutOfRange {
        /// Axis the coordinate belongs to
        axis: usize,
        /// The invalid coordinate
        index: usize,
        /// Size of that axis
        size: usize,
    },

    /// Nested literal is not a dense rectangular structure
    #[error("Malformed literal at depth {depth}: {reason}")]
    MalformedLiteral {
        /// Nesting depth where the problem was found (0 is outermost)
        depth: usize,
        /// What was wrong
        reason: String,
    },

    /// Flat buffer length does not match the shape's element count
    #[error("Data length mismatch: shape needs {expected} elements, got {got}")]
    DataLengthMismatch {
        /// Elements implied by the shape
        expected: usize,
        /// Elements supplied
        got: usize,
    },

    /// Element count of the shape does not fit in `usize`
    #[error("Element count of shape {shape:?} overflows usize")]
    SizeOverflow {
        /// The offending shape
        shape: Vec<usize>,
    },

    /// ndarray rejected a shape/buffer pairing
    #[error("Layout error: {0}")]
    Layout(#[from] ndarray::ShapeError),
}
