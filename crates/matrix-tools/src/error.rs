//! Error types for tree operations.

use thiserror::Error;

/// Errors that can occur while walking or rebuilding a tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// An operation that requires a container root (merge, dimensionality
    /// check) was given a scalar.
    #[error("{op} requires a container root, got a scalar")]
    NotAContainer { op: &'static str },

    /// Traversal descended past the recursion ceiling. Raised instead of
    /// overflowing the stack on pathologically deep input.
    #[error("recursion depth limit of {limit} exceeded")]
    DepthExceeded { limit: usize },
}

/// Convenience alias used throughout matrix-tools.
pub type Result<T> = std::result::Result<T, TreeError>;
