//! Error types for document operations.

/// Result type alias for document operations.
pub type DomResult<T> = std::result::Result<T, DomError>;

/// Errors that can occur while reading or editing a [`Document`](crate::Document).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The node ID is invalid or the node has been removed.
    #[error("Invalid or removed node ID")]
    InvalidNodeId,

    /// The operation requires an element node.
    #[error("Node is not an element")]
    NotAnElement,

    /// Attempted to insert a node into itself or one of its descendants.
    #[error("Cannot insert a node into itself or one of its descendants")]
    CircularParentage,

    /// The node is not a child of the given parent.
    #[error("Node is not a child of the given parent")]
    NotAChild,

    /// The document root cannot be moved, replaced or removed.
    #[error("The document root cannot be moved, replaced or removed")]
    RootImmutable,

    /// Insertion index past the end of the child list.
    #[error("Child index {index} out of bounds for {len} children")]
    IndexOutOfBounds { index: usize, len: usize },
}
