//! Document-specific error types.

use thiserror::Error;

use super::NodeId;

/// Errors that can occur while manipulating the document tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    /// The node handle does not belong to this document.
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    /// No element carries the requested identifier.
    #[error("Container not found: #{0}")]
    ContainerNotFound(String),

    /// The insertion would make a node its own ancestor.
    #[error("Cannot append {child} under {parent}: would create a cycle")]
    HierarchyRequest { parent: NodeId, child: NodeId },
}

impl DomError {
    /// Create a new "container not found" error.
    pub fn container_not_found(id: impl Into<String>) -> Self {
        Self::ContainerNotFound(id.into())
    }
}
