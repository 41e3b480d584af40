//! Error types for workspace operations.
//!
//! Every mutation returns a typed failure for expected conditions; nothing
//! here is process-fatal, and failed operations leave prior state intact.

use crate::types::NodeId;
use thiserror::Error;

/// Failures of tree mutation operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The parent id does not resolve to a folder in the current tree.
    #[error("parent folder not found: {0}")]
    ParentNotFound(NodeId),

    /// The referenced id does not resolve in the current tree.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    /// A sibling with the same name already exists at the target location.
    #[error("\"{0}\" already exists at this level")]
    NameCollision(String),

    /// The workspace root can never be deleted.
    #[error("the workspace root cannot be deleted")]
    CannotDeleteRoot,

    /// The move target is not a folder, is the dragged node itself, or the
    /// dragged node is the workspace root.
    #[error("invalid move target")]
    InvalidTarget,

    /// The move target lies inside the subtree being moved.
    #[error("cannot move a folder into its own subtree")]
    SelfDescendantMove,
}

/// Failures surfaced by the orchestration layer.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// Opaque failure of an external transport collaborator. The local model
    /// stays intact and the operation may be retried.
    #[error("transport failure: {0}")]
    Transport(anyhow::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
