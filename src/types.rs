//! Core identity types for the workspace model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// NodeId: stable identity of a workspace node.
///
/// The join key between the tree, the content store, and the session state.
/// Allocated by the tree, unique within a workspace, never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Reserved identity of the workspace root folder.
    pub const ROOT: NodeId = NodeId(0);

    pub(crate) const fn from_raw(raw: u64) -> Self {
        NodeId(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
