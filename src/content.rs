//! Identity-keyed content store.
//!
//! Maps node ids to raw text content, independent of tree shape: editing
//! content never clones the tree, and tree mutations never copy text blobs.

use crate::types::NodeId;
use std::collections::HashMap;

/// Text content per file node, keyed by identity.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    contents: HashMap<NodeId, String>,
}

impl ContentStore {
    pub fn new() -> Self {
        ContentStore::default()
    }

    /// Current content for a node. Absent entries read as empty content,
    /// never as an error.
    pub fn get(&self, id: NodeId) -> &str {
        self.contents.get(&id).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.contents.contains_key(&id)
    }

    /// Replace the content for a node. Total; always succeeds.
    pub fn set(&mut self, id: NodeId, text: impl Into<String>) {
        self.contents.insert(id, text.into());
    }

    /// Drop the entry for a node. Idempotent; used during deletion cascades.
    pub fn remove(&mut self, id: NodeId) {
        self.contents.remove(&id);
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}
