//! Open-tab session state.
//!
//! Tracks which files are open as editor tabs and which one is active,
//! independently of the tree. Tab entries carry denormalized name/path
//! snapshots so the rendering layer never walks the tree per frame; the
//! reconcile operations refresh those snapshots after structural mutations.

use crate::tree::{FileNode, FileTree};
use crate::types::NodeId;

/// Denormalized snapshot of an open editor tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenFile {
    pub id: NodeId,
    pub name: String,
    pub path: String,
    pub language: String,
}

impl From<&FileNode> for OpenFile {
    fn from(file: &FileNode) -> Self {
        OpenFile {
            id: file.id,
            name: file.name.clone(),
            path: file.path.clone(),
            language: file.language.clone(),
        }
    }
}

/// Ordered open-tab list plus the active tab, if any.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    open: Vec<OpenFile>,
    active: Option<NodeId>,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState::default()
    }

    /// Open a file tab. Appends only if not already open; always activates.
    pub fn open_file(&mut self, file: &FileNode) {
        if !self.open.iter().any(|tab| tab.id == file.id) {
            self.open.push(OpenFile::from(file));
        }
        self.active = Some(file.id);
    }

    /// Close a tab. If it was active, activation falls to the most recently
    /// opened remaining tab, or to none. No-op for ids not currently open.
    pub fn close_file(&mut self, id: NodeId) {
        self.open.retain(|tab| tab.id != id);
        if self.active == Some(id) {
            self.active = self.open.last().map(|tab| tab.id);
        }
    }

    /// Refresh name/path snapshots from the post-move tree so tab labels
    /// stay correct. Read-only projection of the tree.
    pub fn reconcile_after_move(&mut self, tree: &FileTree) {
        for tab in &mut self.open {
            if let Some(node) = tree.get(tab.id) {
                tab.name = node.name().to_string();
                tab.path = node.path().to_string();
            }
        }
    }

    /// Close every tab whose id was removed, applying the same active-tab
    /// fallback rule as `close_file` once.
    pub fn reconcile_after_delete(&mut self, removed: &[NodeId]) {
        let was_active = self.active.is_some_and(|id| removed.contains(&id));
        self.open.retain(|tab| !removed.contains(&tab.id));
        if was_active {
            self.active = self.open.last().map(|tab| tab.id);
        }
    }

    /// Open tabs in opening order.
    pub fn open_files(&self) -> &[OpenFile] {
        &self.open
    }

    pub fn is_open(&self, id: NodeId) -> bool {
        self.open.iter().any(|tab| tab.id == id)
    }

    pub fn active_id(&self) -> Option<NodeId> {
        self.active
    }

    pub fn active_file(&self) -> Option<&OpenFile> {
        self.active
            .and_then(|id| self.open.iter().find(|tab| tab.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeKind;

    fn tree_with_files() -> (FileTree, NodeId, NodeId) {
        let mut tree = FileTree::new("proj");
        let a = tree
            .create_node(NodeId::ROOT, "a.txt", NodeKind::File)
            .unwrap();
        let b = tree
            .create_node(NodeId::ROOT, "b.txt", NodeKind::File)
            .unwrap();
        (tree, a, b)
    }

    #[test]
    fn test_open_is_append_once_and_activates() {
        let (tree, a, b) = tree_with_files();
        let mut session = SessionState::new();
        session.open_file(tree.file(a).unwrap());
        session.open_file(tree.file(b).unwrap());
        session.open_file(tree.file(a).unwrap());
        assert_eq!(session.open_files().len(), 2);
        assert_eq!(session.active_id(), Some(a));
    }

    #[test]
    fn test_close_active_falls_back_to_most_recent() {
        let (tree, a, b) = tree_with_files();
        let mut session = SessionState::new();
        session.open_file(tree.file(a).unwrap());
        session.open_file(tree.file(b).unwrap());
        session.close_file(b);
        assert_eq!(session.active_id(), Some(a));
        session.close_file(a);
        assert_eq!(session.active_id(), None);
        assert!(session.open_files().is_empty());
    }

    #[test]
    fn test_close_unknown_id_is_noop() {
        let (tree, a, b) = tree_with_files();
        let mut session = SessionState::new();
        session.open_file(tree.file(a).unwrap());
        session.close_file(b);
        assert_eq!(session.open_files().len(), 1);
        assert_eq!(session.active_id(), Some(a));
    }

    #[test]
    fn test_reconcile_after_delete_closes_removed_tabs() {
        let (tree, a, b) = tree_with_files();
        let mut session = SessionState::new();
        session.open_file(tree.file(a).unwrap());
        session.open_file(tree.file(b).unwrap());
        session.reconcile_after_delete(&[b]);
        assert!(!session.is_open(b));
        assert_eq!(session.active_id(), Some(a));
    }
}
