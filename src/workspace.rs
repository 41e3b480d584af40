//! Workspace orchestration.
//!
//! Owns the tree, content store, and session state for one opened project
//! and applies every mutation as a single logical transaction in the fixed
//! order tree -> content -> session, so session reconciliation always
//! observes the post-mutation tree. The tree engine itself stays pure; the
//! cascading side effects live here.

use crate::archive::{build_archive, ArchiveDir};
use crate::content::ContentStore;
use crate::error::TreeError;
use crate::flat::{flatten, hydrate, FlatFile};
use crate::session::{OpenFile, SessionState};
use crate::templates::starter_files;
use crate::tree::{FileTree, NodeKind};
use crate::types::NodeId;
use tracing::debug;

/// One project's complete in-memory state.
#[derive(Debug, Clone)]
pub struct Workspace {
    name: String,
    tree: FileTree,
    contents: ContentStore,
    session: SessionState,
}

impl Workspace {
    /// An empty workspace holding only the root folder.
    pub fn new(name: &str) -> Self {
        Workspace {
            name: name.to_string(),
            tree: FileTree::new(name),
            contents: ContentStore::new(),
            session: SessionState::new(),
        }
    }

    /// Hydrate a workspace from an externally supplied flat file list
    /// (load, repository import, template instantiation). The first file in
    /// display order is opened as the initial tab.
    pub fn from_flat(files: &[FlatFile], name: &str) -> Self {
        let (tree, contents) = hydrate(files, name);
        let mut workspace = Workspace {
            name: name.to_string(),
            tree,
            contents,
            session: SessionState::new(),
        };
        if let Some(first) = workspace.tree.first_file() {
            workspace.session.open_file(first);
        }
        workspace
    }

    /// Seed a new workspace from the selected starter languages.
    pub fn from_template(language_ids: &[&str], name: &str) -> Self {
        Workspace::from_flat(&starter_files(language_ids), name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tree(&self) -> &FileTree {
        &self.tree
    }

    pub fn contents(&self) -> &ContentStore {
        &self.contents
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Create a folder under `parent_id`.
    pub fn create_folder(&mut self, parent_id: NodeId, name: &str) -> Result<NodeId, TreeError> {
        let id = self.tree.create_node(parent_id, name, NodeKind::Folder)?;
        debug!(%id, name, "created folder");
        Ok(id)
    }

    /// Create an empty file under `parent_id`, seed its content entry, and
    /// open it as the active tab.
    pub fn create_file(&mut self, parent_id: NodeId, name: &str) -> Result<NodeId, TreeError> {
        self.create_file_with(parent_id, name, "")
    }

    /// Create a file with caller-supplied initial content.
    pub fn create_file_with(
        &mut self,
        parent_id: NodeId,
        name: &str,
        content: &str,
    ) -> Result<NodeId, TreeError> {
        let id = self.tree.create_node(parent_id, name, NodeKind::File)?;
        self.contents.set(id, content);
        if let Some(file) = self.tree.file(id) {
            self.session.open_file(file);
        }
        debug!(%id, name, "created file");
        Ok(id)
    }

    /// Delete a node and, for a folder, its subtree. Purges content entries
    /// and closes tabs for every removed file; returns the removed file
    /// ids.
    pub fn delete(&mut self, node_id: NodeId) -> Result<Vec<NodeId>, TreeError> {
        let removed = self.tree.delete_node(node_id)?;
        for id in &removed {
            self.contents.remove(*id);
        }
        self.session.reconcile_after_delete(&removed);
        debug!(%node_id, removed = removed.len(), "deleted node");
        Ok(removed)
    }

    /// Move a node under a new parent folder and refresh open-tab
    /// snapshots.
    pub fn move_node(
        &mut self,
        dragged_id: NodeId,
        target_folder_id: NodeId,
    ) -> Result<(), TreeError> {
        self.tree.move_node(dragged_id, target_folder_id)?;
        self.session.reconcile_after_move(&self.tree);
        debug!(%dragged_id, %target_folder_id, "moved node");
        Ok(())
    }

    /// Open a file as the active tab.
    pub fn open_file(&mut self, file_id: NodeId) -> Result<(), TreeError> {
        let file = self
            .tree
            .file(file_id)
            .ok_or(TreeError::NodeNotFound(file_id))?;
        self.session.open_file(file);
        Ok(())
    }

    /// Close a tab. No-op for ids not currently open.
    pub fn close_file(&mut self, file_id: NodeId) {
        self.session.close_file(file_id);
    }

    pub fn active_file(&self) -> Option<&OpenFile> {
        self.session.active_file()
    }

    /// Replace a file's content. O(1); never touches the tree.
    pub fn edit_content(&mut self, file_id: NodeId, text: impl Into<String>) {
        self.contents.set(file_id, text);
    }

    pub fn content(&self, file_id: NodeId) -> &str {
        self.contents.get(file_id)
    }

    /// Apply suggested content to a root-relative path. Best effort: when
    /// the path does not resolve to a file the call is a no-op and returns
    /// `false`.
    pub fn apply_suggestion(&mut self, relative_path: &str, content: &str) -> bool {
        match self.tree.file_by_relative_path(relative_path) {
            Some(file) => {
                let id = file.id;
                self.contents.set(id, content);
                true
            }
            None => {
                debug!(path = relative_path, "suggestion target not found; skipping");
                false
            }
        }
    }

    /// Flattened snapshot for persistence, captured at call time.
    pub fn to_flat(&self) -> Vec<FlatFile> {
        flatten(&self.tree, &self.contents)
    }

    /// Nested export structure for archive download.
    pub fn archive(&self) -> ArchiveDir {
        build_archive(&self.name, &self.to_flat())
    }
}
