//! Tree mutation engine.
//!
//! Nodes live in a flat arena keyed by `NodeId`; parent and child
//! relationships are id references. Every operation validates fully before
//! touching the arena, so a failed call leaves the tree exactly as it was.
//! The engine never reaches into the content store or session state; it
//! reports the affected ids and leaves the ordered side effects to the
//! orchestration layer.

use crate::error::TreeError;
use crate::tree::language::language_for;
use crate::tree::node::{FileNode, FolderNode, Node, NodeKind};
use crate::tree::path::{child_path, segments};
use crate::types::NodeId;
use std::collections::HashMap;

/// The workspace file/folder tree.
#[derive(Debug, Clone)]
pub struct FileTree {
    nodes: HashMap<NodeId, Node>,
    next_id: u64,
}

impl FileTree {
    /// Create a tree holding only the root folder, named after the
    /// workspace.
    pub fn new(workspace_name: &str) -> Self {
        let root = FolderNode {
            id: NodeId::ROOT,
            name: workspace_name.to_string(),
            path: workspace_name.to_string(),
            parent: None,
            children: Vec::new(),
        };
        let mut nodes = HashMap::new();
        nodes.insert(NodeId::ROOT, Node::Folder(root));
        FileTree { nodes, next_id: 1 }
    }

    /// The workspace root. Always present; created with the tree.
    pub fn root(&self) -> &FolderNode {
        match self.nodes.get(&NodeId::ROOT) {
            Some(Node::Folder(folder)) => folder,
            _ => unreachable!("root folder is created with the tree and never removed"),
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn file(&self, id: NodeId) -> Option<&FileNode> {
        match self.nodes.get(&id) {
            Some(Node::File(file)) => Some(file),
            _ => None,
        }
    }

    pub fn folder(&self, id: NodeId) -> Option<&FolderNode> {
        match self.nodes.get(&id) {
            Some(Node::Folder(folder)) => Some(folder),
            _ => None,
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Total node count, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Look up a direct child of a folder by name (case-sensitive).
    pub fn child_by_name(&self, folder_id: NodeId, name: &str) -> Option<&Node> {
        let folder = self.folder(folder_id)?;
        folder
            .children
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .find(|node| node.name() == name)
    }

    /// Create a file or folder under `parent_id`.
    ///
    /// Allocates a fresh id, derives the child path from the parent path,
    /// and inserts the node in display order. Content seeding is the
    /// caller's concern.
    pub fn create_node(
        &mut self,
        parent_id: NodeId,
        name: &str,
        kind: NodeKind,
    ) -> Result<NodeId, TreeError> {
        let parent = self
            .folder(parent_id)
            .ok_or(TreeError::ParentNotFound(parent_id))?;
        let path = child_path(&parent.path, name);
        if self.child_by_name(parent_id, name).is_some() {
            return Err(TreeError::NameCollision(name.to_string()));
        }

        let id = self.allocate_id();
        let node = match kind {
            NodeKind::File => Node::File(FileNode {
                id,
                name: name.to_string(),
                path,
                language: language_for(name).to_string(),
                parent: Some(parent_id),
            }),
            NodeKind::Folder => Node::Folder(FolderNode {
                id,
                name: name.to_string(),
                path,
                parent: Some(parent_id),
                children: Vec::new(),
            }),
        };
        self.nodes.insert(id, node);
        if let Some(Node::Folder(folder)) = self.nodes.get_mut(&parent_id) {
            folder.children.push(id);
        }
        self.sort_children(parent_id);
        Ok(id)
    }

    /// Return the existing folder child named `name`, creating it when
    /// absent. Fails with `NameCollision` when a file occupies the name.
    pub fn ensure_folder(&mut self, parent_id: NodeId, name: &str) -> Result<NodeId, TreeError> {
        match self.child_by_name(parent_id, name) {
            Some(Node::Folder(folder)) => Ok(folder.id),
            Some(Node::File(_)) => Err(TreeError::NameCollision(name.to_string())),
            None => self.create_node(parent_id, name, NodeKind::Folder),
        }
    }

    /// Remove a node and, for a folder, its entire subtree.
    ///
    /// Returns every removed FileNode id so the caller can purge the
    /// content store and close matching session tabs.
    pub fn delete_node(&mut self, node_id: NodeId) -> Result<Vec<NodeId>, TreeError> {
        if node_id == NodeId::ROOT {
            return Err(TreeError::CannotDeleteRoot);
        }
        let parent_id = self
            .nodes
            .get(&node_id)
            .ok_or(TreeError::NodeNotFound(node_id))?
            .parent();
        if let Some(parent_id) = parent_id {
            if let Some(Node::Folder(parent)) = self.nodes.get_mut(&parent_id) {
                parent.children.retain(|child| *child != node_id);
            }
        }

        let mut removed_files = Vec::new();
        let mut stack = vec![node_id];
        while let Some(id) = stack.pop() {
            match self.nodes.remove(&id) {
                Some(Node::File(file)) => removed_files.push(file.id),
                Some(Node::Folder(folder)) => stack.extend(folder.children),
                None => {}
            }
        }
        Ok(removed_files)
    }

    /// Re-parent `dragged_id` under `target_folder_id`, rewriting the paths
    /// of the moved subtree and resorting the target's children.
    pub fn move_node(
        &mut self,
        dragged_id: NodeId,
        target_folder_id: NodeId,
    ) -> Result<(), TreeError> {
        let target_path = match self.folder(target_folder_id) {
            Some(target) => target.path.clone(),
            None => return Err(TreeError::InvalidTarget),
        };
        if dragged_id == target_folder_id || dragged_id == NodeId::ROOT {
            return Err(TreeError::InvalidTarget);
        }
        let dragged = self
            .nodes
            .get(&dragged_id)
            .ok_or(TreeError::NodeNotFound(dragged_id))?;
        let dragged_name = dragged.name().to_string();
        let old_parent = dragged.parent();

        // Walk the target's ancestor chain; hitting the dragged node means
        // the target lies inside the subtree being moved.
        let mut cursor = Some(target_folder_id);
        while let Some(id) = cursor {
            if id == dragged_id {
                return Err(TreeError::SelfDescendantMove);
            }
            cursor = self.nodes.get(&id).and_then(Node::parent);
        }

        if self.child_by_name(target_folder_id, &dragged_name).is_some() {
            return Err(TreeError::NameCollision(dragged_name));
        }

        if let Some(parent_id) = old_parent {
            if let Some(Node::Folder(parent)) = self.nodes.get_mut(&parent_id) {
                parent.children.retain(|child| *child != dragged_id);
            }
        }
        if let Some(node) = self.nodes.get_mut(&dragged_id) {
            node.set_parent(Some(target_folder_id));
        }
        if let Some(Node::Folder(target)) = self.nodes.get_mut(&target_folder_id) {
            target.children.push(dragged_id);
        }
        self.rewrite_paths(dragged_id, child_path(&target_path, &dragged_name));
        self.sort_children(target_folder_id);
        Ok(())
    }

    /// Every file in the tree, depth-first in display order.
    pub fn files(&self) -> Vec<&FileNode> {
        let mut out = Vec::new();
        self.collect_files(NodeId::ROOT, &mut out);
        out
    }

    /// The first file in display order, if any. Used to pick the initial
    /// editor tab after load.
    pub fn first_file(&self) -> Option<&FileNode> {
        self.files().into_iter().next()
    }

    /// Resolve a root-relative path (root name excluded) to a file.
    pub fn file_by_relative_path(&self, relative: &str) -> Option<&FileNode> {
        let parts: Vec<&str> = segments(relative).collect();
        let (file_name, folders) = parts.split_last()?;
        let mut current = NodeId::ROOT;
        for part in folders {
            current = match self.child_by_name(current, part) {
                Some(Node::Folder(folder)) => folder.id,
                _ => return None,
            };
        }
        match self.child_by_name(current, file_name) {
            Some(Node::File(file)) => Some(file),
            _ => None,
        }
    }

    fn allocate_id(&mut self) -> NodeId {
        let id = NodeId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }

    fn collect_files<'a>(&'a self, id: NodeId, out: &mut Vec<&'a FileNode>) {
        match self.nodes.get(&id) {
            Some(Node::File(file)) => out.push(file),
            Some(Node::Folder(folder)) => {
                for child in &folder.children {
                    self.collect_files(*child, out);
                }
            }
            None => {}
        }
    }

    // Depth-first path rewrite after a structural change; paths are derived
    // through `child_path` only.
    fn rewrite_paths(&mut self, id: NodeId, new_path: String) {
        let children: Vec<NodeId> = match self.nodes.get_mut(&id) {
            Some(Node::File(file)) => {
                file.path = new_path;
                return;
            }
            Some(Node::Folder(folder)) => {
                folder.path = new_path.clone();
                folder.children.clone()
            }
            None => return,
        };
        for child in children {
            if let Some(name) = self.nodes.get(&child).map(|n| n.name().to_string()) {
                self.rewrite_paths(child, child_path(&new_path, &name));
            }
        }
    }

    // Display order: folders before files, then lexicographic by name,
    // case-sensitive.
    fn sort_children(&mut self, folder_id: NodeId) {
        let Some(folder) = self.folder(folder_id) else {
            return;
        };
        let mut keyed: Vec<(bool, String, NodeId)> = folder
            .children
            .iter()
            .filter_map(|id| {
                self.nodes
                    .get(id)
                    .map(|node| (node.is_file(), node.name().to_string(), *id))
            })
            .collect();
        keyed.sort();
        let ordered: Vec<NodeId> = keyed.into_iter().map(|(_, _, id)| id).collect();
        if let Some(Node::Folder(folder)) = self.nodes.get_mut(&folder_id) {
            folder.children = ordered;
        }
    }
}
