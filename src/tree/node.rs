//! Workspace node variants.

use crate::types::NodeId;

/// Node variant discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Folder,
}

/// File node representation. Leaf; its textual content lives in the
/// content store keyed by `id`, never on the node itself.
#[derive(Debug, Clone)]
pub struct FileNode {
    pub id: NodeId,
    pub name: String,
    pub path: String,
    pub language: String,
    pub(crate) parent: Option<NodeId>,
}

/// Folder node representation. Children are id references into the tree
/// arena, kept in display order: folders before files, then name ascending.
#[derive(Debug, Clone)]
pub struct FolderNode {
    pub id: NodeId,
    pub name: String,
    pub path: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl FolderNode {
    /// Children in display order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A workspace tree node.
#[derive(Debug, Clone)]
pub enum Node {
    File(FileNode),
    Folder(FolderNode),
}

impl Node {
    pub fn id(&self) -> NodeId {
        match self {
            Node::File(file) => file.id,
            Node::Folder(folder) => folder.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => &file.name,
            Node::Folder(folder) => &folder.name,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Node::File(file) => &file.path,
            Node::Folder(folder) => &folder.path,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::File(_) => NodeKind::File,
            Node::Folder(_) => NodeKind::Folder,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder(_))
    }

    pub fn parent(&self) -> Option<NodeId> {
        match self {
            Node::File(file) => file.parent,
            Node::Folder(folder) => folder.parent,
        }
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        match self {
            Node::File(file) => file.parent = parent,
            Node::Folder(folder) => folder.parent = parent,
        }
    }
}
