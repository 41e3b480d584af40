//! Serialization bridge.
//!
//! Converts between the in-memory tree + content store and the flat
//! path/content list used by the storage backend, archive export, template
//! instantiation, and repository import.

use crate::content::ContentStore;
use crate::error::TreeError;
use crate::tree::node::{Node, NodeKind};
use crate::tree::path::{segments, DELIMITER};
use crate::tree::FileTree;
use crate::types::NodeId;
use serde::{Deserialize, Serialize};

/// One file on the wire: root-relative path plus content. The backend wire
/// format calls the path field `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatFile {
    #[serde(rename = "name")]
    pub path: String,
    #[serde(default)]
    pub content: String,
}

impl FlatFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        FlatFile {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Flatten the tree and content store into one entry per file, depth-first
/// in display order, paths relative to the workspace root (root name
/// excluded).
pub fn flatten(tree: &FileTree, contents: &ContentStore) -> Vec<FlatFile> {
    let root_path = tree.root().path.as_str();
    tree.files()
        .into_iter()
        .map(|file| {
            let relative = file
                .path
                .strip_prefix(root_path)
                .map(|rest| rest.trim_start_matches(DELIMITER))
                .unwrap_or(file.path.as_str());
            FlatFile::new(relative, contents.get(file.id))
        })
        .collect()
}

/// Hydrate a tree and content store from an externally supplied flat file
/// list. Intermediate folders are created on demand and reused by name per
/// level, so input order never affects the final shape. Duplicate file
/// paths are last-write-wins on content; an entry whose path is shadowed by
/// an existing file at a folder position is skipped with a warning. An
/// empty input yields a root-only tree.
pub fn hydrate(files: &[FlatFile], workspace_name: &str) -> (FileTree, ContentStore) {
    let mut tree = FileTree::new(workspace_name);
    let mut contents = ContentStore::new();
    for entry in files {
        if let Err(error) = hydrate_entry(&mut tree, &mut contents, entry) {
            tracing::warn!(path = %entry.path, %error, "skipping entry while hydrating workspace");
        }
    }
    (tree, contents)
}

fn hydrate_entry(
    tree: &mut FileTree,
    contents: &mut ContentStore,
    entry: &FlatFile,
) -> Result<(), TreeError> {
    let parts: Vec<&str> = segments(&entry.path).collect();
    let Some((file_name, folders)) = parts.split_last() else {
        return Ok(());
    };
    let mut parent = NodeId::ROOT;
    for part in folders {
        parent = tree.ensure_folder(parent, part)?;
    }
    match tree.child_by_name(parent, file_name) {
        Some(Node::File(existing)) => {
            let id = existing.id;
            contents.set(id, entry.content.clone());
            Ok(())
        }
        Some(Node::Folder(_)) => Err(TreeError::NameCollision((*file_name).to_string())),
        None => {
            let id = tree.create_node(parent, file_name, NodeKind::File)?;
            contents.set(id, entry.content.clone());
            Ok(())
        }
    }
}
