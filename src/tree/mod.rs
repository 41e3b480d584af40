//! Workspace tree domain: node variants, path derivation, and the mutation
//! engine.

pub mod engine;
pub mod language;
pub mod node;
pub mod path;

pub use engine::FileTree;
pub use node::{FileNode, FolderNode, Node, NodeKind};
