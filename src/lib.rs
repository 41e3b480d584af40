//! CodeWeaver: In-Memory Workspace Model
//!
//! The client-held representation of a cloud IDE project: the file/folder
//! tree and its mutation engine, the identity-keyed content store, the
//! open-tab session state, and the serialization bridge to the flat
//! path/content list used for persistence, archive export, and repository
//! import.

pub mod archive;
pub mod config;
pub mod content;
pub mod error;
pub mod flat;
pub mod logging;
pub mod session;
pub mod templates;
pub mod transport;
pub mod tree;
pub mod types;
pub mod workspace;

pub use content::ContentStore;
pub use error::{TreeError, WorkspaceError};
pub use flat::{flatten, hydrate, FlatFile};
pub use session::{OpenFile, SessionState};
pub use tree::{FileNode, FileTree, FolderNode, Node, NodeKind};
pub use types::NodeId;
pub use workspace::Workspace;
