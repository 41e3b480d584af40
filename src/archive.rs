//! Archive export structure.
//!
//! Reconstructs a nested folder-per-path-segment layout from the flattened
//! file list. Drives zip/tar construction by an external collaborator; the
//! archive format itself is out of scope.

use crate::flat::FlatFile;
use crate::tree::path::segments;

/// One file entry inside an archive directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveFile {
    pub name: String,
    pub content: String,
}

/// Nested directory of the export, folder per path segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveDir {
    pub name: String,
    pub dirs: Vec<ArchiveDir>,
    pub files: Vec<ArchiveFile>,
}

impl ArchiveDir {
    fn named(name: &str) -> Self {
        ArchiveDir {
            name: name.to_string(),
            ..ArchiveDir::default()
        }
    }

    pub fn dir(&self, name: &str) -> Option<&ArchiveDir> {
        self.dirs.iter().find(|dir| dir.name == name)
    }

    pub fn file(&self, name: &str) -> Option<&ArchiveFile> {
        self.files.iter().find(|file| file.name == name)
    }
}

/// Build the nested export structure for a flattened workspace. The top
/// directory carries the workspace name.
pub fn build_archive(workspace_name: &str, files: &[FlatFile]) -> ArchiveDir {
    let mut root = ArchiveDir::named(workspace_name);
    for entry in files {
        let parts: Vec<&str> = segments(&entry.path).collect();
        let Some((file_name, folders)) = parts.split_last() else {
            continue;
        };
        let mut cursor = &mut root;
        for part in folders {
            let current = cursor;
            let index = match current.dirs.iter().position(|dir| dir.name == *part) {
                Some(index) => index,
                None => {
                    current.dirs.push(ArchiveDir::named(part));
                    current.dirs.len() - 1
                }
            };
            cursor = &mut current.dirs[index];
        }
        cursor.files.push(ArchiveFile {
            name: (*file_name).to_string(),
            content: entry.content.clone(),
        });
    }
    root
}
