//! Path derivation for workspace nodes.
//!
//! A node's `path` is derived, never authoritative: it is always the
//! concatenation of ancestor names from the root down, joined by
//! [`DELIMITER`]. `child_path` is the single place paths are joined; no
//! other code assigns paths directly.

/// Separator between path segments.
pub const DELIMITER: char = '/';

/// Compute a child's path from its parent's path and its own name.
pub fn child_path(parent_path: &str, name: &str) -> String {
    format!("{parent_path}{DELIMITER}{name}")
}

/// Split a root-relative path into its non-empty segments.
pub fn segments(relative: &str) -> impl Iterator<Item = &str> {
    relative.split(DELIMITER).filter(|s| !s.is_empty())
}
