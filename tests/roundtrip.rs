//! Round-trip tests for the serialization bridge.

use codeweaver::{flatten, hydrate, FlatFile, NodeId};
use proptest::prelude::*;
use std::collections::BTreeMap;

#[test]
fn hydrate_two_branch_scenario() {
    let files = vec![
        FlatFile::new("a/b/c.txt", "x"),
        FlatFile::new("a/d.txt", "y"),
    ];
    let (tree, contents) = hydrate(&files, "proj");

    // Two folders (a, a/b) and two files.
    assert_eq!(tree.node_count(), 5);
    let a = match tree.child_by_name(NodeId::ROOT, "a") {
        Some(node) => node.id(),
        None => panic!("folder a missing"),
    };
    assert!(tree.child_by_name(a, "b").is_some_and(|n| n.is_folder()));
    assert!(tree.child_by_name(a, "d.txt").is_some_and(|n| n.is_file()));
    let c = tree.file_by_relative_path("a/b/c.txt").unwrap();
    assert_eq!(contents.get(c.id), "x");
}

#[test]
fn hydrate_is_order_independent() {
    let forward = vec![
        FlatFile::new("src/app.ts", "1"),
        FlatFile::new("src/lib/util.ts", "2"),
        FlatFile::new("README.md", "3"),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    let (tree_a, contents_a) = hydrate(&forward, "proj");
    let (tree_b, contents_b) = hydrate(&reversed, "proj");
    assert_eq!(flatten(&tree_a, &contents_a), flatten(&tree_b, &contents_b));
}

#[test]
fn roundtrip_preserves_paths_and_content() {
    let files = vec![
        FlatFile::new("index.html", "<html></html>"),
        FlatFile::new("assets/style.css", "body {}"),
        FlatFile::new("assets/js/app.js", "console.log(1)"),
    ];
    let (tree, contents) = hydrate(&files, "proj");
    let out = flatten(&tree, &contents);

    let expected: BTreeMap<String, String> = files
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect();
    let actual: BTreeMap<String, String> =
        out.into_iter().map(|f| (f.path, f.content)).collect();
    assert_eq!(actual, expected);
}

#[test]
fn flatten_emits_display_order() {
    let files = vec![
        FlatFile::new("b.txt", ""),
        FlatFile::new("z/inner.txt", ""),
        FlatFile::new("a.txt", ""),
    ];
    let (tree, contents) = hydrate(&files, "proj");
    let paths: Vec<String> = flatten(&tree, &contents).into_iter().map(|f| f.path).collect();
    // Folders first, then files, names ascending at each level.
    assert_eq!(paths, vec!["z/inner.txt", "a.txt", "b.txt"]);
}

// Folder segments never contain a dot and leaves always do, so a generated
// path can never shadow another entry's folder prefix.
fn flat_file_set() -> impl Strategy<Value = Vec<FlatFile>> {
    let segment = prop::sample::select(vec!["a", "b", "c", "dir"]);
    let leaf = (0u32..50).prop_map(|n| format!("f{n}.txt"));
    let path = (prop::collection::vec(segment, 0..3), leaf).prop_map(|(folders, leaf)| {
        let mut parts: Vec<String> = folders.into_iter().map(String::from).collect();
        parts.push(leaf);
        parts.join("/")
    });
    prop::collection::vec((path, "[a-z]{0,8}"), 0..12).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(path, content)| FlatFile::new(path, content))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_roundtrip_up_to_id_reassignment(files in flat_file_set()) {
        // Last write wins for duplicate paths.
        let expected: BTreeMap<String, String> = files
            .iter()
            .map(|f| (f.path.clone(), f.content.clone()))
            .collect();

        let (tree, contents) = hydrate(&files, "proj");
        let actual: BTreeMap<String, String> = flatten(&tree, &contents)
            .into_iter()
            .map(|f| (f.path, f.content))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_hydrate_never_panics_and_root_survives(files in flat_file_set()) {
        let (tree, _) = hydrate(&files, "proj");
        prop_assert_eq!(tree.root().name.as_str(), "proj");
        prop_assert!(tree.node_count() >= 1);
    }
}
