use std::collections::HashMap;

use crate::types::{EntryKind, NodeKind, RepoEntry, TreeNode};

/// Rebuild a hierarchical file tree from a flat git-trees listing
///
/// Returns the top-level children of the implicit root. Submodule gitlinks
/// (`EntryKind::Commit`) are excluded. Children of every folder are ordered
/// folders-first, then lexicographically by name. Total over any input; an
/// empty listing produces an empty tree.
pub fn build_file_tree(entries: &[RepoEntry]) -> Vec<TreeNode> {
    let mut arena = Arena::new();

    for entry in entries {
        if entry.kind == EntryKind::Commit {
            continue;
        }
        arena.insert(entry);
    }

    arena.materialize(Arena::ROOT)
}

struct FlatNode {
    name: String,
    path: String,
    kind: NodeKind,
    children: Vec<usize>,
}

/// Arena of flat nodes plus a path-to-index map, so each distinct path
/// produces exactly one node and segment lookup stays constant-time.
struct Arena {
    nodes: Vec<FlatNode>,
    by_path: HashMap<String, usize>,
}

impl Arena {
    /// Index of the virtual root, path `""`; never materialized itself
    const ROOT: usize = 0;

    fn new() -> Self {
        let root = FlatNode {
            name: String::new(),
            path: String::new(),
            kind: NodeKind::Folder,
            children: Vec::new(),
        };
        let mut by_path = HashMap::new();
        by_path.insert(String::new(), Self::ROOT);
        Self {
            nodes: vec![root],
            by_path,
        }
    }

    /// Walk the entry's segments left to right, creating missing nodes
    fn insert(&mut self, entry: &RepoEntry) {
        let segments: Vec<&str> = entry.path.split('/').collect();
        let last = segments.len() - 1;

        let mut parent = Self::ROOT;
        let mut prefix = String::with_capacity(entry.path.len());

        for (i, segment) in segments.iter().enumerate() {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);
            let is_last = i == last;

            let idx = match self.by_path.get(prefix.as_str()) {
                Some(&idx) => {
                    if !is_last {
                        // A deeper entry proves this path has children, so it
                        // stays a folder even if a blob entry named it first.
                        self.nodes[idx].kind = NodeKind::Folder;
                    }
                    idx
                }
                None => {
                    let kind = if is_last && entry.kind == EntryKind::Blob {
                        NodeKind::File
                    } else {
                        NodeKind::Folder
                    };
                    let idx = self.nodes.len();
                    self.nodes.push(FlatNode {
                        name: segment.to_string(),
                        path: prefix.clone(),
                        kind,
                        children: Vec::new(),
                    });
                    self.nodes[parent].children.push(idx);
                    self.by_path.insert(prefix.clone(), idx);
                    idx
                }
            };

            parent = idx;
        }
    }

    /// Build the ordered child sequence of a node, recursively
    fn materialize(&self, idx: usize) -> Vec<TreeNode> {
        let mut children: Vec<TreeNode> = self.nodes[idx]
            .children
            .iter()
            .map(|&child| {
                let flat = &self.nodes[child];
                match flat.kind {
                    NodeKind::Folder => TreeNode::folder(
                        flat.name.clone(),
                        flat.path.clone(),
                        self.materialize(child),
                    ),
                    NodeKind::File => TreeNode::file(flat.name.clone(), flat.path.clone()),
                }
            })
            .collect();

        children.sort_by(|a, b| {
            group_rank(a.kind)
                .cmp(&group_rank(b.kind))
                .then_with(|| a.name.cmp(&b.name))
        });
        children
    }
}

fn group_rank(kind: NodeKind) -> u8 {
    match kind {
        NodeKind::Folder => 0,
        NodeKind::File => 1,
    }
}
