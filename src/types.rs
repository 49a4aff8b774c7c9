use serde::{Deserialize, Serialize};

/// One record in a flat repository listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoEntry {
    /// Slash-separated path relative to the repository root, no leading slash
    pub path: String,
    /// Kind of object the path names
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl RepoEntry {
    pub fn new(path: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Kind of listing entry, as reported by the git-trees API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A file
    Blob,
    /// A directory
    Tree,
    /// A submodule gitlink; unreadable and excluded from the tree
    Commit,
}

/// A full recursive repository listing
#[derive(Debug, Clone)]
pub struct RepoListing {
    /// Flat entries, in the order the API returned them
    pub entries: Vec<RepoEntry>,
    /// True when the API cut the recursive listing short
    pub truncated: bool,
}

/// Node type in the reconstructed tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

/// A node in the hierarchical file tree
///
/// `path` is always the slash-join of the ancestor chain's names up to and
/// including `name`. `children` is `Some` exactly for folders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Final path segment
    pub name: String,
    /// Full path from the repository root
    pub path: String,
    /// File or folder
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Present only on folders, ordered folders-first then by name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    /// Create a file node
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: NodeKind::File,
            children: None,
        }
    }

    /// Create a folder node with the given children
    pub fn folder(
        name: impl Into<String>,
        path: impl Into<String>,
        children: Vec<TreeNode>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: NodeKind::Folder,
            children: Some(children),
        }
    }
}

/// A fetched file body and where it came from
#[derive(Debug, Clone)]
pub struct FileContent {
    /// The raw text body
    pub text: String,
    /// The URL that served this content
    pub source_url: String,
    /// The branch that served this content (matters because of fallback)
    pub branch: String,
}
