pub mod browser;
pub mod error;
pub mod github;
pub mod source;
pub mod tree;
pub mod types;

pub use browser::RepoBrowser;
pub use error::{RetrievalError, Result};
pub use github::GitHubSource;
pub use source::RepoSource;
pub use tree::build_file_tree;
pub use types::{EntryKind, FileContent, NodeKind, RepoEntry, RepoListing, TreeNode};
