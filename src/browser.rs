use std::sync::Arc;

use crate::{
    error::Result,
    source::RepoSource,
    tree::build_file_tree,
    types::{FileContent, RepoListing, TreeNode},
};

/// One repository browsing session over a source
///
/// Loads the listing, rebuilds the tree, and opens files. Holds no state
/// between calls: every `load_tree` fetches a fresh listing and produces a
/// wholly new tree, and nothing is cached across calls.
pub struct RepoBrowser {
    source: Arc<dyn RepoSource>,
}

impl RepoBrowser {
    /// Create a browser over the given source
    pub fn new(source: Arc<dyn RepoSource>) -> Self {
        Self { source }
    }

    /// Fetch the repository listing and rebuild the file tree
    ///
    /// Returns the top-level nodes; the caller holds them for the duration
    /// of the browsing session and discards them on the next load.
    pub async fn load_tree(&self) -> Result<Vec<TreeNode>> {
        let listing = self.source.list_entries().await?;
        Ok(build_file_tree(&listing.entries))
    }

    /// Fetch the raw listing, for callers that inspect `truncated`
    pub async fn load_listing(&self) -> Result<RepoListing> {
        self.source.list_entries().await
    }

    /// Fetch one file's text content
    pub async fn open_file(&self, path: &str) -> Result<FileContent> {
        self.source.fetch_content(path).await
    }

    /// Get the underlying source
    pub fn source(&self) -> &Arc<dyn RepoSource> {
        &self.source
    }
}
