use async_trait::async_trait;

use crate::{
    error::Result,
    types::{FileContent, RepoListing},
};

/// Read-only access to one repository's listing and file contents
///
/// Implementors resolve which ref actually serves the content; callers only
/// name paths. The hosted-API implementation is [`crate::GitHubSource`].
#[async_trait]
pub trait RepoSource: Send + Sync {
    /// Fetch the full recursive listing of the repository
    async fn list_entries(&self) -> Result<RepoListing>;

    /// Fetch a single file's raw text by its repository path
    async fn fetch_content(&self, path: &str) -> Result<FileContent>;

    /// Get a human-readable identifier for this source (for diagnostics)
    fn identifier(&self) -> String;

    /// Check if a file exists without keeping its content
    ///
    /// Default implementation attempts to fetch and returns true if successful
    async fn content_exists(&self, path: &str) -> bool {
        self.fetch_content(path).await.is_ok()
    }
}
