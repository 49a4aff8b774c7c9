use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::{RetrievalError, Result},
    source::RepoSource,
    types::{FileContent, RepoEntry, RepoListing},
};

const DEFAULT_API_BASE: &str = "https://api.github.com";
const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com";

/// Branch attempt order, fixed: `main` first, then `master`
const BRANCHES: [&str; 2] = ["main", "master"];

/// GitHub-backed repository source with branch fallback
///
/// Fetches from a repository using:
/// - the git-trees REST API for recursive listings
/// - raw.githubusercontent.com for file downloads
///
/// Every operation is attempted against `main` first; on any failure the
/// identical request is retried once against `master`. Only when both fail
/// does the operation error, naming the last branch tried.
#[derive(Clone)]
pub struct GitHubSource {
    client: Client,
    owner: String,
    repo: String,
    api_base: String,
    raw_base: String,
}

/// Payload of `GET /repos/{owner}/{repo}/git/trees/{branch}?recursive=1`
///
/// `tree` is required: a 2xx body missing it is a malformed payload and is
/// treated like a failed attempt, never like an empty repository.
#[derive(Deserialize)]
struct TreesPayload {
    tree: Vec<RepoEntry>,
    #[serde(default)]
    truncated: bool,
}

impl GitHubSource {
    /// Create a new GitHub source for `owner/repo`
    pub fn new(owner: String, repo: String) -> Self {
        Self::with_endpoints(
            owner,
            repo,
            DEFAULT_API_BASE.to_string(),
            DEFAULT_RAW_BASE.to_string(),
        )
    }

    /// Create a source with custom API and raw-content endpoints
    ///
    /// Used against self-hosted instances and mock servers in tests.
    pub fn with_endpoints(owner: String, repo: String, api_base: String, raw_base: String) -> Self {
        let client = Client::builder()
            .user_agent("repo-browser/0.1")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            owner,
            repo,
            api_base: api_base.trim_end_matches('/').to_string(),
            raw_base: raw_base.trim_end_matches('/').to_string(),
        }
    }

    /// Build the git-trees API URL for a branch
    fn trees_url(&self, branch: &str) -> String {
        format!(
            "{}/repos/{}/{}/git/trees/{}?recursive=1",
            self.api_base, self.owner, self.repo, branch
        )
    }

    /// Build the raw content URL for a file on a branch
    fn raw_url(&self, branch: &str, path: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.raw_base,
            self.owner,
            self.repo,
            branch,
            path.trim_start_matches('/')
        )
    }

    /// One listing attempt against one branch; the error is the attempt's
    /// failure description, used for fallback and for the final error
    async fn try_list(&self, branch: &str) -> std::result::Result<RepoListing, String> {
        let url = self.trees_url(branch);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await
            .map_err(|e| format!("transport error: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("unexpected status {status}"));
        }

        let payload: TreesPayload = response
            .json()
            .await
            .map_err(|e| format!("malformed listing payload: {e}"))?;

        Ok(RepoListing {
            entries: payload.tree,
            truncated: payload.truncated,
        })
    }

    /// One content attempt against one branch
    async fn try_fetch(
        &self,
        branch: &str,
        path: &str,
    ) -> std::result::Result<FileContent, String> {
        let url = self.raw_url(branch, path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("transport error: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("unexpected status {status}"));
        }

        let text = response
            .text()
            .await
            .map_err(|e| format!("failed to read body: {e}"))?;

        Ok(FileContent {
            text,
            source_url: url,
            branch: branch.to_string(),
        })
    }
}

#[async_trait]
impl RepoSource for GitHubSource {
    async fn list_entries(&self) -> Result<RepoListing> {
        let mut last = (BRANCHES[0], String::new());

        for branch in BRANCHES {
            match self.try_list(branch).await {
                Ok(listing) => return Ok(listing),
                Err(reason) => last = (branch, reason),
            }
        }

        Err(RetrievalError::Listing {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            branch: last.0.to_string(),
            reason: last.1,
        })
    }

    async fn fetch_content(&self, path: &str) -> Result<FileContent> {
        let mut last = (BRANCHES[0], String::new());

        for branch in BRANCHES {
            match self.try_fetch(branch, path).await {
                Ok(content) => return Ok(content),
                Err(reason) => last = (branch, reason),
            }
        }

        Err(RetrievalError::Content {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            path: path.to_string(),
            branch: last.0.to_string(),
            reason: last.1,
        })
    }

    fn identifier(&self) -> String {
        format!("github://{}/{}", self.owner, self.repo)
    }
}
