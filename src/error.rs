use thiserror::Error;

/// Errors surfaced when both branch attempts of a retrieval fail
///
/// `branch` is always the last branch attempted; `reason` describes that
/// attempt's failure (HTTP status, transport error, or malformed payload).
#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("failed to list {owner}/{repo} (last tried branch {branch}): {reason}")]
    Listing {
        owner: String,
        repo: String,
        branch: String,
        reason: String,
    },

    #[error("failed to fetch {path} from {owner}/{repo} (last tried branch {branch}): {reason}")]
    Content {
        owner: String,
        repo: String,
        path: String,
        branch: String,
        reason: String,
    },
}

impl RetrievalError {
    /// The last branch attempted before giving up
    pub fn branch(&self) -> &str {
        match self {
            RetrievalError::Listing { branch, .. } => branch,
            RetrievalError::Content { branch, .. } => branch,
        }
    }
}

/// Result type alias for retrieval operations
pub type Result<T> = std::result::Result<T, RetrievalError>;
