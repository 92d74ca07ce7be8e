//! Error types for structure submissions.

use thiserror::Error;

/// Failure of a single structure submission.
///
/// Every variant is terminal for the one request that raised it; nothing here
/// retries. A failed submission never touches previously loaded state: the
/// caller replaces its snapshot only on success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Submission attempted before the backend health check succeeded.
    /// Raised before any network call is made.
    #[error("backend is not ready yet; please wait a moment and retry")]
    BackendNotReady,

    /// The response violated the tree model invariants (unknown node kind,
    /// malformed children, or a file node carrying children).
    #[error("malformed repository structure: {0}")]
    MalformedTree(String),

    /// Network-level failure reported by the transport collaborator.
    #[error("{0}")]
    Transport(String),
}
