use thiserror::Error;

/// Errors surfaced at the user action that triggered them. Nothing is
/// retried automatically or logged centrally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// The request could not complete.
    #[error("network error: {0}")]
    Network(String),
    /// Login rejected, or the login request itself failed; the client
    /// cannot tell the two apart.
    #[error("login failed: {0}")]
    Auth(String),
    /// Detail fetch for a nonexistent id.
    #[error("poem not found")]
    NotFound,
    /// Create or update rejected by the server.
    #[error("save failed: {0}")]
    Save(String),
    /// A required field was empty; checked before any network call.
    #[error("{0} is required")]
    Validation(&'static str),
}
