//! Error types for report page operations

use thiserror::Error;

/// Main error type for report page operations
///
/// Missing elements are never errors: the page operations treat them as
/// benign no-ops. Only conditions that genuinely cannot be recovered
/// in-place are represented here.
#[derive(Error, Debug)]
pub enum PageError {
    #[error("no browsing context: window or document unavailable")]
    DocumentUnavailable,

    #[error("navigation to '{url}' failed: {reason}")]
    Navigation { url: String, reason: String },
}

/// Result type for report page operations
pub type PageResult<T> = Result<T, PageError>;
