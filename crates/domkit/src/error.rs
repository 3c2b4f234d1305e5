//! Errors

use domkit_dom::HostError;

/// domkit error
///
/// Almost every operation degrades silently instead of returning one of
/// these; the class-token check is the only caller-facing failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomKitError {
    #[error("className should not contain whitespace: {0:?}")]
    WhitespaceInClassToken(String),

    #[error("host error: {0}")]
    Host(#[from] HostError),
}

/// Result type for domkit operations
pub type Result<T> = std::result::Result<T, DomKitError>;
