use thiserror::Error;

/// Errors raised by rendering surfaces and page documents.
///
/// Missing page elements are never errors: the outline builder treats them as no-ops.
/// These variants cover the surface itself failing (a browser that will not start, an evaluation
/// that throws, a handle that no longer resolves, a document that does not parse).
#[derive(Debug, Error)]
pub enum OutlineError {
    /// Failed to launch the browser
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Failed to connect to an existing browser
    #[error("Failed to connect to browser: {0}")]
    ConnectionFailed(String),

    /// Tab lookup or manipulation failed
    #[error("Tab operation failed: {0}")]
    TabOperationFailed(String),

    /// Navigation did not complete
    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    /// JavaScript evaluation in the page failed or returned an unexpected value
    #[error("JavaScript evaluation failed: {0}")]
    EvaluationFailed(String),

    /// The page document could not be read or written
    #[error("Failed to parse page: {0}")]
    PageParseFailed(String),

    /// A selector string uses syntax outside the supported subset
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// A node handle no longer resolves to an element
    #[error("Node not found: {0}")]
    NodeNotFound(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, OutlineError>;
