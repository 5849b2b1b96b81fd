//! Navigator error types
//!
//! NotConfigured and Cancelled are not errors: both are routine outcomes a
//! caller branches on, carried by `NavigationOutcome`. Errors here are
//! configuration mistakes or unrecoverable commit failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigatorError {
    #[error("Route configuration error: {0}")]
    Recognizer(#[from] meridian_recognizer::RecognizerError),

    #[error("Pattern error: {0}")]
    Segment(#[from] meridian_segments::SegmentError),

    #[error("No route registered for view `{0}`")]
    UnknownView(String),

    /// An exception during Committing. Already-committed slots stay
    /// committed; there is no automatic rollback.
    #[error("Commit failed in slot `{owner}`: {source}")]
    Commit {
        owner: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("No matching history entry")]
    NoHistoryEntry,
}
