//! Segment model error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SegmentError {
    #[error("Duplicate capture name `{name}` in pattern `{pattern}`")]
    DuplicateCapture { pattern: String, name: String },

    #[error("Adjacent splat segments in pattern `{pattern}`")]
    AdjacentSplats { pattern: String },

    #[error("Missing parameter `{name}` for pattern `{pattern}`")]
    MissingParameter { pattern: String, name: String },
}
