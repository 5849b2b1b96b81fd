//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Segment error: {0}")]
    Segment(#[from] meridian_segments::SegmentError),

    #[error("Recognizer error: {0}")]
    Recognizer(#[from] meridian_recognizer::RecognizerError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] meridian_navigator::NavigatorError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
