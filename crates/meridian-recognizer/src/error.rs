//! Recognizer error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecognizerError {
    #[error("Pattern error: {0}")]
    Pattern(#[from] meridian_segments::SegmentError),
}
