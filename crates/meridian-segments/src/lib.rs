//! MERIDIAN Segment Model
//!
//! Parses route-pattern strings into ordered lists of typed segments and
//! compiles them into pattern specifications the recognizer can match with.
//!
//! Pattern syntax:
//! - `literal` — matched by string equality
//! - `:name` — one non-empty path component, captured under `name`
//! - `*name` — one or more remaining components, captured greedily

mod error;
mod pattern;
mod segment;

pub use error::SegmentError;
pub use pattern::PatternSpec;
pub use segment::{Segment, Specificity};

pub type Result<T> = std::result::Result<T, SegmentError>;
