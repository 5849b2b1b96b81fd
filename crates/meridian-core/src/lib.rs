//! MERIDIAN Core
//!
//! Umbrella crate for the route resolution and navigation engine: pattern
//! compilation with specificity ranking, per-owner route recognition, an
//! in-memory navigation history, and the two-phase asynchronous view-slot
//! lifecycle.

mod config;
mod engine;
mod error;

pub use config::Config;
pub use engine::Engine;
pub use error::CoreError;

// Re-export core components
pub use meridian_history::{History, HistoryEntry};
pub use meridian_navigator::{
    AddressBar, GoBack, MemoryAddressBar, MetadataSink, NavigationOutcome, NavigationTarget,
    Navigator, NavigatorError, NullMetadata, Phase, SlotResult, ViewRegistry, ViewSlot,
};
pub use meridian_recognizer::{OwnerId, Recognizer, RecognizerError, RouteMatch};
pub use meridian_segments::{PatternSpec, Segment, SegmentError, Specificity};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
