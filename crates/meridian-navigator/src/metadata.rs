//! Metadata sink
//!
//! Cross-cutting, slot-independent side effects of a committed navigation
//! (document title, description) go through an explicit collaborator invoked
//! from the commit phase, not through ambient global state.

use meridian_recognizer::RouteMatch;

pub trait MetadataSink: Send + Sync {
    /// Called once per successful commit with the winning match
    fn committed(&self, route: &RouteMatch);
}

/// Discards all metadata. The default sink.
pub struct NullMetadata;

impl MetadataSink for NullMetadata {
    fn committed(&self, _route: &RouteMatch) {}
}
