//! MERIDIAN Navigator
//!
//! The orchestrator: owns route registration per view slot, resolves incoming
//! navigation requests (by URL or by view identity) against the recognizer,
//! and drives the two-phase asynchronous lifecycle across the affected chain
//! of view slots.
//!
//! Phases per navigation: Resolving → Gating → Committing → Settled.
//! Gating is cancellable (a declined gate, or a newer navigation superseding
//! this one); Committing is the point of no return.

mod address;
mod error;
mod metadata;
mod navigator;
mod registry;
mod slot;

pub use address::{AddressBar, MemoryAddressBar};
pub use error::NavigatorError;
pub use metadata::{MetadataSink, NullMetadata};
pub use navigator::{GoBack, NavigationOutcome, NavigationTarget, Navigator, Phase};
pub use registry::ViewRegistry;
pub use slot::{SlotResult, ViewSlot};

pub type Result<T> = std::result::Result<T, NavigatorError>;
