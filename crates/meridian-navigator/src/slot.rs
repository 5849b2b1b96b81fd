//! View slot contract
//!
//! A view slot is a mount point hosting exactly one active view. The
//! navigator never inspects a slot beyond these four calls: two gates that
//! may decline the navigation, and the two commit calls that perform the
//! actual swap.

use async_trait::async_trait;

use meridian_recognizer::RouteMatch;

/// Completion of a commit call; an error is fatal to the navigation.
pub type SlotResult = std::result::Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[async_trait]
pub trait ViewSlot: Send + Sync {
    /// Ask the currently active view whether it may be left.
    /// `false` cancels the whole navigation.
    async fn can_navigate_from(&self) -> bool;

    /// Ask the prospective view whether it may be entered.
    /// `false` cancels the whole navigation.
    async fn can_navigate_to(&self, target: &RouteMatch) -> bool;

    /// Deactivate the outgoing view. Runs only after every gate passed.
    async fn navigate_from(&self) -> SlotResult;

    /// Activate the incoming view. Runs after `navigate_from` for this slot.
    async fn navigate_to(&self, target: &RouteMatch) -> SlotResult;
}
