//! MERIDIAN Navigation History
//!
//! An ordered, in-memory stack of committed navigations. One entry per
//! committed navigation; cancelled or gated-out navigations never produce an
//! entry. Backward navigation truncates the stack with `slice`, discarding
//! the forward entries being abandoned.
//!
//! Persistence across a full reload is out of scope; the stack lives exactly
//! as long as its navigator.

mod entry;
mod stack;

pub use entry::HistoryEntry;
pub use stack::History;
