//! MERIDIAN Route Recognizer
//!
//! Compiles the patterns registered against each owner (a view slot, or the
//! root) into a matcher. Resolution tests a path against every compiled
//! pattern for the owner and ranks all matches deterministically:
//!
//! 1. fewest splats
//! 2. fewest dynamics
//! 3. most statics
//! 4. earliest registration
//!
//! An owner with no registered patterns resolves to `None`. That is a normal
//! outcome the navigator handles, not an error.

mod error;
mod recognizer;
mod route;

pub use error::RecognizerError;
pub use recognizer::Recognizer;
pub use route::{OwnerId, RouteMatch};

pub type Result<T> = std::result::Result<T, RecognizerError>;
