//! Route identities and match results

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a pattern table owner: the root navigator or one view slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The default top-level owner
    pub fn root() -> Self {
        Self("root".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OwnerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Result of resolving a path against an owner's pattern table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteMatch {
    /// View identity the winning pattern was registered with
    pub view: String,
    /// Winning pattern text
    pub pattern: String,
    /// Captured name → literal substring; every capture name of the winning
    /// pattern has a value here
    pub params: HashMap<String, String>,
    /// Query-string pairs not consumed by any segment, passed through
    pub query: HashMap<String, String>,
}
