//! History entry record

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One committed navigation. Entries are never mutated in place; the stack
/// replaces them wholesale through push and slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Canonical URL the address bar was set to
    pub url: String,
    /// Resolved view identity
    pub view: String,
    /// Captured route parameters
    pub params: HashMap<String, String>,
    /// Leftover query pairs
    pub query: HashMap<String, String>,
}

impl HistoryEntry {
    pub fn new(url: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            view: view.into(),
            params: HashMap::new(),
            query: HashMap::new(),
        }
    }

    pub fn with_params(mut self, params: HashMap<String, String>) -> Self {
        self.params = params;
        self
    }

    pub fn with_query(mut self, query: HashMap<String, String>) -> Self {
        self.query = query;
        self
    }
}
