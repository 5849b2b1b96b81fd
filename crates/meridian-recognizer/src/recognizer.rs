//! Pattern registration and path resolution

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use meridian_segments::PatternSpec;

use crate::route::{OwnerId, RouteMatch};
use crate::Result;

#[derive(Debug, Clone)]
struct RouteEntry {
    spec: PatternSpec,
    view: String,
}

/// Compiled pattern tables, one per owner.
///
/// `register` appends a compiled entry under the write lock before any
/// resolve can observe it; resolution never sees a half-written entry.
pub struct Recognizer {
    routes: Arc<RwLock<HashMap<OwnerId, Vec<RouteEntry>>>>,
}

impl Recognizer {
    pub fn new() -> Self {
        Self {
            routes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a pattern for an owner.
    ///
    /// Re-registering the identical pattern text replaces the prior target
    /// view and keeps the original registration order. Fails only on a
    /// malformed pattern (duplicate capture, adjacent splats).
    pub fn register(&self, owner: &OwnerId, pattern: &str, view: &str) -> Result<()> {
        let spec = PatternSpec::parse(pattern)?;

        let mut table = self.routes.write();
        let entries = table.entry(owner.clone()).or_default();

        if let Some(existing) = entries.iter_mut().find(|e| e.spec.pattern() == pattern) {
            tracing::debug!(owner = %owner, pattern, view, "Replaced route target");
            existing.view = view.to_string();
        } else {
            tracing::debug!(owner = %owner, pattern, view, "Registered route");
            entries.push(RouteEntry {
                spec,
                view: view.to_string(),
            });
        }

        Ok(())
    }

    /// Resolve a path (with optional `?key=value` query string) against an
    /// owner's patterns. Returns `None` when the owner has no patterns or
    /// nothing matches.
    pub fn resolve(&self, owner: &OwnerId, path: &str) -> Option<RouteMatch> {
        let (path, query) = split_query(path);

        let table = self.routes.read();
        let entries = table.get(owner)?;

        entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                entry
                    .spec
                    .match_path(path)
                    .map(|params| (entry.spec.specificity(), index, entry, params))
            })
            // Specificity orders "more specific first"; index breaks ties in
            // favor of the first-registered pattern
            .min_by_key(|(specificity, index, _, _)| (*specificity, *index))
            .map(|(_, _, entry, params)| RouteMatch {
                view: entry.view.clone(),
                pattern: entry.spec.pattern().to_string(),
                params,
                query,
            })
    }

    /// The compiled pattern registered for a view under an owner, if any.
    /// Used by the navigator to synthesize a URL for a named target.
    pub fn pattern_for_view(&self, owner: &OwnerId, view: &str) -> Option<PatternSpec> {
        let table = self.routes.read();
        table
            .get(owner)?
            .iter()
            .find(|e| e.view == view)
            .map(|e| e.spec.clone())
    }

    /// Owners with at least one registered pattern
    pub fn owners(&self) -> Vec<OwnerId> {
        self.routes.read().keys().cloned().collect()
    }

    /// `(pattern, view)` pairs registered for an owner, in registration order
    pub fn routes(&self, owner: &OwnerId) -> Vec<(String, String)> {
        self.routes
            .read()
            .get(owner)
            .map(|entries| {
                entries
                    .iter()
                    .map(|e| (e.spec.pattern().to_string(), e.view.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Default for Recognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Recognizer {
    fn clone(&self) -> Self {
        Self {
            routes: Arc::clone(&self.routes),
        }
    }
}

fn split_query(path: &str) -> (&str, HashMap<String, String>) {
    match path.split_once('?') {
        Some((path, query)) => (
            path,
            url::form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        ),
        None => (path, HashMap::new()),
    }
}
