//! View factory lookup
//!
//! A typed map from a stable view identity to a factory function. Explicit
//! registration only; the navigator treats the produced object as opaque.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

type Factory = Arc<dyn Fn() -> Box<dyn Any + Send> + Send + Sync>;

#[derive(Default)]
pub struct ViewRegistry {
    factories: RwLock<HashMap<String, Factory>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under a view identity, replacing any prior one
    pub fn register<F>(&self, view: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn Any + Send> + Send + Sync + 'static,
    {
        self.factories.write().insert(view.into(), Arc::new(factory));
    }

    /// Instantiate the view, if a factory is registered
    pub fn create(&self, view: &str) -> Option<Box<dyn Any + Send>> {
        let factory = self.factories.read().get(view).cloned()?;
        Some(factory())
    }

    pub fn contains(&self, view: &str) -> bool {
        self.factories.read().contains_key(view)
    }

    pub fn views(&self) -> Vec<String> {
        self.factories.read().keys().cloned().collect()
    }
}
