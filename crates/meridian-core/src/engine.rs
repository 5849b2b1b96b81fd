//! Engine facade
//!
//! Wires a navigator with its collaborators and applies the configured mount
//! prefix on every entry point. Hosts that need custom collaborators pass
//! them in; everything else gets in-memory defaults.

use std::collections::HashMap;
use std::sync::Arc;

use meridian_navigator::{
    AddressBar, GoBack, MemoryAddressBar, MetadataSink, NavigationOutcome, NavigationTarget,
    Navigator, NullMetadata, ViewRegistry, ViewSlot,
};
use meridian_recognizer::{OwnerId, RouteMatch};

use crate::config::Config;
use crate::Result;

pub struct Engine {
    config: Config,
    address_bar: Arc<dyn AddressBar>,
    registry: Arc<ViewRegistry>,
    navigator: Arc<Navigator>,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self::with_collaborators(
            config,
            Arc::new(MemoryAddressBar::default()),
            Arc::new(NullMetadata),
        )
    }

    pub fn with_collaborators(
        config: Config,
        address_bar: Arc<dyn AddressBar>,
        metadata: Arc<dyn MetadataSink>,
    ) -> Self {
        let registry = Arc::new(ViewRegistry::new());
        let mut navigator = Navigator::with_collaborators(Arc::clone(&address_bar), metadata);
        navigator.attach_registry(Arc::clone(&registry));

        Self {
            config,
            address_bar,
            registry,
            navigator: Arc::new(navigator),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn navigator(&self) -> Arc<Navigator> {
        Arc::clone(&self.navigator)
    }

    /// View factory registry; view-identity targets must be registered here
    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    /// Register routes for an owner, relative to the mount prefix
    pub fn configure<I, P, V>(&self, owner: &OwnerId, routes: I) -> Result<()>
    where
        I: IntoIterator<Item = (P, V)>,
        P: AsRef<str>,
        V: AsRef<str>,
    {
        self.navigator.configure(owner, routes)?;
        Ok(())
    }

    pub fn register_viewport(&self, owner: &OwnerId, slot: Arc<dyn ViewSlot>) {
        self.navigator.register_viewport(owner, slot);
    }

    /// Read the address bar once and navigate to its current path
    pub async fn start(&self) -> Result<NavigationOutcome> {
        let path = self.address_bar.current();
        self.navigate(&path).await
    }

    /// Navigate to a URL path (mount prefix stripped before resolution)
    pub async fn navigate(&self, path: &str) -> Result<NavigationOutcome> {
        let relative = self.config.strip_root(path);
        let outcome = self
            .navigator
            .navigate(NavigationTarget::url(relative))
            .await?;
        Ok(outcome)
    }

    /// Navigate to a registered view by identity
    pub async fn navigate_to_view(
        &self,
        view: &str,
        params: HashMap<String, String>,
    ) -> Result<NavigationOutcome> {
        let outcome = self
            .navigator
            .navigate(NavigationTarget::View {
                view: view.to_string(),
                params,
            })
            .await?;
        Ok(outcome)
    }

    pub async fn go_back(&self, how: GoBack) -> Result<NavigationOutcome> {
        let outcome = self.navigator.go_back(how).await?;
        Ok(outcome)
    }

    pub fn active(&self, owner: &OwnerId) -> Option<RouteMatch> {
        self.navigator.active(owner)
    }

    pub fn history_len(&self) -> usize {
        self.navigator.history_len()
    }
}
