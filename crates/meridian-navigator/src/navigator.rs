//! Navigation orchestration
//!
//! One logical navigation at a time: a newer `navigate` call supersedes an
//! in-flight one during Gating (the superseded navigation settles as
//! Cancelled). Once Committing starts, a navigation can no longer be
//! cancelled; it can only fail.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

use meridian_history::{History, HistoryEntry};
use meridian_recognizer::{OwnerId, Recognizer, RouteMatch};

use crate::address::{AddressBar, MemoryAddressBar};
use crate::error::NavigatorError;
use crate::metadata::{MetadataSink, NullMetadata};
use crate::registry::ViewRegistry;
use crate::slot::ViewSlot;
use crate::Result;

/// What to navigate to: a URL path, or a registered view by identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NavigationTarget {
    Url(String),
    View {
        view: String,
        params: HashMap<String, String>,
    },
}

impl NavigationTarget {
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    pub fn view(view: impl Into<String>) -> Self {
        Self::View {
            view: view.into(),
            params: HashMap::new(),
        }
    }
}

/// Settled result of a navigation. The two routine non-success outcomes are
/// plain values a caller branches on, not errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NavigationOutcome {
    /// Every gate passed and every commit call completed
    Committed(RouteMatch),
    /// A gate declined, or a newer navigation superseded this one
    Cancelled,
    /// No registered pattern matched; configure and retry
    NotConfigured,
}

/// Backward navigation addressing: a count of committed entries, or the most
/// recent entry hosting a view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GoBack {
    Length(usize),
    View(String),
}

/// Lifecycle phase of the most recent navigation, for observability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Resolving,
    Gating,
    Committing,
    Settled,
}

type Viewport = (OwnerId, Arc<dyn ViewSlot>);

pub struct Navigator {
    recognizer: Recognizer,
    /// Registration order is the slot chain order, outermost first
    viewports: RwLock<Vec<Viewport>>,
    history: RwLock<History>,
    /// Active match per owner, updated only on commit success
    active: RwLock<HashMap<OwnerId, RouteMatch>>,
    address_bar: Arc<dyn AddressBar>,
    metadata: Arc<dyn MetadataSink>,
    registry: Option<Arc<ViewRegistry>>,
    /// Supersede policy: each navigation takes a generation; an older
    /// generation observed at a gating suspension point means cancelled
    generation: AtomicU64,
    /// Serializes the commit phase across navigations
    commit_lock: Mutex<()>,
    phase: RwLock<Phase>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::with_collaborators(Arc::new(MemoryAddressBar::default()), Arc::new(NullMetadata))
    }

    pub fn with_collaborators(
        address_bar: Arc<dyn AddressBar>,
        metadata: Arc<dyn MetadataSink>,
    ) -> Self {
        Self {
            recognizer: Recognizer::new(),
            viewports: RwLock::new(Vec::new()),
            history: RwLock::new(History::new()),
            active: RwLock::new(HashMap::new()),
            address_bar,
            metadata,
            registry: None,
            generation: AtomicU64::new(0),
            commit_lock: Mutex::new(()),
            phase: RwLock::new(Phase::Idle),
        }
    }

    /// Attach a view factory registry. When present, view-identity targets
    /// are validated against it during Resolving.
    pub fn attach_registry(&mut self, registry: Arc<ViewRegistry>) {
        self.registry = Some(registry);
    }

    /// Register `(pattern, view)` routes for an owner. Re-registering an
    /// identical pattern replaces the prior target view. Fails on malformed
    /// patterns (duplicate capture name, adjacent splats).
    pub fn configure<I, P, V>(&self, owner: &OwnerId, routes: I) -> Result<()>
    where
        I: IntoIterator<Item = (P, V)>,
        P: AsRef<str>,
        V: AsRef<str>,
    {
        for (pattern, view) in routes {
            self.recognizer
                .register(owner, pattern.as_ref(), view.as_ref())?;
        }
        Ok(())
    }

    /// Associate a view slot with an owner identity. The navigator holds a
    /// non-owning reference used only for lifecycle dispatch; registration
    /// order defines the chain order, outermost first.
    pub fn register_viewport(&self, owner: &OwnerId, slot: Arc<dyn ViewSlot>) {
        let mut viewports = self.viewports.write();
        if let Some(existing) = viewports.iter_mut().find(|(id, _)| id == owner) {
            existing.1 = slot;
        } else {
            viewports.push((owner.clone(), slot));
        }
        tracing::debug!(owner = %owner, "Registered viewport");
    }

    /// Read the address bar once and navigate to its current path
    pub async fn start(&self) -> Result<NavigationOutcome> {
        let path = self.address_bar.current();
        self.navigate(NavigationTarget::Url(path)).await
    }

    /// An externally triggered path change enters as a plain URL navigation
    pub async fn handle_address_change(&self, path: &str) -> Result<NavigationOutcome> {
        self.navigate(NavigationTarget::Url(path.to_string())).await
    }

    /// Drive one navigation through Resolving, Gating and Committing.
    pub async fn navigate(&self, target: NavigationTarget) -> Result<NavigationOutcome> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.navigate_inner(target, generation, None).await
    }

    /// Navigate backward to a committed history entry, then drop the
    /// forward entries being abandoned.
    pub async fn go_back(&self, how: GoBack) -> Result<NavigationOutcome> {
        let (index, url) = {
            let history = self.history.read();
            let index = match &how {
                GoBack::Length(n) => *n,
                GoBack::View(view) => history
                    .index_of(view)
                    .ok_or(NavigatorError::NoHistoryEntry)?,
            };
            let entry = history.get(index).ok_or(NavigatorError::NoHistoryEntry)?;
            (index, entry.url.clone())
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.navigate_inner(NavigationTarget::Url(url), generation, Some(index))
            .await
    }

    /// Active match for an owner, if it has committed at least once
    pub fn active(&self, owner: &OwnerId) -> Option<RouteMatch> {
        self.active.read().get(owner).cloned()
    }

    pub fn history_len(&self) -> usize {
        self.history.read().len()
    }

    /// Committed entries, most recent first
    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        self.history.read().iter().cloned().collect()
    }

    pub fn phase(&self) -> Phase {
        *self.phase.read()
    }

    async fn navigate_inner(
        &self,
        target: NavigationTarget,
        generation: u64,
        back_to: Option<usize>,
    ) -> Result<NavigationOutcome> {
        let nav_id = Uuid::new_v4();
        self.set_phase(Phase::Resolving);

        let path = match target {
            NavigationTarget::Url(url) => normalize_path(&url),
            NavigationTarget::View { view, params } => {
                if let Some(registry) = &self.registry {
                    if !registry.contains(&view) {
                        return Err(NavigatorError::UnknownView(view));
                    }
                }
                let spec = self.pattern_for_view(&view)?;
                normalize_path(&spec.generate(&params)?)
            }
        };
        tracing::debug!(nav_id = %nav_id, path = %path, "Resolving navigation");

        // Owners whose pattern table resolves the path form the affected
        // chain, in viewport registration order (outermost first)
        let chain: Vec<(OwnerId, Arc<dyn ViewSlot>, RouteMatch)> = {
            let viewports = self.viewports.read();
            viewports
                .iter()
                .filter_map(|(owner, slot)| {
                    self.recognizer
                        .resolve(owner, &path)
                        .map(|matched| (owner.clone(), Arc::clone(slot), matched))
                })
                .collect()
        };

        // The outermost match drives history and the address bar; with no
        // viewports registered the navigator still resolves against the root
        let primary = match chain.first().map(|(_, _, m)| m.clone()).or_else(|| {
            self.recognizer.resolve(&OwnerId::root(), &path)
        }) {
            Some(matched) => matched,
            None => {
                tracing::debug!(nav_id = %nav_id, path = %path, "No route configured");
                self.set_phase(Phase::Settled);
                return Ok(NavigationOutcome::NotConfigured);
            }
        };

        // Gating: strictly sequential, current-from first, then
        // prospective-to; any refusal or supersession cancels everything
        self.set_phase(Phase::Gating);
        for (owner, slot, matched) in &chain {
            if self.superseded(generation) {
                return self.cancel(nav_id, "superseded during gating");
            }
            if !slot.can_navigate_from().await {
                tracing::warn!(nav_id = %nav_id, owner = %owner, "Navigation declined by active view");
                return self.cancel(nav_id, "can_navigate_from declined");
            }
            if self.superseded(generation) {
                return self.cancel(nav_id, "superseded during gating");
            }
            if !slot.can_navigate_to(matched).await {
                tracing::warn!(nav_id = %nav_id, owner = %owner, view = %matched.view, "Navigation declined by target view");
                return self.cancel(nav_id, "can_navigate_to declined");
            }
        }

        // Committing: serialized across navigations; last supersession
        // checkpoint sits before the point of no return
        let _commit = self.commit_lock.lock().await;
        if self.superseded(generation) {
            return self.cancel(nav_id, "superseded before commit");
        }
        self.set_phase(Phase::Committing);

        for (owner, slot, matched) in &chain {
            slot.navigate_from()
                .await
                .map_err(|source| NavigatorError::Commit {
                    owner: owner.to_string(),
                    source,
                })?;
            slot.navigate_to(matched)
                .await
                .map_err(|source| NavigatorError::Commit {
                    owner: owner.to_string(),
                    source,
                })?;
        }

        // All commit calls completed: now, and only now, touch shared state
        {
            let mut history = self.history.write();
            match back_to {
                Some(index) => {
                    history.slice(index);
                }
                None => {
                    history.push(
                        HistoryEntry::new(path.clone(), primary.view.clone())
                            .with_params(primary.params.clone())
                            .with_query(primary.query.clone()),
                    );
                }
            }
        }
        {
            let mut active = self.active.write();
            for (owner, _, matched) in &chain {
                active.insert(owner.clone(), matched.clone());
            }
        }
        self.address_bar.record(&path);
        self.metadata.committed(&primary);
        self.set_phase(Phase::Settled);

        tracing::info!(nav_id = %nav_id, url = %path, view = %primary.view, "Navigation committed");
        Ok(NavigationOutcome::Committed(primary))
    }

    fn pattern_for_view(&self, view: &str) -> Result<meridian_segments::PatternSpec> {
        if let Some(spec) = self.recognizer.pattern_for_view(&OwnerId::root(), view) {
            return Ok(spec);
        }
        let viewports = self.viewports.read();
        for (owner, _) in viewports.iter() {
            if let Some(spec) = self.recognizer.pattern_for_view(owner, view) {
                return Ok(spec);
            }
        }
        Err(NavigatorError::UnknownView(view.to_string()))
    }

    fn superseded(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) != generation
    }

    fn cancel(&self, nav_id: Uuid, reason: &str) -> Result<NavigationOutcome> {
        tracing::debug!(nav_id = %nav_id, reason, "Navigation cancelled");
        self.set_phase(Phase::Settled);
        Ok(NavigationOutcome::Cancelled)
    }

    fn set_phase(&self, phase: Phase) {
        *self.phase.write() = phase;
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::AtomicBool;
    use std::time::Duration;

    use async_trait::async_trait;
    use parking_lot::Mutex as SyncMutex;

    use crate::slot::SlotResult;

    #[derive(Default)]
    struct MockSlot {
        calls: SyncMutex<Vec<String>>,
        decline_from: AtomicBool,
        decline_to: AtomicBool,
        fail_navigate_to: AtomicBool,
        gate_delay: Option<Duration>,
    }

    impl MockSlot {
        fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        fn slow(delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                gate_delay: Some(delay),
                ..Self::default()
            })
        }

        fn record(&self, call: &str) {
            self.calls.lock().push(call.to_string());
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl ViewSlot for MockSlot {
        async fn can_navigate_from(&self) -> bool {
            if let Some(delay) = self.gate_delay {
                tokio::time::sleep(delay).await;
            }
            self.record("can_navigate_from");
            !self.decline_from.load(Ordering::SeqCst)
        }

        async fn can_navigate_to(&self, _target: &RouteMatch) -> bool {
            self.record("can_navigate_to");
            !self.decline_to.load(Ordering::SeqCst)
        }

        async fn navigate_from(&self) -> SlotResult {
            self.record("navigate_from");
            Ok(())
        }

        async fn navigate_to(&self, target: &RouteMatch) -> SlotResult {
            self.record("navigate_to");
            if self.fail_navigate_to.load(Ordering::SeqCst) {
                return Err(format!("failed to activate `{}`", target.view).into());
            }
            Ok(())
        }
    }

    fn root() -> OwnerId {
        OwnerId::root()
    }

    #[tokio::test]
    async fn test_not_configured_then_configure_succeeds() {
        let navigator = Navigator::new();
        let slot = MockSlot::new();
        navigator.register_viewport(&root(), slot.clone());

        let outcome = navigator
            .navigate(NavigationTarget::url("/posts"))
            .await
            .unwrap();
        assert_eq!(outcome, NavigationOutcome::NotConfigured);
        assert!(slot.calls().is_empty());

        navigator.configure(&root(), [("/posts", "posts")]).unwrap();

        let outcome = navigator
            .navigate(NavigationTarget::url("/posts"))
            .await
            .unwrap();
        match outcome {
            NavigationOutcome::Committed(matched) => assert_eq!(matched.view, "posts"),
            other => panic!("Expected Committed, got {:?}", other),
        }
        assert_eq!(
            slot.calls(),
            [
                "can_navigate_from",
                "can_navigate_to",
                "navigate_from",
                "navigate_to"
            ]
        );
        assert_eq!(navigator.history_len(), 1);
        assert_eq!(navigator.active(&root()).unwrap().view, "posts");
    }

    #[tokio::test]
    async fn test_declined_gate_cancels_without_mutation() {
        let navigator = Navigator::new();
        navigator.configure(&root(), [("/posts", "posts")]).unwrap();

        let slot = MockSlot::new();
        slot.decline_to.store(true, Ordering::SeqCst);
        navigator.register_viewport(&root(), slot.clone());

        let outcome = navigator
            .navigate(NavigationTarget::url("/posts"))
            .await
            .unwrap();
        assert_eq!(outcome, NavigationOutcome::Cancelled);

        // No commit call ran, no state changed
        assert_eq!(slot.calls(), ["can_navigate_from", "can_navigate_to"]);
        assert_eq!(navigator.history_len(), 0);
        assert!(navigator.active(&root()).is_none());
    }

    #[tokio::test]
    async fn test_navigate_by_view_identity() {
        let navigator = Navigator::new();
        navigator
            .configure(&root(), [("/posts/:id", "post")])
            .unwrap();
        navigator.register_viewport(&root(), MockSlot::new());

        let outcome = navigator
            .navigate(NavigationTarget::View {
                view: "post".to_string(),
                params: HashMap::from([("id".to_string(), "42".to_string())]),
            })
            .await
            .unwrap();

        match outcome {
            NavigationOutcome::Committed(matched) => {
                assert_eq!(matched.view, "post");
                assert_eq!(matched.params["id"], "42");
            }
            other => panic!("Expected Committed, got {:?}", other),
        }

        let entries = navigator.history_entries();
        assert_eq!(entries[0].url, "/posts/42");
    }

    #[tokio::test]
    async fn test_unknown_view_is_an_error() {
        let navigator = Navigator::new();
        let err = navigator
            .navigate(NavigationTarget::view("nowhere"))
            .await
            .unwrap_err();
        assert!(matches!(err, NavigatorError::UnknownView(_)));
    }

    #[tokio::test]
    async fn test_commit_failure_is_fatal() {
        let navigator = Navigator::new();
        navigator.configure(&root(), [("/posts", "posts")]).unwrap();

        let slot = MockSlot::new();
        slot.fail_navigate_to.store(true, Ordering::SeqCst);
        navigator.register_viewport(&root(), slot.clone());

        let err = navigator
            .navigate(NavigationTarget::url("/posts"))
            .await
            .unwrap_err();
        assert!(matches!(err, NavigatorError::Commit { .. }));

        // navigate_from already ran; no rollback, but history stays clean
        assert_eq!(
            slot.calls(),
            [
                "can_navigate_from",
                "can_navigate_to",
                "navigate_from",
                "navigate_to"
            ]
        );
        assert_eq!(navigator.history_len(), 0);
    }

    async fn navigate_posts(navigator: &Navigator, count: usize) {
        for i in 1..=count {
            let outcome = navigator
                .navigate(NavigationTarget::url(format!("/posts/post{}", i)))
                .await
                .unwrap();
            assert!(matches!(outcome, NavigationOutcome::Committed(_)));
        }
    }

    fn posts_navigator() -> (Navigator, Arc<MockSlot>) {
        let navigator = Navigator::new();
        navigator
            .configure(&root(), [("/posts/:id", "posts")])
            .unwrap();
        let slot = MockSlot::new();
        navigator.register_viewport(&root(), slot.clone());
        (navigator, slot)
    }

    #[tokio::test]
    async fn test_go_back_by_length() {
        let (navigator, _) = posts_navigator();
        navigate_posts(&navigator, 8).await;
        assert_eq!(navigator.history_len(), 8);

        let outcome = navigator.go_back(GoBack::Length(2)).await.unwrap();
        match outcome {
            NavigationOutcome::Committed(matched) => {
                assert_eq!(matched.params["id"], "post6")
            }
            other => panic!("Expected Committed, got {:?}", other),
        }

        // post7 and post8 were abandoned
        assert_eq!(navigator.history_len(), 6);
        let entries = navigator.history_entries();
        assert_eq!(entries[0].url, "/posts/post6");
        assert_eq!(entries[1].url, "/posts/post5");
    }

    #[tokio::test]
    async fn test_go_back_by_view_agrees_with_length() {
        let navigator = Navigator::new();
        navigator
            .configure(
                &root(),
                (1..=8).map(|i| (format!("/post{}", i), format!("post{}", i))),
            )
            .unwrap();
        navigator.register_viewport(&root(), MockSlot::new());

        for i in 1..=8 {
            navigator
                .navigate(NavigationTarget::url(format!("/post{}", i)))
                .await
                .unwrap();
        }

        // post6 is exactly 2 entries back
        let outcome = navigator
            .go_back(GoBack::View("post6".to_string()))
            .await
            .unwrap();
        match outcome {
            NavigationOutcome::Committed(matched) => assert_eq!(matched.view, "post6"),
            other => panic!("Expected Committed, got {:?}", other),
        }
        assert_eq!(navigator.history_len(), 6);
        assert_eq!(navigator.history_entries()[0].view, "post6");
    }

    #[tokio::test]
    async fn test_go_back_past_stack_is_an_error() {
        let (navigator, _) = posts_navigator();
        navigate_posts(&navigator, 1).await;

        let err = navigator.go_back(GoBack::Length(5)).await.unwrap_err();
        assert!(matches!(err, NavigatorError::NoHistoryEntry));

        let err = navigator
            .go_back(GoBack::View("nowhere".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, NavigatorError::NoHistoryEntry));
    }

    #[tokio::test]
    async fn test_second_navigation_supersedes_first() {
        let navigator = Arc::new(Navigator::new());
        navigator
            .configure(&root(), [("/a", "a"), ("/b", "b")])
            .unwrap();
        let slot = MockSlot::slow(Duration::from_millis(50));
        navigator.register_viewport(&root(), slot);

        let first = {
            let navigator = Arc::clone(&navigator);
            tokio::spawn(async move { navigator.navigate(NavigationTarget::url("/a")).await })
        };
        // Let the first navigation reach its gate
        tokio::time::sleep(Duration::from_millis(5)).await;

        let second = navigator
            .navigate(NavigationTarget::url("/b"))
            .await
            .unwrap();
        assert!(matches!(second, NavigationOutcome::Committed(_)));

        let first = first.await.unwrap().unwrap();
        assert_eq!(first, NavigationOutcome::Cancelled);

        // Only the superseding navigation committed
        assert_eq!(navigator.history_len(), 1);
        assert_eq!(navigator.history_entries()[0].view, "b");
    }

    #[tokio::test]
    async fn test_nested_slots_gate_and_commit_outermost_first() {
        let navigator = Navigator::new();
        navigator
            .configure(&root(), [("/app/*rest", "shell")])
            .unwrap();
        navigator
            .configure(&OwnerId::new("detail"), [("/app/posts/:id", "post")])
            .unwrap();

        let outer = MockSlot::new();
        let inner = MockSlot::new();
        navigator.register_viewport(&root(), outer.clone());
        navigator.register_viewport(&OwnerId::new("detail"), inner.clone());

        let outcome = navigator
            .navigate(NavigationTarget::url("/app/posts/9"))
            .await
            .unwrap();
        match outcome {
            // The outermost match drives the outcome
            NavigationOutcome::Committed(matched) => assert_eq!(matched.view, "shell"),
            other => panic!("Expected Committed, got {:?}", other),
        }

        // Outer slot gated and committed before the inner one started
        assert_eq!(
            outer.calls(),
            [
                "can_navigate_from",
                "can_navigate_to",
                "navigate_from",
                "navigate_to"
            ]
        );
        assert_eq!(inner.calls().len(), 4);
        assert_eq!(navigator.active(&OwnerId::new("detail")).unwrap().view, "post");
        assert_eq!(navigator.active(&root()).unwrap().view, "shell");
    }

    #[tokio::test]
    async fn test_inner_gate_refusal_leaves_outer_untouched() {
        let navigator = Navigator::new();
        navigator
            .configure(&root(), [("/app/*rest", "shell")])
            .unwrap();
        navigator
            .configure(&OwnerId::new("detail"), [("/app/posts/:id", "post")])
            .unwrap();

        let outer = MockSlot::new();
        let inner = MockSlot::new();
        inner.decline_to.store(true, Ordering::SeqCst);
        navigator.register_viewport(&root(), outer.clone());
        navigator.register_viewport(&OwnerId::new("detail"), inner);

        let outcome = navigator
            .navigate(NavigationTarget::url("/app/posts/9"))
            .await
            .unwrap();
        assert_eq!(outcome, NavigationOutcome::Cancelled);

        // Outer slot was gated but never committed
        assert_eq!(outer.calls(), ["can_navigate_from", "can_navigate_to"]);
        assert_eq!(navigator.history_len(), 0);
    }

    #[tokio::test]
    async fn test_address_change_enters_as_url_navigation() {
        let navigator = Navigator::new();
        navigator
            .configure(&root(), [("/posts/:id", "post")])
            .unwrap();
        let slot = MockSlot::new();
        navigator.register_viewport(&root(), slot.clone());

        assert_eq!(navigator.phase(), Phase::Idle);

        let outcome = navigator.handle_address_change("/posts/5").await.unwrap();
        match outcome {
            NavigationOutcome::Committed(matched) => assert_eq!(matched.params["id"], "5"),
            other => panic!("Expected Committed, got {:?}", other),
        }
        assert_eq!(navigator.phase(), Phase::Settled);
        assert_eq!(slot.calls().len(), 4);
    }

    #[tokio::test]
    async fn test_start_reads_address_bar() {
        let address_bar = Arc::new(MemoryAddressBar::new("/posts/7"));
        let navigator =
            Navigator::with_collaborators(address_bar.clone(), Arc::new(NullMetadata));
        navigator
            .configure(&root(), [("/posts/:id", "post")])
            .unwrap();
        navigator.register_viewport(&root(), MockSlot::new());

        let outcome = navigator.start().await.unwrap();
        match outcome {
            NavigationOutcome::Committed(matched) => assert_eq!(matched.params["id"], "7"),
            other => panic!("Expected Committed, got {:?}", other),
        }
        assert_eq!(address_bar.current(), "/posts/7");
    }

    #[tokio::test]
    async fn test_registry_validates_view_targets() {
        let registry = Arc::new(ViewRegistry::new());
        registry.register("post", || Box::new(()));

        let mut navigator = Navigator::new();
        navigator.attach_registry(registry);
        navigator
            .configure(&root(), [("/posts/:id", "post")])
            .unwrap();
        navigator.register_viewport(&root(), MockSlot::new());

        let err = navigator
            .navigate(NavigationTarget::view("unregistered"))
            .await
            .unwrap_err();
        assert!(matches!(err, NavigatorError::UnknownView(_)));

        let outcome = navigator
            .navigate(NavigationTarget::View {
                view: "post".to_string(),
                params: HashMap::from([("id".to_string(), "3".to_string())]),
            })
            .await
            .unwrap();
        assert!(matches!(outcome, NavigationOutcome::Committed(_)));
    }

    #[tokio::test]
    async fn test_metadata_sink_invoked_on_commit_only() {
        struct RecordingSink {
            committed: SyncMutex<Vec<String>>,
        }
        impl MetadataSink for RecordingSink {
            fn committed(&self, route: &RouteMatch) {
                self.committed.lock().push(route.view.clone());
            }
        }

        let sink = Arc::new(RecordingSink {
            committed: SyncMutex::new(Vec::new()),
        });
        let navigator = Navigator::with_collaborators(
            Arc::new(MemoryAddressBar::default()),
            sink.clone(),
        );
        navigator.configure(&root(), [("/posts", "posts")]).unwrap();

        let declining = MockSlot::new();
        declining.decline_from.store(true, Ordering::SeqCst);
        navigator.register_viewport(&root(), declining);

        navigator
            .navigate(NavigationTarget::url("/posts"))
            .await
            .unwrap();
        assert!(sink.committed.lock().is_empty());

        navigator.register_viewport(&root(), MockSlot::new());
        navigator
            .navigate(NavigationTarget::url("/posts"))
            .await
            .unwrap();
        assert_eq!(*sink.committed.lock(), ["posts".to_string()]);
    }
}
