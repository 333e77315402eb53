//! # Navigator — the active-route state machine
//!
//! The [`Navigator`] owns the single "currently active route" slot and is the
//! only thing that writes it. Views read it through an explicit
//! [`watch::Receiver`] obtained from [`Navigator::subscribe`].
//!
//! ## States
//!
//! | State | Entered when |
//! |-------|--------------|
//! | [`NavState::Idle`] | The navigator is created. |
//! | [`NavState::Resolving`] | A navigation starts. The previous view is torn down. |
//! | [`NavState::Active`] | The URL matched and the view is available (loaded, for lazy routes). |
//! | [`NavState::NotFound`] | No route matched, or a lazy view failed to load. |
//!
//! ## Ordering
//!
//! Every navigation takes a generation number when it starts. Only the newest
//! generation may write its outcome; an older navigation that finishes late
//! (typically a slow lazy load) reports [`Transition::Superseded`] and leaves
//! the slot alone. The load itself is never aborted and still fills the view
//! cache.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use crate::error::{Fallback, NoRouteMatch, RouteError};
use crate::history::History;
use crate::lazy::ViewCache;
use crate::pattern::Params;
use crate::table::{Component, Resolution, RouteTable};

/// A view that is on screen, with its inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct Activation<V> {
    pub url: String,
    pub route: String,
    pub view: V,
    /// Matched parameters, present only for routes declared `with_props`
    pub props: Params,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NavState<V> {
    Idle,
    Resolving { url: String },
    Active(Activation<V>),
    NotFound { url: String, reason: Fallback },
}

/// Outcome of a single navigation.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition<V> {
    Activated(Activation<V>),
    NotFound(Fallback),
    /// A newer navigation started before this one finished
    Superseded,
}

pub struct Navigator<V> {
    table: RouteTable<V>,
    views: ViewCache<V>,
    slot: watch::Sender<NavState<V>>,
    generation: Mutex<u64>,
    history: Mutex<History>,
}

impl<V> Navigator<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(table: RouteTable<V>) -> Self {
        let (slot, _) = watch::channel(NavState::Idle);
        Self {
            table,
            views: ViewCache::new(),
            slot,
            generation: Mutex::new(0),
            history: Mutex::new(History::new()),
        }
    }

    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    /// Snapshot of the active-route slot.
    pub fn current(&self) -> NavState<V> {
        self.slot.borrow().clone()
    }

    /// Receiver that observes every write to the active-route slot.
    pub fn subscribe(&self) -> watch::Receiver<NavState<V>> {
        self.slot.subscribe()
    }

    /// Whether the lazy view of `route` has been loaded this session.
    pub fn is_loaded(&self, route: &str) -> bool {
        self.views.is_loaded(route)
    }

    /// Match `url` without changing any state.
    pub fn resolve(&self, url: &str) -> Result<Resolution<V>, NoRouteMatch> {
        self.table.resolve(url)
    }

    /// Push `url` onto the history and navigate to it.
    pub async fn navigate(&self, url: &str) -> Transition<V> {
        self.lock_history().push(url);
        self.go(url).await
    }

    /// Navigate to `url`, overwriting the current history entry.
    pub async fn replace(&self, url: &str) -> Transition<V> {
        self.lock_history().replace(url);
        self.go(url).await
    }

    /// Navigate to a named route.
    pub async fn navigate_to(
        &self,
        name: &str,
        params: &Params,
    ) -> Result<Transition<V>, RouteError> {
        let url = self.table.href(name, params)?;
        Ok(self.navigate(&url).await)
    }

    /// Step back in history. `None` at the oldest entry.
    pub async fn back(&self) -> Option<Transition<V>> {
        let url = self.lock_history().back()?.to_string();
        Some(self.go(&url).await)
    }

    /// Step forward in history. `None` at the newest entry.
    pub async fn forward(&self) -> Option<Transition<V>> {
        let url = self.lock_history().forward()?.to_string();
        Some(self.go(&url).await)
    }

    async fn go(&self, url: &str) -> Transition<V> {
        let generation = self.begin(url);

        let Resolution { route, params } = match self.table.resolve(url) {
            Ok(resolution) => resolution,
            Err(miss) => return self.finish(generation, url, Err(miss.into())),
        };
        tracing::debug!("Resolved {} to route {}", url, route.name());

        let view = match route.component() {
            Component::Eager(view) => Ok(view.clone()),
            Component::Lazy(loader) => self
                .views
                .get_or_load(route.name(), loader.as_ref())
                .await
                .map_err(|error| Fallback::ViewUnavailable {
                    route: route.name().to_string(),
                    error,
                }),
        };

        let outcome = view.map(|view| Activation {
            url: url.to_string(),
            route: route.name().to_string(),
            view,
            props: if route.props() { params } else { Params::new() },
        });
        self.finish(generation, url, outcome)
    }

    /// Start a navigation: bump the generation and tear down the active view.
    fn begin(&self, url: &str) -> u64 {
        let mut generation = self.lock_generation();
        *generation += 1;
        let previous = self.slot.send_replace(NavState::Resolving {
            url: url.to_string(),
        });
        if let NavState::Active(active) = previous {
            tracing::debug!("Leaving route {}", active.route);
        }
        *generation
    }

    /// Apply an outcome if no newer navigation has started since `generation`.
    fn finish(
        &self,
        generation: u64,
        url: &str,
        outcome: Result<Activation<V>, Fallback>,
    ) -> Transition<V> {
        let latest = self.lock_generation();
        if *latest != generation {
            tracing::debug!("Discarding superseded navigation to {}", url);
            return Transition::Superseded;
        }

        match outcome {
            Ok(activation) => {
                tracing::info!("Activated route {} for {}", activation.route, url);
                self.slot.send_replace(NavState::Active(activation.clone()));
                Transition::Activated(activation)
            }
            Err(reason) => {
                tracing::warn!("Showing fallback for {}: {}", url, reason);
                self.slot.send_replace(NavState::NotFound {
                    url: url.to_string(),
                    reason: reason.clone(),
                });
                Transition::NotFound(reason)
            }
        }
    }

    fn lock_generation(&self) -> MutexGuard<'_, u64> {
        self.generation.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_history(&self) -> MutexGuard<'_, History> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
