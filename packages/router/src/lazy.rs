//! # Lazily loaded views
//!
//! Some views are not needed until their route is first visited. Their
//! implementation is fetched by a [`ViewLoader`] and kept in a [`ViewCache`]
//! keyed by route name.
//!
//! The cache is single-flight: the first request for a key starts the load,
//! every request arriving while it is in flight awaits the same shared future,
//! and a successful result is stored for the rest of the session. A failed
//! load is dropped from the cache so the next request starts a fresh attempt.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use futures::future::{BoxFuture, FutureExt, Shared};

use crate::error::ViewLoadError;

/// Fetches the implementation of a lazily loaded view.
pub trait ViewLoader<V>: Send + Sync {
    fn load(&self) -> BoxFuture<'static, Result<V, ViewLoadError>>;
}

impl<V, F, Fut> ViewLoader<V> for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<V, ViewLoadError>> + Send + 'static,
{
    fn load(&self) -> BoxFuture<'static, Result<V, ViewLoadError>> {
        self().boxed()
    }
}

type LoadFuture<V> = Shared<BoxFuture<'static, Result<V, ViewLoadError>>>;

enum Slot<V> {
    Loading(LoadFuture<V>),
    Ready(V),
}

/// Single-flight cache of loaded views, keyed by route name.
pub struct ViewCache<V> {
    slots: Mutex<HashMap<String, Slot<V>>>,
}

impl<V> Default for ViewCache<V> {
    fn default() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }
}

impl<V> ViewCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached view for `key`, joining or starting its load.
    pub async fn get_or_load(
        &self,
        key: &str,
        loader: &dyn ViewLoader<V>,
    ) -> Result<V, ViewLoadError> {
        let pending = {
            let mut slots = self.lock();
            match slots.get(key) {
                Some(Slot::Ready(view)) => return Ok(view.clone()),
                Some(Slot::Loading(pending)) => {
                    tracing::debug!("Joining in-flight load of view {}", key);
                    pending.clone()
                }
                None => {
                    tracing::debug!("Loading view {}", key);
                    let pending = loader.load().shared();
                    slots.insert(key.to_string(), Slot::Loading(pending.clone()));
                    pending
                }
            }
        };

        let result = pending.clone().await;

        let mut slots = self.lock();
        // Only the waiter still looking at this exact load may settle the slot.
        let current = matches!(
            slots.get(key),
            Some(Slot::Loading(slot)) if slot.ptr_eq(&pending)
        );
        if current {
            match &result {
                Ok(view) => {
                    slots.insert(key.to_string(), Slot::Ready(view.clone()));
                }
                Err(e) => {
                    tracing::warn!("Failed to load view {}: {}", key, e);
                    slots.remove(key);
                }
            }
        }
        result
    }

    /// Whether `key` has finished loading successfully.
    pub fn is_loaded(&self, key: &str) -> bool {
        matches!(self.lock().get(key), Some(Slot::Ready(_)))
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Slot<V>>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
