//! Type-erased store handle.

use std::sync::Arc;

use crate::key::StoreKey;
use crate::store::Store;
use crate::value::Primitive;

/// A fixed-type handle over any [`Store`] backend.
///
/// Lets a caller hold "a store" without naming the concrete backend in its
/// own types, e.g. for dependency injection or swapping a persistent store
/// for an in-memory one in tests. Operations forward unchanged to the
/// wrapped store, so behavior through the handle is observationally
/// identical to calling the backend directly.
///
/// The wrapped backend is fixed at construction. Cloning is cheap and
/// clones observe the same cells.
pub struct AnyStore<K: StoreKey> {
    inner: Arc<dyn Store<K>>,
}

impl<K: StoreKey> AnyStore<K> {
    /// Wrap a concrete store.
    pub fn new(store: impl Store<K> + 'static) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }
}

impl<K: StoreKey> Clone for AnyStore<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: StoreKey> Store<K> for AnyStore<K> {
    fn load_raw(&self, key: K) -> Option<Primitive> {
        self.inner.load_raw(key)
    }

    fn save_raw(&self, key: K, value: Primitive) {
        self.inner.save_raw(key, value);
    }
}
