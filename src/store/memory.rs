//! In-memory backend.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::key::StoreKey;
use crate::store::Store;
use crate::value::Primitive;

/// Process-memory backend with no durability.
///
/// Cells are keyed by the [`StoreKey`] value itself; the raw string form is
/// never consulted. There is no eviction and no capacity bound.
///
/// Seeded cells must already be in primitive form (the raw integer/string
/// for enumerated values, the serialized bytes for structured ones),
/// exactly what a later load for the same category expects.
pub struct MemoryStore<K: StoreKey> {
    cells: RwLock<HashMap<K, Primitive>>,
}

impl<K: StoreKey> MemoryStore<K> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            cells: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store pre-populated with primitive-form cells.
    pub fn with_seed(seed: impl IntoIterator<Item = (K, Primitive)>) -> Self {
        Self {
            cells: RwLock::new(seed.into_iter().collect()),
        }
    }
}

impl<K: StoreKey> Default for MemoryStore<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: StoreKey> Store<K> for MemoryStore<K> {
    fn load_raw(&self, key: K) -> Option<Primitive> {
        self.cells.read().get(&key).cloned()
    }

    fn save_raw(&self, key: K, value: Primitive) {
        self.cells.write().insert(key, value);
    }
}
