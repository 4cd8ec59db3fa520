//! External backing media: string-keyed primitive storage.
//!
//! A [`Medium`] is the minimal get/set-by-string-key capability the
//! namespaced backend talks to. Serialization of structured values happens
//! above this layer; a medium only ever sees [`Primitive`] shapes.

mod file;

pub use file::{JsonFileMedium, MediumError};

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::value::Primitive;

/// Minimal string-keyed storage capability.
///
/// The read/write path is infallible by contract: a medium that cannot
/// complete a write loses it silently and diagnoses through the logging
/// channel. Durability, synchronization and crash behavior are the
/// medium's own.
pub trait Medium: Send + Sync {
    /// Read the primitive stored under `key`, if any.
    fn read(&self, key: &str) -> Option<Primitive>;

    /// Store `value` under `key`, replacing any prior primitive.
    fn write(&self, key: &str, value: Primitive);
}

/// Volatile in-process medium.
#[derive(Default)]
pub struct MemoryMedium {
    cells: RwLock<HashMap<String, Primitive>>,
}

impl MemoryMedium {
    /// Create an empty medium.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide shared instance, used by
    /// [`NamespacedStore::new`](crate::NamespacedStore::new).
    ///
    /// Every caller gets a handle to the same table; namespace prefixes
    /// are what keep unrelated stores apart on it.
    pub fn shared() -> Arc<MemoryMedium> {
        static SHARED: OnceLock<Arc<MemoryMedium>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(MemoryMedium::new())))
    }
}

impl Medium for MemoryMedium {
    fn read(&self, key: &str) -> Option<Primitive> {
        self.cells.read().get(key).cloned()
    }

    fn write(&self, key: &str, value: Primitive) {
        self.cells.write().insert(key.to_owned(), value);
    }
}
