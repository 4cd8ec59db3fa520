//! Namespaced backend over an external medium.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::key::StoreKey;
use crate::logging;
use crate::medium::{Medium, MemoryMedium};
use crate::store::Store;
use crate::value::Primitive;

/// Separator between the namespace prefix and a key's raw form.
const KEY_SEPARATOR: char = '.';

/// Backend over an external string-keyed medium, namespaced by prefix.
///
/// Every access addresses the medium at `"<prefix>.<raw>"`, so two stores
/// with distinct prefixes never observe each other's values on a shared
/// medium, and two distinct keys never collide within one store. The
/// prefix is caller-supplied and expected to be non-empty.
///
/// Durability, synchronization and crash behavior are whatever the medium
/// provides; this backend adds no buffering or write-ahead of its own.
pub struct NamespacedStore<K: StoreKey> {
    medium: Arc<dyn Medium>,
    prefix: String,
    keys: PhantomData<fn(K)>,
}

impl<K: StoreKey> NamespacedStore<K> {
    /// Create a store over the process-wide shared medium.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_medium(MemoryMedium::shared(), prefix)
    }

    /// Create a store over an explicit medium handle.
    pub fn with_medium(medium: Arc<dyn Medium>, prefix: impl Into<String>) -> Self {
        Self {
            medium,
            prefix: prefix.into(),
            keys: PhantomData,
        }
    }

    /// The fully-qualified external key for `key`.
    fn qualified(&self, key: K) -> String {
        format!("{}{}{}", self.prefix, KEY_SEPARATOR, key.raw())
    }
}

impl<K: StoreKey> Store<K> for NamespacedStore<K> {
    fn load_raw(&self, key: K) -> Option<Primitive> {
        self.medium.read(&self.qualified(key))
    }

    fn save_raw(&self, key: K, value: Primitive) {
        let qualified = self.qualified(key);
        logging::debug!("saving '{}'", qualified);
        self.medium.write(&qualified, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    crate::store_keys! {
        enum Pref {
            Count => "count",
            Name => "name",
        }
    }

    #[test]
    fn test_external_key_layout() {
        let medium = Arc::new(MemoryMedium::new());
        let store: NamespacedStore<Pref> =
            NamespacedStore::with_medium(Arc::clone(&medium) as Arc<dyn Medium>, "app");

        store.save_raw(Pref::Count, Primitive::Number(Number::Int(3)));

        assert_eq!(
            medium.read("app.count"),
            Some(Primitive::Number(Number::Int(3)))
        );
        assert_eq!(medium.read("count"), None);
    }

    #[test]
    fn test_prefix_isolation_on_shared_medium() {
        let medium: Arc<dyn Medium> = Arc::new(MemoryMedium::new());
        let left: NamespacedStore<Pref> = NamespacedStore::with_medium(Arc::clone(&medium), "left");
        let right: NamespacedStore<Pref> =
            NamespacedStore::with_medium(Arc::clone(&medium), "right");

        left.save_raw(Pref::Name, Primitive::Text("alice".to_owned()));

        assert_eq!(
            left.load_raw(Pref::Name),
            Some(Primitive::Text("alice".to_owned()))
        );
        assert_eq!(right.load_raw(Pref::Name), None);
    }

    #[test]
    fn test_distinct_keys_do_not_collide() {
        let medium: Arc<dyn Medium> = Arc::new(MemoryMedium::new());
        let store: NamespacedStore<Pref> = NamespacedStore::with_medium(medium, "app");

        store.save_raw(Pref::Count, Primitive::Number(Number::Int(1)));
        store.save_raw(Pref::Name, Primitive::Text("n".to_owned()));

        assert_eq!(
            store.load_raw(Pref::Count),
            Some(Primitive::Number(Number::Int(1)))
        );
        assert_eq!(store.load_raw(Pref::Name), Some(Primitive::Text("n".to_owned())));
    }
}
