//! The typed store capability, its backends and its erased form.
//!
//! [`Store`] is the polymorphic load/save contract. Backends implement only
//! the raw primitive channel; the typed operations for the five value
//! categories are provided on top of it, so every backend (and the erased
//! wrapper) dispatches values identically.

mod erased;
mod memory;
mod namespaced;

pub use erased::AnyStore;
pub use memory::MemoryStore;
pub use namespaced::NamespacedStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::codec;
use crate::key::StoreKey;
use crate::logging;
use crate::value::{IntEnum, Numeric, Primitive, StrEnum};

/// Typed load/save over a backing medium, keyed by a [`StoreKey`] set.
///
/// Every `load_*` operation is total: it returns the reconstructed value,
/// or the caller-supplied default when no value is stored, the stored
/// primitive has the wrong shape, or reconstruction fails. It never panics
/// and never surfaces an error. Every `save_*` operation is best-effort and
/// returns nothing; the one failure that can occur (a structured value
/// refusing to encode) degrades to a no-op for that key.
///
/// For a single store instance used from one thread, a save followed by a
/// load of the same key observes the saved value. Concurrent savers get
/// whatever last-write-wins behavior the backing medium provides.
pub trait Store<K: StoreKey>: Send + Sync {
    /// Read whatever primitive is currently stored under `key`.
    fn load_raw(&self, key: K) -> Option<Primitive>;

    /// Replace the primitive stored under `key`.
    fn save_raw(&self, key: K, value: Primitive);

    /// Load a numeric value, or `default` when absent or not representable
    /// as `N`.
    fn load_number<N: Numeric>(&self, key: K, default: N) -> N
    where
        Self: Sized,
    {
        self.load_raw(key)
            .and_then(codec::decode_number)
            .unwrap_or(default)
    }

    /// Save a numeric value.
    fn save_number<N: Numeric>(&self, key: K, value: N)
    where
        Self: Sized,
    {
        self.save_raw(key, codec::encode_number(value));
    }

    /// Load a text value, or `default` when absent or not string-shaped.
    fn load_text(&self, key: K, default: String) -> String {
        self.load_raw(key)
            .and_then(codec::decode_text)
            .unwrap_or(default)
    }

    /// Save a text value.
    fn save_text(&self, key: K, value: impl Into<String>)
    where
        Self: Sized,
    {
        self.save_raw(key, codec::encode_text(value.into()));
    }

    /// Load an integer-backed enumeration case, or `default` when absent or
    /// the stored integer names no case.
    fn load_int_enum<E: IntEnum>(&self, key: K, default: E) -> E
    where
        Self: Sized,
    {
        self.load_raw(key)
            .and_then(codec::decode_int_enum)
            .unwrap_or(default)
    }

    /// Save an integer-backed enumeration case as its raw integer.
    fn save_int_enum<E: IntEnum>(&self, key: K, value: E)
    where
        Self: Sized,
    {
        self.save_raw(key, codec::encode_int_enum(&value));
    }

    /// Load a string-backed enumeration case, or `default` when absent or
    /// the stored string names no case.
    fn load_str_enum<E: StrEnum>(&self, key: K, default: E) -> E
    where
        Self: Sized,
    {
        self.load_raw(key)
            .and_then(codec::decode_str_enum)
            .unwrap_or(default)
    }

    /// Save a string-backed enumeration case as its raw string.
    fn save_str_enum<E: StrEnum>(&self, key: K, value: E)
    where
        Self: Sized,
    {
        self.save_raw(key, codec::encode_str_enum(&value));
    }

    /// Load a structured value, or `default` when absent or the stored
    /// bytes do not decode as `T`.
    fn load_object<T: DeserializeOwned>(&self, key: K, default: T) -> T
    where
        Self: Sized,
    {
        match self.load_raw(key) {
            Some(stored) => codec::decode_object(stored).unwrap_or_else(|| {
                logging::debug!(
                    "stored value for key '{}' did not decode, returning default",
                    key.raw()
                );
                default
            }),
            None => default,
        }
    }

    /// Save a structured value as serialized bytes.
    ///
    /// A value that fails to encode leaves whatever was previously stored
    /// under `key` untouched; the failure is reported through the logging
    /// channel only.
    fn save_object<T: Serialize>(&self, key: K, value: &T)
    where
        Self: Sized,
    {
        match codec::encode_object(value) {
            Ok(encoded) => self.save_raw(key, encoded),
            Err(err) => logging::warn!(
                "value for key '{}' failed to encode, keeping prior contents: {}",
                key.raw(),
                err
            ),
        }
    }

    /// Wrap this store into its type-erased form.
    fn into_erased(self) -> AnyStore<K>
    where
        Self: Sized + 'static,
    {
        AnyStore::new(self)
    }
}
