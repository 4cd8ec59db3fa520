//! Convenient re-exports for common usage patterns.
//!
//! This module provides a single import to bring all commonly used types
//! into scope.
//!
//! # Example
//!
//! ```ignore
//! use typed_kv::prelude::*;
//!
//! let store = NamespacedStore::new("app");
//! store.save_number(Pref::Count, 3i64);
//! let count = store.load_number(Pref::Count, 0i64);
//! ```

pub use crate::key::StoreKey;
pub use crate::medium::{JsonFileMedium, Medium, MediumError, MemoryMedium};
pub use crate::store::{AnyStore, MemoryStore, NamespacedStore, Store};
pub use crate::store_keys;
pub use crate::value::{IntEnum, Number, Numeric, Primitive, StrEnum};
