//! Strongly-typed key-value storage over pluggable backends.
//!
//! This library provides a uniform typed load/save interface over a closed
//! set of keys, with values in five categories (numbers, text,
//! integer-backed enumerations, string-backed enumerations, and arbitrary
//! serde-serializable values), plus a type-erased handle so callers can
//! depend on "a store" without naming the backend.
//!
//! Loads are total: `load_*(key, default)` always returns either the stored
//! value or the supplied default, never an error. Saves are best-effort and
//! surface nothing; the one failure that can occur (a structured value
//! refusing to serialize) degrades to a no-op, reported only through the
//! optional logging channel.
//!
//! # Quick Start
//!
//! ```ignore
//! use typed_kv::prelude::*;
//!
//! typed_kv::store_keys! {
//!     enum Pref {
//!         Count => "count",
//!         Name => "name",
//!     }
//! }
//!
//! // Pick a backend...
//! let store = NamespacedStore::new("app");
//!
//! store.save_number(Pref::Count, 3i64);
//! assert_eq!(store.load_number(Pref::Count, 0i64), 3);
//! assert_eq!(store.load_text(Pref::Name, "Guest".to_owned()), "Guest");
//!
//! // ...or erase it so callers don't see which one you picked.
//! let erased: AnyStore<Pref> = store.into_erased();
//! assert_eq!(erased.load_number(Pref::Count, 0i64), 3);
//! ```
//!
//! # Modules
//!
//! - [`store`] - The [`Store`] trait, the in-memory and namespaced backends,
//!   and the [`AnyStore`] erased handle
//! - [`value`] - Primitive value model and the category traits
//! - [`key`] - The [`StoreKey`] trait and the [`store_keys!`] macro
//! - [`medium`] - The external string-keyed [`Medium`] capability and its
//!   bundled implementations
//!
//! # Feature Flags
//!
//! - `logging` - Enable library-level tracing (consumers provide their own
//!   subscriber)

mod codec;
pub mod key;
mod logging;
pub mod medium;
pub mod prelude;
pub mod store;
pub mod value;

// Re-export the public surface at the crate root for convenience
pub use key::StoreKey;
pub use medium::{JsonFileMedium, Medium, MediumError, MemoryMedium};
pub use store::{AnyStore, MemoryStore, NamespacedStore, Store};
pub use value::{IntEnum, Number, Numeric, Primitive, StrEnum};
