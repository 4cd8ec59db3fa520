//! Store keys: closed identifier sets with stable string raw forms.

use std::hash::Hash;

use crate::value::StrEnum;

/// A strongly-typed key addressing one stored value.
///
/// Keys are closed enumerations. Each key has a stable string raw form
/// (through [`StrEnum`]) used when addressing a backing medium that only
/// understands string keys. Within one key type, two distinct keys must
/// never share a raw form. Key sets defined through [`store_keys!`] derive
/// both directions of the mapping from a single table, so a duplicated raw
/// form shows up as an `unreachable_patterns` warning; hand-written
/// [`StrEnum`] impls must uphold the invariant themselves.
///
/// Key types are plain fieldless enums in practice, so the thread-safety
/// and `'static` bounds cost nothing; they let stores hold keys behind
/// shared and type-erased handles.
///
/// Implemented automatically for any eligible [`StrEnum`].
pub trait StoreKey: Copy + Eq + Hash + StrEnum + Send + Sync + 'static {}

impl<T: Copy + Eq + Hash + StrEnum + Send + Sync + 'static> StoreKey for T {}

/// Define a closed key set together with its raw string forms.
///
/// Generates the enum, the identity derives a key needs, and the
/// [`StrEnum`] mapping in both directions from one table.
///
/// ```ignore
/// typed_kv::store_keys! {
///     /// Keys for the profile screen.
///     pub enum ProfileKey {
///         Count => "count",
///         Name => "name",
///     }
/// }
/// ```
#[macro_export]
macro_rules! store_keys {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $raw:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $crate::value::StrEnum for $name {
            fn from_raw(raw: &str) -> ::core::option::Option<Self> {
                match raw {
                    $($raw => ::core::option::Option::Some(Self::$variant),)+
                    _ => ::core::option::Option::None,
                }
            }

            fn raw(&self) -> &'static str {
                match self {
                    $(Self::$variant => $raw),+
                }
            }
        }
    };
}
