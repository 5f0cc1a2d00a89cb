#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Per-key header size cache used by adapters that memoize reservation lookups.
#[cfg(feature = "std")]
pub type KeySizeMap<K> = HashMap<K, u32>;
#[cfg(not(feature = "std"))]
pub type KeySizeMap<K> = BTreeMap<K, u32>;

/// Bounds required to use a section key as a cache key.
///
/// With `std` this is `Hash + Eq`; without it, `Ord`.
#[cfg(feature = "std")]
pub trait SectionKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> SectionKey for K {}

#[cfg(not(feature = "std"))]
pub trait SectionKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> SectionKey for K {}
