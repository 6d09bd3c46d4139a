//! Hasher selection used throughout the node store and the Apply cache.
//!
//! The unique table and the memoization cache are both keyed by tuples of
//! node handles, which are already well-distributed integers — there is
//! nothing for a cryptographic hash to protect against here, so we use
//! `rustc-hash`'s fast, non-DoS-resistant hasher (as OBDDimal does) instead
//! of the standard library's default.

pub type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;
pub type HashSet<K> = rustc_hash::FxHashSet<K>;
