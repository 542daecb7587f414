//! Hasher selection for the lookup table.
//!
//! The `fxhash` and `ahash` feature flags swap the default hasher used by
//! [`SortedMap`](crate::SortedMap) for a faster, non-DoS-resistant one.
//! Only enable them for trusted keys. When both are enabled `fxhash` wins.

/// The [`BuildHasher`](std::hash::BuildHasher) used when none is given.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The [`BuildHasher`](std::hash::BuildHasher) used when none is given.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The [`BuildHasher`](std::hash::BuildHasher) used when none is given.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::hash::RandomState;

#[cfg(test)]
mod tests {
    use super::DefaultHashBuilder;
    use rstest::rstest;
    use std::hash::BuildHasher;

    #[rstest]
    fn test_same_builder_hashes_deterministically() {
        let builder = DefaultHashBuilder::default();
        assert_eq!(builder.hash_one("key"), builder.hash_one("key"));
        assert_eq!(builder.hash_one(42_u64), builder.hash_one(42_u64));
    }
}
