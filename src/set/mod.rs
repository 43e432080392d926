//! Hash-backed mathematical sets.
//!
//! This module provides [`Set`], an unordered collection of unique values
//! with set algebra:
//!
//! - [`Set`]: the set itself, generic over the hasher builder
//! - [`Iter`] / [`IntoIter`]: borrowing and owning iterators
//! - [`set!`](crate::set!): literal constructor
//! - [`FxSet`]: `Set` using `rustc-hash` (feature `fxhash`)
//! - [`AHashSet`]: `Set` using `ahash` (feature `ahash`)
//!
//! # Examples
//!
//! ```rust
//! use setwise::set;
//! use setwise::set::Set;
//!
//! let set_a = set!["a1", "a2", "a2", "a4", "a5"];
//! let set_b = set!["a2", "a3", "a2", "a7"];
//!
//! assert_eq!(set_a.intersection(&set_b), set!["a2"]);
//! assert_eq!(set_a.union(&set_b).len(), 6);
//! assert_eq!(set_a.difference(&set_b), set!["a1", "a4", "a5"]);
//! assert_eq!(
//!     set_a.symmetric_difference(&set_b),
//!     set!["a1", "a3", "a4", "a5", "a7"]
//! );
//!
//! let empty: Set<&str> = set![];
//! assert!(empty.is_empty());
//! ```
//!
//! # Choosing a Hasher
//!
//! All operations are generic over [`BuildHasher`](std::hash::BuildHasher).
//! Sets with a non-default hasher are built with [`Set::with_hasher`],
//! [`Default`], or `collect()`:
//!
//! ```rust
//! use std::collections::hash_map::RandomState;
//! use setwise::set::Set;
//!
//! let set: Set<i32, RandomState> = (0..10).collect();
//! assert_eq!(set.len(), 10);
//! ```

mod hashset;
mod operators;

pub use hashset::{IntoIter, Iter, Set};

/// A [`Set`] hashed with `rustc_hash::FxBuildHasher`.
///
/// Faster than the default hasher for small keys but not resistant to
/// hash flooding.
#[cfg(feature = "fxhash")]
pub type FxSet<T> = Set<T, rustc_hash::FxBuildHasher>;

/// A [`Set`] hashed with `ahash::RandomState`.
#[cfg(feature = "ahash")]
pub type AHashSet<T> = Set<T, ahash::RandomState>;

/// Creates a [`Set`] containing the arguments.
///
/// Duplicate arguments collapse into one element. `set![]` creates an
/// empty set.
///
/// # Examples
///
/// ```rust
/// use setwise::set;
///
/// let set = set![1, 2, 2, 3];
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(&2));
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::set::Set::new()
    };

    ($($element:expr),+ $(,)?) => {
        $crate::set::Set::from([$($element),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_set_macro_empty() {
        let set: Set<i32> = set![];
        assert!(set.is_empty());
    }

    #[rstest]
    fn test_set_macro_collapses_duplicates() {
        let set = set!["a", "b", "a"];
        assert_eq!(set.len(), 2);
    }

    #[rstest]
    fn test_set_macro_trailing_comma() {
        let set = set![1, 2, 3,];
        assert_eq!(set, Set::from_slice(&[1, 2, 3]));
    }
}
