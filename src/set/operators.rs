//! Operator overloads for set algebra on borrowed sets.
//!
//! | Operator   | Method                                                     |
//! |------------|------------------------------------------------------------|
//! | `&a \| &b` | [`union`](super::Set::union)                               |
//! | `&a & &b`  | [`intersection`](super::Set::intersection)                 |
//! | `&a - &b`  | [`difference`](super::Set::difference)                     |
//! | `&a ^ &b`  | [`symmetric_difference`](super::Set::symmetric_difference) |
//!
//! ```rust
//! use setwise::set::Set;
//!
//! let set_a = Set::from_slice(&[1, 2, 3]);
//! let set_b = Set::from_slice(&[2, 3, 4]);
//!
//! assert_eq!(&set_a | &set_b, Set::from_slice(&[1, 2, 3, 4]));
//! assert_eq!(&set_a & &set_b, Set::from_slice(&[2, 3]));
//! assert_eq!(&set_a - &set_b, Set::from_slice(&[1]));
//! assert_eq!(&set_a ^ &set_b, Set::from_slice(&[1, 4]));
//! ```

use std::hash::{BuildHasher, Hash};
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use super::Set;

impl<T, S> BitOr<&Set<T, S>> for &Set<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<T, S>;

    fn bitor(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.union(rhs)
    }
}

impl<T, S> BitAnd<&Set<T, S>> for &Set<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<T, S>;

    fn bitand(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.intersection(rhs)
    }
}

impl<T, S> Sub<&Set<T, S>> for &Set<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<T, S>;

    fn sub(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.difference(rhs)
    }
}

impl<T, S> BitXor<&Set<T, S>> for &Set<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<T, S>;

    fn bitxor(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.symmetric_difference(rhs)
    }
}
