//! Hash-backed mathematical set.
//!
//! This module provides [`Set`], a deduplicated, unordered collection built
//! on a hash table whose values are zero-size presence markers.
//!
//! # Overview
//!
//! `Set` offers construction from slices and lazy sequences, in-place
//! mutation, and set algebra (union, intersection, difference, symmetric
//! difference). Every algebra operation returns a newly allocated set and
//! leaves both operands untouched.
//!
//! - O(1) amortized `contains`, `insert` and `remove`
//! - O(1) `len` and `is_empty`
//! - Algebra operations start from a clone of one operand or iterate the
//!   smaller operand, whichever touches fewer elements
//!
//! # Examples
//!
//! ```rust
//! use setwise::set::Set;
//!
//! let mut set = Set::from_slice(&[1, 2, 2, 3]);
//! assert_eq!(set.len(), 3);
//!
//! set.add([4, 5]);
//! set.remove(&1);
//! assert!(set.contains(&4));
//! assert!(!set.contains(&1));
//! ```
//!
//! # Set Operations
//!
//! ```rust
//! use setwise::set::Set;
//!
//! let set_a = Set::from_slice(&[1, 2, 3]);
//! let set_b = Set::from_slice(&[2, 3, 4]);
//!
//! let union = set_a.union(&set_b);                          // {1, 2, 3, 4}
//! let intersection = set_a.intersection(&set_b);            // {2, 3}
//! let difference = set_a.difference(&set_b);                // {1}
//! let symmetric_diff = set_a.symmetric_difference(&set_b);  // {1, 4}
//!
//! assert_eq!(union.len(), 4);
//! assert_eq!(intersection.len(), 2);
//! assert_eq!(difference.len(), 1);
//! assert_eq!(symmetric_diff.len(), 2);
//! ```
//!
//! # Lazy Sequences
//!
//! The `*_iter` variants accept any single-pass [`IntoIterator`] and consume
//! it exactly once, so the second operand never has to be materialized into
//! a set first.
//!
//! ```rust
//! use setwise::set::Set;
//!
//! let set = Set::from_slice(&["a", "b", "c"]);
//! let union = set.union_iter(["c", "d", "e"]);
//! let intersection = set.intersection_iter(["c", "d", "e"]);
//!
//! assert_eq!(union.len(), 5);
//! assert_eq!(intersection.to_vec(), vec!["c"]);
//! ```
//!
//! # Caller Obligations
//!
//! - Element `Hash` and `Eq` must agree and stay stable for as long as the
//!   element is in the set. Violating this silently breaks uniqueness.
//! - Lazy sequences must be finite; an infinite source never returns.
//! - `Set` carries no synchronization. Sharing it across threads for
//!   mutation needs an external lock.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::collections::hash_map::RandomState;
use std::collections::hash_set;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::{FromIterator, FusedIterator};

// =============================================================================
// Set Definition
// =============================================================================

/// A deduplicated, unordered collection of `T` backed by a hash table.
///
/// The hasher builder `S` defaults to [`RandomState`]. Results of algebra
/// operations reuse a clone of an operand's hasher builder.
///
/// # Time Complexity
///
/// | Operation              | Complexity                 |
/// |------------------------|----------------------------|
/// | `new`                  | O(1)                       |
/// | `contains`             | O(1) amortized             |
/// | `insert` / `remove`    | O(1) amortized             |
/// | `len`                  | O(1)                       |
/// | `union`                | O(n + m), one clone        |
/// | `intersection`         | O(min(n, m))               |
/// | `difference`           | O(min(n, m)) + one clone, or O(n) |
/// | `symmetric_difference` | O(n + m), one clone        |
///
/// # Examples
///
/// ```rust
/// use setwise::set::Set;
///
/// let mut set = Set::new();
/// set.insert("apple");
/// set.insert("pear");
/// set.insert("apple");
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains("pear"));
/// ```
#[derive(Clone)]
pub struct Set<T, S = RandomState> {
    inner: HashSet<T, S>,
}

// Thread-safety is inherited from the element and hasher types, nothing more.
static_assertions::assert_impl_all!(Set<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Set<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Set<std::rc::Rc<i32>>: Send, Sync);

impl<T> Set<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: HashSet::new(),
        }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashSet::with_capacity(capacity),
        }
    }
}

impl<T: Hash + Eq> Set<T> {
    /// Creates a set holding each distinct value of `items`.
    ///
    /// Duplicates collapse silently. Storage is pre-sized to `items.len()`,
    /// so the final capacity may exceed the final size when the input
    /// contains duplicates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set = Set::from_slice(&["a2", "a3", "a2", "a7"]);
    /// assert_eq!(set.len(), 3);
    /// ```
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        let mut inner = HashSet::with_capacity(items.len());
        inner.extend(items.iter().cloned());
        Self { inner }
    }

    /// Creates a set by consuming a lazy sequence to completion.
    ///
    /// A sequence that produces no items yields an empty set. An optional
    /// sequence is passed flattened, so an absent one is simply empty.
    ///
    /// The sequence must be finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use setwise::set::Set;
    ///
    /// let map = HashMap::from([("a", 0), ("b", 1)]);
    /// let keys = Set::from_lazy(map.into_keys());
    /// assert!(keys.contains("a"));
    /// assert!(keys.contains("b"));
    ///
    /// let absent: Option<Vec<i32>> = None;
    /// let set = Set::from_lazy(absent.into_iter().flatten());
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub fn from_lazy<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().collect()
    }
}

impl<T, S> Set<T, S> {
    /// Creates an empty set which will use `hasher` to hash its elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::hash_map::RandomState;
    /// use setwise::set::Set;
    ///
    /// let mut set = Set::with_hasher(RandomState::new());
    /// set.insert(2);
    /// assert!(set.contains(&2));
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_hasher(hasher: S) -> Self {
        Self {
            inner: HashSet::with_hasher(hasher),
        }
    }

    /// Creates an empty set with room for `capacity` elements using `hasher`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            inner: HashSet::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of distinct elements in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set = Set::from_slice(&[1, 1, 2]);
    /// assert_eq!(set.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns a reference to the set's hasher builder.
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }

    /// Removes every element, keeping the allocated storage.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns every element as a `Vec`, in unspecified order.
    ///
    /// The order may differ between calls on the same set. The length
    /// always equals [`len`](Self::len).
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Consumes the set and returns its elements as a `Vec`, in unspecified
    /// order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_iter().collect()
    }

    /// Returns an iterator over the elements of the set.
    ///
    /// Each element is produced exactly once, in unspecified order. Every
    /// call starts a fresh traversal. The iterator borrows the set, so the
    /// set cannot be mutated while an iteration from it is in progress.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set = Set::from_slice(&["a", "b", "c"]);
    ///
    /// let mut seen: Vec<&str> = set.iter().copied().collect();
    /// seen.sort_unstable();
    /// assert_eq!(seen, vec!["a", "b", "c"]);
    /// ```
    ///
    /// Inserting while an iterator is still live does not compile:
    ///
    /// ```compile_fail
    /// use setwise::set::Set;
    ///
    /// let mut set = Set::from_slice(&[1, 2, 3]);
    /// let mut it = set.iter();
    /// set.insert(4);
    /// it.next();
    /// ```
    ///
    /// Neither does removing:
    ///
    /// ```compile_fail
    /// use setwise::set::Set;
    ///
    /// let mut set = Set::from_slice(&[1, 2, 3]);
    /// for element in &set {
    ///     set.remove(element);
    /// }
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.inner.iter(),
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher> Set<T, S> {
    /// Returns `true` if the set contains the specified element.
    ///
    /// The element may be any borrowed form of the set's element type,
    /// but `Hash` and `Eq` on the borrowed form must match those for
    /// the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set = Set::from_slice(&["hello".to_string(), "world".to_string()]);
    ///
    /// // Can use &str to look up String elements
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("other"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(element)
    }

    /// Inserts an element into the set.
    ///
    /// Returns `true` if the element was newly inserted, `false` if it was
    /// already present (in which case the set is unchanged).
    pub fn insert(&mut self, element: T) -> bool {
        self.inner.insert(element)
    }

    /// Inserts every element of `items`. Elements already present are skipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let mut set = Set::from_slice(&["a"]);
    /// set.add(["a", "b"]);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn add<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.inner.extend(items);
    }

    /// Removes an element from the set.
    ///
    /// Returns `true` if the element was present. Removing an absent
    /// element is a no-op.
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(element)
    }

    /// Removes every element of `items` that is present in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let mut set = Set::from_slice(&[1, 2, 3]);
    /// set.remove_all(&[2, 3, 9]);
    /// assert_eq!(set.to_vec(), vec![1]);
    /// ```
    pub fn remove_all<'a, Q, I>(&mut self, items: I)
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
        I: IntoIterator<Item = &'a Q>,
    {
        for item in items {
            self.inner.remove(item);
        }
    }

    /// Reserves capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.inner.reserve(additional);
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    pub fn retain<P>(&mut self, predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.inner.retain(predicate);
    }

    /// Returns `true` if every element of `self` is also in `other`
    /// (`self ⊆ other`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let subset = Set::from_slice(&[1, 2]);
    /// let superset = Set::from_slice(&[1, 2, 3]);
    ///
    /// assert!(subset.is_subset(&superset));
    /// assert!(!superset.is_subset(&subset));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is also in `self`
    /// (`other ⊆ self`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let superset = Set::from_slice(&[1, 2, 3]);
    /// let subset = Set::from_slice(&[1, 2]);
    ///
    /// assert!(superset.is_superset(&subset));
    /// assert!(!subset.is_superset(&superset));
    /// ```
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = ordered_by_len(self, other);
        !smaller.iter().any(|element| larger.contains(element))
    }
}

impl<T, S> Set<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    /// Returns the union of two sets.
    ///
    /// The result starts as a clone of the larger operand, and the smaller
    /// operand's elements are inserted into it.
    ///
    /// # Complexity
    ///
    /// One clone of the larger set plus O(min(n, m)) inserts
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set_a = Set::from_slice(&["a", "b", "c"]);
    /// let set_b = Set::from_slice(&["c", "d", "e"]);
    ///
    /// let union = set_a.union(&set_b);
    /// assert_eq!(union.len(), 5);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let (smaller, larger) = ordered_by_len(self, other);
        let mut result = larger.clone();
        result.inner.extend(smaller.iter().cloned());
        result
    }

    /// Returns the union of this set and a lazy sequence.
    ///
    /// The result starts as a clone of `self` and `items` is consumed once,
    /// inserting each item. The sequence must be finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use setwise::set::Set;
    ///
    /// let set = Set::from_slice(&["a", "b", "c"]);
    /// let map = HashMap::from([("c", 0), ("d", 1), ("e", 2)]);
    ///
    /// let union = set.union_iter(map.into_keys());
    /// assert_eq!(union.len(), 5);
    /// ```
    #[must_use]
    pub fn union_iter<I>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut result = self.clone();
        result.inner.extend(items);
        result
    }

    /// Returns the intersection of two sets.
    ///
    /// The smaller operand is iterated and each element is looked up in the
    /// larger one; the result is pre-sized to the smaller cardinality.
    ///
    /// # Complexity
    ///
    /// O(min(n, m))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set_a = Set::from_slice(&[1, 2, 3]);
    /// let set_b = Set::from_slice(&[2, 3, 4]);
    ///
    /// let intersection = set_a.intersection(&set_b);
    /// assert_eq!(intersection.len(), 2);
    /// assert!(intersection.contains(&2));
    /// assert!(intersection.contains(&3));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (smaller, larger) = ordered_by_len(self, other);
        let mut inner = HashSet::with_capacity_and_hasher(smaller.len(), self.hasher().clone());
        inner.extend(
            smaller
                .iter()
                .filter(|element| larger.contains(*element))
                .cloned(),
        );
        Self { inner }
    }

    /// Returns the intersection of this set and a lazy sequence.
    ///
    /// `items` is consumed exactly once, testing each item for membership in
    /// `self`. Matching items are moved into the result, never cloned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set = Set::from_slice(&["a", "b", "c"]);
    /// let intersection = set.intersection_iter(vec!["c", "d", "e"]);
    /// assert_eq!(intersection.to_vec(), vec!["c"]);
    /// ```
    #[must_use]
    pub fn intersection_iter<I>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let items = items.into_iter();
        let capacity = items.size_hint().0.min(self.len());
        let mut inner = HashSet::with_capacity_and_hasher(capacity, self.hasher().clone());
        inner.extend(items.filter(|item| self.contains(item)));
        Self { inner }
    }

    /// Returns the elements of `self` that are not in `other`.
    ///
    /// When `other` is smaller, the result is a clone of `self` with
    /// `other`'s elements removed; otherwise `self` is filtered against
    /// `other`. Not symmetric: `a.difference(&b)` and `b.difference(&a)`
    /// generally differ.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set_a = Set::from_slice(&[1, 2, 3]);
    /// let set_b = Set::from_slice(&[2, 3, 4]);
    ///
    /// assert_eq!(set_a.difference(&set_b), Set::from_slice(&[1]));
    /// assert_eq!(set_b.difference(&set_a), Set::from_slice(&[4]));
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        if other.len() < self.len() {
            let mut result = self.clone();
            for element in other {
                result.inner.remove(element);
            }
            return result;
        }

        let mut inner = HashSet::with_capacity_and_hasher(self.len(), self.hasher().clone());
        inner.extend(
            self.iter()
                .filter(|element| !other.contains(*element))
                .cloned(),
        );
        Self { inner }
    }

    /// Returns the elements that are in exactly one of the two sets.
    ///
    /// The result starts as a clone of the larger operand; each element of
    /// the smaller operand is then removed if present, or inserted if not.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set_a = Set::from_slice(&["a", "b", "c"]);
    /// let set_b = Set::from_slice(&["c", "d", "e"]);
    ///
    /// let symmetric_diff = set_a.symmetric_difference(&set_b);
    /// assert_eq!(symmetric_diff, Set::from_slice(&["a", "b", "d", "e"]));
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let (smaller, larger) = ordered_by_len(self, other);
        let mut result = larger.clone();
        for element in smaller {
            if !result.inner.remove(element) {
                result.inner.insert(element.clone());
            }
        }
        result
    }
}

/// Returns `(smaller, larger)`. Ties keep `first` as the smaller one.
#[inline]
fn ordered_by_len<'a, T, S>(
    first: &'a Set<T, S>,
    second: &'a Set<T, S>,
) -> (&'a Set<T, S>, &'a Set<T, S>) {
    if first.len() <= second.len() {
        (first, second)
    } else {
        (second, first)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`Set`].
pub struct Iter<'a, T> {
    inner: hash_set::Iter<'a, T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.clone()).finish()
    }
}

/// An owning iterator over the elements of a [`Set`].
pub struct IntoIter<T> {
    inner: hash_set::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for Set<T, S> {
    #[inline]
    fn default() -> Self {
        Self {
            inner: HashSet::default(),
        }
    }
}

impl<T, S> FromIterator<T> for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: HashSet::from_iter(iter),
        }
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            inner: HashSet::from(items),
        }
    }
}

impl<T: Hash + Eq> From<Vec<T>> for Set<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_lazy(items)
    }
}

impl<T, S> Extend<T> for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<'a, T, S> Extend<&'a T> for Set<T, S>
where
    T: Hash + Eq + Copy + 'a,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T, S> IntoIterator for Set<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.inner.into_iter(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a Set<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> PartialEq for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T, S> Eq for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
}

impl<T: fmt::Debug, S> fmt::Debug for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, S> serde::Serialize for Set<T, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SetVisitor<T, S> {
    marker: std::marker::PhantomData<(T, S)>,
}

#[cfg(feature = "serde")]
impl<T, S> SetVisitor<T, S> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::de::Visitor<'de> for SetVisitor<T, S>
where
    T: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    type Value = Set<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Sequential insert keeps memory proportional to the distinct elements seen.
        let mut set = Set::default();
        while let Some(element) = seq.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for Set<T, S>
where
    T: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    fn test_display_empty_set() {
        let set: Set<i32> = Set::new();
        assert_eq!(format!("{set}"), "{}");
    }

    #[rstest]
    fn test_display_single_element_set() {
        let set = Set::from_slice(&[42]);
        assert_eq!(format!("{set}"), "{42}");
    }

    #[rstest]
    fn test_display_multiple_elements_set() {
        let set = Set::from_slice(&[1, 2, 3]);
        let display = format!("{set}");
        // Unordered, so only the shape is checked
        assert!(display.starts_with('{'));
        assert!(display.ends_with('}'));
        assert!(display.contains('1'));
        assert!(display.contains('2'));
        assert!(display.contains('3'));
        assert_eq!(display.matches(", ").count(), 2);
    }

    #[rstest]
    fn test_debug_uses_set_notation() {
        let set = Set::from_slice(&["x"]);
        assert_eq!(format!("{set:?}"), "{\"x\"}");
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    #[rstest]
    fn test_ordered_by_len_picks_smaller_first() {
        let small = Set::from_slice(&[1]);
        let large = Set::from_slice(&[1, 2, 3]);

        let (smaller, larger) = ordered_by_len(&large, &small);
        assert_eq!(smaller.len(), 1);
        assert_eq!(larger.len(), 3);
    }

    #[rstest]
    fn test_ordered_by_len_tie_keeps_first() {
        let first = Set::from_slice(&[1, 2]);
        let second = Set::from_slice(&[3, 4]);

        let (smaller, _) = ordered_by_len(&first, &second);
        assert!(smaller.contains(&1));
    }

    #[rstest]
    fn test_from_slice_presizes_to_input_length() {
        let set = Set::from_slice(&[1, 1, 1, 1, 1, 1, 1, 1]);
        assert_eq!(set.len(), 1);
        assert!(set.capacity() >= 8);
    }

    #[rstest]
    fn test_intersection_iter_presize_is_bounded_by_self() {
        let set = Set::from_slice(&[1]);
        let intersection = set.intersection_iter(0..10_000);
        assert_eq!(intersection.len(), 1);
        assert!(intersection.capacity() < 10_000);
    }

    #[rstest]
    fn test_union_keeps_operands_unchanged() {
        let set_a = Set::from_slice(&[1, 2]);
        let set_b = Set::from_slice(&[2, 3, 4]);

        let _ = set_a.union(&set_b);

        assert_eq!(set_a, Set::from_slice(&[1, 2]));
        assert_eq!(set_b, Set::from_slice(&[2, 3, 4]));
    }

    #[rstest]
    fn test_difference_clone_path_and_filter_path_agree() {
        let large = Set::from_slice(&[1, 2, 3, 4, 5]);
        let small = Set::from_slice(&[4, 5, 6]);

        // other smaller than self: clone-then-remove
        assert_eq!(large.difference(&small), Set::from_slice(&[1, 2, 3]));
        // other larger than self: filter
        assert_eq!(small.difference(&large), Set::from_slice(&[6]));
    }

    #[derive(Clone)]
    struct FixedState;

    impl BuildHasher for FixedState {
        type Hasher = std::hash::DefaultHasher;

        fn build_hasher(&self) -> Self::Hasher {
            std::hash::DefaultHasher::new()
        }
    }

    const EMPTY_FIXED: Set<i32, FixedState> = Set::with_hasher(FixedState);

    #[rstest]
    fn test_with_hasher_in_const_context() {
        let mut set = EMPTY_FIXED;
        assert!(set.is_empty());

        set.add([1, 2, 2]);
        assert_eq!(set.len(), 2);
        assert!(EMPTY_FIXED.is_empty());
    }
}
