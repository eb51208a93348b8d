//! Flat ordered set with an injected comparator.
//!
//! This module provides [`OrderedSet`], a set stored as a contiguous `Vec`
//! that is kept sorted and deduplicated under a user-supplied
//! [`Comparator`].
//!
//! # Overview
//!
//! Every operation is built on [`OrderedSet::locate`], a binary search that
//! reports either the index of the equivalent element ([`Lookup::Matched`]) or
//! the index where the element would have to be inserted
//! ([`Lookup::Unmatched`]). Mutations splice at that index, so the two set
//! invariants hold after every public call:
//!
//! 1. elements are sorted non-decreasing under the comparator;
//! 2. no two elements compare equal under the comparator.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity                               |
//! |-------------------|------------------------------------------|
//! | `locate`          | O(log n)                                 |
//! | `contains`        | O(log n)                                 |
//! | `index_of`        | O(log n)                                 |
//! | `insert`          | O(log n) search + O(n) shift             |
//! | `update`          | O(log n) search + O(n) shift on miss     |
//! | `remove`          | O(log n) search + O(n) shift             |
//! | `union`           | O(m log n) search + shifts, m <= n       |
//! | `from_unsorted`   | O(n log n)                               |
//! | `from_sorted`     | O(1)                                     |
//! | `iter`            | O(1) + O(n)                              |
//!
//! # Examples
//!
//! ```rust
//! use ordered_set::OrderedSet;
//! use ordered_set::comparator::by_key;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Example {
//!     count: i32,
//!     name: &'static str,
//! }
//!
//! let mut set = OrderedSet::from_unsorted(
//!     [
//!         Example { count: 3, name: "c" },
//!         Example { count: 1, name: "a" },
//!         Example { count: 3, name: "duplicate" },
//!     ],
//!     by_key(|example: &Example| example.count),
//! );
//! assert_eq!(set.len(), 2);
//! assert_eq!(set[1].name, "c");
//!
//! let (inserted, resident) = set.insert(Example { count: 2, name: "b" });
//! assert!(inserted);
//! assert_eq!(resident.name, "b");
//! assert_eq!(set.index_of(&Example { count: 2, name: "" }), Some(1));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::Index;

use crate::comparator::{Comparator, NaturalOrder};
use crate::error::{UnsortedInputError, UnsortedKind};

// =============================================================================
// Lookup
// =============================================================================

/// Outcome of a binary search over an [`OrderedSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup {
    /// An equivalent element is stored at this index.
    Matched(usize),
    /// No equivalent element is stored; inserting at this index keeps the
    /// set sorted.
    Unmatched(usize),
}

impl Lookup {
    /// Returns the index carried by either variant.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Matched(index) | Self::Unmatched(index) => index,
        }
    }

    /// Returns `true` for [`Lookup::Matched`].
    #[inline]
    #[must_use]
    pub const fn is_matched(self) -> bool {
        matches!(self, Self::Matched(_))
    }

    /// Returns the matched index, or `None` for [`Lookup::Unmatched`].
    #[inline]
    #[must_use]
    pub const fn matched(self) -> Option<usize> {
        match self {
            Self::Matched(index) => Some(index),
            Self::Unmatched(_) => None,
        }
    }

    /// Converts to the `Ok(found) / Err(insertion_point)` convention of
    /// [`slice::binary_search`].
    ///
    /// ```rust
    /// use ordered_set::Lookup;
    ///
    /// assert_eq!(Lookup::Matched(3).into_result(), Ok(3));
    /// assert_eq!(Lookup::Unmatched(0).into_result(), Err(0));
    /// ```
    #[inline]
    pub const fn into_result(self) -> Result<usize, usize> {
        match self {
            Self::Matched(index) => Ok(index),
            Self::Unmatched(index) => Err(index),
        }
    }
}

// =============================================================================
// OrderedSet Definition
// =============================================================================

/// A set stored as a sorted, deduplicated `Vec`, ordered by an injected
/// comparator.
///
/// Two elements are "the same" for this set when the comparator returns
/// [`Ordering::Equal`] for them, even if they differ otherwise. The set keeps
/// exactly one representative of each such equivalence class.
///
/// # Type Parameters
///
/// * `T` - The element type. No bound is required for storage.
/// * `C` - The comparator, defaulting to [`NaturalOrder`] (`T: Ord`).
///
/// # Examples
///
/// ```rust
/// use ordered_set::OrderedSet;
/// use ordered_set::comparator::{ComparatorExt, NaturalOrder};
///
/// let mut set = OrderedSet::new(NaturalOrder.reversed());
/// set.insert(1);
/// set.insert(3);
/// set.insert(2);
///
/// assert_eq!(set.as_slice(), &[3, 2, 1]);
/// ```
#[derive(Clone)]
pub struct OrderedSet<T, C = NaturalOrder> {
    elements: Vec<T>,
    comparator: C,
}

static_assertions::assert_impl_all!(OrderedSet<i32>: Send, Sync);
static_assertions::assert_impl_all!(OrderedSet<String>: Send, Sync);

impl<T, C> OrderedSet<T, C> {
    /// Creates an empty set ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::OrderedSet;
    /// use ordered_set::comparator::NaturalOrder;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::new(NaturalOrder);
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(comparator: C) -> Self {
        Self {
            elements: Vec::new(),
            comparator,
        }
    }

    /// Creates an empty set with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize, comparator: C) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            comparator,
        }
    }

    /// Creates a set from elements that are already sorted and deduplicated
    /// under `comparator`, storing them verbatim.
    ///
    /// # Preconditions
    ///
    /// - `elements` must be sorted in ascending order under `comparator`
    /// - No two elements may compare equal under `comparator`
    ///
    /// The preconditions are not checked. Invalid input yields a set whose
    /// lookups return wrong answers (logic error, not memory unsafety). Use
    /// [`OrderedSet::try_from_sorted`] to validate untrusted input.
    ///
    /// # Complexity
    ///
    /// O(1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::OrderedSet;
    /// use ordered_set::comparator::NaturalOrder;
    ///
    /// let set = OrderedSet::from_sorted(vec![2, 4, 6], NaturalOrder);
    /// assert!(set.contains(&4));
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_sorted(elements: Vec<T>, comparator: C) -> Self {
        Self {
            elements,
            comparator,
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index` in sorted order, or `None` if out of
    /// bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the smallest element under the comparator.
    ///
    /// ```rust
    /// use ordered_set::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(set.first(), Some(&1));
    /// assert_eq!(set.last(), Some(&3));
    /// ```
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the largest element under the comparator.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns the elements as a sorted slice.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[T] {
        self.elements.as_slice()
    }

    /// Returns an iterator over the elements in sorted order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.elements.iter(),
        }
    }

    /// Returns the comparator ordering this set.
    #[inline]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Consumes the set, returning the sorted elements.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Removes every element, keeping the allocation and the comparator.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Reserves room for at least `additional` more elements.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.elements.reserve(additional);
    }
}

impl<T, C: Comparator<T>> OrderedSet<T, C> {
    /// Creates a set from elements that should already be sorted and
    /// deduplicated, rejecting them if they are not.
    ///
    /// # Errors
    ///
    /// Returns [`UnsortedInputError`] naming the first element that orders
    /// before, or compares equal to, its predecessor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::{OrderedSet, UnsortedKind};
    /// use ordered_set::comparator::NaturalOrder;
    ///
    /// assert!(OrderedSet::try_from_sorted(vec![1, 2, 3], NaturalOrder).is_ok());
    ///
    /// let error = OrderedSet::try_from_sorted(vec![1, 3, 2], NaturalOrder).unwrap_err();
    /// assert_eq!(error.index, 2);
    /// assert_eq!(error.kind, UnsortedKind::Descending);
    /// ```
    pub fn try_from_sorted(elements: Vec<T>, comparator: C) -> Result<Self, UnsortedInputError> {
        let set = Self::from_sorted(elements, comparator);
        set.validate()?;
        Ok(set)
    }

    /// Creates a set from arbitrary elements, sorting and deduplicating them.
    ///
    /// The sort is stable and deduplication compares adjacent elements only,
    /// so of several equivalent inputs the one that came first in `elements`
    /// survives.
    ///
    /// # Complexity
    ///
    /// O(n log n).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::OrderedSet;
    /// use ordered_set::comparator::by_key;
    ///
    /// let set = OrderedSet::from_unsorted(
    ///     [(3, 'x'), (1, 'y'), (3, 'z')],
    ///     by_key(|pair: &(i32, char)| pair.0),
    /// );
    /// assert_eq!(set.as_slice(), &[(1, 'y'), (3, 'x')]);
    /// ```
    #[must_use]
    pub fn from_unsorted<I>(elements: I, comparator: C) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let elements = sort_and_deduplicate(elements.into_iter().collect(), &comparator);
        Self::from_sorted(elements, comparator)
    }

    /// Replaces the entire contents with `elements`, sorting and
    /// deduplicating them the same way as [`OrderedSet::from_unsorted`].
    ///
    /// The comparator is unchanged.
    pub fn replace_content<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.elements = sort_and_deduplicate(elements.into_iter().collect(), &self.comparator);
    }

    /// Checks both set invariants against the current contents.
    ///
    /// Only a set built through [`OrderedSet::from_sorted`] with invalid input
    /// can fail this check.
    ///
    /// # Errors
    ///
    /// Returns [`UnsortedInputError`] for the first adjacent pair that is out
    /// of order or equivalent.
    pub fn validate(&self) -> Result<(), UnsortedInputError> {
        self.elements
            .windows(2)
            .enumerate()
            .find_map(|(offset, pair)| {
                let kind = match self.comparator.compare(&pair[0], &pair[1]) {
                    Ordering::Less => return None,
                    Ordering::Equal => UnsortedKind::Duplicate,
                    Ordering::Greater => UnsortedKind::Descending,
                };
                Some(UnsortedInputError {
                    index: offset + 1,
                    kind,
                })
            })
            .map_or(Ok(()), Err)
    }

    /// Binary-searches for an element equivalent to `target`.
    ///
    /// Returns [`Lookup::Matched`] with the index of the equivalent element,
    /// or [`Lookup::Unmatched`] with the index where `target` would have to
    /// be inserted to keep the set sorted.
    ///
    /// The search stops at the first equivalent element its path reaches,
    /// which is the only one since the set holds no duplicates.
    ///
    /// # Complexity
    ///
    /// O(log n) comparisons, O(1) space.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::{Lookup, OrderedSet};
    /// use ordered_set::comparator::NaturalOrder;
    ///
    /// let set = OrderedSet::from_sorted(vec![10, 20, 30], NaturalOrder);
    /// assert_eq!(set.locate(&20), Lookup::Matched(1));
    /// assert_eq!(set.locate(&25), Lookup::Unmatched(2));
    /// assert_eq!(set.locate(&99), Lookup::Unmatched(3));
    /// ```
    pub fn locate(&self, target: &T) -> Lookup {
        let mut low = 0;
        let mut high = self.elements.len();
        while low < high {
            let middle = low + (high - low) / 2;
            match self.comparator.compare(&self.elements[middle], target) {
                Ordering::Equal => return Lookup::Matched(middle),
                Ordering::Less => low = middle + 1,
                Ordering::Greater => high = middle,
            }
        }
        Lookup::Unmatched(low)
    }

    /// Returns `true` if an element equivalent to `element` is stored.
    #[inline]
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.locate(element).is_matched()
    }

    /// Returns the index of the element equivalent to `element`.
    ///
    /// ```rust
    /// use ordered_set::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [3, 1, 2, 0, 4, 9, 7, 8, 5, 6].into_iter().collect();
    /// assert_eq!(set.index_of(&6), Some(6));
    /// assert_eq!(set.index_of(&10), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.locate(element).matched()
    }

    /// Returns the stored element equivalent to `element`.
    #[inline]
    #[must_use]
    pub fn get_equivalent(&self, element: &T) -> Option<&T> {
        self.index_of(element).map(|index| &self.elements[index])
    }

    /// Inserts `element` unless an equivalent element is already stored.
    ///
    /// Returns whether the element was inserted, together with the element
    /// that is resident afterwards: `element` itself when inserted, otherwise
    /// the pre-existing equivalent element, which is kept (and `element` is
    /// dropped).
    ///
    /// # Complexity
    ///
    /// O(log n) to search, O(n) worst case to shift for the splice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::OrderedSet;
    /// use ordered_set::comparator::by_key;
    ///
    /// let mut set = OrderedSet::new(by_key(|pair: &(i32, &str)| pair.0));
    /// assert_eq!(set.insert((1, "first")), (true, &(1, "first")));
    /// assert_eq!(set.insert((1, "second")), (false, &(1, "first")));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> (bool, &T) {
        match self.locate(&element) {
            Lookup::Matched(index) => (false, &self.elements[index]),
            Lookup::Unmatched(index) => {
                self.elements.insert(index, element);
                (true, &self.elements[index])
            }
        }
    }

    /// Inserts `element`, replacing an equivalent element if one is stored.
    ///
    /// Returns the replaced element, or `None` if `element` was new.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::OrderedSet;
    /// use ordered_set::comparator::by_key;
    ///
    /// let mut set = OrderedSet::new(by_key(|pair: &(i32, &str)| pair.0));
    /// assert_eq!(set.update((1, "first")), None);
    /// assert_eq!(set.update((1, "second")), Some((1, "first")));
    /// assert_eq!(set.as_slice(), &[(1, "second")]);
    /// ```
    pub fn update(&mut self, element: T) -> Option<T> {
        match self.locate(&element) {
            Lookup::Matched(index) => Some(std::mem::replace(&mut self.elements[index], element)),
            Lookup::Unmatched(index) => {
                self.elements.insert(index, element);
                None
            }
        }
    }

    /// Removes the element equivalent to `element`, returning it.
    ///
    /// Returns `None` and leaves the set unchanged if no equivalent element
    /// is stored.
    ///
    /// ```rust
    /// use ordered_set::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(set.remove(&2), Some(2));
    /// assert_eq!(set.remove(&2), None);
    /// assert_eq!(set.as_slice(), &[1, 3]);
    /// ```
    pub fn remove(&mut self, element: &T) -> Option<T> {
        self.locate(element)
            .matched()
            .map(|index| self.elements.remove(index))
    }

    /// Inserts every element of `other` into `self`.
    ///
    /// Elements of `other` that have an equivalent in `self` are dropped, so
    /// `self`'s representatives win. `other`'s comparator is discarded; both
    /// sets are expected to be ordered the same way.
    ///
    /// # Complexity
    ///
    /// O(m log n) searches plus the splice shifts, m = `other.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = [1, 3, 5].into_iter().collect();
    /// set.form_union([2, 3, 4].into_iter().collect());
    /// assert_eq!(set.as_slice(), &[1, 2, 3, 4, 5]);
    /// ```
    pub fn form_union(&mut self, other: Self) {
        let additional = other.len();
        self.fold_in(other.elements, additional);
    }

    fn fold_in<I>(&mut self, elements: I, additional: usize)
    where
        I: IntoIterator<Item = T>,
    {
        self.elements.reserve(additional);
        for element in elements {
            self.insert(element);
        }
    }
}

impl<T: Clone, C: Comparator<T> + Clone> OrderedSet<T, C> {
    /// Returns the union of `self` and `other`, leaving both untouched.
    ///
    /// The larger set is copied and the smaller one folded into it; on equal
    /// sizes `other` is the base. For elements present in both, the base's
    /// representative is kept, and the result uses the base's comparator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::OrderedSet;
    /// use ordered_set::comparator::by_key;
    ///
    /// let order = by_key(|pair: &(i32, char)| pair.0);
    /// let small = OrderedSet::from_unsorted([(2, 's')], order);
    /// let large = OrderedSet::from_unsorted([(1, 'l'), (2, 'l'), (3, 'l')], order);
    ///
    /// let union = small.union(&large);
    /// assert_eq!(union.as_slice(), &[(1, 'l'), (2, 'l'), (3, 'l')]);
    /// assert_eq!(small.len(), 1);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let (base, folded) = if self.len() > other.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut result = base.clone();
        result.fold_in(folded.iter().cloned(), folded.len());
        result
    }
}

/// Stable sort followed by removal of every element equivalent to its
/// predecessor; the earliest element of each run survives.
fn sort_and_deduplicate<T, C: Comparator<T>>(mut elements: Vec<T>, comparator: &C) -> Vec<T> {
    elements.sort_by(|left, right| comparator.compare(left, right));
    elements.dedup_by(|current, previous| comparator.compare(previous, current) == Ordering::Equal);
    elements
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the elements of an [`OrderedSet`], in order.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the elements of an [`OrderedSet`], in order.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, C: Default> Default for OrderedSet<T, C> {
    #[inline]
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for OrderedSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_unsorted(iter, C::default())
    }
}

impl<T, C: Comparator<T>> Extend<T> for OrderedSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.fold_in(iter, lower);
    }
}

impl<T, C> IntoIterator for OrderedSet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> Index<usize> for OrderedSet<T, C> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<T, C> AsRef<[T]> for OrderedSet<T, C> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T, C> From<OrderedSet<T, C>> for Vec<T> {
    #[inline]
    fn from(set: OrderedSet<T, C>) -> Self {
        set.elements
    }
}

/// Equality is element-wise over the ordered sequence; comparators are not
/// compared.
impl<T: PartialEq, C, D> PartialEq<OrderedSet<T, D>> for OrderedSet<T, C> {
    #[inline]
    fn eq(&self, other: &OrderedSet<T, D>) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq, C> Eq for OrderedSet<T, C> {}

impl<T: Hash, C> Hash for OrderedSet<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.len().hash(state);
        for element in &self.elements {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OrderedSet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, C> fmt::Display for OrderedSet<T, C> {
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
impl<T: serde::Serialize, C> serde::Serialize for OrderedSet<T, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedSetVisitor<T, C> {
    marker: std::marker::PhantomData<fn() -> (T, C)>,
}

#[cfg(feature = "serde")]
impl<T, C> OrderedSetVisitor<T, C> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, C> serde::de::Visitor<'de> for OrderedSetVisitor<T, C>
where
    T: serde::Deserialize<'de>,
    C: Comparator<T> + Default,
{
    type Value = OrderedSet<T, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut sequence: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Size hints come from the input; cap the up-front allocation.
        let mut elements = Vec::with_capacity(sequence.size_hint().unwrap_or(0).min(4096));
        while let Some(element) = sequence.next_element()? {
            elements.push(element);
        }
        // Encoded input is untrusted, so it takes the sort + dedup path.
        Ok(OrderedSet::from_unsorted(elements, C::default()))
    }
}

#[cfg(feature = "serde")]
impl<'de, T, C> serde::Deserialize<'de> for OrderedSet<T, C>
where
    T: serde::Deserialize<'de>,
    C: Comparator<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
