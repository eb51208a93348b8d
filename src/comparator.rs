//! Injected ordering rules.
//!
//! An [`OrderedSet`](crate::OrderedSet) never calls `Ord` on its elements
//! directly. Every comparison goes through a [`Comparator`] supplied at
//! construction, which lets the same element type be kept in different orders
//! (by a key, reversed, or by an arbitrary closure).
//!
//! Comparators are resolved statically. When the order has to be chosen at
//! runtime, box it as `Box<dyn Fn(&T, &T) -> Ordering>`, which is itself a
//! comparator.
//!
//! # Examples
//!
//! ```rust
//! use ordered_set::comparator::{by_key, Comparator, ComparatorExt, NaturalOrder};
//! use std::cmp::Ordering;
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! assert_eq!(NaturalOrder.reversed().compare(&1, &2), Ordering::Greater);
//!
//! let by_length = by_key(|word: &&str| word.len());
//! assert_eq!(by_length.compare(&"pear", &"fig"), Ordering::Greater);
//!
//! // Any `Fn(&T, &T) -> Ordering` is a comparator.
//! let descending = |left: &i32, right: &i32| right.cmp(left);
//! assert_eq!(descending.compare(&1, &2), Ordering::Greater);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// A total order over values of `T`.
///
/// Implementations must be consistent: antisymmetric, transitive, and
/// `compare(a, b) == Equal` must be an equivalence relation. An
/// [`OrderedSet`](crate::OrderedSet) built on an inconsistent comparator keeps
/// memory safety but its lookups return unspecified results.
pub trait Comparator<T: ?Sized> {
    /// Compares `left` to `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// Combinators available on every comparator.
///
/// Kept apart from [`Comparator`] so that calling them on a comparator that
/// is generic over its element type (such as [`NaturalOrder`]) needs no type
/// annotation.
pub trait ComparatorExt: Sized {
    /// Returns a comparator with the opposite order.
    #[inline]
    fn reversed(self) -> Reversed<Self> {
        Reversed(self)
    }

    /// Returns a comparator that breaks ties of `self` with `next`.
    ///
    /// ```rust
    /// use ordered_set::comparator::{by_key, Comparator, ComparatorExt};
    /// use std::cmp::Ordering;
    ///
    /// let order = by_key(|pair: &(i32, char)| pair.0).then(by_key(|pair: &(i32, char)| pair.1));
    /// assert_eq!(order.compare(&(1, 'b'), &(1, 'a')), Ordering::Greater);
    /// ```
    #[inline]
    fn then<N>(self, next: N) -> Then<Self, N> {
        Then { first: self, next }
    }
}

impl<C> ComparatorExt for C {}

// =============================================================================
// NaturalOrder
// =============================================================================

/// Orders elements by their own [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

// =============================================================================
// KeyComparator
// =============================================================================

/// Orders elements by a key extracted from each element.
///
/// Built with [`by_key`].
pub struct KeyComparator<F, K> {
    key: F,
    marker: PhantomData<fn() -> K>,
}

/// Creates a comparator that orders elements by `key(element)`.
///
/// ```rust
/// use ordered_set::comparator::{by_key, Comparator};
/// use std::cmp::Ordering;
///
/// struct Task {
///     priority: u8,
/// }
///
/// let order = by_key(|task: &Task| task.priority);
/// assert_eq!(
///     order.compare(&Task { priority: 1 }, &Task { priority: 1 }),
///     Ordering::Equal
/// );
/// ```
#[inline]
pub const fn by_key<T, K, F>(key: F) -> KeyComparator<F, K>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    KeyComparator {
        key,
        marker: PhantomData,
    }
}

impl<T, K, F> Comparator<T> for KeyComparator<F, K>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.key)(left).cmp(&(self.key)(right))
    }
}

impl<F: Clone, K> Clone for KeyComparator<F, K> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            marker: PhantomData,
        }
    }
}

impl<F: Copy, K> Copy for KeyComparator<F, K> {}

impl<F, K> fmt::Debug for KeyComparator<F, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("KeyComparator")
            .field("key", &std::any::type_name::<K>())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Adapters
// =============================================================================

/// A comparator with the opposite order of the wrapped one.
///
/// Built with [`ComparatorExt::reversed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.0.compare(right, left)
    }
}

/// A lexicographic combination of two comparators.
///
/// Built with [`ComparatorExt::then`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Then<A, B> {
    first: A,
    next: B,
}

impl<T: ?Sized, A: Comparator<T>, B: Comparator<T>> Comparator<T> for Then<A, B> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.first
            .compare(left, right)
            .then_with(|| self.next.compare(left, right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Example {
        count: i32,
        name: &'static str,
    }

    #[rstest]
    #[case(1, 2, Ordering::Less)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Greater)]
    fn natural_order_matches_ord(#[case] left: i32, #[case] right: i32, #[case] expected: Ordering) {
        assert_eq!(NaturalOrder.compare(&left, &right), expected);
    }

    #[rstest]
    fn natural_order_works_on_unsized_types() {
        assert_eq!(NaturalOrder.compare("apple", "banana"), Ordering::Less);
    }

    #[rstest]
    fn reversed_flips_order() {
        let comparator = NaturalOrder.reversed();
        assert_eq!(comparator.compare(&1, &2), Ordering::Greater);
        assert_eq!(comparator.compare(&2, &2), Ordering::Equal);
    }

    #[rstest]
    fn reversed_twice_is_original_order() {
        let comparator = NaturalOrder.reversed().reversed();
        assert_eq!(comparator.compare(&1, &2), Ordering::Less);
    }

    #[rstest]
    fn by_key_ignores_other_fields() {
        let comparator = by_key(|example: &Example| example.count);
        let left = Example { count: 1, name: "a" };
        let right = Example { count: 1, name: "b" };
        assert_eq!(comparator.compare(&left, &right), Ordering::Equal);
    }

    #[rstest]
    fn then_breaks_ties() {
        let comparator = by_key(|example: &Example| example.count)
            .then(by_key(|example: &Example| example.name));
        let left = Example { count: 1, name: "a" };
        let right = Example { count: 1, name: "b" };
        assert_eq!(comparator.compare(&left, &right), Ordering::Less);

        let bigger = Example { count: 2, name: "a" };
        assert_eq!(comparator.compare(&bigger, &right), Ordering::Greater);
    }

    #[rstest]
    fn closure_is_comparator() {
        let comparator = |left: &i32, right: &i32| (left % 10).cmp(&(right % 10));
        assert_eq!(comparator.compare(&13, &21), Ordering::Greater);
        assert_eq!(comparator.compare(&13, &3), Ordering::Equal);
    }

    #[rstest]
    fn boxed_closure_selected_at_runtime() {
        let descending = true;
        let comparator: Box<dyn Fn(&i32, &i32) -> Ordering> = if descending {
            Box::new(|left: &i32, right: &i32| right.cmp(left))
        } else {
            Box::new(|left: &i32, right: &i32| left.cmp(right))
        };
        assert_eq!(comparator.compare(&1, &2), Ordering::Greater);
    }

    #[rstest]
    fn key_comparator_debug_names_key_type() {
        let comparator = by_key(|example: &Example| example.count);
        assert!(format!("{comparator:?}").contains("i32"));
    }
}
