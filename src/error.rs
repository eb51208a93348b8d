//! Error types for checked construction.
//!
//! Lookups never fail: absence is reported through `Option` and
//! [`Lookup::Unmatched`](crate::Lookup::Unmatched). The only error in this
//! crate comes from [`OrderedSet::try_from_sorted`](crate::OrderedSet::try_from_sorted),
//! which validates input that [`OrderedSet::from_sorted`](crate::OrderedSet::from_sorted)
//! would accept on trust.

/// How an adjacent pair of elements violates the set invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnsortedKind {
    /// The element orders before its predecessor.
    Descending,
    /// The element compares equal to its predecessor.
    Duplicate,
}

/// Input given as sorted and deduplicated was neither.
///
/// # Examples
///
/// ```rust
/// use ordered_set::{OrderedSet, UnsortedInputError, UnsortedKind};
/// use ordered_set::comparator::NaturalOrder;
///
/// let error = OrderedSet::try_from_sorted(vec![1, 3, 3], NaturalOrder).unwrap_err();
/// assert_eq!(
///     error,
///     UnsortedInputError { index: 2, kind: UnsortedKind::Duplicate }
/// );
/// assert_eq!(
///     format!("{error}"),
///     "element at index 2 compares equal to its predecessor"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnsortedInputError {
    /// Index of the first element that breaks the invariant with the element before it.
    pub index: usize,
    /// The kind of violation.
    pub kind: UnsortedKind,
}

impl std::fmt::Display for UnsortedInputError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            UnsortedKind::Descending => write!(
                formatter,
                "element at index {} orders before its predecessor",
                self.index
            ),
            UnsortedKind::Duplicate => write!(
                formatter,
                "element at index {} compares equal to its predecessor",
                self.index
            ),
        }
    }
}

impl std::error::Error for UnsortedInputError {}
