//! # ordered-set
//!
//! A flat ordered set: elements live in one contiguous `Vec`, kept sorted
//! and deduplicated under an injected comparator.
//!
//! ## Overview
//!
//! - **[`OrderedSet`]**: set semantics (membership, insert-or-ignore,
//!   update-or-insert, remove, union) on top of binary-search lookup.
//! - **[`comparator`]**: the [`Comparator`] trait and ready-made orders
//!   (natural, by key, reversed, tie-broken).
//!
//! This is deliberately not a tree: insert and remove shift elements in
//! O(n), in exchange for O(log n) lookup and cache-friendly iteration.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` as a plain sequence
//!
//! ## Example
//!
//! ```rust
//! use ordered_set::prelude::*;
//!
//! let mut set = OrderedSet::from_unsorted([3, 1, 2, 3], NaturalOrder);
//! assert_eq!(set.as_slice(), &[1, 2, 3]);
//!
//! assert_eq!(set.locate(&2), Lookup::Matched(1));
//! assert_eq!(set.locate(&5), Lookup::Unmatched(3));
//!
//! set.insert(5);
//! assert_eq!(set.remove(&1), Some(1));
//! assert_eq!(set.as_slice(), &[2, 3, 5]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use ordered_set::prelude::*;
/// ```
pub mod prelude {
    pub use crate::comparator::{Comparator, ComparatorExt, NaturalOrder, by_key};
    pub use crate::error::{UnsortedInputError, UnsortedKind};
    pub use crate::ordered_set::{Lookup, OrderedSet};
}

pub mod comparator;
pub mod error;
pub mod ordered_set;

pub use comparator::{Comparator, NaturalOrder};
pub use error::{UnsortedInputError, UnsortedKind};
pub use ordered_set::{Lookup, OrderedSet};
