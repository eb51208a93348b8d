//! Property-based tests for OrderedSet laws.
//!
//! These tests check that every reachable state stays sorted and
//! deduplicated, and that lookups, mutations, and union agree with a
//! `BTreeMap` model keyed by the comparator's key.

use ordered_set::comparator::{ComparatorExt, by_key};
use ordered_set::{Comparator, Lookup, NaturalOrder, OrderedSet};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// A record ordered only by `key`; `tag` distinguishes representatives of
/// the same equivalence class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Record {
    key: i8,
    tag: u8,
}

fn by_record_key() -> impl Comparator<Record> + Clone {
    by_key(|record: &Record| record.key)
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (any::<i8>(), any::<u8>()).prop_map(|(key, tag)| Record { key, tag })
}

fn records_strategy(max: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record_strategy(), 0..max)
}

fn assert_invariants<T, C: Comparator<T>>(set: &OrderedSet<T, C>) -> Result<(), TestCaseError> {
    for pair in set.as_slice().windows(2) {
        prop_assert_eq!(
            set.comparator().compare(&pair[0], &pair[1]),
            Ordering::Less
        );
    }
    prop_assert!(set.validate().is_ok());
    Ok(())
}

// =============================================================================
// Construction Law
// Description: from_unsorted keeps exactly the first occurrence of each key
// =============================================================================

proptest! {
    #[test]
    fn prop_from_unsorted_keeps_first_occurrence(records in records_strategy(60)) {
        let set = OrderedSet::from_unsorted(records.clone(), by_record_key());
        assert_invariants(&set)?;

        let mut model: BTreeMap<i8, Record> = BTreeMap::new();
        for record in records {
            model.entry(record.key).or_insert(record);
        }
        let expected: Vec<Record> = model.into_values().collect();
        prop_assert_eq!(set.as_slice(), expected.as_slice());
    }
}

// =============================================================================
// Lookup Law
// Description: present elements match at their index; absent elements are
// unmatched at the insertion point that keeps the order
// =============================================================================

proptest! {
    #[test]
    fn prop_locate_is_correct(
        values in prop::collection::vec(any::<i16>(), 0..60),
        probe: i16
    ) {
        let set: OrderedSet<i16> = values.into_iter().collect();

        for (index, value) in set.iter().enumerate() {
            prop_assert_eq!(set.locate(value), Lookup::Matched(index));
        }

        match set.locate(&probe) {
            Lookup::Matched(index) => prop_assert_eq!(set[index], probe),
            Lookup::Unmatched(index) => {
                prop_assert!(!set.contains(&probe));
                prop_assert!(set.as_slice()[..index].iter().all(|value| *value < probe));
                prop_assert!(set.as_slice()[index..].iter().all(|value| *value > probe));
            }
        }
    }
}

// =============================================================================
// Insert Idempotence Law
// Description: inserting an equivalent element twice changes nothing the
// second time
// =============================================================================

proptest! {
    #[test]
    fn prop_insert_idempotence_law(
        records in records_strategy(40),
        first in record_strategy(),
        tag: u8
    ) {
        let mut set = OrderedSet::from_unsorted(records, by_record_key());
        set.insert(first);
        let snapshot = set.clone();

        let (inserted, resident) = set.insert(Record { key: first.key, tag });
        prop_assert!(!inserted);
        prop_assert_eq!(resident.key, first.key);
        prop_assert_eq!(set.as_slice(), snapshot.as_slice());
    }
}

// =============================================================================
// Remove/Insert Inverse Law
// Description: removing a present element and inserting it back restores
// the set
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_insert_inverse_law(
        records in records_strategy(40).prop_filter("non-empty", |records| !records.is_empty()),
        selector: prop::sample::Index
    ) {
        let original = OrderedSet::from_unsorted(records, by_record_key());
        let target = original[selector.index(original.len())];

        let mut set = original.clone();
        let removed = set.remove(&target);
        prop_assert_eq!(removed, Some(target));
        prop_assert!(!set.contains(&target));
        assert_invariants(&set)?;

        prop_assert!(set.insert(target).0);
        prop_assert_eq!(set.as_slice(), original.as_slice());
    }
}

// =============================================================================
// Mutation Sequence Law
// Description: any sequence of insert/update/remove keeps both invariants
// and matches a BTreeMap model
// =============================================================================

#[derive(Debug, Clone)]
enum Operation {
    Insert(Record),
    Update(Record),
    Remove(Record),
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        record_strategy().prop_map(Operation::Insert),
        record_strategy().prop_map(Operation::Update),
        record_strategy().prop_map(Operation::Remove),
    ]
}

proptest! {
    #[test]
    fn prop_mutation_sequence_matches_model(
        operations in prop::collection::vec(operation_strategy(), 0..100)
    ) {
        let mut set = OrderedSet::new(by_record_key());
        let mut model: BTreeMap<i8, Record> = BTreeMap::new();

        for operation in operations {
            match operation {
                Operation::Insert(record) => {
                    let expected = !model.contains_key(&record.key);
                    let resident = *model.entry(record.key).or_insert(record);
                    let (inserted, actual) = set.insert(record);
                    prop_assert_eq!(inserted, expected);
                    prop_assert_eq!(*actual, resident);
                }
                Operation::Update(record) => {
                    prop_assert_eq!(set.update(record), model.insert(record.key, record));
                }
                Operation::Remove(record) => {
                    prop_assert_eq!(set.remove(&record), model.remove(&record.key));
                }
            }
            assert_invariants(&set)?;
        }

        let expected: Vec<Record> = model.into_values().collect();
        prop_assert_eq!(set.as_slice(), expected.as_slice());
    }
}

// =============================================================================
// Union Law
// Description: A ∪ B holds exactly the keys of A and B; the larger side's
// representative wins, and on equal sizes the argument's wins
// =============================================================================

proptest! {
    #[test]
    fn prop_union_law(
        left_records in records_strategy(30),
        right_records in records_strategy(30)
    ) {
        let left = OrderedSet::from_unsorted(left_records, by_record_key());
        let right = OrderedSet::from_unsorted(right_records, by_record_key());

        let union = left.union(&right);
        assert_invariants(&union)?;

        let (base, folded) = if left.len() > right.len() {
            (&left, &right)
        } else {
            (&right, &left)
        };
        let mut model: BTreeMap<i8, Record> = BTreeMap::new();
        for record in base.iter().chain(folded.iter()) {
            model.entry(record.key).or_insert(*record);
        }
        let expected: Vec<Record> = model.into_values().collect();
        prop_assert_eq!(union.as_slice(), expected.as_slice());
    }
}

proptest! {
    #[test]
    fn prop_form_union_matches_union_when_self_is_larger(
        left_records in records_strategy(30),
        right_records in records_strategy(30)
    ) {
        let left = OrderedSet::from_unsorted(left_records, by_record_key());
        let right = OrderedSet::from_unsorted(right_records, by_record_key());
        prop_assume!(left.len() > right.len());

        let union = left.union(&right);
        let mut formed = left.clone();
        formed.form_union(right);

        prop_assert_eq!(formed.as_slice(), union.as_slice());
    }
}

// =============================================================================
// Comparator Law
// Description: a reversed comparator yields the reverse sequence
// =============================================================================

proptest! {
    #[test]
    fn prop_reversed_comparator_reverses_sequence(
        values in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let ascending = OrderedSet::from_unsorted(values.clone(), NaturalOrder);
        let descending = OrderedSet::from_unsorted(values, NaturalOrder.reversed());

        let mut reversed: Vec<i32> = descending.into_vec();
        reversed.reverse();
        prop_assert_eq!(ascending.into_vec(), reversed);
    }
}
