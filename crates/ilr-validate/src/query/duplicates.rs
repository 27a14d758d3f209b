//! Duplicate and overlap detection over record collections.

use std::collections::HashSet;
use std::hash::Hash;

use super::dates::DateRange;

/// Items whose key was already seen earlier in the sequence.
///
/// The first occurrence of each key is not returned; every repeat is.
pub fn repeats_by<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| !seen.insert(key(item)))
        .collect()
}

/// Pairs `(earlier, later)` whose ranges overlap.
///
/// Items are ordered by range start (input order breaks ties), so `later`
/// never starts before `earlier`.
pub fn overlapping_pairs<T, F>(items: &[T], range: F) -> Vec<(&T, &T)>
where
    F: Fn(&T) -> DateRange,
{
    let mut ordered: Vec<(&T, DateRange)> = items.iter().map(|item| (item, range(item))).collect();
    ordered.sort_by_key(|(_, range)| range.start);

    let mut pairs = Vec::new();
    for (index, (earlier, earlier_range)) in ordered.iter().enumerate() {
        for (later, later_range) in &ordered[index + 1..] {
            if earlier_range.overlaps(later_range) {
                pairs.push((*earlier, *later));
            }
        }
    }
    pairs
}

/// The later item of every overlapping pair, each reported once.
pub fn later_overlapping<T, F>(items: &[T], range: F) -> Vec<&T>
where
    F: Fn(&T) -> DateRange,
{
    let mut reported: Vec<&T> = Vec::new();
    for (_, later) in overlapping_pairs(items, range) {
        if !reported.iter().any(|seen| std::ptr::eq(*seen, later)) {
            reported.push(later);
        }
    }
    reported
}
