//! Order-preserving selection stages: filter, distinct, limit.

use std::collections::HashSet;
use std::hash::Hash;

/// Keep only the elements for which `predicate` returns `true`, in their original order.
pub fn filter<T, F>(items: Vec<T>, mut predicate: F) -> Vec<T>
where
    F: FnMut(&T) -> bool,
{
    items.into_iter().filter(|item| predicate(item)).collect()
}

/// Remove later duplicates by value equality, keeping each first occurrence in first-seen order.
pub fn distinct<T>(items: Vec<T>) -> Vec<T>
where
    T: Eq + Hash,
{
    let keep: Vec<bool> = {
        let mut seen = HashSet::with_capacity(items.len());
        items.iter().map(|item| seen.insert(item)).collect()
    };
    items
        .into_iter()
        .zip(keep)
        .filter_map(|(item, keep)| keep.then_some(item))
        .collect()
}

/// Keep the first `n` elements. `n` past the end keeps everything.
pub fn limit<T>(mut items: Vec<T>, n: usize) -> Vec<T> {
    items.truncate(n);
    items
}
