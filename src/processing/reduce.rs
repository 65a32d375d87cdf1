//! Terminal reductions: quantifiers, extremes and text joins.

use std::cmp::Ordering;
use std::fmt::{self, Write};

use super::sort::Comparator;

/// `true` if any element satisfies `predicate`; `false` for an empty input.
pub fn any_match<'a, T: 'a, F>(items: impl IntoIterator<Item = &'a T>, mut predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    items.into_iter().any(|item| predicate(item))
}

/// `true` if every element satisfies `predicate`; vacuously `true` for an empty input.
pub fn all_match<'a, T: 'a, F>(items: impl IntoIterator<Item = &'a T>, mut predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    items.into_iter().all(|item| predicate(item))
}

/// `true` if no element satisfies `predicate`; vacuously `true` for an empty input.
pub fn none_match<'a, T: 'a, F>(items: impl IntoIterator<Item = &'a T>, predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    !any_match(items, predicate)
}

/// Smallest element by `comparator`; on ties the first encountered wins.
pub fn min_by<T>(items: Vec<T>, comparator: &Comparator<T>) -> Option<T> {
    extreme(items, comparator, Ordering::Less)
}

/// Largest element by `comparator`; on ties the first encountered wins.
///
/// Unlike [`Iterator::max_by`], which keeps the last of equal maxima.
pub fn max_by<T>(items: Vec<T>, comparator: &Comparator<T>) -> Option<T> {
    extreme(items, comparator, Ordering::Greater)
}

fn extreme<T>(items: Vec<T>, comparator: &Comparator<T>, wins: Ordering) -> Option<T> {
    items.into_iter().fold(None, |best, item| match best {
        Some(b) if comparator.compare(&item, &b) != wins => Some(b),
        _ => Some(item),
    })
}

/// Concatenate the `Display` form of every element, separated by `separator`.
pub fn join<'a, T, I>(items: I, separator: &str) -> String
where
    T: fmt::Display + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{item}");
    }
    out
}
