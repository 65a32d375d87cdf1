//! Comparators and stable sorting.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Sort direction for a sort stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest first (default).
    #[default]
    Ascending,
    /// Largest first; the comparator is applied in reverse.
    Descending,
}

/// A shareable, composable ordering strategy over `T`.
///
/// Cloning is cheap: clones share the same underlying comparison function.
pub struct Comparator<T> {
    cmp: Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>,
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            cmp: Arc::clone(&self.cmp),
        }
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator").finish_non_exhaustive()
    }
}

impl<T: 'static> Comparator<T> {
    /// Build a comparator from an arbitrary comparison function.
    pub fn new<F>(cmp: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self { cmp: Arc::new(cmp) }
    }

    /// Compare by a key extracted from each element.
    pub fn by_key<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::new(move |a, b| key(a).cmp(&key(b)))
    }

    /// A comparator that reports every pair as equal.
    ///
    /// Stable sorting by it (reversed or not) leaves the input order untouched.
    pub fn passthrough() -> Self {
        Self::new(|_, _| Ordering::Equal)
    }

    /// The same comparator with its arguments swapped.
    pub fn reversed(&self) -> Self {
        let inner = Arc::clone(&self.cmp);
        Self::new(move |a, b| inner(b, a))
    }

    /// Break ties of `self` with `next`.
    pub fn then(&self, next: Comparator<T>) -> Self {
        let first = Arc::clone(&self.cmp);
        Self::new(move |a, b| first(a, b).then_with(|| next.compare(a, b)))
    }

    /// Apply this comparator in the given direction.
    pub fn directed(&self, direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => self.clone(),
            SortDirection::Descending => self.reversed(),
        }
    }
}

impl<T: Ord + 'static> Comparator<T> {
    /// The element type's natural ordering.
    pub fn natural() -> Self {
        Self::new(|a: &T, b: &T| a.cmp(b))
    }
}

impl<T> Comparator<T> {
    /// Order `a` relative to `b`.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.cmp)(a, b)
    }
}

/// Stable sort of `items` by `comparator` in `direction`.
///
/// Elements that compare equal keep their original relative order in both directions.
pub fn sort_by<T: 'static>(
    mut items: Vec<T>,
    comparator: &Comparator<T>,
    direction: SortDirection,
) -> Vec<T> {
    let cmp = comparator.directed(direction);
    items.sort_by(|a, b| cmp.compare(a, b));
    items
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{sort_by, Comparator, SortDirection};

    type Pair = (u32, &'static str);

    fn pairs() -> Vec<Pair> {
        vec![(3, "c"), (1, "a"), (2, "b1"), (1, "a2"), (2, "b2")]
    }

    #[test]
    fn by_key_sort_is_stable_for_equal_keys() {
        let out = sort_by(pairs(), &Comparator::by_key(|p: &Pair| p.0), SortDirection::Ascending);
        assert_eq!(
            out,
            vec![(1, "a"), (1, "a2"), (2, "b1"), (2, "b2"), (3, "c")]
        );
    }

    #[test]
    fn descending_keeps_equal_keys_in_original_order() {
        let out = sort_by(pairs(), &Comparator::by_key(|p: &Pair| p.0), SortDirection::Descending);
        assert_eq!(
            out,
            vec![(3, "c"), (2, "b1"), (2, "b2"), (1, "a"), (1, "a2")]
        );
    }

    #[test]
    fn passthrough_leaves_order_unchanged_even_reversed() {
        let cmp = Comparator::<Pair>::passthrough();
        assert_eq!(sort_by(pairs(), &cmp, SortDirection::Ascending), pairs());
        assert_eq!(sort_by(pairs(), &cmp, SortDirection::Descending), pairs());
        assert_eq!(sort_by(pairs(), &cmp.reversed(), SortDirection::Ascending), pairs());
        assert_eq!(cmp.compare(&(1, "x"), &(9, "y")), Ordering::Equal);
    }

    #[test]
    fn then_breaks_ties() {
        let cmp = Comparator::by_key(|p: &Pair| p.0)
            .then(Comparator::by_key(|p: &Pair| std::cmp::Reverse(p.1)));
        let out = sort_by(pairs(), &cmp, SortDirection::Ascending);
        assert_eq!(
            out,
            vec![(1, "a2"), (1, "a"), (2, "b2"), (2, "b1"), (3, "c")]
        );
    }

    #[test]
    fn natural_and_reversed() {
        let v = vec![2, 9, 4];
        assert_eq!(sort_by(v.clone(), &Comparator::natural(), SortDirection::Ascending), vec![2, 4, 9]);
        assert_eq!(
            sort_by(v, &Comparator::natural().reversed(), SortDirection::Ascending),
            vec![9, 4, 2]
        );
    }
}
