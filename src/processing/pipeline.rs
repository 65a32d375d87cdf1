//! The typed pipeline builder.
//!
//! A [`Pipeline`] owns the current sequence. Every stage method consumes the pipeline and returns
//! a new one holding the stage's output, so stages apply strictly in call order. Terminal methods
//! consume the pipeline and return the final result.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::iter::Sum;

use crate::error::PipelineResult;
use crate::execution::{PipelineOptions, RunContext};

use super::filter;
use super::map;
use super::reduce;
use super::sort::{self, Comparator, SortDirection};

/// An in-memory query pipeline over elements of type `T`.
///
/// Cloning a pipeline starts a new run over a copy of the current elements.
#[derive(Debug)]
pub struct Pipeline<T> {
    items: Vec<T>,
    ctx: RunContext,
}

impl<T: Clone> Clone for Pipeline<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            ctx: self.ctx.fork(self.items.len()),
        }
    }
}

impl<T> Pipeline<T> {
    /// Start a pipeline over `items` with default options.
    pub fn new(items: Vec<T>) -> Self {
        Self::with_options(items, PipelineOptions::default())
    }

    /// Start a pipeline over `items` with explicit options (failure policy, observer, metrics).
    pub fn with_options(items: Vec<T>, options: PipelineOptions) -> Self {
        let ctx = RunContext::begin(options, items.len());
        Self { items, ctx }
    }

    /// Start a pipeline over an optional sequence; an absent sequence is treated as empty.
    pub fn from_optional(items: Option<Vec<T>>) -> Self {
        Self::new(items.unwrap_or_default())
    }

    /// Number of elements currently in the pipeline.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when no elements remain.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(super) fn stage<U>(self, name: &'static str, apply: impl FnOnce(Vec<T>) -> Vec<U>) -> Pipeline<U> {
        let input_len = self.items.len();
        let items = apply(self.items);
        self.ctx.on_stage(name, input_len, items.len());
        Pipeline {
            items,
            ctx: self.ctx,
        }
    }

    pub(super) fn terminal<R>(self, name: &'static str, apply: impl FnOnce(Vec<T>) -> R) -> R {
        let input_len = self.items.len();
        let out = apply(self.items);
        self.ctx.on_terminal(name, input_len);
        out
    }

    /// Keep only elements satisfying `predicate`.
    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.stage("filter", |items| filter::filter(items, predicate))
    }

    /// Replace each element with `mapper(element)`.
    pub fn map<U, F>(self, mapper: F) -> Pipeline<U>
    where
        F: FnMut(T) -> U,
    {
        self.stage("map", |items| map::map(items, mapper))
    }

    /// Replace each element with a sequence and concatenate them in element order.
    pub fn flat_map<U, I, F>(self, mapper: F) -> Pipeline<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(T) -> I,
    {
        self.stage("flat_map", |items| map::flat_map(items, mapper))
    }

    /// Apply a fallible mapping; any element error fails the whole evaluation.
    ///
    /// The configured [`crate::execution::FailurePolicy`] decides whether mapping stops at the
    /// first error or reports all of them. Either way no partial result is produced.
    pub fn try_map<U, E, F>(self, mapper: F) -> PipelineResult<Pipeline<U>>
    where
        E: fmt::Display,
        F: FnMut(T) -> Result<U, E>,
    {
        let input_len = self.items.len();
        match map::try_map(self.items, self.ctx.failure_policy(), mapper) {
            Ok(items) => {
                self.ctx.on_stage(map::TRY_MAP_STAGE, input_len, items.len());
                Ok(Pipeline {
                    items,
                    ctx: self.ctx,
                })
            }
            Err(err) => {
                self.ctx.on_failure(&err);
                Err(err)
            }
        }
    }

    /// Sort by a key extracted from each element (stable).
    pub fn sorted_by_key<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.stage("sorted", |mut items| {
            items.sort_by_key(key);
            items
        })
    }

    /// Keep only the first `n` elements.
    pub fn limit(self, n: usize) -> Self {
        self.stage("limit", |items| filter::limit(items, n))
    }

    /// Observe each element without changing the sequence.
    pub fn inspect<F>(self, mut f: F) -> Self
    where
        F: FnMut(&T),
    {
        self.stage("inspect", |items| {
            items.iter().for_each(&mut f);
            items
        })
    }

    /// Collect into an ordered sequence.
    pub fn collect(self) -> Vec<T> {
        self.terminal("collect", |items| items)
    }

    /// Collect into any container.
    pub fn collect_into<C>(self) -> C
    where
        C: FromIterator<T>,
    {
        self.terminal("collect", |items| items.into_iter().collect())
    }

    /// Number of remaining elements.
    pub fn count(self) -> usize {
        self.terminal("count", |items| items.len())
    }

    /// The first remaining element, if any.
    pub fn find_first(self) -> Option<T> {
        self.terminal("find_first", |items| items.into_iter().next())
    }

    /// Any remaining element. Evaluation is sequential, so this is always the first one.
    pub fn find_any(self) -> Option<T> {
        self.terminal("find_any", |items| items.into_iter().next())
    }

    /// `true` if some element satisfies `predicate`; `false` when empty.
    pub fn any_match<F>(self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.terminal("any_match", |items| reduce::any_match(&items, predicate))
    }

    /// `true` if every element satisfies `predicate`; `true` when empty.
    pub fn all_match<F>(self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.terminal("all_match", |items| reduce::all_match(&items, predicate))
    }

    /// `true` if no element satisfies `predicate`; `true` when empty.
    pub fn none_match<F>(self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.terminal("none_match", |items| reduce::none_match(&items, predicate))
    }

    /// Smallest element by `comparator`, first encountered on ties.
    pub fn min_by(self, comparator: &Comparator<T>) -> Option<T> {
        self.terminal("min", |items| reduce::min_by(items, comparator))
    }

    /// Largest element by `comparator`, first encountered on ties.
    pub fn max_by(self, comparator: &Comparator<T>) -> Option<T> {
        self.terminal("max", |items| reduce::max_by(items, comparator))
    }

    /// Hand every remaining element, in order, to `consumer`.
    pub fn for_each<F>(self, consumer: F)
    where
        F: FnMut(T),
    {
        self.terminal("for_each", |items| items.into_iter().for_each(consumer))
    }

    /// Sum the remaining elements.
    pub fn sum<S>(self) -> S
    where
        S: Sum<T>,
    {
        self.terminal("sum", |items| items.into_iter().sum())
    }
}

impl<T: 'static> Pipeline<T> {
    /// Stable sort by `comparator` in `direction`.
    pub fn sorted_by(self, comparator: &Comparator<T>, direction: SortDirection) -> Self {
        self.stage("sorted", |items| sort::sort_by(items, comparator, direction))
    }
}

impl<T: Ord> Pipeline<T> {
    /// Stable sort by the element type's natural order.
    pub fn sorted(self) -> Self {
        self.stage("sorted", |mut items| {
            items.sort();
            items
        })
    }

    /// Smallest element by natural order, first encountered on ties.
    pub fn min(self) -> Option<T> {
        self.terminal("min", |items| {
            items.into_iter().reduce(|best, item| if item < best { item } else { best })
        })
    }

    /// Largest element by natural order, first encountered on ties.
    pub fn max(self) -> Option<T> {
        self.terminal("max", |items| {
            items.into_iter().reduce(|best, item| if item > best { item } else { best })
        })
    }
}

impl<T: Eq + Hash> Pipeline<T> {
    /// Remove later duplicates by value equality.
    pub fn distinct(self) -> Self {
        self.stage("distinct", filter::distinct)
    }

    /// Collect into a set of unique elements.
    pub fn collect_set(self) -> HashSet<T> {
        self.terminal("collect_set", |items| items.into_iter().collect())
    }
}

impl<T: fmt::Display> Pipeline<T> {
    /// Concatenate the `Display` form of each element, separated by `separator`.
    pub fn join(self, separator: &str) -> String {
        self.terminal("join", |items| reduce::join(&items, separator))
    }
}

impl<T> Pipeline<Option<T>> {
    /// Drop absent elements.
    pub fn flatten_present(self) -> Pipeline<T> {
        self.stage("flatten_present", |items| items.into_iter().flatten().collect())
    }
}

impl<T> FromIterator<T> for Pipeline<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
