//! Data-driven pipelines: stages and terminals as runtime values.
//!
//! [`evaluate`] applies a slice of [`Stage`]s to a source in order and finishes with a
//! [`Terminal`], returning an [`Outcome`] whose shape depends on the terminal. Stages and
//! terminals are cheap to clone, so one stage list can be reused across sources.
//!
//! Every stage keeps the element type `T`; use [`Pipeline`] when a mapping changes it. Only
//! [`Stage::distinct`] and [`Terminal::collect_set`] need `T: Eq + Hash`, so element types such
//! as `f64` evaluate fine without them.
//!
//! ```rust
//! use stream_drills::processing::{evaluate, Outcome, Stage, Terminal};
//!
//! let stages = vec![
//!     Stage::filter(|n: &i32| n % 2 == 0),
//!     Stage::distinct(),
//!     Stage::Limit(2),
//! ];
//! let out = evaluate(vec![4, 1, 4, 6, 8], &stages, &Terminal::Collect).unwrap();
//! assert_eq!(out, Outcome::Sequence(vec![4, 6]));
//! ```

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::error::PipelineResult;
use crate::execution::PipelineOptions;

use super::pipeline::Pipeline;
use super::reduce;
use super::sort::{Comparator, SortDirection};

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;
type Transform<T> = Arc<dyn Fn(T) -> T + Send + Sync>;
type FallibleTransform<T> = Arc<dyn Fn(T) -> Result<T, String> + Send + Sync>;
type Expand<T> = Arc<dyn Fn(T) -> Vec<T> + Send + Sync>;
type Render<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;
type Consumer<T> = Arc<dyn Fn(T) + Send + Sync>;
type Dedup<T> = Arc<dyn Fn(Vec<T>) -> Vec<T> + Send + Sync>;
type Gather<T> = Arc<dyn Fn(Vec<T>) -> HashSet<T> + Send + Sync>;

/// One sequence-to-sequence step.
pub enum Stage<T> {
    Filter(Predicate<T>),
    /// A 1:1 mapping that keeps the element type.
    Map(Transform<T>),
    /// A mapping whose element failures fail the evaluation.
    TryMap(FallibleTransform<T>),
    FlatMap(Expand<T>),
    /// Built by [`Stage::distinct`], which captures the `Eq + Hash` dedup.
    Distinct(Dedup<T>),
    Sort(Comparator<T>, SortDirection),
    Limit(usize),
}

impl<T: 'static> Stage<T> {
    /// Keep elements satisfying `predicate`.
    pub fn filter<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::Filter(Arc::new(predicate))
    }

    /// Replace each element with `transform(element)` of the same type.
    pub fn map<F>(transform: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        Self::Map(Arc::new(transform))
    }

    /// Wrap a fallible transform. Its error is kept only as `Display` text.
    pub fn try_map<E, F>(transform: F) -> Self
    where
        E: fmt::Display + 'static,
        F: Fn(T) -> Result<T, E> + Send + Sync + 'static,
    {
        Self::TryMap(Arc::new(move |item| transform(item).map_err(|e| e.to_string())))
    }

    /// Replace each element with a sequence, concatenated in element order.
    pub fn flat_map<I, F>(expand: F) -> Self
    where
        I: IntoIterator<Item = T> + 'static,
        F: Fn(T) -> I + Send + Sync + 'static,
    {
        Self::FlatMap(Arc::new(move |item| expand(item).into_iter().collect()))
    }

    /// Stable ascending sort by `comparator`.
    pub fn sort(comparator: Comparator<T>) -> Self {
        Self::Sort(comparator, SortDirection::Ascending)
    }

    /// Stable sort by `comparator` in reverse.
    pub fn sort_descending(comparator: Comparator<T>) -> Self {
        Self::Sort(comparator, SortDirection::Descending)
    }
}

impl<T: Eq + Hash + 'static> Stage<T> {
    /// Remove later duplicates, keeping first occurrences in order.
    pub fn distinct() -> Self {
        Self::Distinct(Arc::new(|items: Vec<T>| super::filter::distinct(items)))
    }
}

impl<T> Stage<T> {
    /// Name reported in `StageFinished` events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Filter(_) => "filter",
            Self::Map(_) => "map",
            Self::TryMap(_) => "try_map",
            Self::FlatMap(_) => "flat_map",
            Self::Distinct(_) => "distinct",
            Self::Sort(..) => "sorted",
            Self::Limit(_) => "limit",
        }
    }
}

impl<T> Clone for Stage<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Filter(f) => Self::Filter(Arc::clone(f)),
            Self::Map(f) => Self::Map(Arc::clone(f)),
            Self::TryMap(f) => Self::TryMap(Arc::clone(f)),
            Self::FlatMap(f) => Self::FlatMap(Arc::clone(f)),
            Self::Distinct(f) => Self::Distinct(Arc::clone(f)),
            Self::Sort(c, d) => Self::Sort(c.clone(), *d),
            Self::Limit(n) => Self::Limit(*n),
        }
    }
}

impl<T> fmt::Debug for Stage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sort(_, d) => write!(f, "Sort({d:?})"),
            Self::Limit(n) => write!(f, "Limit({n})"),
            other => f.write_str(other.name()),
        }
    }
}

/// The final step of a data-driven pipeline.
pub enum Terminal<T> {
    Collect,
    /// Built by [`Terminal::collect_set`].
    CollectSet(Gather<T>),
    Count,
    FindFirst,
    FindAny,
    AnyMatch(Predicate<T>),
    AllMatch(Predicate<T>),
    NoneMatch(Predicate<T>),
    Min(Comparator<T>),
    Max(Comparator<T>),
    Join { separator: String, render: Render<T> },
    /// Hand every surviving element, in order, to a consumer.
    ForEach(Consumer<T>),
}

impl<T: 'static> Terminal<T> {
    /// `true` if some element satisfies `predicate`.
    pub fn any_match<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::AnyMatch(Arc::new(predicate))
    }

    /// `true` if every element satisfies `predicate`.
    pub fn all_match<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::AllMatch(Arc::new(predicate))
    }

    /// `true` if no element satisfies `predicate`.
    pub fn none_match<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::NoneMatch(Arc::new(predicate))
    }

    /// Hand each element, in order, to `consumer`.
    pub fn for_each<F>(consumer: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self::ForEach(Arc::new(consumer))
    }
}

impl<T: Eq + Hash + 'static> Terminal<T> {
    /// Collect into a set of unique elements.
    pub fn collect_set() -> Self {
        Self::CollectSet(Arc::new(|items: Vec<T>| -> HashSet<T> { items.into_iter().collect() }))
    }
}

impl<T> Terminal<T> {
    /// Name reported in `Terminated` events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Collect => "collect",
            Self::CollectSet(_) => "collect_set",
            Self::Count => "count",
            Self::FindFirst => "find_first",
            Self::FindAny => "find_any",
            Self::AnyMatch(_) => "any_match",
            Self::AllMatch(_) => "all_match",
            Self::NoneMatch(_) => "none_match",
            Self::Min(_) => "min",
            Self::Max(_) => "max",
            Self::Join { .. } => "join",
            Self::ForEach(_) => "for_each",
        }
    }
}

impl<T: fmt::Display + 'static> Terminal<T> {
    /// Join the `Display` form of each element with `separator` (may be empty).
    pub fn join(separator: impl Into<String>) -> Self {
        Self::Join {
            separator: separator.into(),
            render: Arc::new(|item: &T| item.to_string()),
        }
    }
}

impl<T> fmt::Debug for Terminal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Join { separator, .. } => write!(f, "Join({separator:?})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Result of a data-driven pipeline; the variant follows the [`Terminal`].
#[derive(Debug)]
pub enum Outcome<T> {
    /// `Collect`.
    Sequence(Vec<T>),
    /// `CollectSet`.
    Set(HashSet<T>),
    /// `Count`.
    Count(usize),
    /// `FindFirst`, `FindAny`, `Min`, `Max`.
    Optional(Option<T>),
    /// `AnyMatch`, `AllMatch`, `NoneMatch`.
    Boolean(bool),
    /// `Join`.
    Text(String),
    /// `ForEach`.
    Done,
}

impl<T> Outcome<T> {
    /// The collected sequence, if this is a `Sequence`.
    pub fn into_sequence(self) -> Option<Vec<T>> {
        match self {
            Self::Sequence(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_set(self) -> Option<HashSet<T>> {
        match self {
            Self::Set(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_optional(self) -> Option<Option<T>> {
        match self {
            Self::Optional(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_count(&self) -> Option<usize> {
        match self {
            Self::Count(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl<T: Eq + Hash> PartialEq for Outcome<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Sequence(a), Self::Sequence(b)) => a == b,
            (Self::Set(a), Self::Set(b)) => a == b,
            (Self::Count(a), Self::Count(b)) => a == b,
            (Self::Optional(a), Self::Optional(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Done, Self::Done) => true,
            _ => false,
        }
    }
}

/// Evaluate `stages` over `source` in order, then apply `terminal`, with default options.
///
/// Stages keep the element type; build a [`Pipeline`] for mappings that change it.
pub fn evaluate<T>(source: Vec<T>, stages: &[Stage<T>], terminal: &Terminal<T>) -> PipelineResult<Outcome<T>>
where
    T: 'static,
{
    evaluate_with(source, stages, terminal, PipelineOptions::default())
}

/// Like [`evaluate`], with explicit [`PipelineOptions`].
pub fn evaluate_with<T>(
    source: Vec<T>,
    stages: &[Stage<T>],
    terminal: &Terminal<T>,
    options: PipelineOptions,
) -> PipelineResult<Outcome<T>>
where
    T: 'static,
{
    let mut pipeline = Pipeline::with_options(source, options);
    for stage in stages {
        pipeline = match stage {
            Stage::Filter(p) => pipeline.filter(|item| p(item)),
            Stage::Map(f) => pipeline.map(|item| f(item)),
            Stage::TryMap(f) => pipeline.try_map(|item| f(item))?,
            Stage::FlatMap(f) => pipeline.flat_map(|item| f(item)),
            Stage::Distinct(dedup) => pipeline.stage("distinct", |items| dedup(items)),
            Stage::Sort(cmp, direction) => pipeline.sorted_by(cmp, *direction),
            Stage::Limit(n) => pipeline.limit(*n),
        };
    }

    let outcome = match terminal {
        Terminal::Collect => Outcome::Sequence(pipeline.collect()),
        Terminal::CollectSet(gather) => Outcome::Set(pipeline.terminal("collect_set", |items| gather(items))),
        Terminal::Count => Outcome::Count(pipeline.count()),
        Terminal::FindFirst => Outcome::Optional(pipeline.find_first()),
        Terminal::FindAny => Outcome::Optional(pipeline.find_any()),
        Terminal::AnyMatch(p) => Outcome::Boolean(pipeline.any_match(|item| p(item))),
        Terminal::AllMatch(p) => Outcome::Boolean(pipeline.all_match(|item| p(item))),
        Terminal::NoneMatch(p) => Outcome::Boolean(pipeline.none_match(|item| p(item))),
        Terminal::Min(cmp) => Outcome::Optional(pipeline.min_by(cmp)),
        Terminal::Max(cmp) => Outcome::Optional(pipeline.max_by(cmp)),
        Terminal::Join { separator, render } => Outcome::Text(pipeline.terminal("join", |items| {
            let rendered: Vec<String> = items.iter().map(|item| render(item)).collect();
            reduce::join(&rendered, separator)
        })),
        Terminal::ForEach(consume) => {
            pipeline.for_each(|item| consume(item));
            Outcome::Done
        }
    };
    Ok(outcome)
}
