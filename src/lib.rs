//! `stream-drills` is a small library of composable, in-memory collection query pipelines and the
//! exercises ("drills") built on them.
//!
//! The primary entrypoint is [`processing::Pipeline`], a typed builder that applies stages
//! (filter → map → distinct → sort → limit) strictly in call order and finishes with a terminal
//! operation (collect, count, find, quantifiers, min/max, join, for-each).
//!
//! ## Quick example: low-calorie dishes
//!
//! ```rust
//! use stream_drills::datasets;
//! use stream_drills::processing::Pipeline;
//!
//! let names = Pipeline::new(datasets::menu())
//!     .filter(|dish| dish.calories < 400)
//!     .sorted_by_key(|dish| dish.calories)
//!     .map(|dish| dish.name)
//!     .collect();
//!
//! assert_eq!(names, vec!["season fruit", "prawns", "rice"]);
//! ```
//!
//! ## Terminal operations
//!
//! - `collect` / `collect_set`: ordered sequence or unique set
//! - `count`
//! - `find_first` / `find_any`: identical for sequential evaluation; `None` when empty
//! - `any_match` (`false` when empty), `all_match` / `none_match` (`true` when empty)
//! - `min_by` / `max_by`: first encountered element wins ties; `None` when empty
//! - `join`: concatenation with a separator (which may be empty)
//! - `for_each`: hands each surviving element to a consumer
//!
//! ## Failures
//!
//! A fallible per-element step ([`processing::Pipeline::try_map`]) fails the whole evaluation with
//! a [`PipelineError`]. There are no partial results, retries or skipped elements.
//!
//! ## Observability
//!
//! Attach a [`execution::PipelineObserver`] and/or [`execution::PipelineMetrics`] through
//! [`execution::PipelineOptions`]:
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use stream_drills::execution::{PipelineMetrics, PipelineOptions, StdErrPipelineObserver};
//! use stream_drills::processing::Pipeline;
//!
//! let metrics = Arc::new(PipelineMetrics::new());
//! let opts = PipelineOptions {
//!     observer: Some(Arc::new(StdErrPipelineObserver)),
//!     metrics: Some(Arc::clone(&metrics)),
//!     ..Default::default()
//! };
//!
//! let evens = Pipeline::with_options((1..=10).collect(), opts)
//!     .filter(|n: &i32| n % 2 == 0)
//!     .count();
//! assert_eq!(evens, 5);
//! assert_eq!(metrics.snapshot().elements_dropped, 5);
//! ```
//!
//! ## Modules
//!
//! - [`processing`]: the pipeline, its stage vocabulary and comparators
//! - [`execution`]: options, failure policy, observers and metrics
//! - [`types`]: value records (users, dishes, cards, traders, transactions)
//! - [`datasets`]: fixed sample data
//! - [`drills`]: the exercises, one pipeline each
//! - [`product`]: product-page queries
//! - [`error`]: error types

pub mod datasets;
pub mod drills;
pub mod error;
pub mod execution;
pub mod processing;
pub mod product;
pub mod types;

pub use error::{ElementFailure, PipelineError, PipelineResult, UnknownCountryOfOrigin};
