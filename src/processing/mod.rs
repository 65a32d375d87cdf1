//! In-memory collection query pipelines.
//!
//! The processing layer evaluates a sequence of records through ordered stages and a terminal
//! operation. Everything is in-memory and sequential.
//!
//! Currently implemented:
//!
//! - [`Pipeline`]: typed builder (filter/map/try_map/flat_map/distinct/sort/limit + terminals)
//! - [`evaluate()`]: the same vocabulary as runtime values ([`Stage`], [`Terminal`], [`Outcome`])
//! - [`Comparator`]: composable ordering strategies, including [`Comparator::passthrough`]
//! - free functions behind each stage: [`filter()`], [`distinct()`], [`limit()`], [`map()`],
//!   [`flat_map()`], [`try_map()`], [`sort_by()`], and the reductions in [`reduce`]
//!
//! ## Example: filter → sort → map → collect
//!
//! ```rust
//! use stream_drills::processing::Pipeline;
//!
//! let dishes = vec![("pork", 800), ("season fruit", 120), ("rice", 350), ("prawns", 300)];
//!
//! let names = Pipeline::new(dishes)
//!     .filter(|(_, calories)| *calories < 400)
//!     .sorted_by_key(|(_, calories)| *calories)
//!     .map(|(name, _)| name)
//!     .collect();
//!
//! assert_eq!(names, vec!["season fruit", "prawns", "rice"]);
//! ```
//!
//! ## Fallible stages
//!
//! [`Pipeline::try_map`] converts an element error into a [`crate::PipelineError`] and produces no
//! partial output:
//!
//! ```rust
//! use stream_drills::processing::Pipeline;
//!
//! let err = Pipeline::new(vec!["1", "two", "3"])
//!     .try_map(|s| s.parse::<i32>())
//!     .unwrap_err();
//! assert!(err.to_string().contains("failed at element 1"));
//! ```

pub mod filter;
pub mod map;
pub mod pipeline;
pub mod reduce;
pub mod sort;
pub mod stage;

pub use filter::{distinct, filter, limit};
pub use map::{flat_map, map, try_map};
pub use pipeline::Pipeline;
pub use sort::{sort_by, Comparator, SortDirection};
pub use stage::{evaluate, evaluate_with, Outcome, Stage, Terminal};
