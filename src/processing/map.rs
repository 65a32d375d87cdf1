//! Element mapping stages: map, flat_map and the fallible try_map.

use std::fmt;

use crate::error::{ElementFailure, PipelineError, PipelineResult};
use crate::execution::FailurePolicy;

/// Stage name reported for [`try_map`] failures.
pub const TRY_MAP_STAGE: &str = "try_map";

/// Replace every element with `mapper(element)`, preserving order.
pub fn map<T, U, F>(items: Vec<T>, mapper: F) -> Vec<U>
where
    F: FnMut(T) -> U,
{
    items.into_iter().map(mapper).collect()
}

/// Replace every element with a sequence and concatenate the results in element order.
pub fn flat_map<T, U, I, F>(items: Vec<T>, mapper: F) -> Vec<U>
where
    I: IntoIterator<Item = U>,
    F: FnMut(T) -> I,
{
    items.into_iter().flat_map(mapper).collect()
}

/// Apply a fallible `mapper` to every element.
///
/// Any element error fails the whole stage; no partial output is returned. The element error is
/// reduced to its `Display` text. With [`FailurePolicy::FailFast`] mapping stops at the first
/// error; with [`FailurePolicy::CollectAll`] every element is mapped and all errors are reported.
pub fn try_map<T, U, E, F>(items: Vec<T>, policy: FailurePolicy, mut mapper: F) -> PipelineResult<Vec<U>>
where
    E: fmt::Display,
    F: FnMut(T) -> Result<U, E>,
{
    match policy {
        FailurePolicy::FailFast => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                mapper(item).map_err(|e| PipelineError::ElementFailed {
                    stage: TRY_MAP_STAGE,
                    index,
                    message: e.to_string(),
                })
            })
            .collect(),
        FailurePolicy::CollectAll => {
            let mut out = Vec::with_capacity(items.len());
            let mut failures = Vec::new();
            for (index, item) in items.into_iter().enumerate() {
                match mapper(item) {
                    Ok(v) => out.push(v),
                    Err(e) => failures.push(ElementFailure {
                        index,
                        message: e.to_string(),
                    }),
                }
            }
            if failures.is_empty() {
                Ok(out)
            } else {
                Err(PipelineError::ElementsFailed {
                    stage: TRY_MAP_STAGE,
                    failures,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{flat_map, map, try_map};
    use crate::error::PipelineError;
    use crate::execution::FailurePolicy;

    fn parse(s: &str) -> Result<i32, std::num::ParseIntError> {
        s.parse::<i32>()
    }

    #[test]
    fn map_is_one_to_one() {
        assert_eq!(map(vec!["a", "bcd", ""], str::len), vec![1, 3, 0]);
    }

    #[test]
    fn flat_map_concatenates_in_element_order() {
        let out = flat_map(vec![1, 2, 3], |n| vec![n; n]);
        assert_eq!(out, vec![1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn try_map_succeeds_when_every_element_maps() {
        let out = try_map(vec!["1", "20"], FailurePolicy::FailFast, parse).unwrap();
        assert_eq!(out, vec![1, 20]);
    }

    #[test]
    fn try_map_fail_fast_stops_at_first_error() {
        let mut calls = 0;
        let err = try_map(vec!["1", "x", "y"], FailurePolicy::FailFast, |s| {
            calls += 1;
            parse(s)
        })
        .unwrap_err();

        assert_eq!(calls, 2);
        match err {
            PipelineError::ElementFailed { stage, index, message } => {
                assert_eq!(stage, "try_map");
                assert_eq!(index, 1);
                assert!(message.contains("invalid digit"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn try_map_collect_all_reports_every_failure() {
        let mut calls = 0;
        let err = try_map(vec!["x", "2", "y"], FailurePolicy::CollectAll, |s| {
            calls += 1;
            parse(s)
        })
        .unwrap_err();

        assert_eq!(calls, 3);
        let indexes: Vec<usize> = err.failures().iter().map(|f| f.index).collect();
        assert_eq!(indexes, vec![0, 2]);
    }
}
