//! Evaluation options and run tracking for pipelines.
//!
//! This module sits "beside" [`crate::processing`] and provides:
//!
//! - [`PipelineOptions`]: the failure policy plus optional observer/metrics hooks
//! - [`FailurePolicy`]: how fallible stages react to element-level errors
//! - Real-time metrics + observer hooks for monitoring a run
//!
//! Evaluation itself is always sequential; the hooks only report what happened.

mod observer;

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::error::PipelineError;

pub use observer::{
    CompositeObserver, JsonLinesObserver, PipelineEvent, PipelineMetrics, PipelineMetricsSnapshot,
    PipelineObserver, StdErrPipelineObserver,
};

/// How a fallible stage (e.g. [`crate::processing::Pipeline::try_map`]) handles element errors.
///
/// Neither policy skips failing elements: a failure always fails the whole evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failing element (default).
    #[default]
    FailFast,
    /// Evaluate every element, then fail with all collected failures.
    CollectAll,
}

/// Options controlling pipeline evaluation.
///
/// Use [`Default`] for common cases.
#[derive(Clone, Default)]
pub struct PipelineOptions {
    /// Reaction to element-level failures in fallible stages.
    pub failure_policy: FailurePolicy,
    /// Optional observer for stage/terminal events.
    pub observer: Option<Arc<dyn PipelineObserver>>,
    /// Optional metrics sink, reset at the start of every run.
    pub metrics: Option<Arc<PipelineMetrics>>,
}

impl fmt::Debug for PipelineOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineOptions")
            .field("failure_policy", &self.failure_policy)
            .field("observer_set", &self.observer.is_some())
            .field("metrics_set", &self.metrics.is_some())
            .finish()
    }
}

/// Per-run bookkeeping carried by a pipeline from source to terminal.
///
/// Not `Clone`: every run emits exactly one `RunStarted` and one `RunFinished`.
#[derive(Debug)]
pub(crate) struct RunContext {
    options: PipelineOptions,
    started: Instant,
}

impl RunContext {
    pub(crate) fn begin(options: PipelineOptions, source_len: usize) -> Self {
        if let Some(m) = &options.metrics {
            m.begin_run(source_len);
        }
        let ctx = Self {
            options,
            started: Instant::now(),
        };
        ctx.emit(PipelineEvent::RunStarted { source_len });
        ctx
    }

    /// Start a separate run with the same options.
    pub(crate) fn fork(&self, source_len: usize) -> Self {
        Self::begin(self.options.clone(), source_len)
    }

    pub(crate) fn failure_policy(&self) -> FailurePolicy {
        self.options.failure_policy
    }

    pub(crate) fn on_stage(&self, stage: &'static str, input_len: usize, output_len: usize) {
        if let Some(m) = &self.options.metrics {
            m.on_stage(input_len, output_len);
        }
        self.emit(PipelineEvent::StageFinished {
            stage,
            input_len,
            output_len,
        });
    }

    pub(crate) fn on_failure(self, err: &PipelineError) {
        for failure in err.failures() {
            if let Some(m) = &self.options.metrics {
                m.on_element_failure();
            }
            self.emit(PipelineEvent::ElementFailed {
                stage: err.stage(),
                index: failure.index,
                message: failure.message,
            });
        }
        self.finish();
    }

    pub(crate) fn on_terminal(self, terminal: &'static str, input_len: usize) {
        if let Some(m) = &self.options.metrics {
            m.on_terminal(input_len);
        }
        self.emit(PipelineEvent::Terminated {
            terminal,
            input_len,
        });
        self.finish();
    }

    fn finish(self) {
        let elapsed = self.started.elapsed();
        let metrics = self.options.metrics.as_ref().map(|m| {
            m.end_run(elapsed);
            m.snapshot()
        });
        self.emit(PipelineEvent::RunFinished { elapsed, metrics });
    }

    fn emit(&self, event: PipelineEvent) {
        if let Some(obs) = &self.options.observer {
            obs.on_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::{FailurePolicy, PipelineEvent, PipelineMetrics, PipelineObserver, PipelineOptions, RunContext};
    use crate::error::PipelineError;

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<PipelineEvent>>,
    }

    impl PipelineObserver for Recorder {
        fn on_event(&self, event: &PipelineEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn default_options_fail_fast_without_hooks() {
        let opts = PipelineOptions::default();
        assert_eq!(opts.failure_policy, FailurePolicy::FailFast);
        assert!(opts.observer.is_none());
        assert!(opts.metrics.is_none());
        assert!(format!("{opts:?}").contains("observer_set: false"));
    }

    #[test]
    fn run_context_reports_stage_then_terminal() {
        let rec = Arc::new(Recorder::default());
        let metrics = Arc::new(PipelineMetrics::new());
        let ctx = RunContext::begin(
            PipelineOptions {
                observer: Some(rec.clone()),
                metrics: Some(Arc::clone(&metrics)),
                ..Default::default()
            },
            4,
        );
        ctx.on_stage("filter", 4, 2);
        ctx.on_terminal("count", 2);

        let events = rec.events.lock().unwrap().clone();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], PipelineEvent::RunStarted { source_len: 4 }));
        assert!(matches!(
            events[1],
            PipelineEvent::StageFinished {
                stage: "filter",
                input_len: 4,
                output_len: 2
            }
        ));
        assert!(matches!(events[2], PipelineEvent::Terminated { terminal: "count", .. }));
        assert!(matches!(events[3], PipelineEvent::RunFinished { metrics: Some(_), .. }));

        let snap = metrics.snapshot();
        assert_eq!(snap.runs, 1);
        assert_eq!(snap.stages_applied, 1);
        assert_eq!(snap.elements_dropped, 2);
        assert!(snap.elapsed.is_some());
    }

    #[test]
    fn run_context_reports_every_collected_failure() {
        let rec = Arc::new(Recorder::default());
        let ctx = RunContext::begin(
            PipelineOptions {
                observer: Some(rec.clone()),
                ..Default::default()
            },
            3,
        );
        let err = PipelineError::ElementsFailed {
            stage: "try_map",
            failures: vec![
                crate::error::ElementFailure {
                    index: 0,
                    message: "x".to_string(),
                },
                crate::error::ElementFailure {
                    index: 2,
                    message: "y".to_string(),
                },
            ],
        };
        ctx.on_failure(&err);

        let failed: Vec<usize> = rec
            .events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                PipelineEvent::ElementFailed { index, .. } => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(failed, vec![0, 2]);
    }
}
