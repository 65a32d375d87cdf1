use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;

/// Events emitted while a pipeline runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PipelineEvent {
    RunStarted {
        source_len: usize,
    },
    StageFinished {
        stage: &'static str,
        input_len: usize,
        output_len: usize,
    },
    ElementFailed {
        stage: &'static str,
        index: usize,
        message: String,
    },
    Terminated {
        terminal: &'static str,
        input_len: usize,
    },
    RunFinished {
        elapsed: Duration,
        metrics: Option<PipelineMetricsSnapshot>,
    },
}

/// Observer hook for pipeline events.
pub trait PipelineObserver: Send + Sync {
    fn on_event(&self, event: &PipelineEvent);
}

/// A simple stderr logger for pipeline events.
#[derive(Debug, Default)]
pub struct StdErrPipelineObserver;

impl PipelineObserver for StdErrPipelineObserver {
    fn on_event(&self, event: &PipelineEvent) {
        eprintln!("[pipeline] {event:?}");
    }
}

/// Writes one JSON object per event to the wrapped writer.
///
/// Writes are best-effort; serialization or I/O failures are ignored.
#[derive(Debug)]
pub struct JsonLinesObserver<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> JsonLinesObserver<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Recover the wrapped writer.
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> PipelineObserver for JsonLinesObserver<W> {
    fn on_event(&self, event: &PipelineEvent) {
        let Ok(line) = serde_json::to_string(event) else {
            return;
        };
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{line}");
        }
    }
}

/// An observer that fans out events to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn PipelineObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn PipelineObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl PipelineObserver for CompositeObserver {
    fn on_event(&self, event: &PipelineEvent) {
        for o in &self.observers {
            o.on_event(event);
        }
    }
}

/// Real-time metrics for a pipeline run.
///
/// Counters are reset when a run starts; callers can snapshot them at any time.
#[derive(Debug)]
pub struct PipelineMetrics {
    run_id: AtomicU64,
    elapsed_ns: AtomicU64,

    source_len: AtomicU64,
    stages_applied: AtomicU64,
    elements_processed: AtomicU64,
    elements_dropped: AtomicU64,
    element_failures: AtomicU64,
    terminal_input: AtomicU64,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        Self {
            run_id: AtomicU64::new(0),
            elapsed_ns: AtomicU64::new(0),
            source_len: AtomicU64::new(0),
            stages_applied: AtomicU64::new(0),
            elements_processed: AtomicU64::new(0),
            elements_dropped: AtomicU64::new(0),
            element_failures: AtomicU64::new(0),
            terminal_input: AtomicU64::new(0),
        }
    }

    pub fn begin_run(&self, source_len: usize) {
        let _ = self.run_id.fetch_add(1, Ordering::SeqCst);
        self.elapsed_ns.store(0, Ordering::SeqCst);
        self.source_len.store(source_len as u64, Ordering::SeqCst);
        self.stages_applied.store(0, Ordering::SeqCst);
        self.elements_processed.store(0, Ordering::SeqCst);
        self.elements_dropped.store(0, Ordering::SeqCst);
        self.element_failures.store(0, Ordering::SeqCst);
        self.terminal_input.store(0, Ordering::SeqCst);
    }

    pub fn end_run(&self, elapsed: Duration) {
        // Never store zero: zero means "still running" in snapshots.
        let ns = elapsed.as_nanos().clamp(1, u64::MAX as u128) as u64;
        self.elapsed_ns.store(ns, Ordering::SeqCst);
    }

    pub fn on_stage(&self, input_len: usize, output_len: usize) {
        let _ = self.stages_applied.fetch_add(1, Ordering::SeqCst);
        let _ = self
            .elements_processed
            .fetch_add(input_len as u64, Ordering::SeqCst);
        let _ = self
            .elements_dropped
            .fetch_add(input_len.saturating_sub(output_len) as u64, Ordering::SeqCst);
    }

    pub fn on_element_failure(&self) {
        let _ = self.element_failures.fetch_add(1, Ordering::SeqCst);
    }

    pub fn on_terminal(&self, input_len: usize) {
        self.terminal_input.store(input_len as u64, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> PipelineMetricsSnapshot {
        let elapsed_ns = self.elapsed_ns.load(Ordering::SeqCst);
        let elapsed = if elapsed_ns > 0 {
            Some(Duration::from_nanos(elapsed_ns))
        } else {
            None
        };

        PipelineMetricsSnapshot {
            runs: self.run_id.load(Ordering::SeqCst),
            elapsed,
            source_len: self.source_len.load(Ordering::SeqCst),
            stages_applied: self.stages_applied.load(Ordering::SeqCst),
            elements_processed: self.elements_processed.load(Ordering::SeqCst),
            elements_dropped: self.elements_dropped.load(Ordering::SeqCst),
            element_failures: self.element_failures.load(Ordering::SeqCst),
            terminal_input: self.terminal_input.load(Ordering::SeqCst),
        }
    }
}

impl Default for PipelineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable snapshot of [`PipelineMetrics`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineMetricsSnapshot {
    pub runs: u64,
    pub elapsed: Option<Duration>,
    pub source_len: u64,
    pub stages_applied: u64,
    pub elements_processed: u64,
    pub elements_dropped: u64,
    pub element_failures: u64,
    pub terminal_input: u64,
}

impl fmt::Display for PipelineMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "runs={}, source_len={}, stages={}, processed={}, dropped={}, failures={}, terminal_input={}, elapsed={:?}",
            self.runs,
            self.source_len,
            self.stages_applied,
            self.elements_processed,
            self.elements_dropped,
            self.element_failures,
            self.terminal_input,
            self.elapsed
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use super::{
        CompositeObserver, JsonLinesObserver, PipelineEvent, PipelineMetrics, PipelineObserver,
    };

    #[derive(Default)]
    struct Counting {
        seen: Mutex<usize>,
    }

    impl PipelineObserver for Counting {
        fn on_event(&self, _event: &PipelineEvent) {
            *self.seen.lock().unwrap() += 1;
        }
    }

    #[test]
    fn json_lines_observer_writes_one_tagged_object_per_event() {
        let obs = JsonLinesObserver::new(Vec::new());
        obs.on_event(&PipelineEvent::RunStarted { source_len: 3 });
        obs.on_event(&PipelineEvent::StageFinished {
            stage: "filter",
            input_len: 3,
            output_len: 1,
        });

        let text = String::from_utf8(obs.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["event"], "run_started");
        assert_eq!(first["source_len"], 3);

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["event"], "stage_finished");
        assert_eq!(second["stage"], "filter");
        assert_eq!(second["output_len"], 1);
    }

    #[test]
    fn composite_observer_fans_out() {
        let a = Arc::new(Counting::default());
        let b = Arc::new(Counting::default());
        let composite = CompositeObserver::new(vec![
            a.clone() as Arc<dyn PipelineObserver>,
            b.clone() as Arc<dyn PipelineObserver>,
        ]);
        composite.on_event(&PipelineEvent::RunStarted { source_len: 0 });
        assert_eq!(*a.seen.lock().unwrap(), 1);
        assert_eq!(*b.seen.lock().unwrap(), 1);
        assert!(format!("{composite:?}").contains("observers_len: 2"));
    }

    #[test]
    fn metrics_reset_between_runs() {
        let m = PipelineMetrics::new();
        m.begin_run(10);
        m.on_stage(10, 4);
        m.on_element_failure();
        m.end_run(Duration::from_millis(1));
        assert_eq!(m.snapshot().elements_dropped, 6);
        assert_eq!(m.snapshot().element_failures, 1);

        m.begin_run(2);
        let snap = m.snapshot();
        assert_eq!(snap.runs, 2);
        assert_eq!(snap.source_len, 2);
        assert_eq!(snap.stages_applied, 0);
        assert_eq!(snap.element_failures, 0);
        assert_eq!(snap.elapsed, None);
        assert!(snap.to_string().starts_with("runs=2"));
    }
}
