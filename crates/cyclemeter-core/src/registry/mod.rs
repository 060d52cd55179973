//! Cycle-based metric registry.
//!
//! Producers add samples by name from any thread. An administrative caller
//! periodically logs a snapshot and rolls the cycle (folding each metric's
//! cycle value into its peak), and prints averages, peaks, and totals once
//! the run ends.
//!
//! Metrics live in a `DashMap`: creating a name goes through a single
//! `entry().or_insert_with()` call, and each metric's counters are guarded by
//! its shard lock. Reporting walks the map shard by shard, so it sees a
//! weakly consistent view and never blocks producers on other shards.

mod state;

use std::fmt::Write;
use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;

use crate::format::format_metric;
use crate::sink::{MetricSink, TracingSink};

use state::MetricState;
pub use state::MetricValues;

pub struct MetricRegistry {
    start_ms: i64,
    metrics: DashMap<String, MetricState>,
    sink: Arc<dyn MetricSink>,
}

impl MetricRegistry {
    /// Registry reporting through `tracing`. `start_ms` is milliseconds since epoch.
    pub fn new(start_ms: i64) -> Self {
        Self::with_sink(start_ms, Arc::new(TracingSink))
    }

    pub fn with_sink(start_ms: i64, sink: Arc<dyn MetricSink>) -> Self {
        Self {
            start_ms,
            metrics: DashMap::new(),
            sink,
        }
    }

    pub fn start_ms(&self) -> i64 {
        self.start_ms
    }

    /// Add `value` to the metric `name`, creating it on first use.
    pub fn accumulate(&self, name: &str, value: f64) {
        // Fast path avoids allocating the key for known metrics.
        if let Some(mut state) = self.metrics.get_mut(name) {
            state.add(value);
            return;
        }

        let mut state = self.metrics.entry(name.to_string()).or_insert_with(|| {
            tracing::debug!(metric = %name, "registering metric");
            MetricState::default()
        });
        state.add(value);
    }

    /// Log the active cycle's value of every metric as one line, and return it.
    pub fn snapshot(&self) -> String {
        let mut body = String::new();
        for entry in self.metrics.iter() {
            let _ = write!(
                body,
                "{}: {} ",
                entry.key(),
                format_metric(entry.value().current())
            );
        }
        let line = format!("Metric stats: {}", body.trim());

        self.sink.emit(&line);
        line
    }

    /// Close the active cycle for every metric and open a new one.
    pub fn roll_cycle(&self) {
        for mut entry in self.metrics.iter_mut() {
            entry.value_mut().roll();
        }
    }

    /// Log run time plus average, peak, and total of every metric.
    ///
    /// Elapsed time is counted in whole seconds; an `end_ms` before the start
    /// counts as zero. The banner shows the real elapsed seconds while averages
    /// divide by at least one second.
    pub fn summarize(&self, end_ms: i64) -> RunSummary {
        let elapsed_secs =
            u64::try_from(end_ms.saturating_sub(self.start_ms) / 1000).unwrap_or(0);
        let divisor = elapsed_secs.max(1) as f64;

        let metrics: Vec<MetricSummary> = self
            .metrics
            .iter()
            .map(|entry| {
                let v = entry.value().values();
                MetricSummary {
                    name: entry.key().clone(),
                    average: v.total / divisor,
                    peak: v.peak,
                    total: v.total,
                }
            })
            .collect();

        self.sink.emit(&format!(
            "** Logging metrics. Total run time: {elapsed_secs} seconds **"
        ));
        for m in &metrics {
            self.sink.emit(&m.line());
        }

        RunSummary {
            elapsed_secs,
            metrics,
        }
    }

    pub fn get(&self, name: &str) -> Option<MetricValues> {
        self.metrics.get(name).map(|s| s.values())
    }

    pub fn names(&self) -> Vec<String> {
        self.metrics.iter().map(|e| e.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

/// End-of-run figures for one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub name: String,
    pub average: f64,
    pub peak: f64,
    pub total: f64,
}

impl MetricSummary {
    /// The summary report line for this metric.
    pub fn line(&self) -> String {
        format!(
            "{}: average: {} peak: {} total: {}",
            self.name,
            format_metric(self.average),
            format_metric(self.peak),
            format_metric(self.total)
        )
    }
}

/// Result of [`MetricRegistry::summarize`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub elapsed_secs: u64,
    pub metrics: Vec<MetricSummary>,
}

impl RunSummary {
    pub fn metric(&self, name: &str) -> Option<&MetricSummary> {
        self.metrics.iter().find(|m| m.name == name)
    }
}
