//! Destinations for formatted report lines.

use std::sync::Mutex;

/// Receives every report line the registry produces, at info severity.
pub trait MetricSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Default sink: forwards lines to `tracing` under the `cyclemeter::metrics` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl MetricSink for TracingSink {
    fn emit(&self, line: &str) {
        tracing::info!(target: "cyclemeter::metrics", "{line}");
    }
}

/// Keeps lines in memory. Handy for hosts that forward reports elsewhere, and for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every line emitted so far.
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(g) => g.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Drain the buffered lines.
    pub fn take(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(mut g) => std::mem::take(&mut *g),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl MetricSink for MemorySink {
    fn emit(&self, line: &str) {
        // A poisoned buffer is still a valid Vec; keep recording.
        let mut g = match self.lines.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        g.push(line.to_string());
    }
}
