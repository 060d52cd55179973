use serde::Serialize;

/// Per-metric counters. Always mutated under the owning map shard's lock,
/// so the three fields change together.
#[derive(Debug, Default)]
pub(crate) struct MetricState {
    current: f64,
    peak: f64,
    total: f64,
}

impl MetricState {
    pub(crate) fn add(&mut self, value: f64) {
        self.current += value;
        self.total += value;
    }

    /// Close the active cycle: fold `current` into `peak`, then start from zero.
    pub(crate) fn roll(&mut self) {
        self.peak = self.peak.max(self.current);
        self.current = 0.0;
    }

    pub(crate) fn current(&self) -> f64 {
        self.current
    }

    pub(crate) fn values(&self) -> MetricValues {
        MetricValues {
            current: self.current,
            peak: self.peak,
            total: self.total,
        }
    }
}

/// Point-in-time copy of one metric's counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricValues {
    /// Accumulated within the active cycle.
    pub current: f64,
    /// Highest `current` seen at a past cycle boundary.
    pub peak: f64,
    /// Lifetime sum of every value added.
    pub total: f64,
}
