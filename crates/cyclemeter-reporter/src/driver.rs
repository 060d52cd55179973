//! Periodic cycle driver.
//!
//! One tokio task owns the cadence: every tick it optionally logs a snapshot
//! and then rolls the cycle. Shutdown is signalled over a `watch` channel; the
//! task then prints the run summary and hands it back through the join handle.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use cyclemeter_core::error::{CycleMeterError, Result};
use cyclemeter_core::{MetricRegistry, RunSummary};

use crate::clock;
use crate::config::ReporterConfig;

pub struct CycleDriver {
    registry: Arc<MetricRegistry>,
    interval: Duration,
    snapshot_each_cycle: bool,
    summary_on_shutdown: bool,
    clock: fn() -> i64,
}

impl CycleDriver {
    pub fn new(registry: Arc<MetricRegistry>, cfg: &ReporterConfig) -> Self {
        Self {
            registry,
            interval: cfg.reporter.cycle_interval(),
            snapshot_each_cycle: cfg.reporter.snapshot_each_cycle,
            summary_on_shutdown: cfg.reporter.summary_on_shutdown,
            clock: clock::epoch_millis,
        }
    }

    /// Replace the wall clock used for the end-of-run timestamp.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    /// Snapshot (if enabled) and roll the registry once.
    pub fn run_cycle(&self) {
        if self.snapshot_each_cycle {
            self.registry.snapshot();
        }
        self.registry.roll_cycle();
    }

    /// Start the cycle loop on the current tokio runtime.
    ///
    /// The first rollover happens one full interval after spawning.
    pub fn spawn(self) -> DriverHandle {
        let (stop_tx, mut stop_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            tracing::info!(
                interval_ms = self.interval.as_millis() as u64,
                "cycle driver started"
            );

            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        self.run_cycle();
                        tracing::trace!(metrics = self.registry.len(), "cycle rolled");
                    }
                    changed = stop_rx.changed() => {
                        // Err: handle dropped without an explicit shutdown.
                        if changed.is_err() || *stop_rx.borrow() {
                            break;
                        }
                    }
                }
            }

            tracing::info!("cycle driver stopping");
            if self.summary_on_shutdown {
                Some(self.registry.summarize((self.clock)()))
            } else {
                None
            }
        });

        DriverHandle {
            stop: stop_tx,
            task,
        }
    }
}

/// Handle to a running [`CycleDriver`].
pub struct DriverHandle {
    stop: watch::Sender<bool>,
    task: JoinHandle<Option<RunSummary>>,
}

impl DriverHandle {
    /// Stop the loop and wait for the final summary (`None` when summaries are disabled).
    pub async fn shutdown(self) -> Result<Option<RunSummary>> {
        let _ = self.stop.send(true);
        self.task
            .await
            .map_err(|e| CycleMeterError::Internal(format!("cycle driver task failed: {e}")))
    }
}
