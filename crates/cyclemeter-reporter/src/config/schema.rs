use std::time::Duration;

use cyclemeter_core::error::{CycleMeterError, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReporterConfig {
    pub version: u32,

    #[serde(default)]
    pub reporter: ReporterSection,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            version: 1,
            reporter: ReporterSection::default(),
        }
    }
}

impl ReporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(CycleMeterError::UnsupportedVersion);
        }
        self.reporter.validate()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReporterSection {
    #[serde(default = "default_cycle_interval_ms")]
    pub cycle_interval_ms: u64,

    /// Log a snapshot line before each rollover.
    #[serde(default = "default_true")]
    pub snapshot_each_cycle: bool,

    /// Log the run summary when the driver shuts down.
    #[serde(default = "default_true")]
    pub summary_on_shutdown: bool,
}

impl Default for ReporterSection {
    fn default() -> Self {
        Self {
            cycle_interval_ms: default_cycle_interval_ms(),
            snapshot_each_cycle: true,
            summary_on_shutdown: true,
        }
    }
}

impl ReporterSection {
    pub fn validate(&self) -> Result<()> {
        if !(100..=3_600_000).contains(&self.cycle_interval_ms) {
            return Err(CycleMeterError::InvalidConfig(
                "reporter.cycle_interval_ms must be between 100 and 3600000".into(),
            ));
        }
        Ok(())
    }

    pub fn cycle_interval(&self) -> Duration {
        Duration::from_millis(self.cycle_interval_ms)
    }
}

fn default_cycle_interval_ms() -> u64 {
    1000
}
fn default_true() -> bool {
    true
}
