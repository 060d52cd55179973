//! cyclemeter reporter: drives a `MetricRegistry` through its cycles.
//!
//! Provides the strict YAML config loader, tracing setup for hosts, a wall
//! clock helper, and a tokio task that snapshots and rolls the registry on a
//! fixed period and prints the run summary on shutdown.

pub mod clock;
pub mod config;
pub mod driver;
pub mod obs;

pub use driver::{CycleDriver, DriverHandle};
