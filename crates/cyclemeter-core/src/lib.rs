//! cyclemeter core: the cycle-based metric registry, its number format, the
//! text sink contract, and the shared error type.
//!
//! This crate carries no async runtime so it can be embedded in any host
//! process. Producers call [`MetricRegistry::accumulate`] from any thread; an
//! administrative caller rolls cycles and prints summaries.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Registry operations
//! are total over their inputs and never fail.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod format;
pub mod registry;
pub mod sink;

/// Shared result type.
pub use error::{CycleMeterError, Result};
pub use format::format_metric;
pub use registry::{MetricRegistry, MetricSummary, MetricValues, RunSummary};
pub use sink::{MemorySink, MetricSink, TracingSink};
