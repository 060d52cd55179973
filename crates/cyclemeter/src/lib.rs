//! cyclemeter: cycle-based in-process metric registry.
//!
//! Bundles the registry, its `,##0.#` report format, and the text sinks
//! (`core`) with the YAML config loader and the tokio cycle driver that
//! snapshots, rolls, and summarizes a registry (`reporter`).

pub mod core {
    pub use cyclemeter_core::*;
}

pub mod reporter {
    pub use cyclemeter_reporter::*;
}
