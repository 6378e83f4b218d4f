//! Observability layer.
//!
//! Canonical structured event names emitted by the resolver. Library code
//! emits `tracing` events and never installs a global subscriber; process
//! boundaries own one-time subscriber initialization.

pub mod events;
