//! Lightweight in-process metrics.
//!
//! Counters are atomics rendered in Prometheus text format. `sock` builds
//! socket traces that feed them.

pub mod metrics;
pub mod sock;

pub use metrics::CounterVec;
pub use sock::SockMetrics;
