//! Policy layer (host allowlists).
//!
//! Compiles the `enforcer` config section into fast lookup structures and
//! exposes the result as a round-trip enforcer.

pub mod allowlist;
pub mod engine;

pub use engine::{HostPolicy, PolicyDecision};
