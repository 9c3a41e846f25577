//! wirehook net library entry.
//!
//! This crate holds the consumers of the core hooks: a transport wrapper that
//! consults the round-trip enforcer, a stream adapter that feeds socket traces,
//! the host-allowlist policy loaded from config, counters for both, and the
//! batch URL check used by `wirehook-check`.

pub mod check;
pub mod config;
pub mod obs;
pub mod policy;
pub mod transport;

use wirehook_core::error::Result;
use wirehook_core::EnforcerSlot;

/// Compile the configured host policy and register it on `slot`.
///
/// Returns `false` when the enforcer is disabled in config (slot left empty).
///
/// # Panics
/// If `slot` already holds an enforcer.
pub fn install_enforcer(cfg: &config::WireHookConfig, slot: &EnforcerSlot) -> Result<bool> {
    if !cfg.enforcer.enabled {
        tracing::info!("round trip enforcer disabled by config");
        return Ok(false);
    }
    let policy = policy::HostPolicy::new(&cfg.enforcer)?;
    slot.set(policy.into_enforcer());
    Ok(true)
}
