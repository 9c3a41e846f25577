//! Round-trip enforcer: one policy function consulted before every request
//! attempt.
//!
//! The enforcer lives in an [`EnforcerSlot`] that is written at most once and
//! read many times. Transports take the slot at construction, so tests and
//! embedders can inject their own; [`EnforcerSlot::global`] is the
//! process-wide instance behind [`set_round_trip_enforcer`].
//!
//! Registration must happen during startup, before any round trip runs.
//! Registering a nil enforcer or registering twice panics.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::error::Result;
use crate::request::Request;

type EnforceFn = dyn Fn(&Request) -> Result<()> + Send + Sync;

/// Policy function that may veto a round trip by returning an error.
#[derive(Clone)]
pub struct Enforcer {
    f: Arc<EnforceFn>,
}

impl Enforcer {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Request) -> Result<()> + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    pub fn check(&self, req: &Request) -> Result<()> {
        (self.f)(req)
    }
}

impl fmt::Debug for Enforcer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Enforcer(..)")
    }
}

/// Set-once holder for an [`Enforcer`]. Clones share the same cell.
#[derive(Clone, Default)]
pub struct EnforcerSlot {
    cell: Arc<OnceLock<Enforcer>>,
}

impl EnforcerSlot {
    /// Empty slot: every check passes until an enforcer is set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide slot used by [`set_round_trip_enforcer`].
    pub fn global() -> &'static EnforcerSlot {
        static GLOBAL: OnceLock<EnforcerSlot> = OnceLock::new();
        GLOBAL.get_or_init(EnforcerSlot::new)
    }

    /// Register the enforcer.
    ///
    /// # Panics
    /// If `f` is `None`, or if an enforcer was already registered on this slot.
    /// Must not race with [`check`](Self::check); call it before traffic starts.
    pub fn set(&self, f: impl Into<Option<Enforcer>>) {
        let f = f.into();
        assert!(f.is_some(), "nil enforcer");
        if let Some(f) = f {
            assert!(
                self.cell.set(f).is_ok(),
                "round trip enforcer already registered"
            );
            tracing::debug!("round trip enforcer registered");
        }
    }

    pub fn is_set(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Consult the enforcer for `req`. `Ok(())` when none is registered,
    /// otherwise exactly what the enforcer returns.
    pub fn check(&self, req: &Request) -> Result<()> {
        match self.cell.get() {
            Some(enforcer) => enforcer.check(req),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for EnforcerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnforcerSlot")
            .field("set", &self.is_set())
            .finish()
    }
}

/// Register the process-wide round-trip enforcer.
///
/// `f` must be non-nil, and this can only be called once. It must not run
/// concurrently with any round trip; register it during init.
///
/// # Panics
/// On a nil enforcer or a second registration.
pub fn set_round_trip_enforcer(f: impl Into<Option<Enforcer>>) {
    EnforcerSlot::global().set(f);
}
