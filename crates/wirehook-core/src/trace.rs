//! Socket trace hooks bound to a [`Scope`].
//!
//! Socket code resolves the trace once per connection and reports each
//! successful transfer. Instrumentation layers nest: binding a new trace on a
//! scope that already carries one first tells the previous trace, through its
//! `will_overwrite` hook, which trace supersedes it.
//!
//! Callbacks may run concurrently from every operation sharing a scope; they
//! must do their own synchronization (atomics, locks). Nothing here serializes
//! calls.

use std::fmt;
use std::sync::Arc;

use crate::scope::Scope;

type ByteHook = Box<dyn Fn(usize) + Send + Sync>;
type OverwriteHook = Box<dyn Fn(Option<&Arc<SockTrace>>) + Send + Sync>;

/// A set of hooks run at socket operations. Any hook may be absent.
#[derive(Default)]
pub struct SockTrace {
    did_read: Option<ByteHook>,
    did_write: Option<ByteHook>,
    will_overwrite: Option<OverwriteHook>,
}

impl SockTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called after a successful read of `n` bytes.
    pub fn on_read(mut self, f: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.did_read = Some(Box::new(f));
        self
    }

    /// Called after a successful write of `n` bytes.
    pub fn on_write(mut self, f: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.did_write = Some(Box::new(f));
        self
    }

    /// Called when a descendant scope rebinds another trace (or `None`) over
    /// this one. Receives the trace taking over.
    pub fn on_overwrite(
        mut self,
        f: impl Fn(Option<&Arc<SockTrace>>) + Send + Sync + 'static,
    ) -> Self {
        self.will_overwrite = Some(Box::new(f));
        self
    }

    pub fn has_read_hook(&self) -> bool {
        self.did_read.is_some()
    }
    pub fn has_write_hook(&self) -> bool {
        self.did_write.is_some()
    }
    pub fn has_overwrite_hook(&self) -> bool {
        self.will_overwrite.is_some()
    }

    /// Invoke the read hook unconditionally (no-op when absent).
    pub fn did_read(&self, n: usize) {
        if let Some(f) = &self.did_read {
            f(n);
        }
    }

    /// Invoke the write hook unconditionally (no-op when absent).
    pub fn did_write(&self, n: usize) {
        if let Some(f) = &self.did_write {
            f(n);
        }
    }

    /// Invoke the overwrite hook (no-op when absent).
    pub fn will_overwrite(&self, next: Option<&Arc<SockTrace>>) {
        if let Some(f) = &self.will_overwrite {
            f(next);
        }
    }

    /// Report a completed read. Zero-byte transfers are not progress and do
    /// not reach the hook.
    pub fn record_read(&self, n: usize) {
        if n > 0 {
            self.did_read(n);
        }
    }

    /// Report a completed write. Zero-byte transfers do not reach the hook.
    pub fn record_write(&self, n: usize) {
        if n > 0 {
            self.did_write(n);
        }
    }
}

impl fmt::Debug for SockTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SockTrace")
            .field("did_read", &self.has_read_hook())
            .field("did_write", &self.has_write_hook())
            .field("will_overwrite", &self.has_overwrite_hook())
            .finish()
    }
}

// Private key: only this module can bind or look up the trace.
struct SockTraceKey;

/// Derive a scope whose socket operations use `trace`.
///
/// If `scope` already resolves to a trace with a `will_overwrite` hook, that
/// hook runs once, on this thread, before the derived scope is returned.
/// Passing `None` shadows any outer trace for the derived scope.
pub fn with_sock_trace(scope: &Scope, trace: impl Into<Option<Arc<SockTrace>>>) -> Scope {
    let trace = trace.into();
    if let Some(previous) = context_sock_trace(scope) {
        if previous.has_overwrite_hook() {
            tracing::trace!(depth = scope.depth(), "sock trace overwritten");
            previous.will_overwrite(trace.as_ref());
        }
    }
    scope.with_value::<SockTraceKey, Option<Arc<SockTrace>>>(trace)
}

/// The trace bound by the innermost [`with_sock_trace`] on `scope`, if any.
pub fn context_sock_trace(scope: &Scope) -> Option<Arc<SockTrace>> {
    scope
        .value::<SockTraceKey, Option<Arc<SockTrace>>>()
        .and_then(|t| t.clone())
}

/// Report `n` bytes read on a socket operating under `scope`.
pub fn report_read(scope: &Scope, n: usize) {
    if n == 0 {
        return;
    }
    if let Some(t) = context_sock_trace(scope) {
        t.did_read(n);
    }
}

/// Report `n` bytes written on a socket operating under `scope`.
pub fn report_write(scope: &Scope, n: usize) {
    if n == 0 {
        return;
    }
    if let Some(t) = context_sock_trace(scope) {
        t.did_write(n);
    }
}
