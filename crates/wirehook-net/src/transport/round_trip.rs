use std::sync::Arc;

use async_trait::async_trait;

use wirehook_core::error::Result;
use wirehook_core::{EnforcerSlot, Request, Response};

use crate::obs::SockMetrics;

/// Performs one request attempt. The actual HTTP machinery lives behind this.
#[async_trait]
pub trait RoundTripper: Send + Sync {
    async fn round_trip(&self, req: Request) -> Result<Response>;
}

#[async_trait]
impl<T: RoundTripper + ?Sized> RoundTripper for Arc<T> {
    async fn round_trip(&self, req: Request) -> Result<Response> {
        (**self).round_trip(req).await
    }
}

/// Wraps a transport so every attempt is checked by the injected enforcer
/// first. A rejection is returned as-is and the inner transport never runs.
pub struct EnforcedTransport<T> {
    inner: T,
    enforcer: EnforcerSlot,
    metrics: Option<Arc<SockMetrics>>,
}

impl<T: RoundTripper> EnforcedTransport<T> {
    pub fn new(inner: T, enforcer: EnforcerSlot) -> Self {
        Self {
            inner,
            enforcer,
            metrics: None,
        }
    }

    /// Use the process-wide slot filled by `set_round_trip_enforcer`.
    pub fn with_global(inner: T) -> Self {
        Self::new(inner, EnforcerSlot::global().clone())
    }

    /// Count forwarded and rejected attempts.
    pub fn with_metrics(mut self, metrics: Arc<SockMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    fn record(&self, outcome: &str) {
        if let Some(m) = &self.metrics {
            m.round_trips.inc(&[("outcome", outcome)]);
        }
    }
}

#[async_trait]
impl<T: RoundTripper> RoundTripper for EnforcedTransport<T> {
    async fn round_trip(&self, req: Request) -> Result<Response> {
        if let Err(e) = self.enforcer.check(&req) {
            tracing::debug!(
                method = %req.method(),
                authority = %req.authority(),
                error = %e,
                "round trip rejected by enforcer"
            );
            self.record("rejected");
            return Err(e);
        }
        self.record("forwarded");
        self.inner.round_trip(req).await
    }
}
