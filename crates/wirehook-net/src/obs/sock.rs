//! Byte-counting socket traces.

use std::sync::Arc;

use wirehook_core::SockTrace;

use super::metrics::CounterVec;

/// Counters fed by [`SockMetrics::trace`] and by enforced transports.
#[derive(Default)]
pub struct SockMetrics {
    pub sock_bytes: CounterVec,
    pub trace_overwrites: CounterVec,
    pub round_trips: CounterVec,
}

impl SockMetrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Build a trace that adds transferred bytes to `sock_bytes` under
    /// `scope=<label>`, and counts each time a nested scope supersedes it.
    pub fn trace(self: &Arc<Self>, label: &str) -> Arc<SockTrace> {
        let (r, w, o) = (Arc::clone(self), Arc::clone(self), Arc::clone(self));
        let (lr, lw, lo) = (label.to_string(), label.to_string(), label.to_string());
        Arc::new(
            SockTrace::new()
                .on_read(move |n| {
                    r.sock_bytes
                        .add(&[("scope", lr.as_str()), ("dir", "read")], n as u64)
                })
                .on_write(move |n| {
                    w.sock_bytes
                        .add(&[("scope", lw.as_str()), ("dir", "write")], n as u64)
                })
                .on_overwrite(move |next| {
                    tracing::debug!(scope = %lo, cleared = next.is_none(), "sock trace superseded");
                    o.trace_overwrites.inc(&[("scope", lo.as_str())]);
                }),
        )
    }

    pub fn bytes_read(&self, label: &str) -> u64 {
        self.sock_bytes.get(&[("scope", label), ("dir", "read")])
    }

    pub fn bytes_written(&self, label: &str) -> u64 {
        self.sock_bytes.get(&[("scope", label), ("dir", "write")])
    }

    /// Render all counters.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.sock_bytes.render("wirehook_sock_bytes_total", &mut out);
        self.trace_overwrites
            .render("wirehook_trace_overwrites_total", &mut out);
        self.round_trips.render("wirehook_round_trips_total", &mut out);
        out
    }
}
