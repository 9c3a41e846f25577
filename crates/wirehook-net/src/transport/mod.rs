//! Transport-side consumers of the core hooks.
//!
//! `round_trip` consults the enforcer before every request attempt; `conn`
//! reports socket transfers to the scope's trace.

pub mod conn;
pub mod round_trip;

pub use conn::TracedStream;
pub use round_trip::{EnforcedTransport, RoundTripper};
