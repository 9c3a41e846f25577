//! wirehook core: process-wide round-trip enforcer and scope-bound socket traces.
//!
//! This crate holds the two hook mechanisms and the small value types they
//! operate on. It carries no transport or runtime dependencies; the `net`
//! crate is the consumer that calls into these hooks from real I/O paths.
//!
//! # Defensive guarantees
//! `unwrap`, `expect` and `panic!` are compile-denied here. The only fatal
//! paths are the registration preconditions in [`enforcer::EnforcerSlot::set`],
//! which indicate a programming error rather than bad traffic.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod enforcer;
pub mod error;
pub mod request;
pub mod scope;
pub mod trace;

pub use enforcer::{set_round_trip_enforcer, Enforcer, EnforcerSlot};
pub use error::{ErrorCode, Result, WireHookError};
pub use request::{Request, Response};
pub use scope::Scope;
pub use trace::{context_sock_trace, with_sock_trace, SockTrace};
