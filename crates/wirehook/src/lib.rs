//! Top-level facade crate for wirehook.
//!
//! Re-exports the core hooks and the network adapters so users can depend on a single crate.

pub mod core {
    pub use wirehook_core::*;
}

pub mod net {
    pub use wirehook_net::*;
}
