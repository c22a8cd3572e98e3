//! # ledstrip-adapter-virtual
//!
//! Simulated strip driver for machines without LEDs attached.
//!
//! Every frame pushed through [`VirtualStrip`] is kept in memory: the last
//! frame and a running count can be read back, which is what the daemon
//! uses in development and what the end-to-end tests assert on.
//!
//! ## Dependency rule
//!
//! Depends on `ledstrip-app` (port traits) and `ledstrip-domain` only.

mod strip;

pub use strip::VirtualStrip;
