//! # ledstrip-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `StripDriver` — push a full frame to the LEDs
//! - Define **driving/inbound ports** as use-case structs:
//!   - `LightService` — on, off, set color, report state, run animations
//! - Run animations as background tasks that own the clock
//! - Orchestrate domain objects without knowing *how* frames reach the hardware
//!
//! ## Dependency rule
//! Depends on `ledstrip-domain` only (plus `tokio` for tasks, locks and timers).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod animation_runner;
pub mod ports;
pub mod services;
