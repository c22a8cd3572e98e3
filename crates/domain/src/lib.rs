//! # ledstrip-domain
//!
//! Pure domain model for the ledstrip light controller.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define **colors** (`Rgb`, the named palette, hex parsing)
//! - Define **presets** (the fixed colors bound to the control panel buttons)
//! - Define the **strip** frame buffer and its invariants
//! - Define **animations** as frame sources that know nothing about timers or hardware
//! - Define the reported **light state**
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod animation;
pub mod color;
pub mod preset;
pub mod state;
pub mod strip;
