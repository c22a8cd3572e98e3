//! # ledstrip-panel
//!
//! The device control panel: a handful of named controls (power buttons, a
//! color input, a send button and four presets) bound to fire-and-forget
//! `POST` requests against the strip backend.
//!
//! The panel never models the device state and never validates what the user
//! typed. Every click spawns its own tokio task; nothing is retried, queued
//! or de-duplicated, and failures only end up in the log.
//!
//! ## Seams
//! - [`ControlSurface`] is whatever hosts the controls (a terminal, a test
//!   fake, …). The panel only asks whether a control exists and what the
//!   color input currently holds.
//! - [`Transport`] sends the requests. [`HttpTransport`] is the reqwest
//!   implementation.

mod control;
mod error;
mod panel;
mod transport;

pub use control::{Button, ControlSurface, REQUIRED_CONTROLS, ids};
pub use error::PanelError;
pub use panel::{ControlPanel, RequestTask};
pub use transport::{HttpTransport, Reply, Transport};
