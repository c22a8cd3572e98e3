//! # ledstrip-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the small JSON API the control panel talks to (`/on`, `/off`,
//!   `/color`) plus `/state` and `/animation` for scripted use
//! - Map HTTP requests into [`LightService`](ledstrip_app::services::light_service::LightService)
//!   calls (driving adapter)
//! - Map domain errors into status codes
//!
//! ## Dependency rule
//! Depends on `ledstrip-app` (for the driver port and services) and
//! `ledstrip-domain` (for request/response types). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
