//! Shared application state for axum handlers.

use std::sync::Arc;

use ledstrip_app::ports::StripDriver;
use ledstrip_app::services::light_service::LightService;

/// Application state shared across all axum handlers.
///
/// Generic over the strip driver to avoid dynamic dispatch. `Clone` is
/// implemented manually so the driver itself does not need to be `Clone`.
pub struct AppState<D> {
    pub light_service: Arc<LightService<D>>,
}

impl<D> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            light_service: Arc::clone(&self.light_service),
        }
    }
}

impl<D: StripDriver + 'static> AppState<D> {
    pub fn new(light_service: LightService<D>) -> Self {
        Self::from_arc(Arc::new(light_service))
    }

    /// Use this when the service is also held elsewhere, e.g. to stop the
    /// running animation on shutdown.
    pub fn from_arc(light_service: Arc<LightService<D>>) -> Self {
        Self { light_service }
    }
}
