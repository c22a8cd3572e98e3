//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod animation;
#[allow(clippy::missing_errors_doc)]
pub mod light;

use axum::Json;
use axum::Router;
use axum::routing::{get, post};
use serde::Serialize;

use ledstrip_app::ports::StripDriver;

use crate::state::AppState;

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

/// `GET /`
pub async fn root() -> Json<Greeting> {
    Json(Greeting {
        message: "Hello world!",
    })
}

/// Build the API routes, mounted at the root.
pub fn routes<D>() -> Router<AppState<D>>
where
    D: StripDriver + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/on", post(light::turn_on::<D>))
        .route("/off", post(light::turn_off::<D>))
        .route("/color", post(light::set_color::<D>))
        .route("/state", get(light::state::<D>))
        .route(
            "/animation",
            post(animation::start::<D>).delete(animation::stop::<D>),
        )
}
