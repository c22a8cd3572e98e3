//! JSON handlers for animations.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use ledstrip_app::ports::StripDriver;
use ledstrip_domain::animation::AnimationRequest;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StartedBody {
    pub animation: &'static str,
}

/// Possible responses from the start endpoint.
pub enum StartResponse {
    Accepted(Json<StartedBody>),
}

impl IntoResponse for StartResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Accepted(json) => (StatusCode::ACCEPTED, json).into_response(),
        }
    }
}

/// Possible responses from the stop endpoint.
pub enum StopResponse {
    NoContent,
}

impl IntoResponse for StopResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `POST /animation`
pub async fn start<D: StripDriver + 'static>(
    State(state): State<AppState<D>>,
    Json(req): Json<AnimationRequest>,
) -> Result<StartResponse, ApiError> {
    let animation = state.light_service.start_animation(&req).await?;
    Ok(StartResponse::Accepted(Json(StartedBody { animation })))
}

/// `DELETE /animation`
pub async fn stop<D: StripDriver + 'static>(State(state): State<AppState<D>>) -> StopResponse {
    let stopped = state.light_service.stop_animation().await;
    tracing::debug!(stopped, "animation stop requested");
    StopResponse::NoContent
}
