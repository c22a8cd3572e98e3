//! JSON handlers for power and color.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use ledstrip_app::ports::StripDriver;
use ledstrip_domain::state::LightState;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /color`.
#[derive(Debug, Deserialize)]
pub struct ColorRequest {
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct PowerBody {
    pub status: &'static str,
}

/// Echoes the color exactly as the client sent it.
#[derive(Debug, Serialize)]
pub struct ColorBody {
    pub new_color: String,
}

/// Possible responses from the power endpoints.
pub enum PowerResponse {
    Ok(Json<PowerBody>),
}

impl IntoResponse for PowerResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the color endpoint.
pub enum ColorResponse {
    Ok(Json<ColorBody>),
}

impl IntoResponse for ColorResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /on`
pub async fn turn_on<D: StripDriver + 'static>(
    State(state): State<AppState<D>>,
) -> Result<PowerResponse, ApiError> {
    state.light_service.turn_on().await?;
    Ok(PowerResponse::Ok(Json(PowerBody { status: "on" })))
}

/// `POST /off`
pub async fn turn_off<D: StripDriver + 'static>(
    State(state): State<AppState<D>>,
) -> Result<PowerResponse, ApiError> {
    state.light_service.turn_off().await?;
    Ok(PowerResponse::Ok(Json(PowerBody { status: "off" })))
}

/// `POST /color`
pub async fn set_color<D: StripDriver + 'static>(
    State(state): State<AppState<D>>,
    Json(req): Json<ColorRequest>,
) -> Result<ColorResponse, ApiError> {
    state.light_service.set_color(&req.color).await?;
    tracing::info!(color = %req.color, "color changed");
    Ok(ColorResponse::Ok(Json(ColorBody {
        new_color: req.color,
    })))
}

/// `GET /state`
pub async fn state<D: StripDriver + 'static>(State(state): State<AppState<D>>) -> Json<LightState> {
    Json(state.light_service.state().await)
}
