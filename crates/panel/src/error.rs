//! Panel error types.

/// Errors raised while attaching the panel or running a request task.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// A required control is absent from the surface.
    #[error("control {0:?} not found")]
    MissingControl(String),

    /// The request could not be sent or its response could not be read.
    #[error("request failed")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The response body is not JSON.
    #[error("response is not valid JSON")]
    Decode(#[from] serde_json::Error),

    /// The backend base URL, or a path joined onto it, is not usable.
    #[error("invalid backend URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl From<reqwest::Error> for PanelError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}
