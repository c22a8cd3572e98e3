//! Request transport.

use std::future::Future;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::PanelError;

/// Raw response of a panel request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Sends panel requests to the backend.
///
/// Implementations always send `Content-Type: application/json`, even when
/// there is no body.
pub trait Transport: Send + Sync {
    fn post(
        &self,
        path: &str,
        body: Option<Value>,
    ) -> impl Future<Output = Result<Reply, PanelError>> + Send;
}

/// [`Transport`] over HTTP with reqwest. No request timeout is set.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base: Url,
}

impl HttpTransport {
    /// Target the backend at `base_url`, e.g. `http://127.0.0.1:8000`.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::InvalidUrl`] if `base_url` does not parse or
    /// cannot carry a path.
    pub fn new(base_url: &str) -> Result<Self, PanelError> {
        let base = Url::parse(base_url).map_err(|err| PanelError::InvalidUrl {
            url: base_url.to_string(),
            reason: err.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(PanelError::InvalidUrl {
                url: base_url.to_string(),
                reason: "not a base URL".to_string(),
            });
        }
        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }
}

impl Transport for HttpTransport {
    async fn post(&self, path: &str, body: Option<Value>) -> Result<Reply, PanelError> {
        let url = self.base.join(path).map_err(|err| PanelError::InvalidUrl {
            url: format!("{}{path}", self.base),
            reason: err.to_string(),
        })?;

        let mut request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.body(body.to_string());
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        tracing::trace!(path, status, bytes = body.len(), "response received");
        Ok(Reply { status, body })
    }
}
