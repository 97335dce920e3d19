//! Client for the remote token-introspection service.

use async_trait::async_trait;
use tracing::debug;

use crate::error::AppResult;
use crate::models::VerificationResult;

/// Verifies a bearer token against the authentication service.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> AppResult<VerificationResult>;
}

/// `GET <base_url><token>` over HTTP. A fresh client per call: nothing is pooled or
/// shared between checks, and the connection is released when the call returns.
#[derive(Debug, Clone)]
pub struct HttpTokenVerifier {
    base_url: String,
}

impl HttpTokenVerifier {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn endpoint(&self, token: &str) -> String {
        format!("{}{}", self.base_url, token)
    }
}

#[async_trait]
impl TokenVerifier for HttpTokenVerifier {
    async fn verify(&self, token: &str) -> AppResult<VerificationResult> {
        let client = reqwest::Client::builder().build()?;
        let response = client.get(self.endpoint(token)).send().await?;
        let status = response.status();
        // Rejections usually come back as 4xx with an `error` body, so the status is not checked.
        let body = response.bytes().await?;
        debug!(%status, len = body.len(), "auth service responded");
        let result = serde_json::from_slice(&body)?;
        Ok(result)
    }
}
