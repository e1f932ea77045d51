//! Transport client for the monitoring REST API

use std::sync::Arc;

use serde_json::Value;

use crate::envelope::Envelope;
use crate::error::GridwatchError;
use crate::io::{HttpClient, HttpMethod, HttpRequest};
use crate::session::TokenStore;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Turns an endpoint, verb and optional JSON body into one round trip.
///
/// Every call reads the token store first, then builds the request, then
/// dispatches it. There is no retry, no timeout beyond what the injected
/// [`HttpClient`] enforces, and no coalescing of identical concurrent calls.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
    tokens: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("tokens", &self.tokens)
            .finish()
    }
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        http: Arc<dyn HttpClient>,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        let base_url = base_url.into();
        tracing::debug!("Created ApiClient for {}", base_url);
        Self {
            base_url,
            http,
            tokens,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_token(&self) -> crate::Result<Option<String>> {
        self.tokens.get_token().await
    }

    pub async fn set_token(&self, token: &str) -> crate::Result<()> {
        self.tokens.set_token(token).await
    }

    pub async fn clear_token(&self) -> crate::Result<()> {
        self.tokens.clear_token().await
    }

    /// Issue a request and unwrap the response envelope.
    ///
    /// Resolves with the envelope's `data` (`None` when absent) or with the raw
    /// body when it carries no `success` key. The HTTP status code plays no
    /// part in deciding between success and failure.
    pub async fn request(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<&Value>,
    ) -> crate::Result<Option<Value>> {
        let token = self.tokens.get_token().await?;
        let request = self.build_request(endpoint, method, token.as_deref(), body)?;

        let response = match self.http.send(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("API request error: {} {}: {}", method, endpoint, e);
                return Err(e);
            }
        };

        let envelope = match Envelope::parse(&response.body) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::error!(
                    "API request error: {} {} (status {}): {}",
                    method,
                    endpoint,
                    response.status,
                    e
                );
                return Err(e);
            }
        };

        envelope.into_result().inspect_err(|e| {
            if let GridwatchError::Application { message } = e {
                tracing::error!("API request failed: {} {}: {}", method, endpoint, message);
            }
        })
    }

    /// Shorthand for a GET without body
    pub async fn get(&self, endpoint: &str) -> crate::Result<Option<Value>> {
        self.request(endpoint, HttpMethod::Get, None).await
    }

    fn build_request(
        &self,
        endpoint: &str,
        method: HttpMethod,
        token: Option<&str>,
        body: Option<&Value>,
    ) -> crate::Result<HttpRequest> {
        let mut headers = vec![("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string())];
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let body = body.map(serde_json::to_string).transpose()?;

        Ok(HttpRequest {
            method,
            url: format!("{}{}", self.base_url, endpoint),
            headers,
            body,
        })
    }
}
