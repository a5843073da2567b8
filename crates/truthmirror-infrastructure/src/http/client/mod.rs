mod journal;
mod mood;
mod playlist;
mod types;

pub use types::endpoints;

use anyhow::{Context, Result};
use log::{debug, warn};
use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use url::Url;

use truthmirror_domain::auth::AccessTokenProvider;
use truthmirror_domain::shared::DomainError;

use super::result_ext::ResultExt;
use crate::config::TimeoutConfig;
use types::{truncate_body, ERROR_BODY_LIMIT, USER_AGENT};

/// Client for the journal backend.
///
/// Every call is a single attempt: failures are returned to the caller,
/// which keeps its last-known state.
pub struct ApiClient {
    pub(super) client: Client,
    pub(super) base_url: Url,
    pub(super) token_provider: Arc<dyn AccessTokenProvider>,
}

impl ApiClient {
    pub fn new(
        base_url: Url,
        timeouts: &TimeoutConfig,
        token_provider: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeouts.http_request)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url,
            token_provider,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(super) fn endpoint(&self, path: &str) -> Result<Url, DomainError> {
        self.base_url
            .join(path)
            .map_err(|e| DomainError::InvalidInput(format!("Invalid endpoint {}: {}", path, e)))
    }

    async fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder, DomainError> {
        let request = request.header(header::ACCEPT, "application/json");
        match self.token_provider.access_token().await? {
            Some(token) => Ok(request.bearer_auth(token)),
            None => Ok(request),
        }
    }

    pub(super) async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, DomainError> {
        let url = self.endpoint(path)?;
        debug!("{} GET {}", operation, url);

        let request = self.authorize(self.client.get(url).query(query)).await?;
        let response = request.send().await.to_transport_err(operation)?;
        Self::read_json(operation, response).await
    }

    pub(super) async fn post_json<B, T>(
        &self,
        operation: &str,
        path: &str,
        body: &B,
    ) -> Result<T, DomainError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!("{} POST {}", operation, url);

        let request = self.authorize(self.client.post(url).json(body)).await?;
        let response = request.send().await.to_transport_err(operation)?;
        Self::read_json(operation, response).await
    }

    /// Check the status and decode the body. An empty body decodes as JSON `null`.
    async fn read_json<T: DeserializeOwned>(
        operation: &str,
        response: Response,
    ) -> Result<T, DomainError> {
        let status = response.status();
        let body = response.text().await.to_transport_err(operation)?;

        if !status.is_success() {
            warn!(
                "{} failed with status {}: {}",
                operation,
                status,
                truncate_body(&body, 200)
            );
            return Err(error_for_status(operation, status, &body));
        }

        let body = if body.trim().is_empty() { "null" } else { body.as_str() };
        serde_json::from_str(body).to_decode_err(operation)
    }
}

/// Map a non-2xx response to an error, preferring the backend's `message` field
pub(super) fn error_for_status(operation: &str, status: StatusCode, body: &str) -> DomainError {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| truncate_body(body, ERROR_BODY_LIMIT).to_string());
    let message = if detail.is_empty() {
        format!("{} returned {}", operation, status)
    } else {
        format!("{} returned {}: {}", operation, status, detail)
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => DomainError::Unauthorized(message),
        StatusCode::NOT_FOUND => DomainError::NotFound(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => DomainError::Timeout(message),
        s if s.is_client_error() => DomainError::InvalidInput(message),
        _ => DomainError::ExternalService(message),
    }
}
