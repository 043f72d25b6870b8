//! HTTP transport that posts signed forms to the CTyun API.

use crate::{
    ClientConfig, CtyunConnection, CtyunError, CtyunResult,
    core::domain::{model::api_response::ApiResponse, value_object::CtyunUrl},
};
use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota};
use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::{debug, warn};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Delivers an already signed form to an API path and classifies the reply.
///
/// Implementations must treat HTTP 200 as success regardless of the body's
/// `returnCode`, map HTTP 401 to [`CtyunError::InvalidCredentials`] and any
/// other status to [`CtyunError::Api`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_form(&self, path: &str, params: Vec<(String, String)>)
    -> CtyunResult<ApiResponse>;
}

/// The default [`Transport`], backed by `reqwest`.
///
/// Holds no per-request state: the underlying client pools connections and is
/// safe to share across tasks.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: CtyunUrl,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl ApiClient {
    /// Creates a new `ApiClient` for the given endpoint.
    ///
    /// # Errors
    /// Returns `CtyunError::Validation` for an invalid config and
    /// `CtyunError::Connection` if the HTTP client cannot be built.
    pub fn new(connection: &CtyunConnection, config: &ClientConfig) -> CtyunResult<Self> {
        config.validate()?;

        let mut builder =
            Client::builder().danger_accept_invalid_certs(connection.accept_invalid_certs());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| CtyunError::Connection(e.to_string()))?;

        let rate_limiter = match config.rate_limit {
            Some(rl) => {
                let per_second = NonZeroU32::new(rl.requests_per_second).ok_or_else(|| {
                    CtyunError::Connection("rate limit must be non-zero".to_string())
                })?;
                let burst = NonZeroU32::new(rl.burst_size).ok_or_else(|| {
                    CtyunError::Connection("burst size must be non-zero".to_string())
                })?;
                let quota = Quota::per_second(per_second).allow_burst(burst);
                Some(Arc::new(DefaultDirectRateLimiter::direct(quota)))
            }
            None => None,
        };

        Ok(Self {
            http_client,
            base_url: connection.url().clone(),
            rate_limiter,
        })
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn post_form(
        &self,
        path: &str,
        params: Vec<(String, String)>,
    ) -> CtyunResult<ApiResponse> {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        let url = self.base_url.join_api_path(path)?;
        // The serializer is not Send, so it must be gone before the first await.
        let body = {
            let mut serializer = url::form_urlencoded::Serializer::new(String::new());
            for (name, value) in &params {
                serializer.append_pair(name, value);
            }
            serializer.finish()
        };

        debug!(path, fields = params.len(), "sending CTyun request");

        let response = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CtyunError::Connection(format!("HTTP request to {} timed out: {}", path, e))
                } else {
                    CtyunError::Connection(format!("HTTP request failed: {}", e))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CtyunError::Connection(format!("Failed to read response body: {}", e)))?;

        classify_response(path, status, body)
    }
}

/// Maps an HTTP status and body onto the transport contract.
fn classify_response(path: &str, status: StatusCode, body: String) -> CtyunResult<ApiResponse> {
    match status {
        StatusCode::OK => {
            let response = ApiResponse::from_body(body);
            if let ApiResponse::Text(_) = response {
                debug!(path, "response body is not JSON, returning raw text");
            }
            Ok(response)
        }
        StatusCode::UNAUTHORIZED => {
            warn!(path, "CTyun rejected the credentials");
            if body.is_empty() {
                Err(CtyunError::InvalidCredentials(format!(
                    "{}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unauthorized")
                )))
            } else {
                Err(CtyunError::InvalidCredentials(body))
            }
        }
        other => {
            warn!(path, status = other.as_u16(), "CTyun request failed");
            Err(CtyunError::Api {
                status: other.as_u16(),
                body,
            })
        }
    }
}
