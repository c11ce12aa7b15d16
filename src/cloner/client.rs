use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::utils::validation::validate_target_url;
use reqwest::{header, Client, Response};
use std::time::Duration;
use tracing::{debug, warn};

use super::models::{CloneRequest, CloneResponse, HealthResponse, ServiceError};

/// HTTP client for the remote clone service.
///
/// Each request is attempted once; failures are returned to the caller as-is.
#[derive(Clone)]
pub struct CloneClient {
    client: Client,
    api_url: String,
    max_response_size: usize,
}

impl CloneClient {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            max_response_size: config.max_response_size,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Ask the service to clone `url` and return the generated HTML untouched
    pub async fn clone_site(&self, url: &str) -> Result<CloneResponse> {
        let target = validate_target_url(url)?;
        let endpoint = format!("{}/api/clone", self.api_url);

        debug!("Requesting clone of {} from {}", target, endpoint);

        let response = self
            .client
            .post(&endpoint)
            .header(header::ACCEPT, "application/json")
            .json(&CloneRequest {
                url: url.trim().to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        let body = self.read_with_limit(response).await?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ServiceError>(&body)
                .map(|e| e.describe())
                .unwrap_or_else(|_| format!("HTTP {status}"));
            warn!("Clone service rejected {}: {}", target, detail);
            return Err(Error::Upstream(format!(
                "Failed to clone website: {detail}"
            )));
        }

        let cloned: CloneResponse = serde_json::from_str(&body).map_err(|e| {
            Error::Upstream(format!("Malformed clone service response: {e}"))
        })?;

        debug!(
            "Clone service returned {} bytes of HTML for {}",
            cloned.html.len(),
            target
        );

        Ok(cloned)
    }

    /// Probe the service health endpoint
    pub async fn health(&self) -> Result<HealthResponse> {
        let endpoint = format!("{}/api/health", self.api_url);
        let response = self.client.get(&endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream(format!(
                "Health check failed: HTTP {status}"
            )));
        }

        let body = self.read_with_limit(response).await?;
        let health = serde_json::from_str(&body)
            .map_err(|e| Error::Upstream(format!("Malformed health response: {e}")))?;

        Ok(health)
    }

    async fn read_with_limit(&self, response: Response) -> Result<String> {
        if let Some(content_length) = response.content_length() {
            if content_length > self.max_response_size as u64 {
                return Err(Error::Upstream(format!(
                    "Response size {} exceeds maximum {}",
                    content_length, self.max_response_size
                )));
            }
        }

        let bytes = response.bytes().await?;

        if bytes.len() > self.max_response_size {
            return Err(Error::Upstream(format!(
                "Response size {} exceeds maximum {}",
                bytes.len(),
                self.max_response_size
            )));
        }

        String::from_utf8(bytes.to_vec())
            .map_err(|e| Error::Upstream(format!("Invalid UTF-8 in response: {e}")))
    }
}
