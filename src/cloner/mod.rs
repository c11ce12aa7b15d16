pub mod client;
pub mod models;

pub use client::CloneClient;
pub use models::{CloneRequest, CloneResponse, ClonedPage, HealthResponse};

use crate::config::ServiceConfig;
use crate::normalizer::normalize;
use crate::Result;
use tracing::info;

/// Clones a site through the remote service and prepares it for preview
#[derive(Clone)]
pub struct Cloner {
    client: CloneClient,
}

impl Cloner {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        Ok(Self {
            client: CloneClient::new(config)?,
        })
    }

    pub fn client(&self) -> &CloneClient {
        &self.client
    }

    /// Clone `url`, then make the returned image URLs absolute against `url`
    pub async fn clone_and_normalize(&self, url: &str) -> Result<ClonedPage> {
        let source_url = url.trim().to_string();
        let response = self.client.clone_site(&source_url).await?;

        let normalized = normalize(&response.html, &source_url);

        info!(
            "Cloned {}: {} images rewritten, {} failed",
            source_url,
            normalized.report.rewritten,
            normalized.report.failed()
        );

        Ok(ClonedPage {
            source_url,
            html: normalized.html,
            message: response.message,
            report: normalized.report,
        })
    }
}
