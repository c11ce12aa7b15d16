use serde::{Deserialize, Serialize};

use crate::normalizer::NormalizeReport;

/// Body of `POST /api/clone`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloneRequest {
    pub url: String,
}

/// Successful clone service reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloneResponse {
    pub html: String,
    #[serde(default)]
    pub message: String,
}

/// Error body returned by the clone service on failure
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceError {
    pub detail: serde_json::Value,
}

impl ServiceError {
    pub fn describe(&self) -> String {
        match &self.detail {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Reply of `GET /api/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// A cloned page with its image URLs made absolute
#[derive(Debug, Clone, Serialize)]
pub struct ClonedPage {
    pub source_url: String,
    pub html: String,
    pub message: String,
    pub report: NormalizeReport,
}
