use crate::error::{Error, Result};
use crate::utils::validation::validate_service_url;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_request_body_size: usize,
}

/// Connection settings for the remote clone service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub api_url: String,
    pub timeout_seconds: u64,
    pub max_response_size: usize,
    pub user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
            timeout_seconds: 120,
            max_response_size: 10_485_760,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("sitecloner/{}", env!("CARGO_PKG_VERSION"))
}

/// Read `name` from the environment, falling back to `default`
fn env_or<T: FromStr>(name: &str, default: &str) -> Result<T> {
    std::env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| Error::Config(format!("Invalid {name} value")))
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let api_url = std::env::var("CLONE_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env_or("PORT", "3000")?;
        let max_request_body_size = env_or("MAX_REQUEST_BODY_SIZE", "65536")?;

        let timeout_seconds = env_or("REQUEST_TIMEOUT", "120")?;
        let max_response_size = env_or("MAX_RESPONSE_SIZE", "10485760")?;

        Ok(Settings {
            server: ServerConfig {
                host,
                port,
                max_request_body_size,
            },
            service: ServiceConfig {
                api_url,
                timeout_seconds,
                max_response_size,
                user_agent: default_user_agent(),
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        if self.service.timeout_seconds == 0 {
            return Err(Error::Config(
                "Request timeout must be non-zero".to_string(),
            ));
        }

        if self.service.max_response_size == 0 {
            return Err(Error::Config(
                "Maximum response size must be non-zero".to_string(),
            ));
        }

        validate_service_url(&self.service.api_url)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> Settings {
        Settings {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                max_request_body_size: 65536,
            },
            service: ServiceConfig::default(),
        }
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = test_settings();
        assert!(settings.validate().is_ok());

        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_service_validation() {
        let mut settings = test_settings();
        settings.service.timeout_seconds = 0;
        assert!(settings.validate().is_err());

        let mut settings = test_settings();
        settings.service.api_url = "not a url".to_string();
        assert!(matches!(settings.validate(), Err(Error::Config(_))));

        let mut settings = test_settings();
        settings.service.max_response_size = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_default_user_agent() {
        assert!(ServiceConfig::default().user_agent.starts_with("sitecloner/"));
    }
}
