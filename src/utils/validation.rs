// Validation utilities
use crate::error::{Error, Result};
use tracing::warn;
use url::Url;

/// Validate that a URL submitted for cloning is an absolute http(s) URL with a host
pub fn validate_target_url(url_str: &str) -> Result<Url> {
    let trimmed = url_str.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation("Please enter a URL".to_string()));
    }

    let url = Url::parse(trimmed)?;

    match url.scheme() {
        "http" | "https" => {}
        _ => {
            warn!(
                "Rejected non-HTTP(S) URL scheme: {} in URL: {}",
                url.scheme(),
                url_str
            );
            return Err(Error::Validation(format!(
                "URL must use http or https scheme: {url_str}"
            )));
        }
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(Error::Validation("URL must have a valid host".to_string()));
    }

    Ok(url)
}

/// Validate the configured clone service base URL
pub fn validate_service_url(url_str: &str) -> Result<Url> {
    let url = Url::parse(url_str)
        .map_err(|e| Error::Config(format!("Invalid clone service URL {url_str}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(Error::Config(format!(
            "Clone service URL must be an http(s) URL with a host: {url_str}"
        )));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_target_url() {
        assert!(validate_target_url("https://example.com").is_ok());
        assert!(validate_target_url("http://example.com:8080/page").is_ok());
        assert!(validate_target_url("  https://example.com/  ").is_ok());

        assert!(matches!(
            validate_target_url("ftp://example.com"),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            validate_target_url("not-a-url"),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(validate_target_url(""), Err(Error::Validation(_))));
        assert!(validate_target_url("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_validate_service_url() {
        assert!(validate_service_url("http://localhost:8000").is_ok());
        assert!(matches!(
            validate_service_url("localhost:8000"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            validate_service_url("file:///tmp/socket"),
            Err(Error::Config(_))
        ));
    }
}
