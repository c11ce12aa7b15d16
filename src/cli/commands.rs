use crate::cloner::{CloneClient, Cloner, HealthResponse};
use crate::config::ServiceConfig;
use crate::normalizer::{normalize, NormalizeReport};
use crate::Result;
use std::path::Path;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::info;

/// Clone `url` through the service and write the normalized HTML
pub async fn clone(config: &ServiceConfig, url: &str, output: Option<&Path>) -> Result<NormalizeReport> {
    let cloner = Cloner::new(config)?;
    let page = cloner.clone_and_normalize(url).await?;

    write_output(output, &page.html).await?;

    if !page.message.is_empty() {
        eprintln!("✓ {}", page.message);
    }
    print_report(&page.report);

    Ok(page.report)
}

/// Normalize a local HTML document against `base`
pub async fn normalize_file(
    base: &str,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<NormalizeReport> {
    let html = read_input(input).await?;
    let normalized = normalize(&html, base);

    write_output(output, &normalized.html).await?;
    print_report(&normalized.report);

    Ok(normalized.report)
}

/// Check the clone service health endpoint
pub async fn health(config: &ServiceConfig) -> Result<HealthResponse> {
    let client = CloneClient::new(config)?;
    let health = client.health().await?;

    println!("✓ Clone service at {}: {}", client.api_url(), health.status);
    Ok(health)
}

async fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => Ok(tokio::fs::read_to_string(path).await?),
        None => {
            let mut html = String::new();
            tokio::io::stdin().read_to_string(&mut html).await?;
            Ok(html)
        }
    }
}

async fn write_output(output: Option<&Path>, html: &str) -> Result<()> {
    match output {
        Some(path) => {
            tokio::fs::write(path, html).await?;
            info!("Wrote {} bytes to {}", html.len(), path.display());
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(html.as_bytes()).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}

fn print_report(report: &NormalizeReport) {
    eprintln!(
        "  Images: {} seen, {} rewritten, {} failed",
        report.images_seen,
        report.rewritten,
        report.failed()
    );
    for failure in &report.failures {
        eprintln!("  ✗ {}: {}", failure.src, failure.reason);
    }
}
