// Preview UI: the clone form and the rendered result

pub mod handlers;
pub mod routes;

use crate::cloner::Cloner;
use crate::config::Settings;
use crate::{Error, Result};
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub cloner: Cloner,
    pub settings: Settings,
}

/// Bind the configured address and serve the preview UI until shutdown
pub async fn serve(settings: Settings) -> Result<()> {
    info!("Starting website cloner preview");
    info!("Clone service: {}", settings.service.api_url);

    let cloner = Cloner::new(&settings.service)?;
    let state = AppState {
        cloner,
        settings: settings.clone(),
    };
    let app = routes::create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    println!("Website cloner running at http://{addr} (Ctrl+C to stop)");
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}
