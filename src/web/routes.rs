use axum::http::{header, HeaderValue};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    limit::RequestBodyLimitLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use super::{handlers, AppState};

/// Create the router for the preview UI
pub fn create_router(state: AppState) -> Router {
    let max_body = state.settings.server.max_request_body_size;

    let web_routes = Router::new()
        .route("/", get(handlers::index))
        .route("/clone", post(handlers::clone_page))
        .with_state(state);

    let health_routes = Router::new().route("/health", get(handlers::health_check));

    Router::new()
        .merge(web_routes)
        .merge(health_routes)
        .layer(
            // Request body size limit - the form only carries a URL
            RequestBodyLimitLayer::new(max_body),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(TraceLayer::new_for_http())
}
