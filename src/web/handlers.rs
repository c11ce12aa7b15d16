use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{cloner::HealthResponse, error::Error, Result};

use super::AppState;

/// Clone form and preview page
#[derive(Template, Default)]
#[template(path = "index.html")]
struct IndexTemplate {
    url: String,
    error: String,
    message: String,
    cloned_html: String,
    rewritten: usize,
    failed: usize,
}

impl IndexTemplate {
    fn render_html(&self) -> Result<Html<String>> {
        Ok(Html(self.render().map_err(|e| {
            Error::Internal(format!("Template render failed: {e}"))
        })?))
    }
}

#[derive(Debug, Deserialize)]
pub struct CloneForm {
    #[serde(default)]
    pub url: String,
}

/// GET / - Clone form
pub async fn index() -> Result<Html<String>> {
    IndexTemplate::default().render_html()
}

/// POST /clone - Clone a site and show the preview
pub async fn clone_page(State(state): State<AppState>, Form(form): Form<CloneForm>) -> Response {
    debug!("Clone request for {:?}", form.url);

    let template = match state.cloner.clone_and_normalize(&form.url).await {
        Ok(page) => IndexTemplate {
            url: page.source_url,
            message: page.message,
            cloned_html: page.html,
            rewritten: page.report.rewritten,
            failed: page.report.failed(),
            ..IndexTemplate::default()
        },
        Err(e) => {
            warn!("Clone failed: {}", e.log_safe());
            let status = e.status_code();
            let template = IndexTemplate {
                url: form.url,
                error: e.user_message(),
                ..IndexTemplate::default()
            };
            return match template.render_html() {
                Ok(page) => (status, page).into_response(),
                Err(e) => e.into_response(),
            };
        }
    };

    match template.render_html() {
        Ok(page) => page.into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /health - Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_is_escaped_into_srcdoc() {
        let template = IndexTemplate {
            url: "https://example.com".to_string(),
            cloned_html: r#"<p class="x">hi</p>"#.to_string(),
            ..IndexTemplate::default()
        };
        let html = template.render().unwrap();

        assert!(html.contains("srcdoc="));
        assert!(html.contains("&lt;p class=&quot;x&quot;&gt;hi"));
        assert!(!html.contains(r#"<p class="x">"#));
    }

    #[test]
    fn test_empty_page_has_no_preview() {
        let html = IndexTemplate::default().render().unwrap();
        assert!(html.contains("<form"));
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn test_error_banner() {
        let template = IndexTemplate {
            error: "Failed to clone website".to_string(),
            ..IndexTemplate::default()
        };
        let html = template.render().unwrap();
        assert!(html.contains("Failed to clone website"));
        assert!(!html.contains("<iframe"));
    }
}
