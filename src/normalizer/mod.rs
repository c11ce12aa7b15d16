// Image URL normalization for cloned pages
//
// Cloned HTML keeps the image paths of the site it was generated from, which
// break once the markup is rendered anywhere else. This pass makes every
// relative `<img src>` absolute against the page the clone was taken from.

pub mod classify;
pub mod resolve;

use html_escape::decode_html_entities;
use lol_html::{element, rewrite_str, RewriteStrSettings};
use serde::Serialize;
use tracing::{debug, error, warn};

pub use classify::{classify, ReferenceKind};
pub use resolve::{resolve_reference, BaseUrl, Outcome, ResolveError};

/// A relative reference that could not be resolved and was left as-is
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub src: String,
    pub reason: String,
}

/// What a normalization pass did to a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeReport {
    /// `<img>` elements encountered, with or without `src`
    pub images_seen: usize,
    pub rewritten: usize,
    pub unchanged: usize,
    /// Failed references in document order
    pub failures: Vec<Failure>,
}

impl NormalizeReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    fn record(&mut self, src: &str, outcome: &Outcome) {
        match outcome {
            Outcome::Unchanged => self.unchanged += 1,
            Outcome::Rewritten(_) => self.rewritten += 1,
            Outcome::Failed(reason) => {
                warn!("Error converting relative URL {:?}: {}", src, reason);
                self.failures.push(Failure {
                    src: src.to_string(),
                    reason: reason.to_string(),
                });
            }
        }
    }
}

/// Serialized output of a normalization pass
#[derive(Debug, Clone)]
pub struct Normalized {
    pub html: String,
    pub report: NormalizeReport,
}

/// Rewrite relative image sources in `html` to absolute URLs against `base_url`.
///
/// Never fails: unresolvable references stay untouched and are listed in the
/// report, and if the markup cannot be rewritten at all the input is returned.
pub fn normalize(html: &str, base_url: &str) -> Normalized {
    let base = BaseUrl::parse(base_url);
    if !base.is_valid() {
        warn!("Base URL {:?} is malformed; relative images will not be resolved", base_url);
    }
    normalize_with_base(html, &base)
}

/// Same as [`normalize`] with a base parsed ahead of time.
pub fn normalize_with_base(html: &str, base: &BaseUrl) -> Normalized {
    let mut report = NormalizeReport::default();

    let rewritten = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![element!("img", |el| {
                report.images_seen += 1;

                let Some(raw) = el.get_attribute("src") else {
                    return Ok(());
                };
                // the rewriter hands back the attribute text with character references intact
                let src = decode_html_entities(&raw);

                let outcome = base.resolve(&src);
                if let Outcome::Rewritten(absolute) = &outcome {
                    el.set_attribute("src", absolute)?;
                }
                report.record(&src, &outcome);

                Ok(())
            })],
            ..RewriteStrSettings::new()
        },
    );

    let html = match rewritten {
        Ok(html) => html,
        Err(e) => {
            error!("HTML rewrite failed, keeping original markup: {}", e);
            html.to_string()
        }
    };

    debug!(
        "Normalized images: {} seen, {} rewritten, {} failed",
        report.images_seen,
        report.rewritten,
        report.failed()
    );

    Normalized { html, report }
}
