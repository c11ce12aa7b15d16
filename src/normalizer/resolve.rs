use std::fmt;

use url::Url;

use super::classify::classify;

/// Why a relative reference could not be made absolute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The base URL itself does not parse
    MalformedBase(url::ParseError),
    /// The base parsed but joining the reference onto it failed
    Join(url::ParseError),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::MalformedBase(e) => write!(f, "malformed base URL: {e}"),
            ResolveError::Join(e) => write!(f, "cannot resolve against base: {e}"),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Decision for a single attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    Rewritten(String),
    Failed(ResolveError),
}

/// A base URL parsed once and reused for every reference in a document.
///
/// A malformed base is kept around rather than rejected up front, so that each
/// relative reference reports its own failure and absolute ones still pass.
#[derive(Debug, Clone)]
pub struct BaseUrl {
    parsed: Result<Url, url::ParseError>,
}

impl BaseUrl {
    pub fn parse(base: &str) -> Self {
        Self {
            parsed: Url::parse(base),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.parsed.is_ok()
    }

    /// Classify `value` and, if relative, join it onto the base.
    pub fn resolve(&self, value: &str) -> Outcome {
        match classify(value) {
            Some(kind) if kind.needs_resolution() => {}
            _ => return Outcome::Unchanged,
        }

        let base = match &self.parsed {
            Ok(base) => base,
            Err(e) => return Outcome::Failed(ResolveError::MalformedBase(*e)),
        };

        match base.join(value) {
            Ok(resolved) => Outcome::Rewritten(resolved.to_string()),
            Err(e) => Outcome::Failed(ResolveError::Join(e)),
        }
    }
}

/// Resolve a single reference against a base URL string.
pub fn resolve_reference(value: &str, base_url: &str) -> Outcome {
    BaseUrl::parse(base_url).resolve(value)
}
