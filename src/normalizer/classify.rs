/// How an image reference relates to the document's base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// `http://` or `https://`
    Absolute,
    /// `//host/path`, inherits the scheme of the embedding page
    ProtocolRelative,
    /// Inline `data:` payload
    DataUri,
    /// Anything else; needs resolving against the base
    Relative,
}

impl ReferenceKind {
    pub fn needs_resolution(self) -> bool {
        matches!(self, ReferenceKind::Relative)
    }
}

/// Classify a `src` value. Returns `None` for an empty value, which is skipped.
pub fn classify(value: &str) -> Option<ReferenceKind> {
    if value.is_empty() {
        return None;
    }

    let kind = if starts_with_ignore_case(value, "http://")
        || starts_with_ignore_case(value, "https://")
    {
        ReferenceKind::Absolute
    } else if value.starts_with("//") {
        ReferenceKind::ProtocolRelative
    } else if starts_with_ignore_case(value, "data:") {
        ReferenceKind::DataUri
    } else {
        ReferenceKind::Relative
    };

    Some(kind)
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_absolute() {
        assert_eq!(
            classify("https://cdn.example.com/x.png"),
            Some(ReferenceKind::Absolute)
        );
        assert_eq!(classify("http://a.b/c"), Some(ReferenceKind::Absolute));
        assert_eq!(classify("HTTPS://A.B/c"), Some(ReferenceKind::Absolute));
    }

    #[test]
    fn test_classify_skipped_kinds() {
        assert_eq!(
            classify("//cdn.example.com/y.png"),
            Some(ReferenceKind::ProtocolRelative)
        );
        assert_eq!(
            classify("data:image/png;base64,AAA"),
            Some(ReferenceKind::DataUri)
        );
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_classify_relative() {
        for value in ["/logo.png", "images/pic.jpg", "../up.gif", "?v=2", "#frag", "ftp://x/y"] {
            assert_eq!(classify(value), Some(ReferenceKind::Relative), "{value}");
        }
        // a bare "http:" has no authority marker and is resolved like any other value
        assert_eq!(classify("http:foo.png"), Some(ReferenceKind::Relative));
    }

    #[test]
    fn test_multibyte_prefix_does_not_panic() {
        assert_eq!(classify("é.png"), Some(ReferenceKind::Relative));
        assert_eq!(classify("日本語/画像.png"), Some(ReferenceKind::Relative));
    }
}
