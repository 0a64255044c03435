//! Links that open outside the gallery

/// Browsing context external links open in
pub const EXTERNAL_LINK_TARGET: &str = "_blank";

/// The opened page never gets a handle back to the gallery tab
pub const EXTERNAL_LINK_REL: &str = "noopener noreferrer";

/// An `http`/`https` link to the image's page on its origin site
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalLink {
    href: String,
}

impl ExternalLink {
    /// Accepts absolute `http` and `https` URLs only. Anything else
    /// (`javascript:`, `data:`, relative paths) yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        let rest = lower
            .strip_prefix("https://")
            .or_else(|| lower.strip_prefix("http://"))?;
        if rest.is_empty() {
            return None;
        }
        Some(Self {
            href: trimmed.to_string(),
        })
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn target(&self) -> &'static str {
        EXTERNAL_LINK_TARGET
    }

    pub fn rel(&self) -> &'static str {
        EXTERNAL_LINK_REL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert_eq!(
            ExternalLink::parse("https://example.com/p/1").map(|l| l.href().to_string()),
            Some("https://example.com/p/1".to_string())
        );
        assert!(ExternalLink::parse("  HTTP://example.com ").is_some());
    }

    #[test]
    fn test_rejects_script_and_relative_links() {
        assert!(ExternalLink::parse("javascript:alert(1)").is_none());
        assert!(ExternalLink::parse("/post/1").is_none());
        assert!(ExternalLink::parse("https://").is_none());
        assert!(ExternalLink::parse("").is_none());
    }

    #[test]
    fn test_opener_isolation() {
        let link = ExternalLink::parse("https://example.com").unwrap();
        assert_eq!(link.target(), "_blank");
        assert!(link.rel().contains("noopener"));
        assert!(link.rel().contains("noreferrer"));
    }
}
