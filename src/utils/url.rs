//! URL utilities for consistent URL handling
//!
//! Domain and origin derivation for the page being branded, plus URL
//! template expansion for the remote logo services.

use url::Url;

/// URL utilities for consistent URL handling
pub struct UrlUtils;

impl UrlUtils {
    /// Normalize URL scheme by ensuring it has a proper HTTP/HTTPS prefix
    ///
    /// Documentation sites are overwhelmingly served over TLS, so a missing
    /// scheme defaults to HTTPS.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use brand_extract::utils::url::UrlUtils;
    ///
    /// assert_eq!(UrlUtils::normalize_scheme("react.dev"), "https://react.dev");
    /// assert_eq!(UrlUtils::normalize_scheme("http://localhost:3000"), "http://localhost:3000");
    /// ```
    pub fn normalize_scheme(url: &str) -> String {
        let trimmed = url.trim();

        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        }
    }

    /// Parse a page URL, tolerating a missing scheme
    pub fn parse_page_url(url: &str) -> Result<Url, url::ParseError> {
        let parsed = Url::parse(&Self::normalize_scheme(url))?;
        if parsed.host_str().is_none() {
            return Err(url::ParseError::EmptyHost);
        }
        Ok(parsed)
    }

    /// Brand domain of a page: its host, lowercased, leading `www.` removed
    ///
    /// ```rust
    /// use brand_extract::utils::url::UrlUtils;
    ///
    /// assert_eq!(UrlUtils::brand_domain("https://www.Stripe.com/docs").as_deref(), Some("stripe.com"));
    /// ```
    pub fn brand_domain(page_url: &str) -> Option<String> {
        let parsed = Self::parse_page_url(page_url).ok()?;
        let host = parsed.host_str()?.to_ascii_lowercase();
        let domain = host.strip_prefix("www.").unwrap_or(&host);
        if domain.is_empty() {
            None
        } else {
            Some(domain.to_string())
        }
    }

    /// `scheme://host[:port]` of a page, without trailing slash
    pub fn origin(page_url: &str) -> Option<String> {
        let parsed = Self::parse_page_url(page_url).ok()?;
        let origin = parsed.origin();
        if origin.is_tuple() {
            Some(origin.ascii_serialization())
        } else {
            None
        }
    }

    /// Join an origin with an absolute path such as `/logo.svg`
    pub fn join(base: &str, path: &str) -> Result<String, url::ParseError> {
        let base_url = Url::parse(base)?;
        let joined = base_url.join(path)?;
        Ok(joined.to_string())
    }

    /// Substitute `{domain}` in a service URL template
    pub fn expand_template(template: &str, domain: &str) -> String {
        template.replace("{domain}", &urlencode_component(domain))
    }
}

fn urlencode_component(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_scheme() {
        assert_eq!(UrlUtils::normalize_scheme("example.com"), "https://example.com");
        assert_eq!(
            UrlUtils::normalize_scheme("http://example.com"),
            "http://example.com"
        );
        assert_eq!(
            UrlUtils::normalize_scheme("  example.com  "),
            "https://example.com"
        );
    }

    #[test]
    fn test_brand_domain() {
        assert_eq!(
            UrlUtils::brand_domain("https://www.example.com/docs/intro").as_deref(),
            Some("example.com")
        );
        assert_eq!(
            UrlUtils::brand_domain("https://docs.example.com").as_deref(),
            Some("docs.example.com")
        );
        assert_eq!(
            UrlUtils::brand_domain("react.dev/learn").as_deref(),
            Some("react.dev")
        );
        assert_eq!(
            UrlUtils::brand_domain("http://localhost:3000/").as_deref(),
            Some("localhost")
        );
        assert_eq!(UrlUtils::brand_domain("https://"), None);
        assert_eq!(UrlUtils::brand_domain(""), None);
    }

    #[test]
    fn test_brand_domain_only_strips_leading_www() {
        assert_eq!(
            UrlUtils::brand_domain("https://wwwhat.io").as_deref(),
            Some("wwwhat.io")
        );
        assert_eq!(
            UrlUtils::brand_domain("https://api.www.example.com").as_deref(),
            Some("api.www.example.com")
        );
    }

    #[test]
    fn test_origin() {
        assert_eq!(
            UrlUtils::origin("https://www.example.com/docs?x=1").as_deref(),
            Some("https://www.example.com")
        );
        assert_eq!(
            UrlUtils::origin("http://localhost:8080/a/b").as_deref(),
            Some("http://localhost:8080")
        );
        assert_eq!(UrlUtils::origin("not a url at all"), None);
    }

    #[test]
    fn test_join() {
        assert_eq!(
            UrlUtils::join("https://example.com", "/logo.svg").unwrap(),
            "https://example.com/logo.svg"
        );
        assert_eq!(
            UrlUtils::join("https://example.com/docs/", "/assets/logo.png").unwrap(),
            "https://example.com/assets/logo.png"
        );
    }

    #[test]
    fn test_expand_template() {
        assert_eq!(
            UrlUtils::expand_template("https://logo.clearbit.com/{domain}", "stripe.com"),
            "https://logo.clearbit.com/stripe.com"
        );
        assert_eq!(
            UrlUtils::expand_template(
                "https://www.google.com/s2/favicons?domain={domain}&sz=256",
                "react.dev"
            ),
            "https://www.google.com/s2/favicons?domain=react.dev&sz=256"
        );
    }
}
