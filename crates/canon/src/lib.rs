//! URL canonicalization and same-origin filtering (spec §4.1).
//!
//! Deliberately returns `url::ParseError` rather than `sitemap_core::CrawlError`:
//! a failed resolve here is a per-link skip, never the fatal parse failure
//! the crawl core raises for an unparseable document body.

use url::Url;

/// Resolve `raw` as a reference against `root`, then strip query and
/// fragment. Scheme and host come from resolution, case/port/trailing-slash
/// are left exactly as `url` produces them — no extra normalization.
pub fn resolve(raw: &str, root: &Url) -> Result<Url, url::ParseError> {
    let mut resolved = root.join(raw)?;
    resolved.set_query(None);
    resolved.set_fragment(None);
    Ok(resolved)
}

/// True iff `u` and `root` share a host, compared as exact strings.
pub fn same_origin(u: &Url, root: &Url) -> bool {
    u.host_str() == root.host_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> Url {
        Url::parse("http://example.com/dir/index.html").unwrap()
    }

    #[test]
    fn resolves_relative_path() {
        let got = resolve("contact.html", &root()).unwrap();
        assert_eq!(got.as_str(), "http://example.com/dir/contact.html");
    }

    #[test]
    fn resolves_absolute_path() {
        let got = resolve("/contact.html", &root()).unwrap();
        assert_eq!(got.as_str(), "http://example.com/contact.html");
    }

    #[test]
    fn resolves_absolute_url() {
        let got = resolve("http://other.example/x", &root()).unwrap();
        assert_eq!(got.as_str(), "http://other.example/x");
    }

    #[test]
    fn resolves_protocol_relative() {
        let got = resolve("//other.example/x", &root()).unwrap();
        assert_eq!(got.host_str(), Some("other.example"));
    }

    #[test]
    fn strips_query_and_fragment() {
        let got = resolve("/contact.html?x=1#top", &root()).unwrap();
        assert_eq!(got.as_str(), "http://example.com/contact.html");
        assert_eq!(got.query(), None);
        assert_eq!(got.fragment(), None);
    }

    #[test]
    fn fragment_only_collapses_to_root_path() {
        let got = resolve("#foo", &root()).unwrap();
        assert_eq!(got.as_str(), root().as_str());
    }

    #[test]
    fn query_only_collapses_to_root_path() {
        let got = resolve("?x=1", &root()).unwrap();
        assert_eq!(got.as_str(), root().as_str());
    }

    #[test]
    fn malformed_reference_is_an_error() {
        assert!(resolve("http://[::1", &root()).is_err());
    }

    #[test]
    fn same_origin_is_exact_host_match() {
        let a = Url::parse("http://example.com/a").unwrap();
        let b = Url::parse("http://example.com/b").unwrap();
        let c = Url::parse("http://other.example/b").unwrap();
        assert!(same_origin(&a, &b));
        assert!(!same_origin(&a, &c));
    }

    #[test]
    fn same_origin_is_case_sensitive_string_compare() {
        let a = Url::parse("http://Example.com/a").unwrap();
        let b = Url::parse("http://example.com/a").unwrap();
        // url normalizes host to lowercase during parsing, so these end up equal —
        // documents the "no extra normalization beyond the URL library" rule.
        assert_eq!(a.host_str(), b.host_str());
    }
}
