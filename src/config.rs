use serde::Deserialize;

/// Server configuration placeholders (spec §6: "address, read/write timeouts
/// are placeholders; no env-var contract is promised by the core"). None of
/// this is consumed by the crawl core — only by the binary's `serve` command.
#[derive(Debug, Deserialize, Clone)]
pub struct ServeConfig {
    pub addr: String,
    pub read_timeout_seconds: u64,
    pub write_timeout_seconds: u64,
    /// Site crawled by `GET /` before redirecting to `/sitemap?site=...`.
    pub default_site: String,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8080".to_string(),
            read_timeout_seconds: 15,
            write_timeout_seconds: 15,
            default_site: "http://example.com".to_string(),
        }
    }
}
