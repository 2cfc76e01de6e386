use async_trait::async_trait;
use url::Url;

use crate::error::CrawlError;
use crate::types::Asset;

/// A single HTTP GET. Implementations must be safe for concurrent
/// invocation — the coordinator shares one fetcher across every worker.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, CrawlError>;
}

/// Parses a fetched body into the links and assets it contains. Shared
/// read-only across workers like `Fetcher`.
#[async_trait]
pub trait HtmlExtractor: Send + Sync {
    fn extract(&self, body: &[u8], page_root: &Url) -> Result<ExtractOutcome, CrawlError>;
}

pub struct ExtractOutcome {
    /// Intra-origin page links, document order, first occurrence only.
    pub pages: Vec<String>,
    /// Asset references, document order, duplicates allowed.
    pub assets: Vec<Asset>,
}

/// Capability for observing the non-fatal events the coordinator and
/// workers produce (skipped links, dedup hits, discovery). The default
/// implementation forwards to `tracing`; tests may substitute a sink that
/// records calls for assertions.
pub trait LogSink: Send + Sync {
    fn skip(&self, message: &str);
    fn info(&self, message: &str);
}

pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn skip(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }
}
