use std::sync::Arc;

use crate::traits::{Fetcher, HtmlExtractor, LogSink};

/// The enumerated set of optional capabilities `site_with_config` accepts
/// (§6). Any field left `None` is filled with the default implementation by
/// the caller (`sitemap-crawler`'s assembler), never by this crate — core
/// stays free of the `sitemap-fetch` / `sitemap-parser` dependency edge.
#[derive(Default, Clone)]
pub struct CrawlConfig {
    pub fetcher: Option<Arc<dyn Fetcher>>,
    pub extractor: Option<Arc<dyn HtmlExtractor>>,
    pub logger: Option<Arc<dyn LogSink>>,
    /// Optional cap on simultaneously in-flight workers (§5, "Bounded
    /// concurrency"). `None` means the present uncapped one-worker-per-page
    /// design. Does not change termination or visited-set semantics.
    pub max_concurrency: Option<usize>,
}

impl CrawlConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fetcher(mut self, fetcher: Arc<dyn Fetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    pub fn with_extractor(mut self, extractor: Arc<dyn HtmlExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn LogSink>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = Some(max_concurrency);
        self
    }
}
