//! The sitemap assembler (spec §4.6): the library surface (§6) that the
//! HTTP front-end calls. Validates the seed, fills in default capabilities,
//! runs the coordinator, and shapes the result.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use url::Url;

use sitemap_core::{CrawlConfig, CrawlError, Sitemap, TracingLogSink};
use sitemap_fetch::HttpFetcher;
use sitemap_parser::ScraperExtractor;

use crate::coordinator;
use crate::worker::WorkerContext;

/// Generate a sitemap for `seed` using every default capability.
pub async fn site(seed: &str, cancel: CancellationToken) -> Result<Sitemap, CrawlError> {
    site_with_config(seed, CrawlConfig::default(), cancel).await
}

/// Generate a sitemap for `seed`, overriding any of the fetcher, extractor,
/// or logger via `config`. Omitted capabilities fall back to the defaults.
pub async fn site_with_config(
    seed: &str,
    config: CrawlConfig,
    cancel: CancellationToken,
) -> Result<Sitemap, CrawlError> {
    if seed.is_empty() {
        return Err(CrawlError::InvalidUrl(seed.to_string()));
    }
    let seed_url = Url::parse(seed).map_err(|_| CrawlError::InvalidUrl(seed.to_string()))?;

    let logger = config
        .logger
        .clone()
        .unwrap_or_else(|| Arc::new(TracingLogSink));
    let ctx = Arc::new(WorkerContext {
        fetcher: config
            .fetcher
            .clone()
            .unwrap_or_else(|| Arc::new(HttpFetcher::new())),
        extractor: config
            .extractor
            .clone()
            .unwrap_or_else(|| Arc::new(ScraperExtractor::new(logger.clone()))),
        logger,
    });

    // A child token: cancelling it after the coordinator returns releases
    // any workers still mid-flight without reaching into the caller's own
    // cancellation scope.
    let internal = cancel.child_token();
    let result = coordinator::run(seed_url, ctx, internal.clone(), config.max_concurrency).await;
    internal.cancel();

    let pages = result?;
    Ok(Sitemap { pages })
}
