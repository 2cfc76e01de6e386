//! The page worker (spec §4.4): fetch, extract, publish. A worker never
//! touches the visited set — it only reports what it found upward.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use sitemap_core::{CrawlError, Fetcher, HtmlExtractor, LogSink, Page};

/// Shared, read-only capabilities every worker invokes concurrently.
pub struct WorkerContext {
    pub fetcher: Arc<dyn Fetcher>,
    pub extractor: Arc<dyn HtmlExtractor>,
    pub logger: Arc<dyn LogSink>,
}

pub enum WorkerEvent {
    Completed(Page),
    Failed(CrawlError),
}

/// Process exactly one page: `page` is already in the coordinator's visited
/// set with empty `assets`/`pages`; `root` is its canonical URL parsed once
/// by the caller.
pub async fn run(
    mut page: Page,
    root: Url,
    ctx: Arc<WorkerContext>,
    results: mpsc::Sender<WorkerEvent>,
    cancel: CancellationToken,
) {
    debug!(url = %page.url, "fetching");

    let event = match ctx.fetcher.fetch(&root).await {
        Err(e) => WorkerEvent::Failed(e),
        Ok(body) => match ctx.extractor.extract(&body, &root) {
            Err(e) => WorkerEvent::Failed(e),
            Ok(outcome) => {
                page.assets = outcome.assets;
                page.pages = outcome.pages;
                WorkerEvent::Completed(page)
            }
        },
    };

    // A non-blocking choice between publishing the result and observing
    // cancellation — never leaves the worker stuck sending to a consumer
    // that has already stopped listening.
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {}
        _ = results.send(event) => {}
    }
}
