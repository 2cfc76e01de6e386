//! The crawl coordinator (spec §4.5): owns the visited set and the inflight
//! counter exclusively, spawns a worker per newly discovered URL, and
//! terminates once inflight drains to zero. No mutex ever guards the
//! visited set — it is single-owner by construction, workers only ever
//! report discoveries over the result channel.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{mpsc, Semaphore};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use url::Url;

use sitemap_core::{CrawlError, LogSink, Page};

use crate::worker::{self, WorkerContext, WorkerEvent};

/// Runs the coordinator loop to completion and returns every visited page,
/// or the first fatal/cancellation error encountered.
pub async fn run(
    seed: Url,
    ctx: Arc<WorkerContext>,
    cancel: CancellationToken,
    max_concurrency: Option<usize>,
) -> Result<Vec<Page>, CrawlError> {
    let mut visited: HashMap<String, Page> = HashMap::new();
    // Capacity 1 keeps the channel effectively unbuffered: a worker's send
    // and the coordinator's receive rendezvous rather than queuing up.
    let (tx, mut rx) = mpsc::channel::<WorkerEvent>(1);
    let semaphore = max_concurrency.map(|n| Arc::new(Semaphore::new(n)));

    let mut inflight = 0usize;

    let seed_key = seed.to_string();
    visited.insert(seed_key.clone(), Page::empty(seed_key.clone()));
    inflight += 1;
    spawn_worker(
        Page::empty(seed_key),
        seed,
        &ctx,
        &tx,
        &cancel,
        &semaphore,
    );

    while inflight > 0 {
        inflight -= 1;
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return Err(CrawlError::Cancelled);
            }
            event = rx.recv() => {
                let Some(event) = event else {
                    // Every sender dropped without ever publishing: only
                    // possible if a worker panicked. Treat the crawl as
                    // aborted rather than looping on a channel that will
                    // never produce another message.
                    return Err(CrawlError::Cancelled);
                };
                match event {
                    WorkerEvent::Failed(e) => {
                        warn!(error = %e, "fatal error, aborting crawl");
                        return Err(e);
                    }
                    WorkerEvent::Completed(page) => {
                        inflight += handle_completed(page, &mut visited, &ctx, &tx, &cancel, &semaphore, ctx.logger.as_ref());
                    }
                }
            }
        }
    }

    Ok(visited.into_values().collect())
}

#[allow(clippy::too_many_arguments)]
fn handle_completed(
    page: Page,
    visited: &mut HashMap<String, Page>,
    ctx: &Arc<WorkerContext>,
    tx: &mpsc::Sender<WorkerEvent>,
    cancel: &CancellationToken,
    semaphore: &Option<Arc<Semaphore>>,
    logger: &dyn LogSink,
) -> usize {
    let links = page.pages.clone();
    visited.insert(page.url.clone(), page);

    let mut spawned = 0;
    for link in links {
        if visited.contains_key(&link) {
            logger.skip(&format!("already scraped '{link}'"));
            continue;
        }
        // Links were produced by the canonicalizer from a successfully
        // resolved, same-origin href — re-parsing here cannot fail in
        // practice, but a worker is only ever spawned for a URL we can hand
        // to the fetcher, so skip defensively rather than panic.
        let Ok(link_url) = Url::parse(&link) else {
            continue;
        };
        visited.insert(link.clone(), Page::empty(link.clone()));
        info!(url = %link, "discovered");
        spawn_worker(Page::empty(link), link_url, ctx, tx, cancel, semaphore);
        spawned += 1;
    }
    spawned
}

fn spawn_worker(
    page: Page,
    root: Url,
    ctx: &Arc<WorkerContext>,
    tx: &mpsc::Sender<WorkerEvent>,
    cancel: &CancellationToken,
    semaphore: &Option<Arc<Semaphore>>,
) {
    let ctx = Arc::clone(ctx);
    let tx = tx.clone();
    let cancel = cancel.clone();
    let semaphore = semaphore.clone();
    tokio::spawn(async move {
        let _permit = match semaphore {
            Some(sem) => match sem.acquire_owned().await {
                Ok(permit) => Some(permit),
                Err(_) => return,
            },
            None => None,
        };
        worker::run(page, root, ctx, tx, cancel).await;
    });
}
