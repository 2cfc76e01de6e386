//! HTML extraction (spec §4.2): one depth-first walk of the parsed document,
//! emitting intra-origin page links and asset references.

use std::collections::HashSet;
use std::sync::Arc;

use scraper::{Html, Node};
use url::Url;

use sitemap_canon::{resolve, same_origin};
use sitemap_core::{Asset, AssetType, CrawlError, ExtractOutcome, HtmlExtractor, LogSink, TracingLogSink};

pub struct ScraperExtractor {
    logger: Arc<dyn LogSink>,
}

impl Default for ScraperExtractor {
    fn default() -> Self {
        Self {
            logger: Arc::new(TracingLogSink),
        }
    }
}

impl ScraperExtractor {
    pub fn new(logger: Arc<dyn LogSink>) -> Self {
        Self { logger }
    }
}

impl HtmlExtractor for ScraperExtractor {
    fn extract(&self, body: &[u8], page_root: &Url) -> Result<ExtractOutcome, CrawlError> {
        let body_str = String::from_utf8_lossy(body);
        // html5ever (via scraper) is permissive: malformed markup never fails
        // the parse, it just produces a best-effort tree.
        let document = Html::parse_document(&body_str);

        let mut pages = Vec::new();
        let mut seen_pages = HashSet::new();
        let mut assets = Vec::new();

        // tree.nodes() walks in insertion order, which for a parsed document
        // is depth-first document order — one pass covers <a>, <link>,
        // <img>, and <script> with a stable relative ordering.
        for node_ref in document.tree.nodes() {
            let Node::Element(el) = node_ref.value() else {
                continue;
            };

            if el.name() == "a" {
                let Some(href) = el.attr("href") else {
                    continue;
                };
                match resolve(href, page_root) {
                    Ok(resolved) if same_origin(&resolved, page_root) => {
                        let canon = resolved.to_string();
                        if seen_pages.insert(canon.clone()) {
                            pages.push(canon);
                        }
                    }
                    Ok(resolved) => {
                        self.logger
                            .skip(&format!("external link will not be followed: {resolved}"));
                    }
                    Err(e) => {
                        self.logger
                            .skip(&format!("<a> href '{href}' could not be parsed: {e}"));
                    }
                }
                continue;
            }

            let (attr_name, asset_type) = match el.name() {
                "link" => ("href", AssetType::Link),
                "img" => ("src", AssetType::Image),
                "script" => ("src", AssetType::Script),
                _ => continue,
            };

            let Some(raw) = el.attr(attr_name) else {
                continue;
            };
            match resolve(raw, page_root) {
                Ok(resolved) => assets.push(Asset {
                    asset_type,
                    url: resolved.to_string(),
                }),
                Err(e) => {
                    self.logger.skip(&format!(
                        "<{}> {attr_name} '{raw}' could not be parsed: {e}",
                        el.name()
                    ));
                }
            }
        }

        Ok(ExtractOutcome { pages, assets })
    }
}
