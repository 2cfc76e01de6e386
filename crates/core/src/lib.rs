pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::CrawlConfig;
pub use error::CrawlError;
pub use traits::{ExtractOutcome, Fetcher, HtmlExtractor, LogSink, TracingLogSink};
pub use types::{Asset, AssetType, Page, Sitemap};
