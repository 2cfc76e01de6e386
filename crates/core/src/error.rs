use thiserror::Error;

/// Stable error taxonomy for the crawl core. Any `HttpError` or `ParseError`
/// is fatal-per-crawl: it aborts the whole coordinator loop, no partial
/// sitemap is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrawlError {
    #[error("the given URL is invalid: {0}")]
    InvalidUrl(String),

    #[error("could not reach '{0}'")]
    HttpError(String),

    #[error("failed to parse response body from '{0}'")]
    ParseError(String),

    #[error("crawl cancelled")]
    Cancelled,
}

impl CrawlError {
    /// Kind name matching the taxonomy in the design doc, used by the HTTP
    /// front-end to pick a status code without matching on the Display text.
    pub fn kind(&self) -> &'static str {
        match self {
            CrawlError::InvalidUrl(_) => "INVALID_URL",
            CrawlError::HttpError(_) => "HTTP_ERROR",
            CrawlError::ParseError(_) => "PARSE_ERROR",
            CrawlError::Cancelled => "CANCELLED",
        }
    }
}
