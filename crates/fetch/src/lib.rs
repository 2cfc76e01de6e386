//! The default fetcher (spec §4.3): a single HTTP GET bounded by a 30-second
//! total timeout. A response is an error iff the transport fails or the
//! status is `>= 400`; redirects are followed per the underlying client's
//! defaults.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;
use url::Url;

use sitemap_core::{CrawlError, Fetcher};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("building the default reqwest client cannot fail with these options");
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, CrawlError> {
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(%url, error = %e, "fetch failed");
            CrawlError::HttpError(url.to_string())
        })?;

        let status = response.status();
        if status.as_u16() >= 400 {
            warn!(%url, %status, "fetch returned an error status");
            return Err(CrawlError::HttpError(url.to_string()));
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| {
                warn!(%url, error = %e, "failed reading response body");
                CrawlError::HttpError(url.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use axum::Router;
    use tokio::net::TcpListener;
    use tower_http::services::ServeDir;

    use super::*;

    async fn serve_dir(dir: &str) -> SocketAddr {
        let app = Router::new().nest_service("/", ServeDir::new(dir));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    #[tokio::test]
    async fn fetches_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "hello").unwrap();
        let addr = serve_dir(dir.path().to_str().unwrap()).await;

        let fetcher = HttpFetcher::new();
        let url = Url::parse(&format!("http://{addr}/index.html")).unwrap();
        let body = fetcher.fetch(&url).await.unwrap();
        assert_eq!(body, b"hello");
    }

    #[tokio::test]
    async fn missing_file_is_http_error() {
        let dir = tempfile::tempdir().unwrap();
        let addr = serve_dir(dir.path().to_str().unwrap()).await;

        let fetcher = HttpFetcher::new();
        let url = Url::parse(&format!("http://{addr}/doesnotexist.html")).unwrap();
        let err = fetcher.fetch(&url).await.unwrap_err();
        assert_eq!(err.kind(), "HTTP_ERROR");
    }

    #[tokio::test]
    async fn unreachable_host_is_http_error() {
        let fetcher = HttpFetcher::new();
        // Nothing listens here.
        let url = Url::parse("http://127.0.0.1:9/").unwrap();
        let err = fetcher.fetch(&url).await.unwrap_err();
        assert_eq!(err.kind(), "HTTP_ERROR");
    }
}
