//! In-process static file server and sitemap-equality assertion shared by
//! this crate's and the root binary's tests, mirroring the original Go
//! suite's `scrape/test/server.go` and `scrape/test/match.go`.

use std::collections::HashSet;
use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use sitemap_core::Sitemap;

/// Serve `dir` over HTTP on an OS-assigned port. The server runs for the
/// lifetime of the current tokio runtime; there is no explicit shutdown
/// because tests are short-lived processes.
pub async fn serve_dir(dir: impl AsRef<Path>) -> SocketAddr {
    let app = Router::new().nest_service("/", ServeDir::new(dir.as_ref().to_path_buf()));
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("binding an ephemeral port cannot fail");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Assert two sitemaps describe the same pages. Pages themselves are matched
/// as a set (serialization order is unspecified), but each page's assets are
/// compared in document order — asset order is a spec invariant, not an
/// artifact of serialization — while that page's links are compared as a
/// set, since link discovery order depends on fetch scheduling.
pub fn assert_sitemaps_eq(got: &Sitemap, expected: &Sitemap) {
    assert_eq!(
        got.pages.len(),
        expected.pages.len(),
        "expected {} page(s), got {}",
        expected.pages.len(),
        got.pages.len()
    );

    for want in &expected.pages {
        let found = got
            .pages
            .iter()
            .find(|p| p.url == want.url)
            .unwrap_or_else(|| panic!("expected page '{}' was not found", want.url));

        assert_eq!(
            found.assets, want.assets,
            "asset mismatch on page '{}'",
            want.url
        );

        let got_links: HashSet<_> = found.pages.iter().collect();
        let want_links: HashSet<_> = want.pages.iter().collect();
        assert_eq!(
            got_links, want_links,
            "page link mismatch on page '{}'",
            want.url
        );
    }
}
