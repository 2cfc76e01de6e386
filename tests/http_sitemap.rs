use std::fs;

use sitemap::config::ServeConfig;
use sitemap::http::router;

#[tokio::test]
async fn sitemap_endpoint_crawls_a_real_static_site() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("index.html"),
        r#"<html><body><a href="/about">About</a><img src="/logo.png"></body></html>"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("about.html"),
        r#"<html><body><a href="/">Home</a></body></html>"#,
    )
    .unwrap();

    let addr = sitemap_crawler::testutil::serve_dir(dir.path()).await;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let app_addr = listener.local_addr().unwrap();
    let app = router(ServeConfig::default());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let site = format!("http://{addr}/index.html");
    let resp = reqwest::get(format!("http://{app_addr}/sitemap?site={site}"))
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let body: serde_json::Value = resp.json().await.unwrap();
    let pages = body["pages"].as_array().unwrap();
    assert_eq!(pages.len(), 2);
}

#[tokio::test]
async fn sitemap_endpoint_rejects_invalid_site() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let app_addr = listener.local_addr().unwrap();
    let app = router(ServeConfig::default());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let resp = reqwest::get(format!("http://{app_addr}/sitemap?site=not a url"))
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
}
