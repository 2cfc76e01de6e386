//! The thin HTTP front-end (spec §6), an external collaborator around the
//! crawl core: a `/sitemap` query endpoint plus the `/ping` and `/` routes
//! alongside it.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use tokio_util::sync::CancellationToken;
use tracing::warn;

use sitemap_core::CrawlError;

use crate::config::ServeConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: ServeConfig,
}

pub fn router(config: ServeConfig) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/ping", get(ping_handler))
        .route("/sitemap", get(sitemap_handler))
        .with_state(AppState { config })
}

async fn root_handler(State(state): State<AppState>) -> Redirect {
    Redirect::found(&format!("/sitemap?site={}", state.config.default_site))
}

async fn ping_handler() -> &'static str {
    "pong"
}

async fn sitemap_handler(Query(params): Query<HashMap<String, String>>) -> Response {
    let site = params.get("site").cloned().unwrap_or_default();
    if site.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            "Required parameter 'site' is invalid",
        )
            .into_response();
    }

    match sitemap_crawler::site(&site, CancellationToken::new()).await {
        Ok(sitemap) => Json(sitemap).into_response(),
        Err(CrawlError::InvalidUrl(_)) => (
            StatusCode::BAD_REQUEST,
            "Required parameter 'site' is invalid",
        )
            .into_response(),
        Err(CrawlError::HttpError(url)) => {
            (StatusCode::BAD_REQUEST, format!("Could not reach '{url}'")).into_response()
        }
        Err(e) => {
            warn!(error = %e, site = %site, "crawl failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
