//! # Delivery Shell
//!
//! Serves the built single-page app over HTTP.
//!
//! | Path | Behaviour |
//! |------|-----------|
//! | `/health` | `200 OK` with body `OK` |
//! | `/assets/*` | Hashed build output, cached for a year and marked immutable. Misses serve `index.html` |
//! | anything else | Files from the dist directory (cached for an hour), falling back to `index.html` |

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::{
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

const IMMUTABLE_CACHE: &str = "public, max-age=31536000, immutable";
const SHORT_CACHE: &str = "public, max-age=3600";

async fn health() -> &'static str {
    "OK"
}

/// Build the router for a dist directory laid out as `index.html` + `assets/`.
pub fn router(dist_dir: &Path) -> Router {
    let index = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(SHORT_CACHE),
        ))
        .service(ServeFile::new(dist_dir.join("index.html")));

    // Misses under /assets still land on the app, without the immutable header
    let assets = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static(IMMUTABLE_CACHE),
        ))
        .service(ServeDir::new(dist_dir.join("assets")).fallback(index.clone()));

    let app_files = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(SHORT_CACHE),
        ))
        .service(ServeDir::new(dist_dir).fallback(index));

    Router::new()
        .route("/health", get(health))
        .nest_service("/assets", assets)
        .fallback_service(app_files)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped. Bind failures are returned to the caller.
pub async fn serve(addr: &str, dist_dir: &Path) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, dist = %dist_dir.display(), "server is running");
    axum::serve(listener, router(dist_dir)).await?;
    Ok(())
}
