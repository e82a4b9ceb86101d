//! Static host for the built Spllit site. Serves `dist/` as-is and answers
//! every unknown path with `index.html` so client-side routes deep-link.

pub mod config;

use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub use config::{ConfigError, HostConfig};

async fn health_check() -> &'static str {
    "OK"
}

pub fn app(config: &HostConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let site = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(site)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
