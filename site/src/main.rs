//! Shypt Solution site server
//!
//! Serves the studio's home page plus the two JSON endpoints behind it: link
//! previews for the project showcase and the contact-form relay.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod render;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

use adapters::{GitHubClientImpl, HttpPageFetcher, WebhookNotifier};
use app::{ContactService, MetadataService, ShowcaseService};
use config::Config;

type SiteMetadataService = MetadataService<GitHubClientImpl, HttpPageFetcher>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub metadata_service: Arc<SiteMetadataService>,
    pub contact_service: Arc<ContactService<WebhookNotifier>>,
    pub showcase_service: Arc<ShowcaseService<SiteMetadataService>>,
    pub config: Config,
}

impl AppState {
    /// Wire adapters and services from `config`
    pub fn new(config: Config) -> Self {
        let github = Arc::new(GitHubClientImpl::new(config.github_api_url.clone()));
        let pages = Arc::new(HttpPageFetcher::new());
        let notifier = Arc::new(WebhookNotifier::new(config.webhook_url.clone()));

        // The showcase resolves through the same service as the endpoint
        let metadata_service = Arc::new(MetadataService::new(github, pages));
        let contact_service = Arc::new(ContactService::new(notifier));
        let showcase_service = Arc::new(ShowcaseService::new(
            metadata_service.clone(),
            config.project_links.clone(),
            config.query_cache,
        ));

        Self {
            metadata_service,
            contact_service,
            showcase_service,
            config,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with every route and middleware layer
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(health))
        .route("/api/fetch-metadata", post(handlers::fetch_metadata))
        .route("/api/send-message", post(handlers::send_message))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,shypt_site=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Shypt Solution site...");

    let config = Config::from_env();
    tracing::info!(
        site_url = %config.site_url,
        projects = config.project_links.len(),
        "Configuration loaded"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
