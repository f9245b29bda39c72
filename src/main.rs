//! Hub Site Backend
//!
//! Serves a community hub's configuration and content collections as JSON,
//! driven entirely by files under the site root.

mod api;
mod config;
mod content;
mod errors;
mod hub;
mod models;
mod store;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use hub::{HubConfigService, ValidationPolicy};
use store::SiteStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SiteStore>,
    pub hub: Arc<HubConfigService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = Arc::new(SiteStore::new(config.site_root.clone()));
        let policy = ValidationPolicy {
            strict_recommended: config.strict_recommended,
        };
        let hub = Arc::new(HubConfigService::new(store.clone(), policy));

        Self {
            store,
            hub,
            config: Arc::new(config),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let (config, config_warnings) = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    tracing::info!("Starting Hub Site Backend");
    tracing::info!("Site root: {:?}", config.site_root);
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.strict_recommended {
        tracing::info!("Recommended configuration fields are enforced");
    }

    let bind_addr = config.bind_addr;
    let state = AppState::new(config);

    // Surface configuration problems at startup; the site keeps serving the
    // remediation report until the file is fixed.
    match state.hub.load().await {
        Ok(loaded) => tracing::info!("Hub configuration ready for {}", loaded.config.hub_name),
        Err(failure) => {
            tracing::warn!("Hub configuration unusable: {}", failure);
            for issue in &failure.issues {
                tracing::warn!("  {}", issue.message);
            }
        }
    }

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/config", get(api::get_config))
        .route("/site", get(api::get_site))
        .route("/members", get(api::list_members))
        .route("/projects", get(api::list_projects))
        .route("/events", get(api::list_events))
        .route("/impact-points", get(api::list_impact_points));

    let health_routes = Router::new().route("/health", get(health_check));

    let static_files = ServeDir::new(state.config.site_root.clone());

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .fallback_service(static_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
