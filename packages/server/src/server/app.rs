//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{Config, StorageBackend};
use crate::server::middleware::{capture_request_meta, enforce_allowed_hosts};
use crate::server::routes::{
    contact_submit_handler, formsubmit_webhook_handler, health_handler, home_handler,
    newsletter_submit_handler,
};
use crate::server::static_files::asset_handler;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub config: Arc<Config>,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool, config: Config) -> Router {
    let config = Arc::new(config);

    let app_state = AppState {
        db_pool: pool,
        config: config.clone(),
    };

    // CORS: trusted origins from configuration; debug or an empty list
    // relaxes to any origin
    let cors = if config.debug || config.trusted_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .trusted_origins
            .iter()
            .filter_map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|e| {
                        tracing::warn!(origin = %origin, error = %e, "Ignoring unparseable trusted origin");
                    })
                    .ok()
            })
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([CONTENT_TYPE])
    };

    let allowed_hosts = Arc::new(config.allowed_hosts.clone());

    let mut router = Router::new()
        .route("/", get(home_handler))
        .route("/api/contact-submit/", post(contact_submit_handler))
        .route("/api/newsletter-submit/", post(newsletter_submit_handler))
        .route("/api/formsubmit-webhook/", post(formsubmit_webhook_handler))
        .route("/health", get(health_handler))
        .route("/assets/*path", get(asset_handler));

    // Uploaded media is only served locally for the filesystem backend; the
    // object-store backend hands out absolute URLs instead.
    if let StorageBackend::Filesystem {
        media_root,
        media_url,
    } = &config.storage
    {
        let mount = match media_url.trim_end_matches('/') {
            "" => "/media",
            mount => mount,
        };
        router = router.nest_service(mount, ServeDir::new(media_root));
    }

    router
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(capture_request_meta))
        .layer(middleware::from_fn(move |request, next| {
            let allowed_hosts = allowed_hosts.clone();
            async move { enforce_allowed_hosts(allowed_hosts, request, next).await }
        }))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
