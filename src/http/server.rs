//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all project handlers
//! - Wire up middleware (request ID, tracing, timeout, body limit, CORS)
//! - Seed the store from configuration
//! - Bind server to listener and stop on shutdown

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, Request},
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{CorsConfig, ServiceConfig};
use crate::http::handlers::*;
use crate::http::request::{request_id_of, MakeRequestUuid, X_REQUEST_ID};
use crate::lifecycle::shutdown::ShutdownSignal;
use crate::store::{InMemoryProjectStore, ProjectStore};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProjectStore>,
}

/// HTTP server for the project service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
    store: Arc<dyn ProjectStore>,
}

impl HttpServer {
    /// Create a server over an in-memory store seeded with `config.projects`.
    pub fn new(config: ServiceConfig) -> Self {
        let store = InMemoryProjectStore::with_projects(config.projects.clone());
        Self::with_store(config, Arc::new(store))
    }

    /// Create a server over an existing store. The store is used as is.
    pub fn with_store(config: ServiceConfig, store: Arc<dyn ProjectStore>) -> Self {
        let state = AppState {
            store: store.clone(),
        };
        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            store,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/projects", get(list_projects).post(create_project))
            .route(
                "/projects/",
                get(blank_title).put(blank_title).delete(delete_blank_title),
            )
            .route(
                "/projects/{title}",
                get(get_project).put(update_project).delete(delete_project),
            )
            .route("/status", get(get_status))
            .fallback(route_not_found)
            .method_not_allowed_fallback(method_not_allowed)
            .with_state(state);

        if let Some(cors) = cors_layer(&config.cors) {
            router = router.layer(cors);
        }

        router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        path = %request.uri().path(),
                        request_id = %request_id_of(request),
                    )
                }),
            )
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        match self.store.count() {
            Ok(projects) => tracing::info!(address = %addr, projects, "HTTP server starting"),
            Err(e) => tracing::warn!(address = %addr, error = %e, "HTTP server starting, store unavailable"),
        }

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// A handle to the router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// The store backing this server.
    pub fn store(&self) -> Arc<dyn ProjectStore> {
        self.store.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// CORS layer for the configured origins, or `None` when none are configured.
fn cors_layer(config: &CorsConfig) -> Option<CorsLayer> {
    if config.allowed_origins.is_empty() {
        return None;
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]),
    )
}
