//! HTTP server: routes, CORS and the listener loop.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, AUTHORIZATION,
            CONTENT_TYPE,
        },
        HeaderValue, Method,
    },
    routing::get,
    Router,
};
use greenhouse_core::Greenhouse;
use log::{info, warn};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

use crate::{config::ServerConfig, handlers};

const ALLOWED_HEADERS: &str = "Content-Type,Authorization";
const ALLOWED_METHODS: &str = "GET,PATCH,POST,DELETE,OPTIONS";

/// HTTP server for the plant catalogue
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server that serves `greenhouse` with the given configuration
    pub fn new(config: ServerConfig, greenhouse: Greenhouse) -> Self {
        let router = build_router(&config, Arc::new(greenhouse));
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    #[cfg(test)]
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the listener and serve requests until Ctrl-C / SIGTERM.
    pub async fn start(self) -> Result<()> {
        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port))
            .await
            .with_context(|| format!("Failed to bind {}", self.socket_addr()))?;

        let local_addr = listener
            .local_addr()
            .context("Failed to read listener address")?;
        info!("Greenhouse API listening on http://{local_addr}");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        info!("Greenhouse API stopped");
        Ok(())
    }
}

/// Build the router with every plant endpoint and the CORS layers.
pub fn build_router(config: &ServerConfig, greenhouse: Arc<Greenhouse>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route(
            "/plants",
            get(handlers::list_plants).post(handlers::create_plant),
        )
        .route(
            "/plants/{id}",
            get(handlers::get_plant)
                .patch(handlers::update_plant)
                .delete(handlers::delete_plant),
        )
        .route("/plants/search/{name}", get(handlers::search_plants))
        .fallback(handlers::not_found)
        .with_state(greenhouse)
        .layer(cors_layer(config))
        // CorsLayer only advertises methods and headers on preflight
        // responses; the front-end expects them on every response.
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    if config.cors_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{origin}'");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
