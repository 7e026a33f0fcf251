//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON endpoints and the Leptos SSR app under a single
//! Axum router. Every request runs inside a trace span that records the
//! caller's device label (`"<OS> - <Browser>"`).

pub mod device;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;

/// JSON endpoints.
fn api_routes() -> Router {
    Router::new()
        .route("/api/client", get(device::client_info))
        .route("/healthz", get(healthz))
}

/// Wrap `router` with compression, request tracing and, when configured,
/// permissive CORS.
fn with_telemetry(router: Router, config: &ServerConfig) -> Router {
    let router = if config.cors_allow_any {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    router.layer(CompressionLayer::new()).layer(
        TraceLayer::new_for_http()
            .make_span_with(|request: &Request| {
                let device = device::device_label(request.headers());
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    %device
                )
            })
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

/// API routes only; used where no Leptos configuration is available.
pub fn app(config: &ServerConfig) -> Router {
    with_telemetry(api_routes(), config)
}

/// API routes plus the Leptos SSR frontend and its static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(root) = &config.site_root {
        leptos_options.site_root = root.to_string_lossy().into_owned().into();
    }
    let routes = generate_route_list(::client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || ::client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")));
    Ok(with_telemetry(router, config))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
