//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page is rendered by Leptos SSR at `/` and hydrated from the compiled
//! client under `/pkg`. There is no API surface: the contact form submission
//! is simulated in the browser. `/healthz` exists for load balancers.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use folio_client::app::{App, shell};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, HostConfig};

/// Leptos SSR page + static assets + health check.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(host: &HostConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = site_root(host, leptos_options.site_root.as_ref());
    tracing::info!(site_root = %site_root.display(), "serving static assets");

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Directory `pkg/` is served from: the override if set, else Leptos metadata.
fn site_root(host: &HostConfig, configured: &str) -> PathBuf {
    host.site_root
        .clone()
        .unwrap_or_else(|| Path::new(configured).to_path_buf())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
