//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host holds no scene state. It server-renders the Leptos app, serves
//! the compiled WASM/JS/CSS bundle under `/pkg`, and answers health checks.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::routing::get;
use axum::{Json, Router};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde_json::{Value, json};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Leptos SSR routes plus static assets and the health endpoint.
///
/// # Errors
///
/// Returns [`RouteError::LeptosConfig`] if the Leptos configuration cannot be
/// loaded (missing or malformed `[package.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, RouteError> {
    let conf = get_configuration(None).map_err(|e| RouteError::LeptosConfig(Box::new(e)))?;
    let mut leptos_options = conf.leptos_options;
    leptos_options.site_addr = config.bind_addr();
    if let Some(root) = &config.site_root {
        leptos_options.site_root = root.display().to_string().into();
    }

    let routes = generate_route_list(client::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::debug!(site_root = %site_root_path.display(), routes = routes.len(), "leptos routes generated");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
