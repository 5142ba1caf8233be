//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host carries no budgeting logic. It renders the Leptos client under
//! `/BudgetAI`, serves compiled assets from `/pkg`, answers a health probe,
//! and redirects the bare origin to the app. Unknown paths still render the
//! client so its not-found view is what the visitor sees.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use budgetai_client::routes::BASE_PATH;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;

/// Routes that do not need Leptos options.
pub fn base_routes() -> Router {
    Router::new()
        .route("/", get(redirect_root_to_app))
        .route("/healthz", get(healthz))
}

async fn redirect_root_to_app() -> Redirect {
    Redirect::temporary(BASE_PATH)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Full host router: base routes, Leptos SSR and static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app() -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(base_routes()
        .merge(leptos_router(&leptos_options))
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Leptos SSR routes. Paths outside the route list fall back to a site-root
/// file or, failing that, the client's not-found view with a 404 status.
pub fn leptos_router(leptos_options: &LeptosOptions) -> Router {
    let routes = generate_route_list(budgetai_client::app::App);

    Router::new()
        .leptos_routes(leptos_options, routes, {
            let opts = leptos_options.clone();
            move || budgetai_client::app::shell(opts.clone())
        })
        .fallback(file_and_error_handler(budgetai_client::app::shell))
        .with_state(leptos_options.clone())
}
