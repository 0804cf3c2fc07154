//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves three things: the Leptos app under `/app`, its
//! static bundle under `/pkg`, and the backend API through `proxy`. The
//! client routes all sit under `/app`, so they never shadow a proxied path.

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;
use crate::proxy;
use crate::state::AppState;

/// Backend path prefixes forwarded by the proxy.
pub const PROXIED_PREFIXES: [&str; 4] = ["/admin", "/voter", "/uploads", "/static"];

/// Proxy routes plus health and root redirect. Usable without Leptos.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = PROXIED_PREFIXES
        .iter()
        .fold(Router::new(), |router, prefix| {
            router.route(&format!("{prefix}/{{*path}}"), any(proxy::forward))
        });

    router
        .layer(DefaultBodyLimit::max(proxy::MAX_BODY_BYTES))
        .route("/", get(redirect_root_to_app))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

async fn redirect_root_to_app() -> Redirect {
    Redirect::temporary("/app")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Full host router: API routes + Leptos SSR at `/app` + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
