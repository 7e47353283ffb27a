mod config;
mod redirect;
mod security;
mod utils;

use std::sync::Arc;

use app::{component, shell, types::AppState};
use axum::{Router, http::StatusCode, response::Json, routing::get};
use config::{site_config_from_env, validate_production_env};
use dotenvy::dotenv;
use leptos::logging;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use leptos_config::get_configuration;
use redirect::redirect_www;
use security::security_headers;
use serde_json::json;

use tower_http::compression::predicate::{NotForContentType, SizeAbove};
use tower_http::compression::{CompressionLayer, Predicate as _};
use tower_http::trace::TraceLayer;
use utils::sitemap_handler;

// Health check handler
async fn health_handler() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "docsite",
        "version": env!("CARGO_PKG_VERSION")
    })))
}

fn tracing_level() -> tracing::Level {
    if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level())
        .init();

    if dotenv().is_err() {
        logging::warn!("There is no corresponding .env file");
    }

    if let Err(errors) = validate_production_env() {
        for error in errors {
            logging::error!("{error}");
        }
        return;
    }

    let Ok(conf) = get_configuration(Some("Cargo.toml")) else {
        logging::error!("Failed to get configuration");
        return;
    };

    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(component);

    let site = site_config_from_env();
    tracing::info!(
        site_url = %site.site_url,
        toggles = ?site.feature_toggles,
        "Loaded site configuration"
    );
    let app_state = AppState {
        site: Arc::new(site),
        leptos_options: Arc::new(leptos_options.clone()),
    };

    let app = Router::new()
        .leptos_routes_with_context(
            &app_state,
            routes,
            {
                let app_state = app_state.clone();
                move || provide_context(app_state.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .route("/health", get(health_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(redirect_www))
                .layer(axum::middleware::from_fn(security_headers)),
        )
        .layer(CompressionLayer::new().compress_when(
            NotForContentType::new("application/wasm").and(SizeAbove::new(1024)),
        ))
        .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell))
        .with_state(app_state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(list) => list,
        Err(err) => {
            logging::error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    logging::log!("Listening on http://{}", &addr);

    match axum::serve(listener, app.into_make_service()).await {
        Ok(()) => logging::log!("Server shutdown gracefully"),
        Err(err) => logging::error!("Failed to serve app: {err:?}"),
    }
}
