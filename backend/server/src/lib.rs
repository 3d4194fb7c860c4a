//! Documentation of a catering menu catalog service.
//!
//!
//!
//! # General Infrastructure
//! - Single process serving a read-only JSON API plus the browser page's static assets
//! - Menu catalog loaded once at startup, then shared read-only by every request
//! - No database, no background jobs, nothing written after startup
//!
//!
//!
//! # API
//!
//! | Method | Path | Response |
//! |---|---|---|
//! | GET | `/api`, `/api/menu`, `/api/items` | `{success, count, data: [item]}` |
//! | GET | `/api/menu/{id}`, `/api/items/{id}` | `{success, data: item}` or 404 |
//! | GET | `/api/categories` | `{success, data: [category]}` |
//! | GET | `/api/cuisines` | `{success, data: [cuisine]}` |
//!
//! Any other method on these paths gets a 405 `{success: false, message}`.
//!
//! ## Query Parameters
//! - `name`: case-insensitive substring of the dish name
//! - `category`, `cuisine`: case-insensitive exact match
//! - `minPrice`, `maxPrice`, `minServings`, `maxServings`: inclusive integer bounds, 400 if not an integer
//! - `availability`: `true` for available dishes, any other value for unavailable ones
//!
//! All present parameters must hold for an item to be returned.
//!
//!
//!
//! # Setup
//!
//! Run with the sample menu on port 3000.
//! ```sh
//! cargo run -p catering
//! ```
//!
//! Custom port, asset directory and menu file.
//! ```sh
//! RUST_PORT=8080 STATIC_DIR=./public CATALOG_PATH=./menu.json RUST_LOG=debug cargo run -p catering
//! ```
//!
//! Try it.
//! ```sh
//! curl 'http://localhost:3000/api?category=Main%20Course&cuisine=Indian&minPrice=20&availability=true'
//! ```
use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{MethodRouter, get},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod utils;

use config::Config;
use routes::{
    categories_handler, cuisines_handler, item_handler, menu_handler, method_not_allowed,
    missing_item_handler, not_found_page,
};
use state::AppState;

const DEFAULT_LOG_FILTER: &str = "catering=info,server=info,menu=info,tower_http=info";

pub async fn start_server() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    info!("Loading config...");
    let config = Config::load()?;

    info!("Initializing state...");
    let state = AppState::new(config).context("Failed to load menu catalog")?;

    info!("Starting server...");
    let address = format!("0.0.0.0:{}", state.config.port);
    let app = router(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on http://{address}");
    log_endpoints();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");

    Ok(())
}

/// The full route table. Built once; every request resolves against it.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(60 * 60));

    let assets = ServeDir::new(&state.config.static_dir)
        .not_found_service(not_found_page.into_service());

    let api = Router::new()
        .route("/api", read_only(get(menu_handler)))
        .route("/api/", read_only(get(menu_handler)))
        .route("/api/menu", read_only(get(menu_handler)))
        .route("/api/items", read_only(get(menu_handler)))
        .route("/api/menu/", read_only(get(missing_item_handler)))
        .route("/api/items/", read_only(get(missing_item_handler)))
        .route("/api/menu/{*id}", read_only(get(item_handler)))
        .route("/api/items/{*id}", read_only(get(item_handler)))
        .route("/api/categories", read_only(get(categories_handler)))
        .route("/api/cuisines", read_only(get(cuisines_handler)))
        .with_state(state);

    api.nest_service("/public", assets.clone())
        .fallback_service(assets)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn read_only(route: MethodRouter<Arc<AppState>>) -> MethodRouter<Arc<AppState>> {
    route.fallback(method_not_allowed)
}

fn log_endpoints() {
    info!("Available API endpoints:");
    info!("  GET /api                - menu items, filtered by query parameters");
    info!("  GET /api/menu           - menu items");
    info!("  GET /api/items          - menu items (alias for /api/menu)");
    info!("  GET /api/menu/{{id}}      - menu item by id");
    info!("  GET /api/categories     - distinct categories");
    info!("  GET /api/cuisines       - distinct cuisines");
    info!(
        "Query parameters: name, category, cuisine, minPrice, maxPrice, availability, minServings, maxServings"
    );
    info!("Example: /api?category=Main%20Course&cuisine=Indian&minPrice=20&availability=true");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
