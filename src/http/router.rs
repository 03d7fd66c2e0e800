//! Router assembly for the vitrine server.

use axum::{
    http::{header, Method},
    middleware::from_fn,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::core::state::AppState;
use crate::http::handlers::{hello_handler, preflight_handler, visualizations_handler};
use crate::http::middleware::log_request;

/// Build the application router.
///
/// API routes answer `GET` and `OPTIONS`; axum rejects every other
/// method with 405. Unmatched paths fall through to the static asset
/// tree, and the CORS layer sits outermost so its headers reach every
/// response, static files and errors included.
pub fn app(state: AppState) -> Router {
    let dist_dir = state.config.assets.dist_dir.clone();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/hello", get(hello_handler).options(preflight_handler))
        .route(
            "/api/visualizations",
            get(visualizations_handler).options(preflight_handler),
        )
        .fallback_service(ServeDir::new(dist_dir))
        .layer(from_fn(log_request))
        .layer(cors)
        .with_state(state)
}
