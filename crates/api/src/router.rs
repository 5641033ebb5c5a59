//! Application router: the route tree, the media directory, and the layer
//! stack. `main.rs` and the integration tests both build through
//! [`build_app_router`] so they exercise identical middleware.

use std::path::Path;
use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::{ServerConfig, MEDIA_ROUTE};
use crate::routes;
use crate::state::AppState;

/// Header carrying the per-request correlation id.
const REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Browsers cache a CORS preflight for this long.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(60 * 60);

/// Assemble the full application.
///
/// `/health` sits at the root and the JSON API under `/api/v1`. With the
/// local object store, uploaded blobs are also served from [`MEDIA_ROUTE`].
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let mut app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes(config.max_upload_bytes));

    if let Some(dir) = config.storage.served_dir() {
        app = app.nest_service(MEDIA_ROUTE, media_service(dir));
    }

    with_layers(app, config).with_state(state)
}

/// Read-only file service over the local blob directory. Only exact object
/// keys resolve; directories never list or fall back to an index page.
fn media_service(dir: &Path) -> ServeDir {
    ServeDir::new(dir).append_index_html_on_directories(false)
}

/// Wrap `router` in the shared layer stack. The last layer added runs first,
/// so a request passes CORS, gets its id, is traced, and only then meets the
/// timeout and the panic guard.
fn with_layers<S>(router: Router<S>, config: &ServerConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(REQUEST_ID))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(REQUEST_ID, MakeRequestUuid))
        .layer(cors_layer(config))
}

/// CORS for the recorder and watch pages. The API only reads and creates,
/// so GET and POST are the only cross-origin methods.
///
/// # Panics
///
/// Panics at startup on an origin that is not a valid header value.
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{origin}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .expose_headers([REQUEST_ID])
        .allow_credentials(true)
        .max_age(PREFLIGHT_MAX_AGE)
}
