//! Liveness and dependency check, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health report. `status` is `degraded` when the record store is unreachable;
/// playback cannot work then, while uploads still can.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    pub database: bool,
    /// Which object store backend uploads go to (`local` or `s3`).
    pub object_store: &'static str,
    pub geofence_radius_m: f64,
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let database = reclip_db::health_check(&state.pool).await.is_ok();
    if !database {
        tracing::warn!("Health check: database unreachable");
    }

    Json(HealthReport {
        status: if database { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database,
        object_store: state.object_store.backend_name(),
        geofence_radius_m: state.gate.radius_m(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
