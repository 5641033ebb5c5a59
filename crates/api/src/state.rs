use std::sync::Arc;

use reclip_core::access::AccessGate;
use reclip_db::store::PgVideoStore;
use reclip_storage::ObjectStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything shared sits behind an `Arc` or is a pool handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: reclip_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Playback access gate, reading through the same pool.
    pub gate: Arc<AccessGate<PgVideoStore>>,
    /// Where uploaded video blobs go.
    pub object_store: Arc<dyn ObjectStore>,
}

impl AppState {
    /// Wire the gate to the pool using the configured geofence radius.
    pub fn new(
        pool: reclip_db::DbPool,
        config: Arc<ServerConfig>,
        object_store: Arc<dyn ObjectStore>,
    ) -> Self {
        let gate =
            AccessGate::with_radius(PgVideoStore::new(pool.clone()), config.geofence_radius_m);
        Self {
            pool,
            config,
            gate: Arc::new(gate),
            object_store,
        }
    }
}
