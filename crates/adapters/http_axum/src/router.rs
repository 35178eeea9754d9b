//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use sensor_provider_app::ports::{CredentialStore, SensorCatalog};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the sensor API at the root next to a `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<C, S>(state: AppState<C, S>) -> Router
where
    C: SensorCatalog + Send + Sync + 'static,
    S: CredentialStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
