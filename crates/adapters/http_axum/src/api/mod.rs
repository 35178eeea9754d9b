//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod auth;
#[allow(clippy::missing_errors_doc)]
pub mod sensors;

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};

use sensor_provider_app::ports::{CredentialStore, SensorCatalog};

use crate::guard;
use crate::state::AppState;

/// Build the API router.
///
/// Status, listing and measurement routes sit behind [`guard::require_access`];
/// the token exchange and the notifications stub do not.
pub fn routes<C, S>(state: AppState<C, S>) -> Router<AppState<C, S>>
where
    C: SensorCatalog + Send + Sync + 'static,
    S: CredentialStore + Send + Sync + 'static,
{
    let protected = Router::new()
        .route("/sensors", get(sensors::list::<C, S>))
        .route("/sensors/{id}/status", get(sensors::status::<C, S>))
        .route(
            "/sensors/{id}/measurements",
            get(sensors::measurements::<C, S>),
        )
        .route_layer(middleware::from_fn_with_state(
            state,
            guard::require_access::<C, S>,
        ));

    Router::new()
        .route("/sensors-auth", post(auth::exchange::<C, S>))
        .route(
            "/sensors/{id}/notifications",
            get(sensors::notifications::<C, S>),
        )
        .merge(protected)
}
