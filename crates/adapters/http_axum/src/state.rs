//! Shared application state for axum handlers.

use std::sync::Arc;

use sensor_provider_app::ports::{CredentialStore, SensorCatalog};
use sensor_provider_app::services::auth_service::AuthService;
use sensor_provider_app::services::sensor_service::SensorService;

/// Application state shared across all axum handlers.
///
/// Generic over the catalog and credential store types to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<C, S> {
    /// Sensor read use-cases.
    pub sensor_service: Arc<SensorService<C>>,
    /// Token exchange and request authorization.
    pub auth_service: Arc<AuthService<S>>,
}

impl<C, S> Clone for AppState<C, S> {
    fn clone(&self) -> Self {
        Self {
            sensor_service: Arc::clone(&self.sensor_service),
            auth_service: Arc::clone(&self.auth_service),
        }
    }
}

impl<C, S> AppState<C, S>
where
    C: SensorCatalog + Send + Sync + 'static,
    S: CredentialStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(sensor_service: SensorService<C>, auth_service: AuthService<S>) -> Self {
        Self {
            sensor_service: Arc::new(sensor_service),
            auth_service: Arc::new(auth_service),
        }
    }
}
