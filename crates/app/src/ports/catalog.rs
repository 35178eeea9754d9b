//! Sensor catalog port — read-only access to sensors and their history.

use std::future::Future;

use sensor_provider_domain::error::ProviderError;
use sensor_provider_domain::id::SensorId;
use sensor_provider_domain::measurement::MeasurementSeries;
use sensor_provider_domain::project::ProjectSensors;

/// Source of project, sensor and measurement data.
pub trait SensorCatalog {
    /// The project together with all of its sensors.
    fn project(&self) -> impl Future<Output = Result<ProjectSensors, ProviderError>> + Send;

    /// Full measurement history of a sensor, or `None` if the sensor is unknown.
    fn measurements(
        &self,
        id: SensorId,
    ) -> impl Future<Output = Result<Option<MeasurementSeries>, ProviderError>> + Send;
}
