//! Sensor service — read-only use-cases over the sensor catalog.

use std::str::FromStr;

use sensor_provider_domain::error::{NotFoundError, ProviderError};
use sensor_provider_domain::id::SensorId;
use sensor_provider_domain::measurement::MeasurementSeries;
use sensor_provider_domain::project::ProjectSensors;
use sensor_provider_domain::sensor::Sensor;
use sensor_provider_domain::time::TimeRange;

use crate::ports::SensorCatalog;

/// Application service exposing sensors of the authenticated project.
pub struct SensorService<C> {
    catalog: C,
}

/// Sensor ids arrive as raw path segments and must be spelled exactly as
/// the catalog prints them (lowercase, hyphenated). Other spellings of the
/// same UUID, and anything that is not a UUID, are unknown sensors.
fn parse_sensor_id(raw: &str) -> Result<SensorId, NotFoundError> {
    SensorId::from_str(raw)
        .ok()
        .filter(|id| id.to_string() == raw)
        .ok_or_else(|| not_found(raw))
}

fn not_found(raw: &str) -> NotFoundError {
    NotFoundError {
        entity: "Sensor",
        id: raw.to_owned(),
    }
}

impl<C: SensorCatalog> SensorService<C> {
    /// Create a new service backed by the given catalog.
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// List the project and all of its sensors.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the catalog.
    pub async fn list_sensors(&self) -> Result<ProjectSensors, ProviderError> {
        self.catalog.project().await
    }

    /// Current status of one sensor.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NotFound`] when the id does not name a sensor
    /// of the project.
    #[tracing::instrument(skip(self))]
    pub async fn sensor_status(&self, id: &str) -> Result<Sensor, ProviderError> {
        let sensor_id = parse_sensor_id(id)?;
        let project = self.catalog.project().await?;
        project
            .sensor(sensor_id)
            .cloned()
            .ok_or_else(|| not_found(id).into())
    }

    /// Measurement history of one sensor, narrowed to `range`.
    ///
    /// A sensor of the project with no recorded history yields an empty
    /// series carrying its unit and safe range.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NotFound`] when the id does not name a sensor
    /// of the project.
    #[tracing::instrument(skip(self))]
    pub async fn sensor_measurements(
        &self,
        id: &str,
        range: TimeRange,
    ) -> Result<MeasurementSeries, ProviderError> {
        let sensor_id = parse_sensor_id(id)?;
        let project = self.catalog.project().await?;
        let sensor = project.sensor(sensor_id).ok_or_else(|| not_found(id))?;
        match self.catalog.measurements(sensor_id).await? {
            Some(series) => Ok(series.within(&range)),
            None => {
                tracing::debug!(sensor_id = id, "no recorded history");
                Ok(MeasurementSeries::empty_for(sensor))
            }
        }
    }

    /// Notifications are not offered; this always yields
    /// [`ProviderError::NotImplemented`], whatever the id.
    #[must_use]
    pub fn sensor_notifications(&self, id: &str) -> ProviderError {
        tracing::debug!(sensor_id = id, "notifications requested");
        ProviderError::NotImplemented {
            feature: "notifications",
        }
    }
}
