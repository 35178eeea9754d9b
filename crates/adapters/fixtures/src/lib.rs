//! # sensor-provider-adapter-fixtures
//!
//! Fixture integration that serves a fixed example project for testing and
//! demonstration purposes.
//!
//! ## Provided data
//!
//! | Item | Value |
//! |------|-------|
//! | Credentials | project `abc`, refresh token `123`, access token `xyz` |
//! | Project | `abc` — "Fake sensor project" |
//! | Sensor | `00000000-0000-0000-0000-000000000000`, a CO₂ sensor |
//! | Measurements | five samples of that sensor, values `-2, 1, 8, 2, 5` |
//!
//! The same JSON shape can be supplied from a file to serve other data.
//!
//! ## Dependency rule
//!
//! Depends on `sensor-provider-app` (port traits) and `sensor-provider-domain` only.

mod error;

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use sensor_provider_app::ports::{CredentialStore, SensorCatalog};
use sensor_provider_domain::credentials::Credentials;
use sensor_provider_domain::error::ProviderError;
use sensor_provider_domain::id::SensorId;
use sensor_provider_domain::measurement::MeasurementSeries;
use sensor_provider_domain::project::ProjectSensors;

pub use error::FixtureError;

/// The example data set compiled into the binary.
const EMBEDDED_FIXTURES: &str = include_str!("fixtures.json");

#[derive(Debug, Deserialize)]
struct FixtureSet {
    credentials: Credentials,
    project: ProjectSensors,
    #[serde(default)]
    measurements: HashMap<SensorId, MeasurementSeries>,
}

impl FixtureSet {
    fn validate(&self) -> Result<(), FixtureError> {
        let mut seen = HashSet::new();
        for sensor in &self.project.sensors {
            sensor.validate()?;
            if !seen.insert(sensor.id) {
                return Err(FixtureError::DuplicateSensor(sensor.id));
            }
        }
        for (id, series) in &self.measurements {
            if !seen.contains(id) {
                return Err(FixtureError::UnknownSensor(*id));
            }
            series.validate()?;
        }
        Ok(())
    }
}

/// Immutable, cheaply clonable source of fixture data.
///
/// Implements both [`SensorCatalog`] and [`CredentialStore`], so one loaded
/// set backs every service.
#[derive(Debug, Clone)]
pub struct FixtureProvider {
    set: Arc<FixtureSet>,
}

impl FixtureProvider {
    /// Load the example data compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the embedded document fails to parse or
    /// validate.
    pub fn embedded() -> Result<Self, FixtureError> {
        Self::from_json(EMBEDDED_FIXTURES)
    }

    /// Load fixtures from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Io`] if the file cannot be read, or a parse or
    /// validation error.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate a fixture document.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Parse`] for malformed JSON, or a validation
    /// error when sensors or measurements break an invariant.
    pub fn from_json(content: &str) -> Result<Self, FixtureError> {
        let set: FixtureSet = serde_json::from_str(content)?;
        set.validate()?;
        tracing::debug!(
            project_id = %set.project.project_id,
            sensors = set.project.sensors.len(),
            "fixtures loaded"
        );
        Ok(Self { set: Arc::new(set) })
    }
}

impl SensorCatalog for FixtureProvider {
    fn project(&self) -> impl Future<Output = Result<ProjectSensors, ProviderError>> + Send {
        let project = self.set.project.clone();
        async { Ok(project) }
    }

    fn measurements(
        &self,
        id: SensorId,
    ) -> impl Future<Output = Result<Option<MeasurementSeries>, ProviderError>> + Send {
        let result = self.set.measurements.get(&id).cloned();
        async { Ok(result) }
    }
}

impl CredentialStore for FixtureProvider {
    fn credentials(&self) -> impl Future<Output = Result<Credentials, ProviderError>> + Send {
        let credentials = self.set.credentials.clone();
        async { Ok(credentials) }
    }
}
