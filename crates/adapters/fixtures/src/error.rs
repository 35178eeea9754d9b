//! Fixture loading errors.

use std::path::PathBuf;

use sensor_provider_domain::error::ProviderError;
use sensor_provider_domain::id::SensorId;

/// Errors raised while loading or validating a fixture set.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("failed to read fixture file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid fixture JSON.
    #[error("failed to parse fixtures")]
    Parse(#[from] serde_json::Error),

    /// A sensor or measurement series breaks a domain invariant.
    #[error("invalid fixture data")]
    Invalid(#[from] ProviderError),

    /// Two sensors of the project share an id.
    #[error("sensor {0} is declared more than once")]
    DuplicateSensor(SensorId),

    /// Measurements reference a sensor the project does not declare.
    #[error("measurements reference unknown sensor {0}")]
    UnknownSensor(SensorId),
}
