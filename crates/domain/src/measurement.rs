//! Measurement history of a sensor.

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, ValidationError};
use crate::reading::Reading;
use crate::sensor::Sensor;
use crate::time::{TimeRange, Timestamp};

/// One sample. `value` is `null` when the sensor reported nothing usable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub date: Timestamp,
    pub value: Option<Reading>,
}

/// Time-ordered samples of a single sensor together with its unit and safe range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementSeries {
    /// Nullable.
    #[serde(default)]
    pub value_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_safe_value: Option<Reading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_safe_value: Option<Reading>,
    /// Ordered by `date` ascending; equal dates are allowed.
    pub data: Vec<Measurement>,
}

impl MeasurementSeries {
    /// Series with no samples, carrying the unit and safe range of `sensor`.
    #[must_use]
    pub fn empty_for(sensor: &Sensor) -> Self {
        Self {
            value_unit: sensor.value_unit.clone(),
            min_safe_value: sensor.min_safe_value,
            max_safe_value: sensor.max_safe_value,
            data: Vec::new(),
        }
    }

    /// Check that samples are ordered by date (non-strictly).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnorderedMeasurements`] if any sample is
    /// older than the one before it.
    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.data.is_sorted_by_key(|m| m.date) {
            Ok(())
        } else {
            Err(ValidationError::UnorderedMeasurements.into())
        }
    }

    /// Copy of this series keeping only samples inside `range`.
    #[must_use]
    pub fn within(&self, range: &TimeRange) -> Self {
        Self {
            value_unit: self.value_unit.clone(),
            min_safe_value: self.min_safe_value,
            max_safe_value: self.max_safe_value,
            data: self
                .data
                .iter()
                .filter(|m| range.contains(m.date))
                .copied()
                .collect(),
        }
    }
}
