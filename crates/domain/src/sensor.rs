//! Sensor — status snapshot of a single device in a project.

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, ValidationError};
use crate::id::SensorId;
use crate::reading::Reading;
use crate::time::Timestamp;

/// Kind of quantity a sensor measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorType {
    TemperatureSensor,
    HumiditySensor,
    DewPointSensor,
    Co2Sensor,
    NoxSensor,
    VocSensor,
    ParticleSensor,
    BarometricPressureSensor,
    LightSensor,
    #[default]
    Other,
}

/// Current status of a sensor, as reported to clients.
///
/// Fields documented as *nullable* always appear in JSON (possibly as
/// `null`); the other `Option`s are omitted when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sensor {
    pub id: SensorId,
    #[serde(rename = "type")]
    pub kind: SensorType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wireless: Option<bool>,
    /// Remaining battery as a fraction in `0..=1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_life: Option<f64>,
    /// Nullable.
    #[serde(default)]
    pub value_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_safe_value: Option<Reading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_safe_value: Option<Reading>,
    /// Nullable.
    #[serde(default)]
    pub last_measurement_date: Option<Timestamp>,
    /// Nullable.
    #[serde(default)]
    pub last_measurement_value: Option<Reading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_measurement_rssi: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_measurement_date: Option<Timestamp>,
}

impl Sensor {
    /// Create a builder for constructing a [`Sensor`].
    #[must_use]
    pub fn builder() -> SensorBuilder {
        SensorBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Validation`] when `battery_life` lies outside `0..=1`.
    pub fn validate(&self) -> Result<(), ProviderError> {
        if let Some(battery) = self.battery_life
            && !(0.0..=1.0).contains(&battery)
        {
            return Err(ValidationError::BatteryLifeOutOfRange(battery).into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Sensor`].
#[derive(Debug, Default)]
pub struct SensorBuilder {
    id: Option<SensorId>,
    kind: SensorType,
    name: Option<String>,
    localization: Option<String>,
    description: Option<String>,
    active: bool,
    wireless: Option<bool>,
    battery_life: Option<f64>,
    value_unit: Option<String>,
    min_safe_value: Option<Reading>,
    max_safe_value: Option<Reading>,
    last_measurement_date: Option<Timestamp>,
    last_measurement_value: Option<Reading>,
    last_measurement_rssi: Option<i32>,
    next_measurement_date: Option<Timestamp>,
}

impl SensorBuilder {
    #[must_use]
    pub fn id(mut self, id: SensorId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: SensorType) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn localization(mut self, localization: impl Into<String>) -> Self {
        self.localization = Some(localization.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    #[must_use]
    pub fn wireless(mut self, wireless: bool) -> Self {
        self.wireless = Some(wireless);
        self
    }

    #[must_use]
    pub fn battery_life(mut self, battery_life: f64) -> Self {
        self.battery_life = Some(battery_life);
        self
    }

    #[must_use]
    pub fn value_unit(mut self, unit: impl Into<String>) -> Self {
        self.value_unit = Some(unit.into());
        self
    }

    #[must_use]
    pub fn safe_range(mut self, min: impl Into<Reading>, max: impl Into<Reading>) -> Self {
        self.min_safe_value = Some(min.into());
        self.max_safe_value = Some(max.into());
        self
    }

    #[must_use]
    pub fn last_measurement(
        mut self,
        date: Timestamp,
        value: impl Into<Reading>,
        rssi: Option<i32>,
    ) -> Self {
        self.last_measurement_date = Some(date);
        self.last_measurement_value = Some(value.into());
        self.last_measurement_rssi = rssi;
        self
    }

    #[must_use]
    pub fn next_measurement_date(mut self, date: Timestamp) -> Self {
        self.next_measurement_date = Some(date);
        self
    }

    /// Consume the builder, validate, and return a [`Sensor`].
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Validation`] if no id was given or
    /// `battery_life` is out of range.
    pub fn build(self) -> Result<Sensor, ProviderError> {
        let id = self.id.ok_or(ValidationError::MissingSensorId)?;
        let sensor = Sensor {
            id,
            kind: self.kind,
            name: self.name,
            localization: self.localization,
            description: self.description,
            active: self.active,
            wireless: self.wireless,
            battery_life: self.battery_life,
            value_unit: self.value_unit,
            min_safe_value: self.min_safe_value,
            max_safe_value: self.max_safe_value,
            last_measurement_date: self.last_measurement_date,
            last_measurement_value: self.last_measurement_value,
            last_measurement_rssi: self.last_measurement_rssi,
            next_measurement_date: self.next_measurement_date,
        };
        sensor.validate()?;
        Ok(sensor)
    }
}
