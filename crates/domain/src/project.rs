//! Project — the set of sensors a client sees after authenticating.

use serde::{Deserialize, Serialize};

use crate::id::{ProjectId, SensorId};
use crate::sensor::Sensor;

/// A project and every sensor it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSensors {
    pub project_id: ProjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(rename = "data")]
    pub sensors: Vec<Sensor>,
}

impl ProjectSensors {
    /// Look up a sensor of this project by id.
    #[must_use]
    pub fn sensor(&self, id: SensorId) -> Option<&Sensor> {
        self.sensors.iter().find(|s| s.id == id)
    }
}
