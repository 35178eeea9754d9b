//! JSON handlers for sensors.

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use sensor_provider_app::ports::{CredentialStore, SensorCatalog};
use sensor_provider_domain::error::{NotFoundError, ValidationError};
use sensor_provider_domain::measurement::MeasurementSeries;
use sensor_provider_domain::project::ProjectSensors;
use sensor_provider_domain::sensor::Sensor;
use sensor_provider_domain::time::{TimeRange, parse_timestamp};

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the measurements endpoint.
#[derive(Deserialize)]
pub struct MeasurementsQuery {
    /// Start of time range (RFC 3339). Unbounded when absent.
    pub from: Option<String>,
    /// End of time range (RFC 3339). Unbounded when absent.
    pub to: Option<String>,
}

impl MeasurementsQuery {
    fn range(&self) -> Result<TimeRange, ApiError> {
        let parse = |value: Option<&str>| {
            value
                .map(parse_timestamp)
                .transpose()
                .map_err(ApiError::from)
        };
        Ok(TimeRange {
            from: parse(self.from.as_deref())?,
            to: parse(self.to.as_deref())?,
        })
    }
}

/// An id segment axum cannot decode (e.g. invalid UTF-8) names no sensor.
fn sensor_id(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!(%rejection, "undecodable sensor id");
        NotFoundError {
            entity: "Sensor",
            id: String::new(),
        }
        .into()
    })
}

fn measurements_range(
    query: Result<Query<MeasurementsQuery>, QueryRejection>,
) -> Result<TimeRange, ApiError> {
    let Query(params) = query.map_err(|rejection| {
        tracing::debug!(%rejection, "unreadable measurements query");
        ApiError::from(ValidationError::InvalidTimestamp(rejection.body_text()))
    })?;
    params.range()
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<ProjectSensors>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the status endpoint.
pub enum StatusResponse {
    Ok(Json<Sensor>),
}

impl IntoResponse for StatusResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the measurements endpoint.
pub enum MeasurementsResponse {
    Ok(Json<MeasurementSeries>),
}

impl IntoResponse for MeasurementsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /sensors`
pub async fn list<C, S>(
    State(state): State<AppState<C, S>>,
) -> Result<ListResponse, ApiError>
where
    C: SensorCatalog + Send + Sync + 'static,
    S: CredentialStore + Send + Sync + 'static,
{
    let project = state.sensor_service.list_sensors().await?;
    Ok(ListResponse::Ok(Json(project)))
}

/// `GET /sensors/:id/status`
pub async fn status<C, S>(
    State(state): State<AppState<C, S>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusResponse, ApiError>
where
    C: SensorCatalog + Send + Sync + 'static,
    S: CredentialStore + Send + Sync + 'static,
{
    let id = sensor_id(path)?;
    let sensor = state.sensor_service.sensor_status(&id).await?;
    Ok(StatusResponse::Ok(Json(sensor)))
}

/// `GET /sensors/:id/measurements?from=&to=`
pub async fn measurements<C, S>(
    State(state): State<AppState<C, S>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<MeasurementsQuery>, QueryRejection>,
) -> Result<MeasurementsResponse, ApiError>
where
    C: SensorCatalog + Send + Sync + 'static,
    S: CredentialStore + Send + Sync + 'static,
{
    let range = measurements_range(query)?;
    let id = sensor_id(path)?;
    let series = state
        .sensor_service
        .sensor_measurements(&id, range)
        .await?;
    Ok(MeasurementsResponse::Ok(Json(series)))
}

/// `GET /sensors/:id/notifications`
///
/// Always answers `501 Not Implemented`.
pub async fn notifications<C, S>(
    State(state): State<AppState<C, S>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiError
where
    C: SensorCatalog + Send + Sync + 'static,
    S: CredentialStore + Send + Sync + 'static,
{
    let id = path.map(|Path(id)| id).unwrap_or_default();
    state.sensor_service.sensor_notifications(&id).into()
}
