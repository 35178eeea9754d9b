//! Token exchange handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use sensor_provider_app::ports::{CredentialStore, SensorCatalog};
use sensor_provider_domain::credentials::AccessToken;
use sensor_provider_domain::error::AuthError;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for the token exchange. Both fields are required; they are
/// optional here so their absence maps to a typed error instead of a
/// framework rejection.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    pub project_id: Option<String>,
    pub refresh_token: Option<String>,
}

/// Successful token exchange body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: AccessToken,
}

/// Possible responses from the exchange endpoint.
pub enum ExchangeResponse {
    Ok(Json<TokenResponse>),
}

impl IntoResponse for ExchangeResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /sensors-auth`
pub async fn exchange<C, S>(
    State(state): State<AppState<C, S>>,
    body: Result<Json<TokenRequest>, JsonRejection>,
) -> Result<ExchangeResponse, ApiError>
where
    C: SensorCatalog + Send + Sync + 'static,
    S: CredentialStore + Send + Sync + 'static,
{
    let Json(req) = body.map_err(|rejection| {
        tracing::debug!(%rejection, "unreadable token request");
        ApiError::from(AuthError::MissingCredentials)
    })?;

    let access_token = state
        .auth_service
        .exchange(req.project_id.as_deref(), req.refresh_token.as_deref())
        .await?;
    Ok(ExchangeResponse::Ok(Json(TokenResponse { access_token })))
}
