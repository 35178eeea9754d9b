//! Header guard for protected routes.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;

use sensor_provider_app::ports::{CredentialStore, SensorCatalog};

use crate::error::ApiError;
use crate::state::AppState;

/// Header naming the caller's project. Only its presence is checked.
pub const PROJECT_HEADER: &str = "x-projectid";

fn project_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(PROJECT_HEADER)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}

fn authorization_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Middleware rejecting requests without `X-ProjectId` or with a wrong
/// `Authorization: Bearer <token>` header.
pub async fn require_access<C, S>(
    State(state): State<AppState<C, S>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError>
where
    C: SensorCatalog + Send + Sync + 'static,
    S: CredentialStore + Send + Sync + 'static,
{
    let project = project_header(request.headers());
    let authorization = authorization_header(request.headers());

    let project_id = state
        .auth_service
        .authorize(project.as_deref(), authorization.as_deref())
        .await?;
    tracing::debug!(%project_id, path = %request.uri().path(), "request authorized");

    Ok(next.run(request).await)
}
