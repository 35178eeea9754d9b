//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use sensor_provider_domain::error::{AuthError, NotFoundError, ProviderError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

/// Maps [`ProviderError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(ProviderError);

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        Self(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self(err.into())
    }
}

impl From<NotFoundError> for ApiError {
    fn from(err: NotFoundError) -> Self {
        Self(err.into())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            ProviderError::Auth(AuthError::MissingCredentials | AuthError::InvalidCredentials)
            | ProviderError::Validation(_) => StatusCode::BAD_REQUEST,
            // Unknown sensors answer 401, same as a failed token check.
            ProviderError::Auth(_) | ProviderError::NotFound(_) => StatusCode::UNAUTHORIZED,
            ProviderError::NotImplemented { .. } => StatusCode::NOT_IMPLEMENTED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), error = ?self.0, "request rejected");
        let body = ErrorBody {
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
