//! Common error types used across the workspace.
//!
//! Each variant's `Display` text is the exact message surfaced to API
//! clients, so adapters can forward `to_string()` without rewording.

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The operation exists in the API surface but has no implementation.
    #[error("Not implemented.")]
    NotImplemented {
        /// Short name of the missing capability, for logs only.
        feature: &'static str,
    },
}

/// Authentication and authorization failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The token exchange body lacks `projectId` or `refreshToken`.
    #[error("Missing projectId or refreshToken")]
    MissingCredentials,

    /// The token exchange body does not match the known credentials.
    #[error("Invalid projectId or refreshToken")]
    InvalidCredentials,

    /// No (or an empty) `X-ProjectId` header on a protected request.
    #[error("Missing 'X-ProjectId' header.")]
    MissingProjectHeader,

    /// The `Authorization` header is absent or carries the wrong token.
    #[error("Unauthorized.")]
    InvalidAccessToken,
}

/// A referenced item does not belong to the project.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} does not exist in a project.")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// Malformed input or broken domain invariants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid 'from' or 'to' date.")]
    InvalidTimestamp(String),

    #[error("battery life must be within 0..=1, got {0}")]
    BatteryLifeOutOfRange(f64),

    #[error("measurements must be ordered by date")]
    UnorderedMeasurements,

    #[error("sensor id is required")]
    MissingSensorId,
}
