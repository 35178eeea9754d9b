//! Credentials — the refresh-token / access-token pair of a project.

use serde::{Deserialize, Serialize};

use crate::id::ProjectId;

/// Opaque bearer token handed out by the token exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether an `Authorization` header value carries exactly this token.
    ///
    /// Only the literal form `Bearer <token>` is accepted.
    #[must_use]
    pub fn authorizes(&self, header: &str) -> bool {
        header.strip_prefix("Bearer ") == Some(self.0.as_str())
    }
}

/// The credential triple a project authenticates with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub project_id: ProjectId,
    pub refresh_token: String,
    pub access_token: AccessToken,
}

impl Credentials {
    /// Whether the presented project id and refresh token both match.
    #[must_use]
    pub fn matches(&self, project_id: &str, refresh_token: &str) -> bool {
        self.project_id.as_str() == project_id && self.refresh_token == refresh_token
    }
}
