//! Auth service — token exchange and authorization of protected requests.

use sensor_provider_domain::credentials::AccessToken;
use sensor_provider_domain::error::{AuthError, ProviderError};
use sensor_provider_domain::id::ProjectId;

use crate::ports::CredentialStore;

/// Application service guarding access to sensor data.
pub struct AuthService<S> {
    store: S,
}

impl<S: CredentialStore> AuthService<S> {
    /// Create a new service backed by the given credential store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Exchange a project id and refresh token for an access token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredentials`] when either value is absent,
    /// [`AuthError::InvalidCredentials`] when they do not match the store, or
    /// an error propagated from the store.
    #[tracing::instrument(skip(self, refresh_token))]
    pub async fn exchange(
        &self,
        project_id: Option<&str>,
        refresh_token: Option<&str>,
    ) -> Result<AccessToken, ProviderError> {
        let (Some(project_id), Some(refresh_token)) = (project_id, refresh_token) else {
            return Err(AuthError::MissingCredentials.into());
        };

        let credentials = self.store.credentials().await?;
        if !credentials.matches(project_id, refresh_token) {
            tracing::debug!("refresh token rejected");
            return Err(AuthError::InvalidCredentials.into());
        }
        Ok(credentials.access_token)
    }

    /// Check the `X-ProjectId` and `Authorization` header values of a request.
    ///
    /// The project header only has to be present and non-empty; its value is
    /// returned so callers can attach it to logs.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingProjectHeader`] first if the project header
    /// is missing, then [`AuthError::InvalidAccessToken`] if the bearer token
    /// does not match.
    pub async fn authorize(
        &self,
        project_header: Option<&str>,
        authorization: Option<&str>,
    ) -> Result<ProjectId, ProviderError> {
        let project_id = match project_header {
            Some(value) if !value.is_empty() => ProjectId::new(value),
            _ => return Err(AuthError::MissingProjectHeader.into()),
        };

        let credentials = self.store.credentials().await?;
        match authorization {
            Some(header) if credentials.access_token.authorizes(header) => Ok(project_id),
            _ => Err(AuthError::InvalidAccessToken.into()),
        }
    }
}
