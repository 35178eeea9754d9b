//! Credential store port — where the token exchange looks up credentials.

use std::future::Future;

use sensor_provider_domain::credentials::Credentials;
use sensor_provider_domain::error::ProviderError;

/// Lookup of the credentials a project authenticates with.
pub trait CredentialStore {
    /// The credentials currently in force.
    fn credentials(&self) -> impl Future<Output = Result<Credentials, ProviderError>> + Send;
}
