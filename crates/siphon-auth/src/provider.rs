//! Credential providers and the profile-scoped factory contract.

use std::sync::Arc;

use crate::error::AuthError;
use crate::profile::Profile;

/// An opaque credential pair handed to request signers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    key_id: String,
    secret: String,
}

impl Credentials {
    pub fn new(key_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            secret: secret.into(),
        }
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

/// Source of credentials for one execution.
pub trait ProvideCredentials: std::fmt::Debug + Send + Sync {
    fn credentials(&self) -> Result<Credentials, AuthError>;
}

/// Builds a credentials provider from a named profile.
///
/// A pure function of its input: no internal state, no mutation of the
/// profile, safe to invoke repeatedly and concurrently.
pub trait ProfileCredentialsFactory: Send + Sync {
    fn create(&self, profile: &Profile) -> Result<Arc<dyn ProvideCredentials>, AuthError>;
}

/// Provider holding a fixed credential pair.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl ProvideCredentials for StaticCredentials {
    fn credentials(&self) -> Result<Credentials, AuthError> {
        Ok(self.credentials.clone())
    }
}

/// Factory reading the `access_key` / `secret_key` profile properties.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCredentialsFactory;

impl StaticCredentialsFactory {
    const ACCESS_KEY: &'static str = "access_key";
    const SECRET_KEY: &'static str = "secret_key";

    fn required<'a>(profile: &'a Profile, property: &str) -> Result<&'a str, AuthError> {
        profile
            .property(property)
            .ok_or_else(|| AuthError::MissingProperty {
                profile: profile.name().to_string(),
                property: property.to_string(),
            })
    }
}

impl ProfileCredentialsFactory for StaticCredentialsFactory {
    fn create(&self, profile: &Profile) -> Result<Arc<dyn ProvideCredentials>, AuthError> {
        let key_id = Self::required(profile, Self::ACCESS_KEY)?;
        let secret = Self::required(profile, Self::SECRET_KEY)?;
        Ok(Arc::new(StaticCredentials::new(Credentials::new(
            key_id, secret,
        ))))
    }
}
