//! siphon-auth — profile-scoped credential resolution.
//!
//! A [`Profile`] is a named map of string configuration entries. A
//! [`ProfileCredentialsFactory`] turns one into a credentials provider
//! through a pure, stateless mapping, so different profiles can select
//! different provider implementations. [`StaticCredentialsFactory`] is
//! the bundled variant, reading a fixed key pair from the profile's
//! properties.

pub mod error;
pub mod profile;
pub mod provider;

pub use error::AuthError;
pub use profile::Profile;
pub use provider::{
    Credentials, ProfileCredentialsFactory, ProvideCredentials, StaticCredentials,
    StaticCredentialsFactory,
};
