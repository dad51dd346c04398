//! Error types for credential resolution.

use thiserror::Error;

/// Errors raised while building a credentials provider from a profile.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The profile does not carry a property the factory requires.
    #[error("profile `{profile}` is missing required property `{property}`")]
    MissingProperty { profile: String, property: String },
}
