use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a user directory backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("User directory lookup failed: {0}")]
pub struct DirectoryError(pub String);

/// Read access to a user record's authentication fields.
pub trait Credentials {
    /// Unique identifying field, used as the token subject.
    fn subject(&self) -> &str;

    /// Stored password hash in PHC string format.
    fn password_hash(&self) -> &str;
}

/// Lookup of users by their unique identifying field.
///
/// Implemented by each service over its own persistence layer.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    type User: Credentials + Send + Sync;

    /// Find a user by unique field value.
    ///
    /// # Returns
    /// Optional user (None if no user carries this value)
    ///
    /// # Errors
    /// * `DirectoryError` - Backend lookup failed
    async fn find_by_unique_field(&self, value: &str) -> Result<Option<Self::User>, DirectoryError>;
}
