use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;

use crate::authenticator::AuthenticationError;
use crate::directory::UserDirectory;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::settings::AuthSettings;

/// Resolves the user behind a bearer token.
///
/// Every rejection surfaces as `Unauthorized`; the codec's specific failure is
/// only logged.
pub struct AccessGuard<D: UserDirectory> {
    directory: Arc<D>,
    jwt_handler: JwtHandler,
}

impl<D: UserDirectory> AccessGuard<D> {
    pub fn new(directory: Arc<D>, settings: &AuthSettings) -> Self {
        Self {
            directory,
            jwt_handler: JwtHandler::from_settings(settings),
        }
    }

    /// Validate a token and load its subject.
    ///
    /// # Arguments
    /// * `token` - Raw token, without the `Bearer ` prefix
    /// * `now` - Instant the token is evaluated at
    ///
    /// # Errors
    /// * `Unauthorized` - Malformed, tampered or expired token, or subject no longer exists
    /// * `Directory` - Lookup failed
    pub async fn authenticate(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<D::User, AuthenticationError> {
        let claims = self.jwt_handler.decode(token, now).map_err(|e| {
            match &e {
                JwtError::Expired => tracing::debug!(error = %e, "Access token rejected"),
                _ => tracing::warn!(error = %e, "Access token rejected"),
            }
            AuthenticationError::Unauthorized
        })?;

        self.directory
            .find_by_unique_field(&claims.sub)
            .await?
            .ok_or_else(|| {
                tracing::warn!(subject = %claims.sub, "Access token subject no longer exists");
                AuthenticationError::Unauthorized
            })
    }
}
