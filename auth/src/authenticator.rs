use std::sync::Arc;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Serialize;

use crate::directory::Credentials;
use crate::directory::DirectoryError;
use crate::directory::UserDirectory;
use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordHasher;
use crate::settings::AuthSettings;

/// Token type advertised alongside every issued access token.
pub const BEARER_TOKEN_TYPE: &str = "bearer";

/// Authentication coordinator combining directory lookup, password verification
/// and JWT generation.
pub struct Authenticator<D: UserDirectory> {
    directory: Arc<D>,
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    access_token_ttl: Duration,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessToken {
    /// Signed JWT
    pub access_token: String,

    /// Always `bearer`
    pub token_type: String,
}

/// Authentication operation errors.
///
/// `InvalidCredentials` and `Unauthorized` carry no detail on purpose; the
/// specific cause is only logged.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Could not validate credentials")]
    Unauthorized,

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error("Token generation failed: {0}")]
    TokenIssuance(JwtError),
}

impl<D: UserDirectory> Authenticator<D> {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `directory` - User lookup by login identifier
    /// * `settings` - Signing secret, algorithm and token lifetime
    pub fn new(directory: Arc<D>, settings: &AuthSettings) -> Self {
        Self {
            directory,
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::from_settings(settings),
            access_token_ttl: settings.access_token_ttl(),
        }
    }

    /// Verify credentials and generate an access token.
    ///
    /// An unknown identifier still pays for one password verification so the
    /// two rejection paths cannot be told apart by timing.
    ///
    /// # Arguments
    /// * `identifier` - Login identifier (the directory's unique field)
    /// * `password` - Plaintext password to verify
    /// * `now` - Issuance instant
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown identifier or wrong password
    /// * `Directory` - Lookup failed
    /// * `TokenIssuance` - Token generation failed
    pub async fn login(
        &self,
        identifier: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, AuthenticationError> {
        let Some(user) = self.directory.find_by_unique_field(identifier).await? else {
            self.password_hasher.verify_dummy_async(password).await;
            tracing::debug!(reason = "unknown identifier", "Login rejected");
            return Err(AuthenticationError::InvalidCredentials);
        };

        if !self
            .password_hasher
            .verify_async(password, user.password_hash())
            .await
        {
            tracing::debug!(reason = "password mismatch", "Login rejected");
            return Err(AuthenticationError::InvalidCredentials);
        }

        self.issue_token(user.subject(), now)
    }

    /// Generate an access token without password verification.
    ///
    /// # Arguments
    /// * `subject` - Token subject
    /// * `now` - Issuance instant; expiry is `now + ttl`
    ///
    /// # Errors
    /// * `TokenIssuance` - Token generation failed
    pub fn issue_token(
        &self,
        subject: &str,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, AuthenticationError> {
        let claims = Claims::for_subject(subject, now, self.access_token_ttl);

        let access_token = self
            .jwt_handler
            .encode(&claims)
            .map_err(AuthenticationError::TokenIssuance)?;

        Ok(AccessToken {
            access_token,
            token_type: BEARER_TOKEN_TYPE.to_string(),
        })
    }
}
