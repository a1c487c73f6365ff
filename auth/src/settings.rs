use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use jsonwebtoken::Algorithm;
use thiserror::Error;

/// Error for invalid authentication settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Secret key must not be empty")]
    EmptySecret,

    #[error("Unsupported signing algorithm: {0} (expected HS256, HS384 or HS512)")]
    UnsupportedAlgorithm(String),

    #[error("Access token lifetime must be between 1 and {max} minutes, got {actual}")]
    InvalidTtl { max: i64, actual: i64 },
}

/// Immutable signing configuration shared by the authenticator and the access guard.
///
/// Built once at startup and passed explicitly, so tests can run with any key or lifetime.
#[derive(Clone)]
pub struct AuthSettings {
    secret: Vec<u8>,
    algorithm: Algorithm,
    access_token_ttl: Duration,
}

impl AuthSettings {
    const MAX_TTL_MINUTES: i64 = 366 * 24 * 60;

    /// Validate and build settings.
    ///
    /// # Arguments
    /// * `secret` - Shared signing secret
    /// * `algorithm` - Algorithm name, one of `HS256`, `HS384`, `HS512`
    /// * `access_token_expire_minutes` - Token lifetime in minutes
    ///
    /// # Errors
    /// * `EmptySecret` - Secret has zero length
    /// * `UnsupportedAlgorithm` - Unknown name or non-HMAC algorithm
    /// * `InvalidTtl` - Lifetime is not strictly positive or unreasonably large
    pub fn new(
        secret: impl Into<Vec<u8>>,
        algorithm: &str,
        access_token_expire_minutes: i64,
    ) -> Result<Self, SettingsError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(SettingsError::EmptySecret);
        }

        let algorithm = Self::parse_algorithm(algorithm)?;

        let access_token_ttl = Some(access_token_expire_minutes)
            .filter(|minutes| (1..=Self::MAX_TTL_MINUTES).contains(minutes))
            .and_then(Duration::try_minutes)
            .ok_or(SettingsError::InvalidTtl {
                max: Self::MAX_TTL_MINUTES,
                actual: access_token_expire_minutes,
            })?;

        Ok(Self {
            secret,
            algorithm,
            access_token_ttl,
        })
    }

    fn parse_algorithm(name: &str) -> Result<Algorithm, SettingsError> {
        match Algorithm::from_str(name.trim()) {
            Ok(algorithm @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)) => {
                Ok(algorithm)
            }
            _ => Err(SettingsError::UnsupportedAlgorithm(name.to_string())),
        }
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn access_token_ttl(&self) -> Duration {
        self.access_token_ttl
    }
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("secret", &"[redacted]")
            .field("algorithm", &self.algorithm)
            .field("access_token_ttl", &self.access_token_ttl)
            .finish()
    }
}
