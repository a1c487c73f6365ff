use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;
use crate::settings::AuthSettings;

/// JWT token handler for encoding and decoding access tokens.
///
/// Signs with a shared secret under one HMAC algorithm. Expiry is checked
/// against a caller-supplied instant rather than the system clock.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `algorithm` - HMAC algorithm used for signing and required when decoding
    ///
    /// # Security Notes
    /// - The secret should be at least as long as the algorithm's output (32 bytes for HS256)
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], algorithm: Algorithm) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
        }
    }

    /// Create a handler from validated settings.
    pub fn from_settings(settings: &AuthSettings) -> Self {
        Self::new(settings.secret(), settings.algorithm())
    }

    /// Encode claims into a signed JWT token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token.
    ///
    /// The signature is verified first; expiry is only evaluated for tokens
    /// whose integrity holds.
    ///
    /// # Arguments
    /// * `token` - JWT token string to decode
    /// * `now` - Instant the token is evaluated at
    ///
    /// # Returns
    /// Decoded claims, unchanged
    ///
    /// # Errors
    /// * `Malformed` - Token is not structurally decodable or lacks `sub`/`exp`
    /// * `InvalidSignature` - Signature mismatch or unexpected algorithm
    /// * `Expired` - `now` is at or past the `exp` claim
    pub fn decode(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against `now`, without leeway
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                        JwtError::InvalidSignature
                    }
                    _ => JwtError::Malformed(e.to_string()),
                }
            })?;

        if token_data.claims.is_expired(now.timestamp()) {
            return Err(JwtError::Expired);
        }

        Ok(token_data.claims)
    }
}
