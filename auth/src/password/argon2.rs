use std::sync::Arc;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;

use super::errors::PasswordError;

/// Plaintext hashed once per hasher so unknown-user and malformed-hash paths
/// pay the same Argon2 cost as a real verification.
const DUMMY_PASSWORD: &str = "dummy-password-for-constant-cost";

/// Password hashing implementation.
///
/// Provides cryptographic password hashing (internally uses Argon2id).
///
/// Cloning is cheap; the `*_async` variants move the Argon2 work onto tokio's
/// blocking pool so request handlers never stall a runtime worker.
#[derive(Clone)]
pub struct PasswordHasher {
    dummy_hash: Option<Arc<str>>,
}

impl PasswordHasher {
    /// Create a new password hasher instance.
    ///
    /// Computes one throwaway hash up front, used by [`verify_dummy`](Self::verify_dummy).
    pub fn new() -> Self {
        let dummy_hash = Self::hash_with_new_salt(DUMMY_PASSWORD)
            .ok()
            .map(Arc::from);
        Self { dummy_hash }
    }

    /// Hash a plaintext password securely.
    ///
    /// Uses Argon2id with random salt generation, so hashing the same password
    /// twice yields two different strings.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        Self::hash_with_new_salt(password)
    }

    /// Verify a password against a stored hash.
    ///
    /// Never fails: a malformed hash, or one produced with another algorithm
    /// or cost parameters, is reported as a mismatch after spending the same
    /// work a genuine comparison would.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed_hash) if Self::has_expected_cost(&parsed_hash) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok(),
            _ => {
                self.verify_dummy(password);
                false
            }
        }
    }

    /// [`hash`](Self::hash) on the blocking thread pool.
    pub async fn hash_async(&self, password: &str) -> Result<String, PasswordError> {
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || Self::hash_with_new_salt(&password))
            .await
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?
    }

    /// [`verify`](Self::verify) on the blocking thread pool.
    ///
    /// A verification task that fails to complete counts as a mismatch.
    pub async fn verify_async(&self, password: &str, hash: &str) -> bool {
        let hasher = self.clone();
        let password = password.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .unwrap_or(false)
    }

    /// [`verify_dummy`](Self::verify_dummy) on the blocking thread pool.
    pub async fn verify_dummy_async(&self, password: &str) {
        let hasher = self.clone();
        let password = password.to_owned();

        let _ = tokio::task::spawn_blocking(move || hasher.verify_dummy(&password)).await;
    }

    /// Run one verification against the internal dummy hash and discard the result.
    pub fn verify_dummy(&self, password: &str) {
        if let Some(parsed_hash) = self
            .dummy_hash
            .as_deref()
            .and_then(|hash| PasswordHash::new(hash).ok())
        {
            let _ = Argon2::default().verify_password(password.as_bytes(), &parsed_hash);
        }
    }

    // Argon2 reads its cost from the stored string, so a cheaper hash would verify faster
    fn has_expected_cost(parsed_hash: &PasswordHash<'_>) -> bool {
        let expected = Params::default();

        parsed_hash.algorithm == Algorithm::Argon2id.ident()
            && Params::try_from(parsed_hash).is_ok_and(|params| {
                params.m_cost() == expected.m_cost()
                    && params.t_cost() == expected.t_cost()
                    && params.p_cost() == expected.p_cost()
            })
    }

    fn hash_with_new_salt(password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
