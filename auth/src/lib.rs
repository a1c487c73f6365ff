//! Authentication utilities library
//!
//! Provides the credential and token core of the service:
//! - Password hashing (Argon2id)
//! - JWT access token issuance and validation
//! - Login against a user directory
//! - Bearer token guard resolving the current user
//!
//! The service supplies its own persistence through [`UserDirectory`]; this
//! crate never owns user storage.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{AuthSettings, Claims, JwtHandler};
//! use chrono::Utc;
//!
//! let settings = AuthSettings::new("secret_key_at_least_32_bytes_long!", "HS256", 30).unwrap();
//! let handler = JwtHandler::from_settings(&settings);
//!
//! let now = Utc::now();
//! let claims = Claims::for_subject("alice@example.com", now, settings.access_token_ttl());
//! let token = handler.encode(&claims).unwrap();
//! assert_eq!(handler.decode(&token, now).unwrap(), claims);
//! ```

pub mod authenticator;
pub mod directory;
pub mod guard;
pub mod jwt;
pub mod password;
pub mod settings;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use authenticator::AccessToken;
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::BEARER_TOKEN_TYPE;
pub use directory::Credentials;
pub use directory::DirectoryError;
pub use directory::UserDirectory;
pub use guard::AccessGuard;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use settings::AuthSettings;
pub use settings::SettingsError;
