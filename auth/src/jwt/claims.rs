use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Access token claims.
///
/// Only the two registered claims the service relies on are carried:
/// the subject (the user's unique identifier) and the expiration time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user's unique identifying field)
    pub sub: String,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

impl Claims {
    /// Create claims with an explicit expiration.
    pub fn new(sub: impl ToString, exp: i64) -> Self {
        Self {
            sub: sub.to_string(),
            exp,
        }
    }

    /// Create claims for a subject issued at `issued_at` and valid for `ttl`.
    ///
    /// # Arguments
    /// * `subject` - Unique user identifier
    /// * `issued_at` - Issuance instant
    /// * `ttl` - Token lifetime; expiry is `issued_at + ttl`
    pub fn for_subject(subject: impl ToString, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self::new(subject, (issued_at + ttl).timestamp())
    }

    /// Expiration as a UTC instant, if representable.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Check if the token is expired at `current_timestamp`.
    ///
    /// A token stops being valid at the exact second of its expiry.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
