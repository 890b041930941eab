use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity claims embedded in an issued token.
///
/// The minimal claim set: subject, email, and the validity window. Immutable
/// once issued; a token is a signed serialization of these fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Email address of the subject
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject, stamping the validity window.
    ///
    /// # Arguments
    /// * `subject_id` - Unique subject identifier
    /// * `email` - Subject's email address
    /// * `ttl` - Time until the token expires
    pub fn for_subject(subject_id: impl ToString, email: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: subject_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Check whether the claims have expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
