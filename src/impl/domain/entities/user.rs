use chrono::{DateTime, Utc};

use crate::errors::TrackerError;

/// One row of the Users worksheet. The password field holds a bcrypt hash
/// produced out of band; the tracker never stores plaintext.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub username: String,
    pub display_name: String,
    pub password_hash: String,
}

/// An authenticated session with a bounded lifetime (the cookie expiry of
/// the embedding UI).
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub username: String,
    pub display_name: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn require_valid(&self, now: DateTime<Utc>) -> Result<(), TrackerError> {
        if self.is_expired(now) {
            Err(TrackerError::SessionExpired)
        } else {
            Ok(())
        }
    }
}
