use chrono::{DateTime, Duration, Utc};

use crate::{
    data::config::CookieConfig,
    domain::entities::user::{Session, UserRecord},
    errors::TrackerError,
};

/// Verifies a submitted username/password against the pre-hashed user
/// records and issues a session bounded by the cookie expiry. Unknown
/// usernames, wrong passwords, and malformed stored hashes all collapse to
/// the same `InvalidCredentials` so the caller can't probe which usernames
/// exist.
pub(crate) fn verify_login(
    users: &[UserRecord],
    cookie: &CookieConfig,
    username: &str,
    password: &str,
    now: DateTime<Utc>,
) -> Result<Session, TrackerError> {
    let user = users
        .iter()
        .find(|u| u.username == username)
        .ok_or(TrackerError::InvalidCredentials)?;
    match bcrypt::verify(password, &user.password_hash) {
        Ok(true) => Ok(Session {
            username: user.username.clone(),
            display_name: user.display_name.clone(),
            issued_at: now,
            expires_at: now + Duration::days(cookie.expiry_days),
        }),
        _ => Err(TrackerError::InvalidCredentials),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<UserRecord> {
        vec![UserRecord {
            username: "ana".to_string(),
            display_name: "Ana Souza".to_string(),
            password_hash: bcrypt::hash("segredo", 4).expect("hashing a literal succeeds"),
        }]
    }

    fn cookie() -> CookieConfig {
        CookieConfig {
            name: "worksite_auth".to_string(),
            key: "k".to_string(),
            expiry_days: 30,
        }
    }

    #[test]
    fn valid_credentials_issue_a_bounded_session() {
        let now = Utc::now();
        let session =
            verify_login(&users(), &cookie(), "ana", "segredo", now).expect("login succeeds");
        assert_eq!(session.display_name, "Ana Souza");
        assert_eq!(session.expires_at, now + Duration::days(30));
        assert!(!session.is_expired(now));
        assert!(session.is_expired(now + Duration::days(31)));
    }

    #[test]
    fn wrong_password_is_rejected() {
        let result = verify_login(&users(), &cookie(), "ana", "errado", Utc::now());
        assert!(matches!(result, Err(TrackerError::InvalidCredentials)));
    }

    #[test]
    fn unknown_username_is_rejected() {
        let result = verify_login(&users(), &cookie(), "bruno", "segredo", Utc::now());
        assert!(matches!(result, Err(TrackerError::InvalidCredentials)));
    }

    #[test]
    fn malformed_stored_hash_is_rejected_not_propagated() {
        let users = vec![UserRecord {
            username: "ana".to_string(),
            display_name: "Ana".to_string(),
            password_hash: "not-a-bcrypt-hash".to_string(),
        }];
        let result = verify_login(&users, &cookie(), "ana", "segredo", Utc::now());
        assert!(matches!(result, Err(TrackerError::InvalidCredentials)));
    }

    #[test]
    fn expired_session_fails_require_valid() {
        let now = Utc::now();
        let session = verify_login(&users(), &cookie(), "ana", "segredo", now).expect("login");
        let later = now + Duration::days(31);
        assert!(matches!(
            session.require_valid(later),
            Err(TrackerError::SessionExpired)
        ));
    }
}
