//! Login session model
//!
//! A single session file records who is logged in on this machine and when
//! the login stops being valid. Expiry is fixed at login time; commands that
//! find an expired session clear it and ask for a fresh login.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// An active login session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// The logged-in user
    pub user_id: UserId,

    /// Email snapshot for display without a user lookup
    pub email: String,

    /// When the session was created
    pub created_at: DateTime<Utc>,

    /// When the session stops being valid
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Start a session lasting `timeout_minutes` from now
    pub fn start(user_id: UserId, email: impl Into<String>, timeout_minutes: u32) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            email: email.into(),
            created_at: now,
            expires_at: now + Duration::minutes(i64::from(timeout_minutes)),
        }
    }

    /// Whether the session has passed its expiry
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Time left before expiry (zero when already expired)
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at - now).max(Duration::zero())
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (expires {})", self.email, self.expires_at.format("%H:%M:%S"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_expiry() {
        let session = Session::start(UserId::new(), "anna@example.com", 10);
        let now = Utc::now();

        assert!(!session.is_expired(now));
        assert!(session.is_expired(now + Duration::minutes(11)));
        assert!(session.is_expired(session.expires_at));
    }

    #[test]
    fn test_default_window_is_ten_minutes() {
        let session = Session::start(UserId::new(), "anna@example.com", 10);
        let window = session.expires_at - session.created_at;
        assert_eq!(window, Duration::minutes(10));
    }

    #[test]
    fn test_remaining_never_negative() {
        let session = Session::start(UserId::new(), "anna@example.com", 10);
        let later = session.expires_at + Duration::minutes(5);
        assert_eq!(session.remaining(later), Duration::zero());
        assert!(session.remaining(session.created_at) > Duration::minutes(9));
    }

    #[test]
    fn test_serialization() {
        let session = Session::start(UserId::new(), "anna@example.com", 10);
        let json = serde_json::to_string(&session).unwrap();
        let deserialized: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(session.user_id, deserialized.user_id);
        assert_eq!(session.expires_at, deserialized.expires_at);
    }
}
