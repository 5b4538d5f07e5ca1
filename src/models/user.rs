//! User account model
//!
//! Users are stored locally with an Argon2id password hash (PHC string).
//! Emails are normalized to lowercase so lookups and uniqueness checks are
//! case-insensitive.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// Minimum full-name length
pub const MIN_NAME_LEN: usize = 2;

/// Maximum full-name length
pub const MAX_NAME_LEN: usize = 100;

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    /// Email address, lowercase
    pub email: String,

    /// Full display name
    pub full_name: String,

    /// Argon2id hash in PHC string format
    pub password_hash: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last modified
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user. The email is lowercased; the hash must already be
    /// computed.
    pub fn new(
        email: impl Into<String>,
        full_name: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            email: email.into().trim().to_lowercase(),
            full_name: full_name.into().trim().to_string(),
            password_hash: password_hash.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Record a modification
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validate the user
    pub fn validate(&self) -> Result<(), UserValidationError> {
        let name_len = self.full_name.chars().count();
        if name_len < MIN_NAME_LEN {
            return Err(UserValidationError::NameTooShort(name_len));
        }
        if name_len > MAX_NAME_LEN {
            return Err(UserValidationError::NameTooLong(name_len));
        }

        if !is_valid_email(&self.email) {
            return Err(UserValidationError::InvalidEmail(self.email.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.full_name, self.email)
    }
}

/// Basic shape check for email addresses: one '@', non-empty local part,
/// domain with at least one dot and no leading/trailing dot
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Validation errors for users
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    NameTooShort(usize),
    NameTooLong(usize),
    InvalidEmail(String),
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTooShort(len) => {
                write!(f, "Full name too short ({} chars, min {})", len, MIN_NAME_LEN)
            }
            Self::NameTooLong(len) => {
                write!(f, "Full name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
        }
    }
}

impl std::error::Error for UserValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_normalizes_email() {
        let user = User::new("  Anna.Kowalska@Example.COM ", "Anna Kowalska", "hash");
        assert_eq!(user.email, "anna.kowalska@example.com");
        assert_eq!(user.full_name, "Anna Kowalska");
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_name_validation() {
        let mut user = User::new("a@example.com", "Jo", "hash");
        assert!(user.validate().is_ok());

        user.full_name = "J".to_string();
        assert_eq!(user.validate(), Err(UserValidationError::NameTooShort(1)));

        user.full_name = "x".repeat(101);
        assert!(matches!(
            user.validate(),
            Err(UserValidationError::NameTooLong(101))
        ));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("anna@example.com"));
        assert!(is_valid_email("a.b+tag@sub.example.pl"));
        assert!(!is_valid_email("anna"));
        assert!(!is_valid_email("anna@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("anna@example"));
        assert!(!is_valid_email("anna@.com"));
        assert!(!is_valid_email("an na@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
    }

    #[test]
    fn test_display_never_shows_hash() {
        let user = User::new("anna@example.com", "Anna Kowalska", "$argon2id$secret");
        let shown = format!("{}", user);
        assert_eq!(shown, "Anna Kowalska <anna@example.com>");
        assert!(!shown.contains("argon2id"));
    }

    #[test]
    fn test_serialization() {
        let user = User::new("anna@example.com", "Anna Kowalska", "hash");
        let json = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user.id, deserialized.id);
        assert_eq!(user.email, deserialized.email);
    }
}
