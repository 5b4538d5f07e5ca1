//! Password hashing and policy validation
//!
//! Passwords are hashed with Argon2id and stored as PHC strings.
//! Plaintext passwords read from the terminal live in a zeroize-on-drop
//! buffer so they do not linger in memory after use.

use std::fmt;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{MonityError, MonityResult};

/// Special characters accepted by the password policy
pub const SPECIAL_CHARS: &str = "@$!%*?&";

/// Minimum password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// A plaintext password that zeros its buffer on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PlainPassword(String);

impl PlainPassword {
    /// Wrap a plaintext password
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    /// Get the plaintext
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Never print the plaintext in Debug output
impl fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlainPassword")
            .field("len", &self.0.len())
            .finish()
    }
}

/// Errors from password policy validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {MIN_PASSWORD_LEN} characters")]
    TooShort,
    #[error("Password must contain an uppercase letter")]
    MissingUppercase,
    #[error("Password must contain a lowercase letter")]
    MissingLowercase,
    #[error("Password must contain a digit")]
    MissingDigit,
    #[error("Password must contain a special character ({SPECIAL_CHARS})")]
    MissingSpecial,
}

/// Validate a password against the registration policy
///
/// Requires at least 8 characters including one uppercase letter, one
/// lowercase letter, one digit, and one special character from `@$!%*?&`.
pub fn validate_password_policy(password: &str) -> Result<(), PasswordPolicyError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordPolicyError::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordPolicyError::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordPolicyError::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordPolicyError::MissingDigit);
    }
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Err(PasswordPolicyError::MissingSpecial);
    }
    Ok(())
}

/// Hash a password with Argon2id, producing a PHC string
pub fn hash_password(password: &PlainPassword) -> MonityResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_str().as_bytes(), &salt)
        .map_err(|e| MonityError::Storage(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

/// Verify a password against a stored PHC hash
///
/// Returns Ok(false) on a wrong password; a malformed stored hash is an
/// error in its own right.
pub fn verify_password(password: &PlainPassword, stored_hash: &str) -> MonityResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| MonityError::Storage(format!("Stored password hash is invalid: {}", e)))?;

    match Argon2::default().verify_password(password.as_str().as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(MonityError::Storage(format!(
            "Password verification failed: {}",
            e
        ))),
    }
}
