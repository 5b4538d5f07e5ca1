//! Authentication service
//!
//! Provides registration, login, logout, and session checks on top of the
//! local credential store. Login failures never reveal whether the email or
//! the password was wrong.

use chrono::Utc;

use crate::audit::EntityType;
use crate::config::Settings;
use crate::error::{MonityError, MonityResult};
use crate::models::user::is_valid_email;
use crate::models::{Session, User};
use crate::storage::Storage;

use super::password::{hash_password, validate_password_policy, verify_password, PlainPassword};

/// Service for authentication and session management
pub struct AuthService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Register a new user and log them in
    pub fn register(
        &self,
        email: &str,
        full_name: &str,
        password: &PlainPassword,
    ) -> MonityResult<(User, Session)> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(MonityError::MissingValue("email".into()));
        }
        if !is_valid_email(&email) {
            return Err(MonityError::Validation(format!(
                "Invalid email address: {}",
                email
            )));
        }

        validate_password_policy(password.as_str())
            .map_err(|e| MonityError::Validation(e.to_string()))?;

        if self.storage.users.email_exists(&email)? {
            return Err(MonityError::Duplicate {
                entity_type: "User",
                identifier: email,
            });
        }

        // Hash last, after everything cheap has passed
        let password_hash = hash_password(password)?;

        let user = User::new(email, full_name, password_hash);
        user.validate()
            .map_err(|e| MonityError::Validation(e.to_string()))?;

        self.storage.users.upsert(user.clone())?;
        self.storage.users.save()?;

        self.storage.log_create(
            EntityType::User,
            user.id.to_string(),
            Some(user.email.clone()),
            &audit_view(&user),
        )?;

        let session = self.open_session(&user)?;
        Ok((user, session))
    }

    /// Log in with email and password
    pub fn login(&self, email: &str, password: &PlainPassword) -> MonityResult<(User, Session)> {
        let Some(user) = self.storage.users.get_by_email(email)? else {
            return Err(MonityError::InvalidCredentials);
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(MonityError::InvalidCredentials);
        }

        let session = self.open_session(&user)?;
        Ok((user, session))
    }

    /// Clear the stored session. Returns whether one existed.
    pub fn logout(&self) -> MonityResult<bool> {
        let had_session = self.storage.session.load()?.is_some();
        self.storage.session.clear()?;
        Ok(had_session)
    }

    /// Get the live session, rejecting a missing or expired one
    pub fn current_session(&self) -> MonityResult<Session> {
        let Some(session) = self.storage.session.load()? else {
            return Err(MonityError::Unauthorized);
        };

        if session.is_expired(Utc::now()) {
            // Stale file; the next command starts clean
            self.storage.session.clear()?;
            return Err(MonityError::SessionExpired);
        }

        Ok(session)
    }

    /// Get the logged-in user
    pub fn current_user(&self) -> MonityResult<User> {
        let session = self.current_session()?;

        match self.storage.users.get(session.user_id)? {
            Some(user) => Ok(user),
            None => {
                // Account no longer exists; the session points nowhere
                self.storage.session.clear()?;
                Err(MonityError::Unauthorized)
            }
        }
    }

    /// Change the logged-in user's password
    pub fn change_password(
        &self,
        current: &PlainPassword,
        new_password: &PlainPassword,
    ) -> MonityResult<User> {
        let mut user = self.current_user()?;

        if !verify_password(current, &user.password_hash)? {
            return Err(MonityError::InvalidCredentials);
        }

        validate_password_policy(new_password.as_str())
            .map_err(|e| MonityError::Validation(e.to_string()))?;

        let before = audit_view(&user);
        user.password_hash = hash_password(new_password)?;
        user.touch();

        self.storage.users.upsert(user.clone())?;
        self.storage.users.save()?;

        self.storage.log_update(
            EntityType::User,
            user.id.to_string(),
            Some(user.email.clone()),
            &before,
            &audit_view(&user),
            Some("password_hash: (changed)".to_string()),
        )?;

        Ok(user)
    }

    fn open_session(&self, user: &User) -> MonityResult<Session> {
        let session = Session::start(
            user.id,
            &user.email,
            self.settings.session_timeout_minutes,
        );
        self.storage.session.save(&session)?;
        Ok(session)
    }
}

/// Serialize a user for the audit log without the password hash
fn audit_view(user: &User) -> serde_json::Value {
    let mut value = serde_json::to_value(user).unwrap_or(serde_json::Value::Null);
    if let Some(obj) = value.as_object_mut() {
        obj.remove("password_hash");
    }
    value
}
