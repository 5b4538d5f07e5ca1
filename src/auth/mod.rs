//! Local authentication for Monity
//!
//! A local credential store stands in for a hosted auth provider: users
//! register with email + password, hashes are Argon2id PHC strings in
//! users.json, and a single session file tracks who is logged in and
//! until when.

pub mod password;
pub mod service;

pub use password::{validate_password_policy, PasswordPolicyError, PlainPassword};
pub use service::AuthService;
