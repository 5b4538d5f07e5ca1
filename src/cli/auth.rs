//! Authentication CLI commands
//!
//! Handlers for register, login, logout, whoami, and passwd. Passwords come
//! from an explicit flag (or `MONITY_PASSWORD`, useful in scripts) or an
//! interactive prompt that never echoes; new passwords prompted this way are
//! confirmed by typing them twice.

use chrono::Utc;

use crate::auth::{validate_password_policy, AuthService, PlainPassword};
use crate::config::Settings;
use crate::error::{MonityError, MonityResult};
use crate::storage::Storage;

/// Prompt for a password (hidden input)
fn prompt_password(prompt: &str) -> MonityResult<PlainPassword> {
    let password = rpassword::prompt_password(prompt)
        .map_err(|e| MonityError::Io(format!("Failed to read password: {}", e)))?;
    Ok(PlainPassword::new(password))
}

/// Resolve a password from a flag value or an interactive prompt
fn read_password(arg: Option<String>, prompt: &str) -> MonityResult<PlainPassword> {
    match arg {
        Some(password) => Ok(PlainPassword::new(password)),
        None => prompt_password(prompt),
    }
}

/// Resolve a new password: a flag value as-is, or a confirmed prompt
///
/// The interactive path checks the policy before asking for confirmation and
/// retries on mismatch. The service validates again either way.
fn read_new_password(arg: Option<String>, prompt: &str) -> MonityResult<PlainPassword> {
    if let Some(password) = arg {
        return Ok(PlainPassword::new(password));
    }

    loop {
        let first = prompt_password(prompt)?;
        if let Err(e) = validate_password_policy(first.as_str()) {
            println!("{}. Please try again.", e);
            continue;
        }

        let confirm = prompt_password("Confirm password: ")?;
        if first.as_str() != confirm.as_str() {
            println!("Passwords do not match. Please try again.");
            continue;
        }

        return Ok(first);
    }
}

/// Handle `monity register`
pub fn handle_register(
    storage: &Storage,
    settings: &Settings,
    email: String,
    full_name: String,
    password: Option<String>,
) -> MonityResult<()> {
    let auth = AuthService::new(storage, settings);

    let password = read_new_password(password, "Password: ")?;
    let (user, session) = auth.register(&email, &full_name, &password)?;

    println!("Welcome, {}!", user.full_name);
    println!("  Email: {}", user.email);
    println!(
        "  Logged in until {}",
        session.expires_at.format("%H:%M UTC")
    );

    Ok(())
}

/// Handle `monity login`
pub fn handle_login(
    storage: &Storage,
    settings: &Settings,
    email: String,
    password: Option<String>,
) -> MonityResult<()> {
    let auth = AuthService::new(storage, settings);

    let password = read_password(password, "Password: ")?;
    let (user, session) = auth.login(&email, &password)?;

    println!("Logged in as {}", user);
    println!(
        "  Session valid until {}",
        session.expires_at.format("%H:%M UTC")
    );

    Ok(())
}

/// Handle `monity logout`
pub fn handle_logout(storage: &Storage, settings: &Settings) -> MonityResult<()> {
    let auth = AuthService::new(storage, settings);

    if auth.logout()? {
        println!("Logged out.");
    } else {
        println!("No active session.");
    }

    Ok(())
}

/// Handle `monity whoami`
pub fn handle_whoami(storage: &Storage, settings: &Settings) -> MonityResult<()> {
    let auth = AuthService::new(storage, settings);

    let user = auth.current_user()?;
    let session = auth.current_session()?;
    let remaining = session.remaining(Utc::now());

    println!("{}", user);
    println!("  Session expires in {} min", remaining.num_minutes().max(0));

    Ok(())
}

/// Handle `monity passwd`
pub fn handle_passwd(
    storage: &Storage,
    settings: &Settings,
    current: Option<String>,
    new_password: Option<String>,
) -> MonityResult<()> {
    let auth = AuthService::new(storage, settings);

    // Fail fast before prompting if nobody is logged in
    auth.current_user()?;

    let current = read_password(current, "Current password: ")?;
    let new_password = read_new_password(new_password, "New password: ")?;

    let user = auth.change_password(&current, &new_password)?;
    println!("Password changed for {}", user.email);

    Ok(())
}
