//! Configuration module for Monity
//!
//! This module provides configuration management including:
//! - Platform path resolution with an env-var override
//! - User settings persistence
//! - Application preferences

pub mod paths;
pub mod settings;

pub use paths::MonityPaths;
pub use settings::Settings;
