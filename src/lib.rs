//! Monity - personal expense tracking for the terminal
//!
//! Monity keeps a local, single-machine record of what you spend: users
//! register and log in, record expenses against categories, and read
//! period-based summaries, trends, and a dashboard. Everything lives in
//! JSON files under one data directory; every write is audit-logged.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings
//! - `error`: the error type and its stable code mapping
//! - `models`: users, categories, expenses, money, periods
//! - `storage`: JSON file repositories with atomic writes
//! - `auth`: local credential store, password hashing, sessions
//! - `services`: business logic (ownership checks, pagination, analytics)
//! - `audit`: append-only change log
//! - `display`: terminal rendering, localized en/pl
//! - `export`: JSON/YAML/CSV data export
//! - `cli`: command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use monity::config::{paths::MonityPaths, settings::Settings};
//!
//! let paths = MonityPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod auth;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{MonityError, MonityResult};
