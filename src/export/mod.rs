//! Data export for Monity
//!
//! Everything a user has entered can leave the app in three formats:
//! - JSON: machine-readable, the canonical backup format
//! - YAML: the same document, easier on human eyes
//! - CSV: expense rows only, for spreadsheets

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_expenses_csv;
pub use json::{export_full_json, import_from_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, import_from_yaml};
