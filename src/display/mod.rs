//! Display formatting for terminal output
//!
//! Formats models and service results for the terminal: tables with
//! locale-aware headers, 24-bit color swatches, proportional bars, and
//! pagination footers.

pub mod category;
pub mod dashboard;
pub mod expense;
pub mod format;
pub mod summary;

pub use category::{format_category_details, format_category_list};
pub use dashboard::format_dashboard;
pub use expense::{format_expense_details, format_expense_page};
pub use summary::{format_summary, format_trends};
