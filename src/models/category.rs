//! Expense category model
//!
//! Categories are shared lookup rows that expenses reference. The app seeds a
//! default set on first run; users can add their own alongside them. Each
//! category carries a display color used by the summary chart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::period::Locale;

/// Maximum category name length
pub const MAX_NAME_LEN: usize = 50;

/// Maximum category description length
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// An expense category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name (English for seeded defaults)
    pub name: String,

    /// Polish name, present on seeded defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_pl: Option<String>,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Display color as "#RRGGBB"
    pub color: String,

    /// Whether this is one of the seeded default categories
    #[serde(default)]
    pub is_default: bool,

    /// When the category was created
    pub created_at: DateTime<Utc>,

    /// When the category was last modified
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new user-defined category
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new(),
            name: name.into(),
            name_pl: None,
            description: None,
            color: color.into(),
            is_default: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a category with a description
    pub fn with_description(
        name: impl Into<String>,
        color: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let mut category = Self::new(name, color);
        category.description = Some(description.into());
        category
    }

    /// The name to show for the given locale
    pub fn localized_name(&self, locale: Locale) -> &str {
        match locale {
            Locale::Pl => self.name_pl.as_deref().unwrap_or(&self.name),
            Locale::En => &self.name,
        }
    }

    /// Record a modification
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(
                self.name.chars().count(),
            ));
        }

        if let Some(desc) = &self.description {
            if desc.chars().count() > MAX_DESCRIPTION_LEN {
                return Err(CategoryValidationError::DescriptionTooLong(
                    desc.chars().count(),
                ));
            }
        }

        if !is_valid_hex_color(&self.color) {
            return Err(CategoryValidationError::InvalidColor(self.color.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Check that a color is a "#RRGGBB" hex string
pub fn is_valid_hex_color(color: &str) -> bool {
    let Some(hex) = color.strip_prefix('#') else {
        return false;
    };
    hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// The categories seeded on first run, with the stock palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    Food,
    Transport,
    Entertainment,
    Housing,
    Shopping,
    Health,
}

impl DefaultCategory {
    /// All default categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transport,
            Self::Entertainment,
            Self::Housing,
            Self::Shopping,
            Self::Health,
        ]
    }

    /// English name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Housing => "Housing",
            Self::Shopping => "Shopping",
            Self::Health => "Health",
        }
    }

    /// Polish name
    pub fn name_pl(&self) -> &'static str {
        match self {
            Self::Food => "Jedzenie",
            Self::Transport => "Transport",
            Self::Entertainment => "Rozrywka",
            Self::Housing => "Mieszkanie",
            Self::Shopping => "Zakupy",
            Self::Health => "Zdrowie",
        }
    }

    /// Stock display color
    pub fn color(&self) -> &'static str {
        match self {
            Self::Food => "#F87171",
            Self::Transport => "#60A5FA",
            Self::Entertainment => "#FCD34D",
            Self::Housing => "#67E8F9",
            Self::Shopping => "#A78BFA",
            Self::Health => "#FDBA74",
        }
    }

    /// Build the seeded Category row
    pub fn to_category(&self) -> Category {
        let mut category = Category::new(self.name(), self.color());
        category.name_pl = Some(self.name_pl().to_string());
        category.is_default = true;
        category
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    DescriptionTooLong(usize),
    InvalidColor(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::DescriptionTooLong(len) => {
                write!(
                    f,
                    "Category description too long ({} chars, max {})",
                    len, MAX_DESCRIPTION_LEN
                )
            }
            Self::InvalidColor(color) => {
                write!(f, "Color must be in #RRGGBB format, got '{}'", color)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
