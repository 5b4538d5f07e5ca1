//! Category CLI commands

use clap::Subcommand;

use crate::auth::AuthService;
use crate::config::Settings;
use crate::display::{format_category_details, format_category_list};
use crate::error::{MonityError, MonityResult};
use crate::services::{CategoryPatch, CategoryService, PageRequest};
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List {
        /// Hide the seeded default categories
        #[arg(long)]
        custom_only: bool,
    },

    /// Create a new category
    Create {
        /// Category name
        name: String,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
        /// Display color as "#RRGGBB"
        #[arg(short, long, default_value = "#6b7280")]
        color: String,
    },

    /// Show category details
    Show {
        /// Category name or ID
        category: String,
    },

    /// Edit a category
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// Remove the description
        #[arg(long, conflicts_with = "description")]
        clear_description: bool,
        /// New display color as "#RRGGBB"
        #[arg(short, long)]
        color: Option<String>,
        /// Mark (true) or unmark (false) as a default category
        #[arg(long)]
        default: Option<bool>,
    },

    /// Delete a category
    ///
    /// Refused while any expense still references it.
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command. Requires a logged-in user.
pub fn handle_category_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CategoryCommands,
) -> MonityResult<()> {
    AuthService::new(storage, settings).current_user()?;
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List { custom_only } => {
            let page = service.list(!custom_only, PageRequest::new(None, Some(100))?)?;
            print!("{}", format_category_list(&page.items, settings));
        }

        CategoryCommands::Create {
            name,
            description,
            color,
        } => {
            let category = service.create(&name, description.as_deref(), &color)?;
            println!("Created category: {}", category.name);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Show { category } => {
            let cat = service
                .find(&category)?
                .ok_or_else(|| MonityError::category_not_found(&category))?;

            let expense_count = storage.expenses.count_by_category(cat.id)?;
            print!("{}", format_category_details(&cat, expense_count, settings));
        }

        CategoryCommands::Edit {
            category,
            name,
            description,
            clear_description,
            color,
            default,
        } => {
            let cat = service.resolve(&category)?;

            let patch = CategoryPatch {
                name,
                description,
                clear_description,
                color,
                is_default: default,
            };
            let updated = service.update(cat.id, patch)?;
            println!("Updated category: {}", updated.name);
        }

        CategoryCommands::Delete { category } => {
            let cat = service.resolve(&category)?;
            service.delete(cat.id)?;
            println!("Deleted category: {}", cat.name);
        }
    }

    Ok(())
}
