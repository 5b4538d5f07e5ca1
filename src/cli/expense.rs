//! Expense CLI commands
//!
//! Dates are accepted as ISO (`2025-03-15`) or Polish (`15.03.2025`) form;
//! amounts go through [`Money::parse`], so `25.50`, `25,50`, and `25,50 zł`
//! all work.

use clap::Subcommand;

use crate::auth::AuthService;
use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_page};
use crate::error::{MonityError, MonityResult};
use crate::models::Money;
use crate::services::expense::DELETED_CATEGORY_LABEL;
use crate::services::{
    CategoryService, CreateExpenseInput, ExpensePatch, ExpenseQuery, ExpenseService, PageRequest,
    SortBy, SortOrder,
};
use crate::storage::Storage;

use super::parse_date;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Amount, e.g. "25.50" or "25,50"
        amount: String,
        /// Category name or ID
        category: String,
        /// What the money went on
        #[arg(short, long)]
        description: Option<String>,
        /// Day of the spend (today when omitted)
        #[arg(long)]
        date: Option<String>,
    },

    /// List expenses
    List {
        /// Only expenses on or after this date
        #[arg(long)]
        from: Option<String>,
        /// Only expenses on or before this date
        #[arg(long)]
        to: Option<String>,
        /// Only expenses in this category (name or ID)
        #[arg(short, long)]
        category: Option<String>,
        /// Sort field: date, amount, or created-at
        #[arg(long)]
        sort: Option<String>,
        /// Sort direction: asc or desc
        #[arg(long)]
        order: Option<String>,
        /// Page number, starting at 1
        #[arg(short, long)]
        page: Option<usize>,
        /// Rows per page (max 100)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show expense details
    Show {
        /// Expense ID
        expense: String,
    },

    /// Edit an expense
    Edit {
        /// Expense ID
        expense: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category (name or ID)
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// Remove the description
        #[arg(long, conflicts_with = "description")]
        clear_description: bool,
        /// New date
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        expense: String,
    },
}

fn parse_amount(s: &str) -> MonityResult<Money> {
    Money::parse(s).map_err(|e| MonityError::InvalidInput(e.to_string()))
}

/// Handle an expense command. Requires a logged-in user.
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> MonityResult<()> {
    let user = AuthService::new(storage, settings).current_user()?;
    let service = ExpenseService::new(storage);
    let categories = CategoryService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let category = categories.resolve(&category)?;
            let input = CreateExpenseInput {
                category_id: category.id,
                amount: parse_amount(&amount)?,
                description,
                date: date.as_deref().map(parse_date).transpose()?,
            };

            let expense = service.create(user.id, input)?;
            println!(
                "Recorded {} in {} on {}",
                expense.amount.format_with_symbol(&settings.currency_symbol),
                category.localized_name(settings.locale),
                expense.date.format(settings.locale.date_format()),
            );
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::List {
            from,
            to,
            category,
            sort,
            order,
            page,
            limit,
        } => {
            let mut query = ExpenseQuery::new();
            query.start_date = from.as_deref().map(parse_date).transpose()?;
            query.end_date = to.as_deref().map(parse_date).transpose()?;
            query.category_id = match category {
                Some(identifier) => Some(categories.resolve(&identifier)?.id),
                None => None,
            };
            query.sort_by = match sort {
                Some(s) => s.parse::<SortBy>()?,
                None => SortBy::default(),
            };
            query.sort_order = match order {
                Some(s) => s.parse::<SortOrder>()?,
                None => SortOrder::default(),
            };
            query.page = PageRequest::new(page, limit)?;

            let page = service.list(user.id, query)?;
            print!("{}", format_expense_page(&page, settings));
        }

        ExpenseCommands::Show { expense } => {
            let exp = service.resolve(user.id, &expense)?;
            let category_name = categories
                .get(exp.category_id)?
                .map(|c| c.localized_name(settings.locale).to_string())
                .unwrap_or_else(|| DELETED_CATEGORY_LABEL.to_string());

            print!("{}", format_expense_details(&exp, &category_name, settings));
        }

        ExpenseCommands::Edit {
            expense,
            amount,
            category,
            description,
            clear_description,
            date,
        } => {
            let exp = service.resolve(user.id, &expense)?;

            let patch = ExpensePatch {
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category_id: match category {
                    Some(identifier) => Some(categories.resolve(&identifier)?.id),
                    None => None,
                },
                description,
                clear_description,
                date: date.as_deref().map(parse_date).transpose()?,
            };

            let updated = service.update(user.id, exp.id, patch)?;
            println!(
                "Updated expense {} ({})",
                updated.id,
                updated.amount.format_with_symbol(&settings.currency_symbol)
            );
        }

        ExpenseCommands::Delete { expense } => {
            let exp = service.resolve(user.id, &expense)?;
            let deleted = service.delete(user.id, exp.id)?;
            println!(
                "Deleted expense {} ({})",
                deleted.id,
                deleted.amount.format_with_symbol(&settings.currency_symbol)
            );
        }
    }

    Ok(())
}
