use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use monity::cli::{
    handle_audit_command, handle_category_command, handle_config_command, handle_dashboard,
    handle_expense_command, handle_export_command, handle_login, handle_logout, handle_passwd,
    handle_register, handle_summary, handle_trends, handle_whoami, CategoryCommands,
    ConfigCommands, ExpenseCommands, ExportFormat,
};
use monity::config::{paths::MonityPaths, settings::Settings};
use monity::error::MonityResult;
use monity::storage::Storage;

#[derive(Parser)]
#[command(
    name = "monity",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Monity tracks what you spend from the command line: record \
                  expenses against categories, then read period summaries, \
                  daily trends, and a dashboard. Data stays in local JSON \
                  files; nothing leaves your machine."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory and seed default categories
    Init,

    /// Create an account and log in
    Register {
        /// Email address
        email: String,
        /// Full name
        #[arg(short, long)]
        name: String,
        /// Password (prompted when omitted)
        #[arg(long, env = "MONITY_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Log in with email and password
    Login {
        /// Email address
        email: String,
        /// Password (prompted when omitted)
        #[arg(long, env = "MONITY_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// End the current session
    Logout,

    /// Show who is logged in
    Whoami,

    /// Change the password of the logged-in user
    Passwd {
        /// Current password (prompted when omitted)
        #[arg(long, env = "MONITY_OLD_PASSWORD", hide_env_values = true)]
        current: Option<String>,
        /// New password (prompted when omitted)
        #[arg(long, env = "MONITY_PASSWORD", hide_env_values = true)]
        new: Option<String>,
    },

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Spending summary with per-category shares
    Summary {
        /// Period: day, week, month, or year
        #[arg(short, long)]
        period: Option<String>,
        /// Window start, overrides the period's own
        #[arg(long)]
        from: Option<String>,
        /// Window end, overrides the period's own
        #[arg(long)]
        to: Option<String>,
    },

    /// Daily spending per category over a period
    Trends {
        /// Period: day, week, month, or year
        #[arg(short, long)]
        period: Option<String>,
        /// Window start, overrides the period's own
        #[arg(long)]
        from: Option<String>,
        /// Window end, overrides the period's own
        #[arg(long)]
        to: Option<String>,
    },

    /// Summary, comparison, and recent expenses in one view
    Dashboard {
        /// Period: day, week, month, or year
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Export your data to a file
    Export {
        /// Output file path
        output: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show recent changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show or change configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error[{}]: {}", err.code(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> MonityResult<()> {
    let paths = MonityPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Missing data files load as empty, so this is safe before `init` too
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Monity at: {}", paths.base_dir().display());
            monity::storage::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Six default categories are ready:");
            println!("  Jedzenie (Food), Transport, Rozrywka (Entertainment),");
            println!("  Mieszkanie (Housing), Zakupy (Shopping), Zdrowie (Health)");
            println!();
            println!("Run 'monity register <email> --name \"Your Name\"' to create an account.");
        }

        Some(Commands::Register {
            email,
            name,
            password,
        }) => handle_register(&storage, &settings, email, name, password)?,

        Some(Commands::Login { email, password }) => {
            handle_login(&storage, &settings, email, password)?
        }

        Some(Commands::Logout) => handle_logout(&storage, &settings)?,

        Some(Commands::Whoami) => handle_whoami(&storage, &settings)?,

        Some(Commands::Passwd { current, new }) => {
            handle_passwd(&storage, &settings, current, new)?
        }

        Some(Commands::Category(cmd)) => handle_category_command(&storage, &settings, cmd)?,

        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,

        Some(Commands::Summary { period, from, to }) => {
            handle_summary(&storage, &settings, period, from, to)?
        }

        Some(Commands::Trends { period, from, to }) => {
            handle_trends(&storage, &settings, period, from, to)?
        }

        Some(Commands::Dashboard { period }) => handle_dashboard(&storage, &settings, period)?,

        Some(Commands::Export {
            output,
            format,
            pretty,
        }) => handle_export_command(&storage, &settings, output, format, pretty)?,

        Some(Commands::Audit { limit }) => handle_audit_command(&storage, &settings, limit)?,

        Some(Commands::Config(cmd)) => handle_config_command(&paths, settings, cmd)?,

        None => {
            println!("Monity - terminal-based personal expense tracker");
            println!();
            if !paths.is_initialized() {
                println!("Run 'monity init' to get started.");
            }
            println!("Run 'monity --help' for usage information.");
            println!("Run 'monity dashboard' for an overview of your spending.");
        }
    }

    Ok(())
}
