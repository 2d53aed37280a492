use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use expense_ledger::cli::{
    handle_add, handle_category_report, handle_clear, handle_delete, handle_list,
    handle_monthly_report, open_for_reset, DeleteCommands,
};
use expense_ledger::config::{LedgerPaths, Settings};
use expense_ledger::{Ledger, StandardCategory};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Record personal expenses and report totals by category and month",
    long_about = "expenses keeps a list of personal expenses in a JSON file and \
                  reports totals per category and per month."
)]
struct Cli {
    /// Data file to use instead of the configured one
    #[arg(short, long, global = true, env = "EXPENSES_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount (e.g. "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (Food, Travel, Bills, Entertainment, Shopping, Health, Miscellaneous)
        #[arg(short, long, default_value_t = StandardCategory::default())]
        category: StandardCategory,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List all expenses, oldest first
    #[command(alias = "ls")]
    List,

    /// Show totals per category
    #[command(alias = "categories")]
    Totals {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show totals per month
    Monthly {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete expenses matching a description, category or date
    #[command(subcommand, alias = "rm")]
    Delete(DeleteCommands),

    /// Delete every expense
    Clear,

    /// Write the ledger to its data file
    Save,

    /// Reload the ledger from its data file
    Load,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    expense_ledger::logging::init();

    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(file) = cli.file {
        settings.data_file = file;
    }

    let data_file = settings.data_file.clone();
    let open = || {
        Ledger::open(&data_file)
            .with_context(|| format!("Failed to load {}", data_file.display()))
    };

    match cli.command {
        Some(Commands::Add {
            description,
            amount,
            category,
            date,
        }) => {
            let mut ledger = open()?;
            handle_add(&mut ledger, &settings, description, amount, category, date)?;
        }
        Some(Commands::List) => handle_list(&open()?, &settings),
        Some(Commands::Totals { output }) => {
            handle_category_report(&open()?, &settings, output)?;
        }
        Some(Commands::Monthly { output }) => {
            handle_monthly_report(&open()?, &settings, output)?;
        }
        Some(Commands::Delete(cmd)) => {
            handle_delete(&mut open()?, &settings, cmd)?;
        }
        Some(Commands::Clear) => {
            let mut ledger = open_for_reset(&data_file)?;
            handle_clear(&mut ledger, &settings)?;
        }
        Some(Commands::Save) => {
            let ledger = open()?;
            ledger.save()?;
            println!("Data saved to {}", ledger.path().display());
        }
        Some(Commands::Load) => {
            let ledger = open()?;
            println!(
                "Data loaded from {} ({} expense(s))",
                ledger.path().display(),
                ledger.len()
            );
        }
        Some(Commands::Config) => {
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Data file:        {}", settings.data_file.display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Autosave:        {}", settings.autosave);
        }
        None => {
            println!("expenses - personal expense ledger");
            println!();
            println!("Run 'expenses --help' for usage information.");
        }
    }

    Ok(())
}
