use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use farm_ledger::cli::{
    handle_audit_command, handle_expense_command, handle_export_command, handle_sale_command,
    handle_stats_command,
};
use farm_ledger::config::{FarmPaths, Settings};
use farm_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "farm",
    version,
    about = "Track farm expenses and sales from the command line",
    long_about = "farm-ledger records what the farm spends and sells, per animal \
                  and product, and shows today's and this month's balance along \
                  with where most of the money goes."
)]
struct Cli {
    /// Increase log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory holding settings, records and the audit log
    #[arg(long, global = true, env = "FARM_LEDGER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(farm_ledger::cli::ExpenseCommands),

    /// Sale management commands
    #[command(subcommand)]
    Sale(farm_ledger::cli::SaleCommands),

    /// Show today's and this month's totals and the top groups
    #[command(alias = "dashboard")]
    Stats(farm_ledger::cli::StatsArgs),

    /// Export all records to a file
    Export(farm_ledger::cli::ExportArgs),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths, optionally changing settings
    Config {
        /// Currency symbol shown next to costs
        #[arg(long)]
        currency: Option<String>,

        /// Default number of groups in each top list
        #[arg(long)]
        top_n: Option<usize>,

        /// Turn the audit log on or off
        #[arg(long)]
        audit: Option<bool>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(level_for(cli.verbose));

    let paths = match cli.data_dir {
        Some(dir) => FarmPaths::with_base_dir(dir),
        None => FarmPaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;
    debug!(base = %paths.base_dir().display(), "paths resolved");

    let storage = Storage::open(&paths, &settings)?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Sale(cmd)) => {
            handle_sale_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Stats(args)) => {
            handle_stats_command(&storage, &settings, args)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, args)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&storage, limit)?;
        }
        Some(Commands::Config {
            currency,
            top_n,
            audit,
        }) => {
            let changed = currency.is_some() || top_n.is_some() || audit.is_some();
            if let Some(currency) = currency {
                settings.currency_symbol = currency;
            }
            if let Some(top_n) = top_n {
                settings.top_n = top_n;
            }
            if let Some(audit) = audit {
                settings.audit_enabled = audit;
            }
            if changed {
                settings.save(&paths)?;
                println!("Settings saved.");
                println!();
            }

            println!("farm-ledger Configuration");
            println!("=========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Top groups:      {}", settings.top_n);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!();
            println!(
                "Records: {} expenses, {} sales",
                storage.expense_count(),
                storage.sale_count()
            );
        }
        None => {
            println!("farm-ledger - farm expense and sales tracking");
            println!();
            println!("Run 'farm --help' for usage information.");
            println!("Run 'farm stats' to see today's and this month's balance.");
        }
    }

    Ok(())
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "{}={},{}={}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
            level,
            env!("CARGO_BIN_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
