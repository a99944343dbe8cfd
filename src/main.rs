use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

use fintrack::config::{paths::FintrackPaths, settings::Settings};
use fintrack::menu::Menu;
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "fintrack is a terminal-based personal finance tracker. It records \
                  income and categorized expenses per profile, keeps everything in \
                  plain CSV files, and produces filtered expense reports with \
                  budget feedback."
)]
struct Cli {
    /// Override the data directory
    #[arg(long, env = "FINTRACK_DATA_DIR", value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Log debug detail to the log file
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => FintrackPaths::with_base_dir(dir),
        None => FintrackPaths::new()?,
    };
    paths.ensure_directories()?;

    // The guard flushes buffered log lines when main returns
    let _guard = init_logging(&paths, cli.verbose)?;

    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
        None => {
            Menu::new(&storage, &settings).run()?;
        }
    }

    Ok(())
}

/// Route log lines to `app.log` in the base directory
///
/// The terminal stays reserved for menu output, so nothing is written
/// to stdout or stderr here.
fn init_logging(paths: &FintrackPaths, verbose: bool) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(paths.base_dir(), "app.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    Ok(guard)
}
