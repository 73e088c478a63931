//! # Stockroom CLI Entry Point
//!
//! Line-oriented text menu over the inventory store.
//!
//! ## Startup Sequence
//! 1. Parse command line arguments (`--db`, `--unsafe-sql`, `--help`)
//! 2. Initialize tracing (logging) once for the whole process
//! 3. Resolve the database path (env override, then platform data dir)
//! 4. Open the database & run migrations
//! 5. Run the menu loop until `quit`
//! 6. Close the database exactly once
//!
//! ## Usage
//! ```bash
//! # Default database location
//! cargo run -p stockroom-cli
//!
//! # Specific database file
//! cargo run -p stockroom-cli -- --db ./stockroom.db
//!
//! # Enable the raw SQL escape hatch (off by default)
//! cargo run -p stockroom-cli -- --unsafe-sql
//! ```

mod menu;

use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stockroom_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path: Option<PathBuf> = None;
    let mut unsafe_sql = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--unsafe-sql" => {
                unsafe_sql = true;
            }
            "--help" | "-h" => {
                println!("Stockroom Inventory Manager");
                println!();
                println!("Usage: stockroom [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path");
                println!("      --unsafe-sql   Enable the raw SQL menu command");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    init_tracing();

    let db_path = match db_path {
        Some(path) => path,
        None => default_database_path()?,
    };

    info!(path = %db_path.display(), unsafe_sql, "Starting Stockroom");

    let config = DbConfig::new(&db_path).allow_raw_sql(unsafe_sql);
    let db = Database::new(config).await?;

    println!("Welcome to the inventory management system");
    println!("Database: {}", db_path.display());
    if unsafe_sql {
        println!("WARNING: raw SQL execution is enabled for this session");
    }
    println!("Type 'help' for the command list.");
    println!();

    menu::run(&db).await?;

    db.close().await;
    info!("Shutdown complete");

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom=trace` - Show trace for stockroom crates only
/// - Default: INFO level
///
/// Logs go to stderr so the menu's stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockroom=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Determines the database file path.
///
/// ## Resolution Order
/// 1. `STOCKROOM_DB` environment variable
/// 2. Platform data directory, e.g. `~/.local/share/stockroom/stockroom.db`
fn default_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(path) = env::var("STOCKROOM_DB") {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("com", "stockroom", "stockroom")
        .ok_or("could not determine the data directory")?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("stockroom.db"))
}
