//! shipyard CLI
//!
//! Stores ships and containers in a SQLite file. Every `add-*` call is one
//! all-or-nothing batch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "shipyard", version)]
#[command(about = "Validate and persist ships and containers in all-or-nothing batches", long_about = None)]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "SHIPYARD_DB", default_value = "shipyard.sqlite3")]
    db: PathBuf,

    /// Log level (trace|debug|info|warn|error); defaults by build mode
    #[arg(
        long,
        global = true,
        env = "SHIPYARD_LOG_LEVEL",
        value_parser = shipyard_core::normalize_log_level
    )]
    log_level: Option<&'static str>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, global = true, env = "SHIPYARD_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Persist ships given as NAME:TONNAGE
    AddShips(commands::ships::AddShipsArgs),
    /// List all persisted ships
    ListShips,
    /// Show one ship by id
    GetShip(commands::ships::GetShipArgs),
    /// Persist containers given as CONTENTS:WEIGHT
    AddContainers(commands::containers::AddContainersArgs),
    /// List all persisted containers
    ListContainers,
    /// Show one container by id
    GetContainer(commands::containers::GetContainerArgs),
    /// Walk through a committed batch and a rejected batch
    Demo,
}

fn main() {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.unwrap_or_else(shipyard_core::default_log_level);
        if let Err(err) = shipyard_core::init_logging(level, &log_dir.to_string_lossy()) {
            eprintln!("Error: {err}");
            std::process::exit(2);
        }
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> commands::CommandResult {
    let conn = shipyard_core::db::open_db(&cli.db)?;

    match cli.command {
        Commands::AddShips(args) => commands::ships::add(&conn, args),
        Commands::ListShips => commands::ships::list(&conn),
        Commands::GetShip(args) => commands::ships::get(&conn, args),
        Commands::AddContainers(args) => commands::containers::add(&conn, args),
        Commands::ListContainers => commands::containers::list(&conn),
        Commands::GetContainer(args) => commands::containers::get(&conn, args),
        Commands::Demo => commands::demo::execute(&conn),
    }
}
