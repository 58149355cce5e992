//! Development tasks for Quest Chronicles
//!
//! This binary provides save-file utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod dirs;

use anyhow::Result;
use clap::Parser;
use commands::{Check, Clean, List, Show};

/// Development tasks for Quest Chronicles
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Save-file tools for Quest Chronicles", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List saved characters
    List(List),

    /// Print one saved character
    Show(Show),

    /// Load and validate every save
    Check(Check),

    /// Delete save data
    Clean(Clean),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for SAVE_DATA_DIR and CONTENT_DATA_DIR)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List(cmd) => cmd.execute(),
        Command::Show(cmd) => cmd.execute(),
        Command::Check(cmd) => cmd.execute(),
        Command::Clean(cmd) => cmd.execute(),
    }
}
