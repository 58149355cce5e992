//! List saved characters.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use chronicle_runtime::CharacterRepository;

use crate::dirs;

/// List saved characters
#[derive(Parser)]
pub struct List {
    /// Custom save directory (defaults to SAVE_DATA_DIR or the platform location)
    #[arg(short = 'd', long, value_name = "DIR")]
    save_dir: Option<PathBuf>,
}

impl List {
    pub fn execute(self) -> Result<()> {
        let repo = dirs::repository(self.save_dir);
        let names = repo
            .list()
            .with_context(|| format!("Failed to list saves in {}", repo.base_dir().display()))?;

        println!(
            "{} {}",
            style("Save Directory:").bold().cyan(),
            repo.base_dir().display()
        );
        println!();

        if names.is_empty() {
            println!("{}", style("No saved characters").dim());
            return Ok(());
        }

        for name in &names {
            match repo.load(name) {
                Ok(character) => println!(
                    "  {} {} - level {} {}, {}/{} HP, {} gold",
                    style("•").cyan(),
                    style(name).bold(),
                    character.level(),
                    character.class(),
                    character.health(),
                    character.max_health(),
                    character.gold()
                ),
                Err(err) => println!(
                    "  {} {} - {}",
                    style("✗").red().bold(),
                    style(name).bold(),
                    style(err).red()
                ),
            }
        }

        println!();
        println!("{} character(s)", names.len());
        Ok(())
    }
}
