//! Delete save data.
//!
//! Safety: prompts for confirmation unless `-y` is given.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use chronicle_runtime::CharacterRepository;

use crate::dirs;

/// Delete save data
#[derive(Parser, Debug)]
pub struct Clean {
    /// Delete only this character's save
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Custom save directory (defaults to SAVE_DATA_DIR or the platform location)
    #[arg(short = 'd', long, value_name = "DIR")]
    pub save_dir: Option<PathBuf>,

    /// Skip confirmation prompt (dangerous!)
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl Clean {
    pub fn execute(self) -> Result<()> {
        let repo = dirs::repository(self.save_dir.clone());

        let (label, path) = match &self.name {
            Some(name) => {
                if !repo.exists(name) {
                    anyhow::bail!("No saved character named {:?}", name);
                }
                (format!("Save for {name}"), repo.save_path(name))
            }
            None if repo.base_dir().exists() => {
                ("All save data".to_string(), repo.base_dir().to_path_buf())
            }
            None => {
                println!(
                    "{}",
                    style("Nothing to clean - save directory doesn't exist yet").dim()
                );
                return Ok(());
            }
        };

        println!("{}", style("Clean Quest Chronicles Data").yellow().bold());
        println!();
        println!("The following will be deleted:");
        println!("  {} {}", style("→").cyan(), style(&label).bold());
        println!("    {}", style(path.display()).dim());
        println!();

        if !self.yes && !confirm()? {
            println!("{}", style("Cancelled").dim());
            return Ok(());
        }

        print!("Deleting {}... ", label);
        io::stdout().flush()?;

        match &self.name {
            Some(name) => repo
                .delete(name)
                .with_context(|| format!("Failed to delete save for {name:?}"))?,
            None => std::fs::remove_dir_all(&path)
                .with_context(|| format!("Failed to delete: {}", path.display()))?,
        }

        println!("{}", style("✓").green());
        Ok(())
    }
}

/// Prompt user for confirmation
fn confirm() -> Result<bool> {
    print!("{} ", style("Proceed? [y/N]").yellow().bold());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}
