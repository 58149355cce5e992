//! Load and validate every save.
//!
//! A save passes when it decodes, satisfies the character invariants, and
//! every item it holds or wears exists in the item catalog.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use chronicle_core::Character;
use chronicle_runtime::{CharacterRepository, FileCharacterRepository};

use crate::dirs;

/// Load and validate every save
#[derive(Parser)]
pub struct Check {
    /// Custom save directory (defaults to SAVE_DATA_DIR or the platform location)
    #[arg(short = 'd', long, value_name = "DIR")]
    save_dir: Option<PathBuf>,

    /// Skip the item catalog cross-check
    #[arg(long)]
    no_catalog: bool,
}

impl Check {
    pub fn execute(self) -> Result<()> {
        let repo = dirs::repository(self.save_dir);

        let catalog: Option<HashSet<String>> = if self.no_catalog {
            None
        } else {
            let content = dirs::content();
            let items = content.load_items().with_context(|| {
                format!("Failed to load catalog from {}", content.data_dir().display())
            })?;
            Some(items.into_iter().map(|item| item.name).collect())
        };

        let reports = check_saves(&repo, catalog.as_ref())?;
        if reports.is_empty() {
            println!("{}", style("No saved characters").dim());
            return Ok(());
        }

        let mut failures = 0;
        for report in &reports {
            if report.problems.is_empty() {
                println!("{} {}", style("✓").green(), report.name);
                continue;
            }
            failures += 1;
            println!("{} {}", style("✗").red().bold(), style(&report.name).bold());
            for problem in &report.problems {
                println!("    {}", style(problem).red());
            }
        }

        println!();
        if failures > 0 {
            anyhow::bail!("{failures} of {} save(s) failed", reports.len());
        }
        println!(
            "{}",
            style(format!("✓ All {} save(s) are valid", reports.len()))
                .green()
                .bold()
        );
        Ok(())
    }
}

struct SaveReport {
    name: String,
    problems: Vec<String>,
}

fn check_saves(
    repo: &FileCharacterRepository,
    catalog: Option<&HashSet<String>>,
) -> Result<Vec<SaveReport>> {
    let names = repo
        .list()
        .with_context(|| format!("Failed to list saves in {}", repo.base_dir().display()))?;

    Ok(names
        .into_iter()
        .map(|name| {
            let problems = match repo.load(&name) {
                Ok(character) => catalog
                    .map(|catalog| unknown_items(&character, catalog))
                    .unwrap_or_default(),
                Err(err) => vec![err.to_string()],
            };
            SaveReport { name, problems }
        })
        .collect())
}

fn unknown_items(character: &Character, catalog: &HashSet<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    character
        .inventory()
        .iter()
        .filter(|item| !catalog.contains(*item) && seen.insert(*item))
        .map(|item| format!("item {item:?} is not in the catalog"))
        .collect()
}
