//! Print one saved character.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use chronicle_core::{Character, EquipSlot, Inventory, validate_name};
use chronicle_runtime::CharacterRepository;

use crate::dirs;

/// Print one saved character
#[derive(Parser)]
pub struct Show {
    /// Character name
    #[arg(value_name = "NAME")]
    name: String,

    /// Custom save directory (defaults to SAVE_DATA_DIR or the platform location)
    #[arg(short = 'd', long, value_name = "DIR")]
    save_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Stats, inventory and quests
    Summary,
    /// Full JSON record
    Json,
    /// Save file as stored, without validation
    Raw,
}

impl Show {
    pub fn execute(self) -> Result<()> {
        validate_name(&self.name)
            .with_context(|| format!("{:?} cannot name a save", self.name))?;
        let repo = dirs::repository(self.save_dir);

        if let OutputFormat::Raw = self.format {
            let path = repo.save_path(&self.name);
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read save file: {}", path.display()))?;
            print!("{text}");
            return Ok(());
        }

        let character = repo
            .load(&self.name)
            .with_context(|| format!("Failed to load character {:?}", self.name))?;

        match self.format {
            OutputFormat::Summary => print_summary(&character),
            OutputFormat::Json => print_json(&character)?,
            OutputFormat::Raw => {}
        }

        Ok(())
    }
}

fn print_summary(character: &Character) {
    println!(
        "{}",
        style(format!("=== {} the {} ===", character.name(), character.class()))
            .bold()
            .green()
    );
    println!();

    println!("{}", style("Progress:").bold().yellow());
    println!("  Level: {}", character.level());
    println!(
        "  Experience: {} ({} to next level)",
        character.experience(),
        character.experience_to_next_level()
    );
    println!("  Gold: {}", character.gold());
    println!();

    println!("{}", style("Stats:").bold().yellow());
    println!(
        "  Health: {}/{}{}",
        character.health(),
        character.max_health(),
        if character.is_dead() { " (dead)" } else { "" }
    );
    println!(
        "  Strength: {} (base {})",
        character.effective_strength(),
        character.strength()
    );
    println!("  Magic: {}", character.magic());
    println!(
        "  Defense: {} (base {})",
        character.effective_defense(),
        character.defense()
    );
    println!();

    println!("{}", style("Equipment:").bold().yellow());
    for slot in [EquipSlot::Weapon, EquipSlot::Armor] {
        match character.equipped(slot) {
            Some(item) => match item.bonus {
                Some(bonus) => println!("  {slot}: {} ({bonus})", item.name),
                None => println!("  {slot}: {}", item.name),
            },
            None => println!("  {slot}: -"),
        }
    }
    println!();

    println!(
        "{} {}/{}",
        style("Inventory:").bold().yellow(),
        character.inventory().len(),
        Inventory::CAPACITY
    );
    for item in character.inventory().iter() {
        println!("  {} {}", style("→").cyan(), item);
    }
    println!();

    println!("{}", style("Quests:").bold().yellow());
    println!("  Active: {}", character.active_quests().join(", "));
    println!("  Completed: {}", character.completed_quests().join(", "));
}

fn print_json(character: &Character) -> Result<()> {
    let json = serde_json::to_string_pretty(&character.to_record())
        .context("Failed to serialize character to JSON")?;
    println!("{}", json);
    Ok(())
}
