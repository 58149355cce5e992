//! End-to-end character lifecycle against the file repository and the
//! bundled item catalog.

use std::fs;

use chronicle_content::ContentFactory;
use chronicle_core::{CharacterError, EquipSlot, ItemEffect, StatKind};
use chronicle_runtime::{
    CharacterRepository, CharacterService, FileCharacterRepository, FormatError, ItemOracleImpl,
    RepositoryError, RuntimeError, StorageConfig,
};
use tempfile::TempDir;

type Service = CharacterService<FileCharacterRepository, ItemOracleImpl>;

fn service(dir: &TempDir) -> Service {
    let config = StorageConfig::new(dir.path().join("save_games"));
    let items = ContentFactory::new(ContentFactory::bundled_data_dir())
        .load_items()
        .expect("bundled catalog should load");
    CharacterService::new(
        FileCharacterRepository::from_config(&config),
        ItemOracleImpl::from_definitions(items),
    )
}

#[test]
fn aragon_dies_revives_and_levels_twice() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);

    // Creation
    let mut aragon = service.create("Aragon", "Warrior").expect("valid class");
    assert_eq!(aragon.health(), 120);
    assert_eq!(aragon.max_health(), 120);

    // Death gates progression and leaves the record untouched
    assert_eq!(aragon.take_damage(500), 120);
    assert!(aragon.is_dead());
    let before = aragon.clone();
    assert!(matches!(
        service.award_experience(&mut aragon, 250),
        Err(RuntimeError::Character(CharacterError::CharacterDead { .. }))
    ));
    assert_eq!(aragon, before);

    // Revival restores half of max health
    assert!(aragon.revive());
    assert_eq!(aragon.health(), 60);
    assert!(!aragon.revive());

    // 100 for level 2, 200 for level 3, 50 left over
    assert_eq!(service.award_experience(&mut aragon, 350).unwrap(), 2);
    assert_eq!(aragon.level(), 3);
    assert_eq!(aragon.experience(), 50);
    assert_eq!(aragon.max_health(), 140);
    assert_eq!(aragon.health(), aragon.max_health());

    // Survives a save/load cycle field by field
    service.save(&aragon).unwrap();
    assert_eq!(service.load("Aragon").unwrap(), aragon);
}

#[test]
fn shopping_trip_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);
    let mut lyra = service.create("Lyra", "mage").expect("class is case-insensitive");

    service.purchase(&mut lyra, "Health Potion").unwrap();
    service.purchase(&mut lyra, "Leather Armor").unwrap();
    assert_eq!(lyra.gold(), 100 - 25 - 35);

    service.equip(&mut lyra, "Leather Armor").unwrap();
    assert_eq!(lyra.effective_defense(), lyra.defense() + 3);

    lyra.take_damage(30);
    assert_eq!(
        service.use_item(&mut lyra, "Health Potion").unwrap(),
        Some(ItemEffect::new(StatKind::Health, 20))
    );
    assert_eq!(lyra.health(), lyra.max_health() - 10);
    assert!(!lyra.has_item("Health Potion"));

    lyra.active_quests_mut().push("rat_cellar".to_string());
    service.save(&lyra).unwrap();

    let restored = service.load("Lyra").unwrap();
    assert_eq!(restored, lyra);
    assert_eq!(
        restored.equipped(EquipSlot::Armor).map(|item| item.name.as_str()),
        Some("Leather Armor")
    );
    assert_eq!(restored.effective_defense(), lyra.effective_defense());
}

#[test]
fn twenty_first_item_is_refused() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);
    let mut hoarder = service.create("Hoarder", "Rogue").unwrap();

    for _ in 0..20 {
        hoarder.add_item("Stale Bread").unwrap();
    }
    assert!(matches!(
        service.purchase(&mut hoarder, "Stale Bread"),
        Err(RuntimeError::Character(CharacterError::InventoryFull {
            capacity: 20
        }))
    ));
    assert_eq!(hoarder.inventory().len(), 20);
    assert_eq!(hoarder.gold(), 100);
}

#[test]
fn list_and_delete() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);
    assert!(service.list().unwrap().is_empty());

    for (name, class) in [("Mira", "Cleric"), ("Brom", "Warrior")] {
        let character = service.create(name, class).unwrap();
        service.save(&character).unwrap();
    }
    assert_eq!(service.list().unwrap(), vec!["Brom", "Mira"]);

    service.delete("Mira").unwrap();
    assert_eq!(service.list().unwrap(), vec!["Brom"]);
    assert!(matches!(
        service.delete("Mira"),
        Err(RuntimeError::Repository(
            RepositoryError::CharacterNotFound { .. }
        ))
    ));
}

#[test]
fn damaged_saves_are_classified() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);
    let repo = service.repository();
    let brom = service.create("Brom", "Warrior").unwrap();
    service.save(&brom).unwrap();
    let path = repo.save_path("Brom");

    // Not text at all
    fs::write(&path, [0xff, 0xfe, 0x00, 0x9f]).unwrap();
    assert!(matches!(
        repo.load("Brom"),
        Err(RepositoryError::SaveCorrupted { .. })
    ));

    // Readable, missing a field
    service.save(&brom).unwrap();
    let original = fs::read_to_string(&path).unwrap();
    let without_gold: String = original
        .lines()
        .filter(|line| !line.starts_with("GOLD:"))
        .map(|line| format!("{line}\n"))
        .collect();
    fs::write(&path, without_gold).unwrap();
    assert!(matches!(
        repo.load("Brom"),
        Err(RepositoryError::InvalidSaveData {
            source: FormatError::MissingField("GOLD"),
            ..
        })
    ));

    // Readable, non-numeric
    fs::write(&path, original.replace("LEVEL: 1", "LEVEL: one")).unwrap();
    assert!(matches!(
        repo.load("Brom"),
        Err(RepositoryError::InvalidSaveData {
            source: FormatError::InvalidNumber { key: "LEVEL", .. },
            ..
        })
    ));

    // Readable, malformed line
    fs::write(&path, format!("{original}just some words\n")).unwrap();
    assert!(matches!(
        repo.load("Brom"),
        Err(RepositoryError::InvalidSaveData {
            source: FormatError::MalformedLine { .. },
            ..
        })
    ));

    // Saving again repairs the slot
    service.save(&brom).unwrap();
    assert_eq!(service.load("Brom").unwrap(), brom);
}
