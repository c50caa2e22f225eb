#![forbid(unsafe_code)]

use gl_core::ids::{GardenId, PlantId, PlantTypeId};
use gl_storage::{
    AddJournalEntryRequest, CreatePlantRequest, CreatePlantTypeRequest, SqliteStore, StoreError,
    UpdateJournalEntryRequest, UpdatePlantRequest,
};
use std::path::PathBuf;

fn temp_db(test_name: &str) -> PathBuf {
    let base = std::env::temp_dir();
    let pid = std::process::id();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let dir = base.join(format!("gl_storage_{test_name}_{pid}_{nonce}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir.join("garden.db")
}

fn plant_type(store: &mut SqliteStore, garden: GardenId, name: &str) -> PlantTypeId {
    let row = store
        .create_plant_type(CreatePlantTypeRequest {
            garden_id: garden,
            name: name.to_string(),
            description: None,
        })
        .expect("create plant type");
    PlantTypeId::try_new(row.id).expect("plant type id")
}

#[test]
fn new_plants_start_active_and_list_by_name_with_their_type() {
    let mut store = SqliteStore::open(temp_db("plant_listing")).expect("open store");
    let garden = GardenId::try_new(1).expect("default id");
    let tomato = plant_type(&mut store, garden, "Tomato");
    let basil = plant_type(&mut store, garden, "Basil");

    let zeke = store
        .create_plant(CreatePlantRequest {
            plant_type_id: tomato,
            name: "Zeke".to_string(),
            planted_date: Some("2024-05-01".to_string()),
            location: Some("bed 1".to_string()),
        })
        .expect("create plant");
    assert_eq!(zeke.status, "active");

    store
        .create_plant(CreatePlantRequest {
            plant_type_id: basil,
            name: "Asher".to_string(),
            planted_date: None,
            location: None,
        })
        .expect("create plant");

    let listed = store.list_plants(garden).expect("list plants");
    let pairs: Vec<(&str, &str)> = listed
        .iter()
        .map(|p| (p.name.as_str(), p.plant_type_name.as_str()))
        .collect();
    assert_eq!(pairs, vec![("Asher", "Basil"), ("Zeke", "Tomato")]);
}

#[test]
fn plant_update_can_retire_a_plant() {
    let mut store = SqliteStore::open(temp_db("plant_update")).expect("open store");
    let garden = GardenId::try_new(1).expect("default id");
    let tomato = plant_type(&mut store, garden, "Tomato");

    let created = store
        .create_plant(CreatePlantRequest {
            plant_type_id: tomato,
            name: "Early Girl".to_string(),
            planted_date: Some("2024-05-01".to_string()),
            location: None,
        })
        .expect("create plant");
    let id = PlantId::try_new(created.id).expect("plant id");

    let updated = store
        .update_plant(UpdatePlantRequest {
            id,
            plant_type_id: tomato,
            name: "Early Girl".to_string(),
            planted_date: Some("2024-05-01".to_string()),
            location: Some("bed 3".to_string()),
            status: "removed".to_string(),
        })
        .expect("update plant");
    assert_eq!(updated.status, "removed");
    assert_eq!(updated.location.as_deref(), Some("bed 3"));

    let err = store
        .update_plant(UpdatePlantRequest {
            id,
            plant_type_id: tomato,
            name: "Early Girl".to_string(),
            planted_date: None,
            location: None,
            status: "  ".to_string(),
        })
        .expect_err("blank status");
    assert!(matches!(err, StoreError::InvalidInput(_)));
}

#[test]
fn journal_entries_list_newest_first_for_one_plant() {
    let mut store = SqliteStore::open(temp_db("journal_listing")).expect("open store");
    let garden = GardenId::try_new(1).expect("default id");
    let tomato = plant_type(&mut store, garden, "Tomato");

    let created = store
        .create_plant(CreatePlantRequest {
            plant_type_id: tomato,
            name: "Early Girl".to_string(),
            planted_date: None,
            location: None,
        })
        .expect("create plant");
    let plant = PlantId::try_new(created.id).expect("plant id");

    for (date, notes) in [
        ("2024-06-01", "transplanted"),
        ("2024-07-04", "first flowers"),
        ("2024-06-15", "mulched"),
    ] {
        store
            .add_journal_entry(AddJournalEntryRequest {
                plant_id: plant,
                entry_date: date.to_string(),
                notes: notes.to_string(),
            })
            .expect("add entry");
    }

    let entries = store.journal_entries(plant).expect("list entries");
    let dates: Vec<&str> = entries.iter().map(|e| e.entry_date.as_str()).collect();
    assert_eq!(dates, vec!["2024-07-04", "2024-06-15", "2024-06-01"]);
}

#[test]
fn journal_entries_require_notes_and_an_existing_plant() {
    let mut store = SqliteStore::open(temp_db("journal_validation")).expect("open store");
    let garden = GardenId::try_new(1).expect("default id");
    let tomato = plant_type(&mut store, garden, "Tomato");

    let created = store
        .create_plant(CreatePlantRequest {
            plant_type_id: tomato,
            name: "Early Girl".to_string(),
            planted_date: None,
            location: None,
        })
        .expect("create plant");
    let plant = PlantId::try_new(created.id).expect("plant id");

    let err = store
        .add_journal_entry(AddJournalEntryRequest {
            plant_id: plant,
            entry_date: "2024-06-01".to_string(),
            notes: "   ".to_string(),
        })
        .expect_err("blank notes");
    assert!(matches!(err, StoreError::InvalidInput(_)));

    let missing = PlantId::try_new(500).expect("id value");
    let err = store
        .add_journal_entry(AddJournalEntryRequest {
            plant_id: missing,
            entry_date: "2024-06-01".to_string(),
            notes: "ghost plant".to_string(),
        })
        .expect_err("missing plant");
    assert!(matches!(err, StoreError::UnknownId), "{err}");

    let entry = store
        .add_journal_entry(AddJournalEntryRequest {
            plant_id: plant,
            entry_date: "2024-06-01".to_string(),
            notes: "transplanted".to_string(),
        })
        .expect("add entry");
    let updated = store
        .update_journal_entry(UpdateJournalEntryRequest {
            id: entry.id,
            entry_date: "2024-06-02".to_string(),
            notes: "transplanted to bed 2".to_string(),
        })
        .expect("update entry");
    assert_eq!(updated.entry_date, "2024-06-02");

    store
        .delete_journal_entry(entry.id)
        .expect("delete entry");
    assert!(matches!(
        store.journal_entry(entry.id),
        Err(StoreError::UnknownId)
    ));
}
