#![forbid(unsafe_code)]

use gl_core::ids::{GardenId, PlantTypeId};
use gl_storage::{
    CreateHarvestRequest, CreatePlantTypeRequest, SqliteStore, StoreError, UpdateHarvestRequest,
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

fn harvest(
    store: &mut SqliteStore,
    plant_type_id: PlantTypeId,
    quantity: f64,
    unit: &str,
    date: &str,
) -> i64 {
    store
        .record_harvest(CreateHarvestRequest {
            plant_type_id,
            quantity,
            unit: unit.to_string(),
            harvest_date: date.to_string(),
            notes: None,
        })
        .expect("record harvest")
        .id
}

#[test]
fn listing_groups_by_date_newest_first_and_by_plant_within_a_date() {
    let mut store = SqliteStore::open(temp_db("harvest_grouping")).expect("open store");
    let garden = GardenId::try_new(1).expect("default id");

    let tomato = plant_type(&mut store, garden, "Tomato");
    let basil = plant_type(&mut store, garden, "Basil");

    harvest(&mut store, tomato, 3.5, "lbs", "2024-08-02");
    harvest(&mut store, basil, 0.25, "lbs", "2024-08-02");
    harvest(&mut store, tomato, 1.0, "lbs", "2024-08-10");

    let days = store.list_harvests(garden).expect("list harvests");
    assert_eq!(days.len(), 2);

    assert_eq!(days[0].date, "2024-08-10");
    assert_eq!(days[0].entries.len(), 1);
    assert_eq!(days[0].entries[0].plant_name, "Tomato");

    assert_eq!(days[1].date, "2024-08-02");
    let names: Vec<&str> = days[1]
        .entries
        .iter()
        .map(|e| e.plant_name.as_str())
        .collect();
    assert_eq!(names, vec!["Basil", "Tomato"]);
}

#[test]
fn summary_totals_per_plant_and_unit() {
    let mut store = SqliteStore::open(temp_db("harvest_summary")).expect("open store");
    let garden = GardenId::try_new(1).expect("default id");

    let tomato = plant_type(&mut store, garden, "Tomato");
    let garlic = plant_type(&mut store, garden, "Garlic");

    harvest(&mut store, tomato, 3.5, "lbs", "2024-08-02");
    harvest(&mut store, tomato, 1.5, "lbs", "2024-08-10");
    harvest(&mut store, tomato, 4.0, "count", "2024-08-11");
    harvest(&mut store, garlic, 12.0, "count", "2024-07-20");

    let totals = store.harvest_summary(garden).expect("summary");
    let rows: Vec<(&str, &str, f64)> = totals
        .iter()
        .map(|t| (t.plant_name.as_str(), t.unit.as_str(), t.total_quantity))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Garlic", "count", 12.0),
            ("Tomato", "count", 4.0),
            ("Tomato", "lbs", 5.0),
        ]
    );
}

#[test]
fn listing_and_summary_are_garden_scoped() {
    let mut store = SqliteStore::open(temp_db("harvest_scoping")).expect("open store");
    let default_garden = GardenId::try_new(1).expect("default id");

    let other = store
        .create_garden(gl_storage::CreateGardenRequest {
            name: "Allotment".to_string(),
            description: None,
            year: Some(2024),
            location: None,
        })
        .expect("create garden");
    let other = GardenId::try_new(other.id).expect("garden id");

    let tomato = plant_type(&mut store, default_garden, "Tomato");
    let leek = plant_type(&mut store, other, "Leek");
    harvest(&mut store, tomato, 3.5, "lbs", "2024-08-02");
    harvest(&mut store, leek, 6.0, "count", "2024-08-02");

    let days = store.list_harvests(other).expect("list harvests");
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].entries[0].plant_name, "Leek");

    let totals = store.harvest_summary(default_garden).expect("summary");
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].plant_name, "Tomato");
}

#[test]
fn harvests_update_delete_and_reject_missing_parents() {
    let mut store = SqliteStore::open(temp_db("harvest_crud")).expect("open store");
    let garden = GardenId::try_new(1).expect("default id");
    let tomato = plant_type(&mut store, garden, "Tomato");

    let id = harvest(&mut store, tomato, 3.5, "lbs", "2024-08-02");

    let updated = store
        .update_harvest(UpdateHarvestRequest {
            id,
            plant_type_id: tomato,
            quantity: 4.0,
            unit: "lbs".to_string(),
            harvest_date: "2024-08-03".to_string(),
            notes: Some("second picking".to_string()),
        })
        .expect("update harvest");
    assert_eq!(updated.quantity, 4.0);
    assert_eq!(updated.harvest_date, "2024-08-03");

    let missing_type = PlantTypeId::try_new(404).expect("id value");
    let err = store
        .record_harvest(CreateHarvestRequest {
            plant_type_id: missing_type,
            quantity: 1.0,
            unit: "lbs".to_string(),
            harvest_date: "2024-08-04".to_string(),
            notes: None,
        })
        .expect_err("missing plant type");
    assert!(matches!(err, StoreError::UnknownId), "{err}");

    store.delete_harvest(id).expect("delete harvest");
    assert!(matches!(store.harvest(id), Err(StoreError::UnknownId)));
}

#[test]
fn blank_unit_or_date_is_invalid_input() {
    let mut store = SqliteStore::open(temp_db("harvest_blank")).expect("open store");
    let garden = GardenId::try_new(1).expect("default id");
    let tomato = plant_type(&mut store, garden, "Tomato");

    let err = store
        .record_harvest(CreateHarvestRequest {
            plant_type_id: tomato,
            quantity: 1.0,
            unit: " ".to_string(),
            harvest_date: "2024-08-02".to_string(),
            notes: None,
        })
        .expect_err("blank unit");
    assert!(matches!(err, StoreError::InvalidInput(_)));

    let err = store
        .record_harvest(CreateHarvestRequest {
            plant_type_id: tomato,
            quantity: 1.0,
            unit: "lbs".to_string(),
            harvest_date: "".to_string(),
            notes: None,
        })
        .expect_err("blank date");
    assert!(matches!(err, StoreError::InvalidInput(_)));
}
