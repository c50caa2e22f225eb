#![forbid(unsafe_code)]

use gl_core::model::ActivityKind;

#[derive(Clone, Debug, PartialEq)]
pub struct GardenRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub year: Option<i64>,
    pub location: Option<String>,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlantTypeRow {
    pub id: i64,
    pub garden_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActivityRow {
    pub id: i64,
    pub garden_id: i64,
    pub kind: ActivityKind,
    pub activity_date: String,
    pub notes: Option<String>,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HarvestRow {
    pub id: i64,
    pub plant_type_id: i64,
    pub quantity: f64,
    pub unit: String,
    pub harvest_date: String,
    pub notes: Option<String>,
    pub created_at: String,
}

/// One line of the grouped harvest listing (plant name joined in).
#[derive(Clone, Debug, PartialEq)]
pub struct HarvestEntry {
    pub id: i64,
    pub plant_name: String,
    pub quantity: f64,
    pub unit: String,
    pub notes: Option<String>,
}

/// Harvests for one calendar date, newest date first in the listing.
#[derive(Clone, Debug, PartialEq)]
pub struct HarvestDay {
    pub date: String,
    pub entries: Vec<HarvestEntry>,
}

/// Production summary bucket: total quantity per (plant type, unit).
#[derive(Clone, Debug, PartialEq)]
pub struct HarvestTotal {
    pub plant_name: String,
    pub unit: String,
    pub total_quantity: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlantRow {
    pub id: i64,
    pub plant_type_id: i64,
    pub name: String,
    pub planted_date: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub created_at: String,
}

/// Garden-wide plant listing with the type name joined in.
#[derive(Clone, Debug, PartialEq)]
pub struct PlantListRow {
    pub id: i64,
    pub plant_type_name: String,
    pub name: String,
    pub planted_date: Option<String>,
    pub location: Option<String>,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct JournalEntryRow {
    pub id: i64,
    pub plant_id: i64,
    pub entry_date: String,
    pub notes: String,
    pub created_at: String,
}
