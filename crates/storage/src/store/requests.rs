#![forbid(unsafe_code)]

use gl_core::ids::{GardenId, PlantId, PlantTypeId};
use gl_core::model::ActivityKind;

#[derive(Clone, Debug, PartialEq)]
pub struct CreateGardenRequest {
    pub name: String,
    pub description: Option<String>,
    pub year: Option<i64>,
    pub location: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateGardenRequest {
    pub id: GardenId,
    pub name: String,
    pub description: Option<String>,
    pub year: Option<i64>,
    pub location: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreatePlantTypeRequest {
    pub garden_id: GardenId,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdatePlantTypeRequest {
    pub id: PlantTypeId,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreateActivityRequest {
    pub garden_id: GardenId,
    pub kind: ActivityKind,
    pub activity_date: String,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateActivityRequest {
    pub id: i64,
    pub kind: ActivityKind,
    pub activity_date: String,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreateHarvestRequest {
    pub plant_type_id: PlantTypeId,
    pub quantity: f64,
    pub unit: String,
    pub harvest_date: String,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateHarvestRequest {
    pub id: i64,
    pub plant_type_id: PlantTypeId,
    pub quantity: f64,
    pub unit: String,
    pub harvest_date: String,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreatePlantRequest {
    pub plant_type_id: PlantTypeId,
    pub name: String,
    pub planted_date: Option<String>,
    pub location: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdatePlantRequest {
    pub id: PlantId,
    pub plant_type_id: PlantTypeId,
    pub name: String,
    pub planted_date: Option<String>,
    pub location: Option<String>,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AddJournalEntryRequest {
    pub plant_id: PlantId,
    pub entry_date: String,
    pub notes: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateJournalEntryRequest {
    pub id: i64,
    pub entry_date: String,
    pub notes: String,
}
