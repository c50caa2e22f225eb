#![forbid(unsafe_code)]

use super::requests::{CreatePlantRequest, UpdatePlantRequest};
use super::types::{PlantListRow, PlantRow};
use super::{SqliteStore, StoreError, map_fk_violation, require_text};
use gl_core::ids::{GardenId, PlantId};
use gl_core::model::DEFAULT_PLANT_STATUS;
use rusqlite::{OptionalExtension, Row, params};

const SELECT: &str =
    "SELECT id, plant_type_id, name, planted_date, location, status, created_at FROM plants";

impl SqliteStore {
    pub fn create_plant(&mut self, request: CreatePlantRequest) -> Result<PlantRow, StoreError> {
        let name = require_text(&request.name, "plant name must not be empty")?;
        self.conn
            .execute(
                "INSERT INTO plants(plant_type_id, name, planted_date, location, status) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    request.plant_type_id.get(),
                    name,
                    request.planted_date,
                    request.location,
                    DEFAULT_PLANT_STATUS,
                ],
            )
            .map_err(map_fk_violation)?;
        self.plant_row(self.conn.last_insert_rowid())
    }

    /// Plants across one garden, joined with their type name. Garden scoping
    /// flows through the owning plant type.
    pub fn list_plants(&self, garden: GardenId) -> Result<Vec<PlantListRow>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT p.id, pt.name, p.name, p.planted_date, p.location, p.status \
             FROM plants p \
             JOIN plant_types pt ON pt.id = p.plant_type_id \
             WHERE pt.garden_id = ?1 \
             ORDER BY p.name ASC",
        )?;
        let mut rows = stmt.query(params![garden.get()])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(PlantListRow {
                id: row.get(0)?,
                plant_type_name: row.get(1)?,
                name: row.get(2)?,
                planted_date: row.get(3)?,
                location: row.get(4)?,
                status: row.get(5)?,
            });
        }
        Ok(out)
    }

    pub fn plant(&self, id: PlantId) -> Result<PlantRow, StoreError> {
        self.plant_row(id.get())
    }

    pub fn update_plant(&mut self, request: UpdatePlantRequest) -> Result<PlantRow, StoreError> {
        let name = require_text(&request.name, "plant name must not be empty")?;
        let status = require_text(&request.status, "plant status must not be empty")?;
        let updated = self
            .conn
            .execute(
                "UPDATE plants SET plant_type_id = ?1, name = ?2, planted_date = ?3, \
                 location = ?4, status = ?5 WHERE id = ?6",
                params![
                    request.plant_type_id.get(),
                    name,
                    request.planted_date,
                    request.location,
                    status,
                    request.id.get(),
                ],
            )
            .map_err(map_fk_violation)?;
        if updated == 0 {
            return Err(StoreError::UnknownId);
        }
        self.plant_row(request.id.get())
    }

    pub fn delete_plant(&mut self, id: PlantId) -> Result<(), StoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM plants WHERE id = ?1", params![id.get()])?;
        if deleted == 0 {
            return Err(StoreError::UnknownId);
        }
        Ok(())
    }

    fn plant_row(&self, id: i64) -> Result<PlantRow, StoreError> {
        self.conn
            .query_row(&format!("{SELECT} WHERE id = ?1"), params![id], read_plant)
            .optional()?
            .ok_or(StoreError::UnknownId)
    }
}

fn read_plant(row: &Row<'_>) -> rusqlite::Result<PlantRow> {
    Ok(PlantRow {
        id: row.get(0)?,
        plant_type_id: row.get(1)?,
        name: row.get(2)?,
        planted_date: row.get(3)?,
        location: row.get(4)?,
        status: row.get(5)?,
        created_at: row.get(6)?,
    })
}
