#![forbid(unsafe_code)]

use super::requests::{CreatePlantTypeRequest, UpdatePlantTypeRequest};
use super::types::PlantTypeRow;
use super::{SqliteStore, StoreError, map_fk_violation, require_text};
use gl_core::ids::{GardenId, PlantTypeId};
use rusqlite::{OptionalExtension, Row, params};

const SELECT: &str = "SELECT id, garden_id, name, description, created_at FROM plant_types";

impl SqliteStore {
    pub fn create_plant_type(
        &mut self,
        request: CreatePlantTypeRequest,
    ) -> Result<PlantTypeRow, StoreError> {
        let name = require_text(&request.name, "plant type name must not be empty")?;
        self.conn
            .execute(
                "INSERT INTO plant_types(garden_id, name, description) VALUES (?1, ?2, ?3)",
                params![request.garden_id.get(), name, request.description],
            )
            .map_err(map_fk_violation)?;
        self.plant_type_row(self.conn.last_insert_rowid())
    }

    pub fn list_plant_types(&self, garden: GardenId) -> Result<Vec<PlantTypeRow>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT} WHERE garden_id = ?1 ORDER BY name ASC"))?;
        let mut rows = stmt.query(params![garden.get()])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(read_plant_type(row)?);
        }
        Ok(out)
    }

    pub fn plant_type(&self, id: PlantTypeId) -> Result<PlantTypeRow, StoreError> {
        self.plant_type_row(id.get())
    }

    pub fn update_plant_type(
        &mut self,
        request: UpdatePlantTypeRequest,
    ) -> Result<PlantTypeRow, StoreError> {
        let name = require_text(&request.name, "plant type name must not be empty")?;
        let updated = self.conn.execute(
            "UPDATE plant_types SET name = ?1, description = ?2 WHERE id = ?3",
            params![name, request.description, request.id.get()],
        )?;
        if updated == 0 {
            return Err(StoreError::UnknownId);
        }
        self.plant_type_row(request.id.get())
    }

    pub fn delete_plant_type(&mut self, id: PlantTypeId) -> Result<(), StoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM plant_types WHERE id = ?1", params![id.get()])?;
        if deleted == 0 {
            return Err(StoreError::UnknownId);
        }
        Ok(())
    }

    fn plant_type_row(&self, id: i64) -> Result<PlantTypeRow, StoreError> {
        self.conn
            .query_row(
                &format!("{SELECT} WHERE id = ?1"),
                params![id],
                read_plant_type,
            )
            .optional()?
            .ok_or(StoreError::UnknownId)
    }
}

fn read_plant_type(row: &Row<'_>) -> rusqlite::Result<PlantTypeRow> {
    Ok(PlantTypeRow {
        id: row.get(0)?,
        garden_id: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        created_at: row.get(4)?,
    })
}
