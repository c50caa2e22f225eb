#![forbid(unsafe_code)]

use super::requests::{CreateGardenRequest, UpdateGardenRequest};
use super::types::GardenRow;
use super::{SqliteStore, StoreError, require_text};
use gl_core::ids::GardenId;
use rusqlite::{OptionalExtension, Row, params};

const SELECT: &str = "SELECT id, name, description, year, location, created_at FROM gardens";

impl SqliteStore {
    pub fn create_garden(&mut self, request: CreateGardenRequest) -> Result<GardenRow, StoreError> {
        let name = require_text(&request.name, "garden name must not be empty")?;
        self.conn.execute(
            "INSERT INTO gardens(name, description, year, location) VALUES (?1, ?2, ?3, ?4)",
            params![name, request.description, request.year, request.location],
        )?;
        self.garden_row(self.conn.last_insert_rowid())
    }

    pub fn list_gardens(&self) -> Result<Vec<GardenRow>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT} ORDER BY year DESC, name ASC"))?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(read_garden(row)?);
        }
        Ok(out)
    }

    pub fn garden(&self, id: GardenId) -> Result<GardenRow, StoreError> {
        self.garden_row(id.get())
    }

    pub fn update_garden(&mut self, request: UpdateGardenRequest) -> Result<GardenRow, StoreError> {
        let name = require_text(&request.name, "garden name must not be empty")?;
        let updated = self.conn.execute(
            "UPDATE gardens SET name = ?1, description = ?2, year = ?3, location = ?4 WHERE id = ?5",
            params![
                name,
                request.description,
                request.year,
                request.location,
                request.id.get(),
            ],
        )?;
        if updated == 0 {
            return Err(StoreError::UnknownId);
        }
        self.garden_row(request.id.get())
    }

    pub fn delete_garden(&mut self, id: GardenId) -> Result<(), StoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM gardens WHERE id = ?1", params![id.get()])?;
        if deleted == 0 {
            return Err(StoreError::UnknownId);
        }
        Ok(())
    }

    fn garden_row(&self, id: i64) -> Result<GardenRow, StoreError> {
        self.conn
            .query_row(&format!("{SELECT} WHERE id = ?1"), params![id], read_garden)
            .optional()?
            .ok_or(StoreError::UnknownId)
    }
}

fn read_garden(row: &Row<'_>) -> rusqlite::Result<GardenRow> {
    Ok(GardenRow {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        year: row.get(3)?,
        location: row.get(4)?,
        created_at: row.get(5)?,
    })
}
