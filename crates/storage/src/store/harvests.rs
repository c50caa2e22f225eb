#![forbid(unsafe_code)]

use super::requests::{CreateHarvestRequest, UpdateHarvestRequest};
use super::types::{HarvestDay, HarvestEntry, HarvestRow, HarvestTotal};
use super::{SqliteStore, StoreError, map_fk_violation, require_text};
use gl_core::ids::GardenId;
use rusqlite::{OptionalExtension, Row, params};

const SELECT: &str =
    "SELECT id, plant_type_id, quantity, unit, harvest_date, notes, created_at FROM harvests";

impl SqliteStore {
    pub fn record_harvest(
        &mut self,
        request: CreateHarvestRequest,
    ) -> Result<HarvestRow, StoreError> {
        let unit = require_text(&request.unit, "harvest unit must not be empty")?;
        let date = require_text(&request.harvest_date, "harvest date must not be empty")?;
        self.conn
            .execute(
                "INSERT INTO harvests(plant_type_id, quantity, unit, harvest_date, notes) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    request.plant_type_id.get(),
                    request.quantity,
                    unit,
                    date,
                    request.notes,
                ],
            )
            .map_err(map_fk_violation)?;
        self.harvest_row(self.conn.last_insert_rowid())
    }

    /// Harvests for one garden, grouped by harvest date (newest date first,
    /// plant name ascending within a date). Garden scoping flows through the
    /// owning plant type.
    pub fn list_harvests(&self, garden: GardenId) -> Result<Vec<HarvestDay>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT h.id, pt.name, h.quantity, h.unit, h.harvest_date, h.notes \
             FROM harvests h \
             JOIN plant_types pt ON pt.id = h.plant_type_id \
             WHERE pt.garden_id = ?1 \
             ORDER BY h.harvest_date DESC, pt.name ASC",
        )?;
        let mut rows = stmt.query(params![garden.get()])?;
        let mut days: Vec<HarvestDay> = Vec::new();
        while let Some(row) = rows.next()? {
            let date: String = row.get(4)?;
            let entry = HarvestEntry {
                id: row.get(0)?,
                plant_name: row.get(1)?,
                quantity: row.get(2)?,
                unit: row.get(3)?,
                notes: row.get(5)?,
            };
            match days.last_mut() {
                Some(day) if day.date == date => day.entries.push(entry),
                _ => days.push(HarvestDay {
                    date,
                    entries: vec![entry],
                }),
            }
        }
        Ok(days)
    }

    /// Production summary: total quantity per (plant type, unit) for one
    /// garden, ordered by plant name.
    pub fn harvest_summary(&self, garden: GardenId) -> Result<Vec<HarvestTotal>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT pt.name, h.unit, SUM(h.quantity) \
             FROM harvests h \
             JOIN plant_types pt ON pt.id = h.plant_type_id \
             WHERE pt.garden_id = ?1 \
             GROUP BY pt.name, h.unit \
             ORDER BY pt.name ASC, h.unit ASC",
        )?;
        let mut rows = stmt.query(params![garden.get()])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(HarvestTotal {
                plant_name: row.get(0)?,
                unit: row.get(1)?,
                total_quantity: row.get(2)?,
            });
        }
        Ok(out)
    }

    pub fn harvest(&self, id: i64) -> Result<HarvestRow, StoreError> {
        self.harvest_row(id)
    }

    pub fn update_harvest(
        &mut self,
        request: UpdateHarvestRequest,
    ) -> Result<HarvestRow, StoreError> {
        let unit = require_text(&request.unit, "harvest unit must not be empty")?;
        let date = require_text(&request.harvest_date, "harvest date must not be empty")?;
        let updated = self
            .conn
            .execute(
                "UPDATE harvests SET plant_type_id = ?1, quantity = ?2, unit = ?3, \
                 harvest_date = ?4, notes = ?5 WHERE id = ?6",
                params![
                    request.plant_type_id.get(),
                    request.quantity,
                    unit,
                    date,
                    request.notes,
                    request.id,
                ],
            )
            .map_err(map_fk_violation)?;
        if updated == 0 {
            return Err(StoreError::UnknownId);
        }
        self.harvest_row(request.id)
    }

    pub fn delete_harvest(&mut self, id: i64) -> Result<(), StoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM harvests WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(StoreError::UnknownId);
        }
        Ok(())
    }

    fn harvest_row(&self, id: i64) -> Result<HarvestRow, StoreError> {
        self.conn
            .query_row(&format!("{SELECT} WHERE id = ?1"), params![id], read_harvest)
            .optional()?
            .ok_or(StoreError::UnknownId)
    }
}

fn read_harvest(row: &Row<'_>) -> rusqlite::Result<HarvestRow> {
    Ok(HarvestRow {
        id: row.get(0)?,
        plant_type_id: row.get(1)?,
        quantity: row.get(2)?,
        unit: row.get(3)?,
        harvest_date: row.get(4)?,
        notes: row.get(5)?,
        created_at: row.get(6)?,
    })
}
