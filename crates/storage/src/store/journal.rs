#![forbid(unsafe_code)]

use super::requests::{AddJournalEntryRequest, UpdateJournalEntryRequest};
use super::types::JournalEntryRow;
use super::{SqliteStore, StoreError, map_fk_violation, require_text};
use gl_core::ids::PlantId;
use rusqlite::{OptionalExtension, Row, params};

const SELECT: &str = "SELECT id, plant_id, entry_date, notes, created_at FROM plant_journals";

impl SqliteStore {
    pub fn add_journal_entry(
        &mut self,
        request: AddJournalEntryRequest,
    ) -> Result<JournalEntryRow, StoreError> {
        let date = require_text(&request.entry_date, "journal entry date must not be empty")?;
        let notes = require_text(&request.notes, "journal notes must not be empty")?;
        self.conn
            .execute(
                "INSERT INTO plant_journals(plant_id, entry_date, notes) VALUES (?1, ?2, ?3)",
                params![request.plant_id.get(), date, notes],
            )
            .map_err(map_fk_violation)?;
        self.journal_row(self.conn.last_insert_rowid())
    }

    pub fn journal_entries(&self, plant: PlantId) -> Result<Vec<JournalEntryRow>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "{SELECT} WHERE plant_id = ?1 ORDER BY entry_date DESC"
        ))?;
        let mut rows = stmt.query(params![plant.get()])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(read_entry(row)?);
        }
        Ok(out)
    }

    pub fn journal_entry(&self, id: i64) -> Result<JournalEntryRow, StoreError> {
        self.journal_row(id)
    }

    pub fn update_journal_entry(
        &mut self,
        request: UpdateJournalEntryRequest,
    ) -> Result<JournalEntryRow, StoreError> {
        let date = require_text(&request.entry_date, "journal entry date must not be empty")?;
        let notes = require_text(&request.notes, "journal notes must not be empty")?;
        let updated = self.conn.execute(
            "UPDATE plant_journals SET entry_date = ?1, notes = ?2 WHERE id = ?3",
            params![date, notes, request.id],
        )?;
        if updated == 0 {
            return Err(StoreError::UnknownId);
        }
        self.journal_row(request.id)
    }

    pub fn delete_journal_entry(&mut self, id: i64) -> Result<(), StoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM plant_journals WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(StoreError::UnknownId);
        }
        Ok(())
    }

    fn journal_row(&self, id: i64) -> Result<JournalEntryRow, StoreError> {
        self.conn
            .query_row(&format!("{SELECT} WHERE id = ?1"), params![id], read_entry)
            .optional()?
            .ok_or(StoreError::UnknownId)
    }
}

fn read_entry(row: &Row<'_>) -> rusqlite::Result<JournalEntryRow> {
    Ok(JournalEntryRow {
        id: row.get(0)?,
        plant_id: row.get(1)?,
        entry_date: row.get(2)?,
        notes: row.get(3)?,
        created_at: row.get(4)?,
    })
}
