#![forbid(unsafe_code)]

use super::requests::{CreateActivityRequest, UpdateActivityRequest};
use super::types::ActivityRow;
use super::{SqliteStore, StoreError, map_fk_violation, require_text};
use gl_core::ids::GardenId;
use gl_core::model::ActivityKind;
use rusqlite::{Row, params};

const SELECT: &str =
    "SELECT id, garden_id, activity_type, activity_date, notes, created_at FROM garden_activities";

impl SqliteStore {
    pub fn record_activity(
        &mut self,
        request: CreateActivityRequest,
    ) -> Result<ActivityRow, StoreError> {
        let date = require_text(&request.activity_date, "activity date must not be empty")?;
        self.conn
            .execute(
                "INSERT INTO garden_activities(garden_id, activity_type, activity_date, notes) \
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    request.garden_id.get(),
                    request.kind.as_str(),
                    date,
                    request.notes,
                ],
            )
            .map_err(map_fk_violation)?;
        self.activity_row(self.conn.last_insert_rowid())
    }

    pub fn list_activities(&self, garden: GardenId) -> Result<Vec<ActivityRow>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "{SELECT} WHERE garden_id = ?1 ORDER BY activity_date DESC"
        ))?;
        let mut rows = stmt.query(params![garden.get()])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(read_activity(row)?);
        }
        Ok(out)
    }

    pub fn activity(&self, id: i64) -> Result<ActivityRow, StoreError> {
        self.activity_row(id)
    }

    pub fn update_activity(
        &mut self,
        request: UpdateActivityRequest,
    ) -> Result<ActivityRow, StoreError> {
        let date = require_text(&request.activity_date, "activity date must not be empty")?;
        let updated = self.conn.execute(
            "UPDATE garden_activities SET activity_type = ?1, activity_date = ?2, notes = ?3 \
             WHERE id = ?4",
            params![request.kind.as_str(), date, request.notes, request.id],
        )?;
        if updated == 0 {
            return Err(StoreError::UnknownId);
        }
        self.activity_row(request.id)
    }

    pub fn delete_activity(&mut self, id: i64) -> Result<(), StoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM garden_activities WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(StoreError::UnknownId);
        }
        Ok(())
    }

    fn activity_row(&self, id: i64) -> Result<ActivityRow, StoreError> {
        let mut stmt = self.conn.prepare(&format!("{SELECT} WHERE id = ?1"))?;
        let mut rows = stmt.query(params![id])?;
        let Some(row) = rows.next()? else {
            return Err(StoreError::UnknownId);
        };
        read_activity(row)
    }
}

fn read_activity(row: &Row<'_>) -> Result<ActivityRow, StoreError> {
    let kind_raw: String = row.get(2)?;
    let kind = ActivityKind::parse(&kind_raw)
        .map_err(|_| StoreError::InvalidInput("activity row outside enumeration"))?;
    Ok(ActivityRow {
        id: row.get(0)?,
        garden_id: row.get(1)?,
        kind,
        activity_date: row.get(3)?,
        notes: row.get(4)?,
        created_at: row.get(5)?,
    })
}
