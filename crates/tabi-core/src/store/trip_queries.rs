//! Load/save queries for the single trip record.

use rusqlite::{params, OptionalExtension};

use crate::{
    error::{Result, StorageResultExt},
    models::TripDocument,
};

/// Fixed key under which the one trip document lives.
const TRIP_KEY: &str = "current_trip";

const SELECT_TRIP_SQL: &str = "SELECT value FROM trip_store WHERE key = ?1";
const UPSERT_TRIP_SQL: &str = "INSERT OR REPLACE INTO trip_store (key, value) VALUES (?1, ?2)";

impl super::Store {
    /// Reads the persisted trip document, or `None` on first run.
    pub fn load_trip(&self) -> Result<Option<TripDocument>> {
        let value: Option<String> = self
            .connection
            .query_row(SELECT_TRIP_SQL, params![TRIP_KEY], |row| row.get(0))
            .optional()
            .storage_context("Failed to read trip document")?;

        match value {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Replaces the persisted record with `document` in its entirety.
    ///
    /// The caller is responsible for always passing a complete,
    /// self-consistent document; nothing is merged.
    pub fn save_trip(&self, document: &TripDocument) -> Result<()> {
        let json = serde_json::to_string(document)?;
        self.connection
            .execute(UPSERT_TRIP_SQL, params![TRIP_KEY, json])
            .storage_context("Failed to write trip document")?;
        Ok(())
    }
}
