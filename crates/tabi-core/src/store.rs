//! Embedded key-value persistence for the trip document.
//!
//! One SQLite file holds one record: the whole [`TripDocument`] serialized
//! as JSON under a fixed key. Every save is a full overwrite of that record;
//! there is no partial update, no merge, and no cross-process coordination
//! (last writer wins).
//!
//! [`TripDocument`]: crate::models::TripDocument

use std::path::Path;

use rusqlite::Connection;

use crate::error::{Result, TripError};

pub mod schema;
pub mod trip_queries;

/// Storage engine handle for the single persisted trip document.
#[derive(Debug)]
pub struct Store {
    connection: Connection,
}

impl Store {
    /// Opens (or creates) the database file and initializes the schema.
    ///
    /// # Errors
    ///
    /// Returns [`TripError::StorageUnavailable`] when the file cannot be
    /// opened at all. Callers are expected to treat that case as "no
    /// existing document" and continue with seed content.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let unavailable = |e| TripError::StorageUnavailable {
            path: path.as_ref().to_path_buf(),
            source: e,
        };

        let connection = Connection::open(&path).map_err(unavailable)?;

        let store = Self { connection };
        store.initialize_schema().map_err(unavailable)?;
        Ok(store)
    }
}
