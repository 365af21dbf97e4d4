//! High-level API for loading, mutating, and persisting the trip document.
//!
//! The [`Organizer`] is the async facade over the store: it holds the
//! database path and runs each load/save on a blocking task, which is the
//! only asynchronous boundary in the system. A [`TripSession`] wraps the
//! organizer together with the current in-memory document and applies the
//! optimistic-persistence policy: every mutation updates memory first and
//! commits as a whole-document overwrite, and a failed save is logged
//! rather than rolled back.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │  TripSession │───▶│  Organizer   │───▶│    Store     │
//! │ (in-memory   │    │ (async over  │    │ (SQLite KV,  │
//! │  document)   │    │  blocking)   │    │  one record) │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    error::{Result, TripError},
    models::TripDocument,
    store::Store,
};

pub mod builder;
pub mod session;

pub use builder::OrganizerBuilder;
pub use session::TripSession;

/// Async handle to the persisted trip document.
pub struct Organizer {
    pub(crate) db_path: PathBuf,
}

impl Organizer {
    /// Creates a new organizer with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Reads the persisted trip document, or `None` on first run.
    pub async fn load_trip(&self) -> Result<Option<TripDocument>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let store = Store::open(&db_path)?;
            store.load_trip()
        })
        .await
        .map_err(|e| TripError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Overwrites the persisted record with `document`.
    pub async fn save_trip(&self, document: &TripDocument) -> Result<()> {
        let db_path = self.db_path.clone();
        let document = document.clone();

        task::spawn_blocking(move || {
            let store = Store::open(&db_path)?;
            store.save_trip(&document)
        })
        .await
        .map_err(|e| TripError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
