//! Builder for creating and configuring Organizer instances.

use std::path::{Path, PathBuf};

use super::Organizer;
use crate::error::{Result, TripError};

/// Builder for creating and configuring Organizer instances.
#[derive(Debug, Clone)]
pub struct OrganizerBuilder {
    database_path: Option<PathBuf>,
}

impl OrganizerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/tabi/trip.db` or `~/.local/share/tabi/trip.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured organizer instance.
    ///
    /// The store itself is first opened when a session loads; a store that
    /// cannot be opened degrades to seed content there instead of failing
    /// construction.
    ///
    /// # Errors
    ///
    /// Returns `TripError::XdgDirectory` if no default data directory can
    /// be resolved, or `TripError::FileSystem` if the parent directory
    /// cannot be created.
    pub fn build(self) -> Result<Organizer> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TripError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        Ok(Organizer::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("tabi")
            .place_data_file("trip.db")
            .map_err(|e| TripError::XdgDirectory(e.to_string()))
    }
}

impl Default for OrganizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
