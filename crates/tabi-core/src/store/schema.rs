//! Schema initialization for the trip store.

/// Schema version stamped into `PRAGMA user_version` when the file is first
/// created. Read back only to decide whether to stamp; nothing migrates on
/// it yet.
const SCHEMA_VERSION: i64 = 1;

impl super::Store {
    /// Initializes the database schema using the embedded SQL file.
    ///
    /// Runs as part of opening the store; a failure here means the store
    /// never becomes usable, so the caller reports it as unavailable.
    pub(super) fn initialize_schema(&self) -> rusqlite::Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection.execute_batch(schema_sql)?;

        let version: i64 = self
            .connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))?;

        if version == 0 {
            self.connection
                .pragma_update(None, "user_version", SCHEMA_VERSION)?;
        }

        Ok(())
    }
}
