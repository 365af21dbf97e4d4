//! The singleton application-state container over the trip document.

use log::warn;

use super::Organizer;
use crate::{
    error::Result,
    models::{CheckListItem, ScheduleItem, TripDocument},
    schedule, seed,
};

impl Organizer {
    /// Loads the persisted document and wraps it in a session.
    ///
    /// On first run (no record yet) the document is created from seed
    /// content and written back. When the storage engine cannot be opened
    /// at all, the session still opens over seed content, detached from
    /// persistence, with a warning logged; every other load failure
    /// (including a corrupt persisted document) propagates.
    pub async fn open_session(self) -> Result<TripSession> {
        match self.load_trip().await {
            Ok(Some(document)) => Ok(TripSession {
                organizer: self,
                document,
                detached: false,
            }),
            Ok(None) => {
                let session = TripSession {
                    organizer: self,
                    document: seed::seed_trip()?,
                    detached: false,
                };
                session.commit().await;
                Ok(session)
            }
            Err(e) if e.is_unavailable() => {
                warn!("Trip storage unavailable, continuing in memory: {e}");
                Ok(TripSession {
                    organizer: self,
                    document: seed::seed_trip()?,
                    detached: true,
                })
            }
            Err(e) => Err(e),
        }
    }
}

/// Owns the current in-memory trip document for the lifetime of the
/// process, with persistence injected via the [`Organizer`].
///
/// All mutations are optimistic: memory updates first, then the whole
/// document is committed. A failed commit is logged and the in-memory
/// state stays authoritative for the session; nothing rolls back.
pub struct TripSession {
    organizer: Organizer,
    document: TripDocument,
    detached: bool,
}

impl TripSession {
    /// The current document.
    pub fn document(&self) -> &TripDocument {
        &self.document
    }

    /// Whether this session runs without persistence (storage was
    /// unavailable at open).
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Replaces the schedule, stamps `lastUpdated`, and commits.
    pub async fn update_schedule(&mut self, new_schedule: Vec<ScheduleItem>) {
        self.document = self.document.with_schedule(new_schedule);
        self.commit().await;
    }

    /// Renames the trip, stamps `lastUpdated`, and commits.
    pub async fn update_trip_name(&mut self, name: impl Into<String>) {
        self.document = self.document.with_trip_name(name);
        self.commit().await;
    }

    /// Flips the completion flag of the item with `item_id` and commits.
    ///
    /// Returns the item in its new state, or `None` when no such item
    /// exists (in which case the schedule is unchanged).
    pub async fn toggle_item(&mut self, item_id: &str) -> Option<&ScheduleItem> {
        let new_schedule = schedule::toggle_item_completion(&self.document.schedule, item_id);
        self.update_schedule(new_schedule).await;
        self.document.schedule.iter().find(|item| item.id == item_id)
    }

    /// Flips the checklist entry `check_id` inside the item `item_id` and
    /// commits.
    ///
    /// Returns the entry in its new state, or `None` when either id is
    /// unknown (in which case the schedule is unchanged).
    pub async fn toggle_checklist_item(
        &mut self,
        item_id: &str,
        check_id: &str,
    ) -> Option<&CheckListItem> {
        let new_schedule =
            schedule::toggle_checklist_item(&self.document.schedule, item_id, check_id);
        self.update_schedule(new_schedule).await;
        self.document
            .schedule
            .iter()
            .find(|item| item.id == item_id)?
            .check_list
            .iter()
            .find(|entry| entry.id == check_id)
    }

    /// Persists the current document. Failures are logged and swallowed;
    /// the in-memory document remains authoritative.
    async fn commit(&self) {
        if self.detached {
            return;
        }
        if let Err(e) = self.organizer.save_trip(&self.document).await {
            warn!("Failed to persist trip document: {e}");
        }
    }
}
