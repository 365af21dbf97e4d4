//! Parameter structures for organizer operations.
//!
//! Interface-independent parameter types, free of CLI framework derives.
//! Interface layers (the CLI today) define their own argument structs and
//! convert into these, keeping framework concerns out of the core. The
//! pattern:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Engines / Session
//! ```

use serde::{Deserialize, Serialize};

use crate::models::BookingKind;

/// Parameters for viewing a day of the schedule.
///
/// A non-blank `search` switches the view to a whole-schedule search and
/// the selected date is ignored; otherwise items are filtered to `date`
/// (or the first scheduled date when absent).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayQuery {
    /// Date to display, `YYYY-MM-DD`
    pub date: Option<String>,
    /// Free-text search term
    pub search: Option<String>,
}

/// Parameters for toggling completion state.
///
/// With `check_id` set, the toggle targets a checklist entry inside the
/// item; otherwise it targets the item itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleItem {
    /// Schedule item identifier
    pub item_id: String,
    /// Checklist entry identifier within the item
    pub check_id: Option<String>,
}

/// Parameters for filtering the booking wallet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingQuery {
    /// Restrict to one booking kind; `None` shows all
    pub kind: Option<BookingKind>,
    /// Free-text search over title, subtitle, and reference number
    pub search: Option<String>,
}

/// Parameters for renaming the trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameTrip {
    /// New trip name
    pub name: String,
}

/// Parameters for requesting guide info for a schedule item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuideQuery {
    /// Schedule item identifier
    pub item_id: String,
}
