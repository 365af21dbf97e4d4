//! Trip document model definition and pure update operations.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Booking, ScheduleItem};

/// The root aggregate: one user's entire itinerary and booking wallet.
///
/// Exactly one document exists per installation. It is created from seed
/// content on first run and read-modify-written as a whole on every change;
/// there is no partial or field-level persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripDocument {
    /// User-editable trip name
    pub trip_name: String,

    /// Milliseconds since the Unix epoch, set on every mutation
    pub last_updated: i64,

    /// Ordered itinerary entries; display order is derived per date
    #[serde(default)]
    pub schedule: Vec<ScheduleItem>,

    /// Reservation records shown in the wallet
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

impl TripDocument {
    /// Returns a new document with the given schedule and a fresh
    /// `lastUpdated` stamp. The receiver is left untouched.
    pub fn with_schedule(&self, schedule: Vec<ScheduleItem>) -> TripDocument {
        TripDocument {
            trip_name: self.trip_name.clone(),
            last_updated: now_millis(),
            schedule,
            bookings: self.bookings.clone(),
        }
    }

    /// Returns a new document with the given trip name and a fresh
    /// `lastUpdated` stamp. The receiver is left untouched.
    pub fn with_trip_name(&self, trip_name: impl Into<String>) -> TripDocument {
        TripDocument {
            trip_name: trip_name.into(),
            last_updated: now_millis(),
            schedule: self.schedule.clone(),
            bookings: self.bookings.clone(),
        }
    }
}

/// Current wall-clock time as epoch milliseconds.
pub(crate) fn now_millis() -> i64 {
    Timestamp::now().as_millisecond()
}
