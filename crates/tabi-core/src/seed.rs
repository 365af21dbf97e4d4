//! First-run seed content for the trip document.
//!
//! The seed is an embedded JSON asset in the same shape as the persisted
//! record, so parsing it exercises the exact deserialization path the store
//! uses. It covers seven itinerary days with checklists, multi-line display
//! times, and provider badges, plus a four-entry booking wallet.

use crate::{
    error::Result,
    models::{trip::now_millis, TripDocument},
};

const SEED_JSON: &str = include_str!("../assets/seed.json");

/// Builds the initial trip document, stamping `lastUpdated` with the
/// current time.
pub fn seed_trip() -> Result<TripDocument> {
    let mut document: TripDocument = serde_json::from_str(SEED_JSON)?;
    document.last_updated = now_millis();
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingKind;

    #[test]
    fn test_seed_parses() {
        let document = seed_trip().expect("Seed content must parse");
        assert_eq!(document.trip_name, "日本大阪7天6夜");
        assert!(document.last_updated > 0);
        assert!(!document.schedule.is_empty());
    }

    #[test]
    fn test_seed_contains_first_departure() {
        let document = seed_trip().expect("Seed content must parse");
        let item = document
            .schedule
            .iter()
            .find(|item| item.id == "d1-1")
            .expect("First departure must exist");

        assert_eq!(item.date, "2026-01-04");
        assert!(!item.is_completed);
    }

    #[test]
    fn test_seed_covers_all_seven_days() {
        let document = seed_trip().expect("Seed content must parse");
        let dates = crate::schedule::distinct_dates_sorted(&document.schedule);

        assert_eq!(dates.len(), 7);
        assert_eq!(dates.first().map(String::as_str), Some("2026-01-04"));
        assert_eq!(dates.last().map(String::as_str), Some("2026-01-10"));
    }

    #[test]
    fn test_seed_wallet_composition() {
        let document = seed_trip().expect("Seed content must parse");

        assert_eq!(document.bookings.len(), 4);
        let flights = document
            .bookings
            .iter()
            .filter(|b| b.kind == BookingKind::Flight)
            .count();
        assert_eq!(flights, 2);
        assert!(document.bookings.iter().any(|b| b.reference_no == "JX822"));
    }
}
