//! Wallet filtering over the read-only booking list.

use crate::models::{Booking, BookingKind};

/// Filters bookings by kind and free-text term.
///
/// `kind: None` means "all kinds". The term matches case-insensitively
/// against title, subtitle, and reference number; a blank term matches
/// everything. Unlike the schedule's search, the two filters compose with
/// AND rather than switching modes.
pub fn filter_bookings<'a>(
    bookings: &'a [Booking],
    kind: Option<BookingKind>,
    term: &str,
) -> Vec<&'a Booking> {
    let needle = term.trim().to_lowercase();
    bookings
        .iter()
        .filter(|booking| kind.map_or(true, |k| booking.kind == k))
        .filter(|booking| needle.is_empty() || matches_search(booking, &needle))
        .collect()
}

fn matches_search(booking: &Booking, needle: &str) -> bool {
    booking.title.to_lowercase().contains(needle)
        || booking
            .sub_title
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains(needle))
        || booking.reference_no.to_lowercase().contains(needle)
}
