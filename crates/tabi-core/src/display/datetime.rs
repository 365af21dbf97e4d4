//! Date and timestamp display utilities.

use std::fmt;

use jiff::{civil, tz::TimeZone, Timestamp};

/// Formats a `YYYY-MM-DD` schedule date with an uppercase short weekday,
/// e.g. `2026-01-04 (SUN)`.
///
/// Schedule dates are opaque strings elsewhere in the system; parsing here
/// is display-only, and anything unparseable is printed verbatim.
pub struct DayHeading<'a>(pub &'a str);

impl fmt::Display for DayHeading<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.parse::<civil::Date>() {
            Ok(date) => write!(f, "{} ({})", self.0, weekday_abbrev(date)),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

/// Formats an epoch-millisecond timestamp in the system timezone,
/// `YYYY-MM-DD HH:MM:SS TZ`. Out-of-range values print as raw numbers.
pub struct LocalMillis(pub i64);

impl fmt::Display for LocalMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Timestamp::from_millisecond(self.0) {
            Ok(ts) => write!(
                f,
                "{}",
                ts.to_zoned(TimeZone::system()).strftime("%Y-%m-%d %H:%M:%S %Z")
            ),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

fn weekday_abbrev(date: civil::Date) -> &'static str {
    match date.weekday() {
        civil::Weekday::Monday => "MON",
        civil::Weekday::Tuesday => "TUE",
        civil::Weekday::Wednesday => "WED",
        civil::Weekday::Thursday => "THU",
        civil::Weekday::Friday => "FRI",
        civil::Weekday::Saturday => "SAT",
        civil::Weekday::Sunday => "SUN",
    }
}
