//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use super::datetime::DayHeading;
use crate::models::{Booking, ScheduleItem};

/// One day's items rendered as a timeline.
///
/// Items appear in the order given (document order within the day); an
/// empty day renders the original app's placeholder line.
pub struct DayTimeline {
    pub date: String,
    pub items: Vec<ScheduleItem>,
}

impl fmt::Display for DayTimeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Day Plan — {}", DayHeading(&self.date))?;
        writeln!(f)?;

        if self.items.is_empty() {
            writeln!(f, "No plans for this day yet.")
        } else {
            for item in &self.items {
                write!(f, "{item}")?;
            }
            Ok(())
        }
    }
}

/// Whole-schedule search hits, grouped under date headings.
pub struct SearchResults {
    pub term: String,
    pub items: Vec<ScheduleItem>,
}

impl fmt::Display for SearchResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Search: \"{}\"", self.term)?;
        writeln!(f)?;

        if self.items.is_empty() {
            return writeln!(f, "No matching schedule items.");
        }

        let mut current_date: Option<&str> = None;
        for item in &self.items {
            if current_date != Some(item.date.as_str()) {
                current_date = Some(item.date.as_str());
                writeln!(f, "## {}", DayHeading(&item.date))?;
                writeln!(f)?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Per-day progress line in the date selector listing.
pub struct DaySummary {
    pub date: String,
    pub total: usize,
    pub completed: usize,
}

impl fmt::Display for DaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} — {} items ({} done)",
            DayHeading(&self.date),
            self.total,
            self.completed
        )
    }
}

/// Newtype wrapper for displaying the list of scheduled days.
pub struct DateList(pub Vec<DaySummary>);

impl fmt::Display for DateList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No scheduled days.")
        } else {
            writeln!(f, "# Days")?;
            writeln!(f)?;
            for day in &self.0 {
                write!(f, "{day}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying filtered bookings.
pub struct Wallet(pub Vec<Booking>);

impl Wallet {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of bookings in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No bookings found.")
        } else {
            writeln!(f, "# Wallet")?;
            writeln!(f)?;
            for booking in &self.0 {
                write!(f, "{booking}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HighlightColor, ScheduleItem};

    fn item(id: &str, date: &str, title: &str) -> ScheduleItem {
        ScheduleItem {
            id: id.to_string(),
            date: date.to_string(),
            time: "09:00".to_string(),
            display_time: Some("09:00".to_string()),
            title: title.to_string(),
            location: "大阪".to_string(),
            category: "景點".to_string(),
            category_color: HighlightColor::Purple,
            description: None,
            business_hours: None,
            map_url: None,
            is_completed: false,
            check_list: vec![],
            guide_info: None,
            is_klook: false,
            is_tabelog: false,
            is_google: false,
            is_tablecheck: false,
        }
    }

    #[test]
    fn test_empty_day_timeline_placeholder() {
        let timeline = DayTimeline {
            date: "2026-01-04".to_string(),
            items: vec![],
        };
        let output = format!("{timeline}");

        assert!(output.contains("# Day Plan — 2026-01-04 (SUN)"));
        assert!(output.contains("No plans for this day yet."));
    }

    #[test]
    fn test_day_timeline_lists_items_in_order() {
        let timeline = DayTimeline {
            date: "2026-01-04".to_string(),
            items: vec![item("a", "2026-01-04", "起飛"), item("b", "2026-01-04", "降落")],
        };
        let output = format!("{timeline}");

        let first = output.find("起飛").expect("First item missing");
        let second = output.find("降落").expect("Second item missing");
        assert!(first < second);
    }

    #[test]
    fn test_search_results_group_by_date() {
        let results = SearchResults {
            term: "dior".to_string(),
            items: vec![
                item("a", "2026-01-04", "Dior 心斎橋"),
                item("b", "2026-01-08", "Dior 京都"),
            ],
        };
        let output = format!("{results}");

        assert!(output.contains("# Search: \"dior\""));
        assert!(output.contains("## 2026-01-04 (SUN)"));
        assert!(output.contains("## 2026-01-08 (THU)"));
    }

    #[test]
    fn test_empty_wallet_message() {
        let output = format!("{}", Wallet(vec![]));
        assert!(output.contains("No bookings found."));
    }
}
