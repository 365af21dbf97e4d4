//! Display implementations for domain models.
//!
//! All output is markdown: headings for cards, list items for metadata,
//! checkbox lists for checklists. Completion is marked with the same icons
//! throughout (`✓` done, `○` open).

use std::fmt;

use super::datetime::LocalMillis;
use crate::models::{
    Booking, BookingKind, BookingStatus, CheckListItem, GuideInfo, HighlightColor, ScheduleItem,
    TripDocument,
};
use crate::schedule;

impl fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for BookingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Completion marker shared by items and checklist entries.
fn completion_icon(is_completed: bool) -> &'static str {
    if is_completed {
        "✓"
    } else {
        "○"
    }
}

impl fmt::Display for ScheduleItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Heading: time (when a display time exists), title, completion.
        // A two-line display time renders as a range.
        match self.rendered_time() {
            Some(time) => writeln!(
                f,
                "### {} {} · {} ({})",
                completion_icon(self.is_completed),
                time.replace('\n', " – "),
                self.title,
                self.id
            )?,
            None => writeln!(
                f,
                "### {} {} ({})",
                completion_icon(self.is_completed),
                self.title,
                self.id
            )?,
        }
        writeln!(f)?;

        writeln!(f, "- Category: {} ({})", self.category, self.category_color)?;
        writeln!(f, "- Location: {}", self.location)?;
        if let Some(hours) = &self.business_hours {
            writeln!(f, "- Hours: {hours}")?;
        }
        if let Some(url) = &self.map_url {
            writeln!(f, "- Map: {url}")?;
        }
        if let Some(badges) = provider_badges(self) {
            writeln!(f, "- Booked via: {badges}")?;
        }

        if let Some(description) = &self.description {
            writeln!(f)?;
            writeln!(f, "{description}")?;
        }

        if !self.check_list.is_empty() {
            writeln!(f)?;
            writeln!(f, "#### Checklist")?;
            writeln!(f)?;
            for entry in &self.check_list {
                write!(f, "{entry}")?;
            }
        }

        if let Some(guide) = &self.guide_info {
            writeln!(f)?;
            write!(f, "{guide}")?;
        }

        writeln!(f)
    }
}

fn provider_badges(item: &ScheduleItem) -> Option<String> {
    let mut badges = Vec::new();
    if item.is_klook {
        badges.push("Klook");
    }
    if item.is_tabelog {
        badges.push("Tabelog");
    }
    if item.is_google {
        badges.push("Google");
    }
    if item.is_tablecheck {
        badges.push("TableCheck");
    }
    if badges.is_empty() {
        None
    } else {
        Some(badges.join(", "))
    }
}

impl fmt::Display for CheckListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.is_completed { "x" } else { " " };
        writeln!(f, "- [{mark}] {} ({})", self.text, self.id)
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Flight titles like "TPE - KIX" render as a route.
        let heading = match self.kind {
            BookingKind::Flight => self.title.replacen(" - ", " → ", 1),
            _ => self.title.clone(),
        };
        writeln!(f, "## {heading} ({})", self.kind)?;
        writeln!(f)?;

        if let Some(sub) = &self.sub_title {
            writeln!(f, "- {sub}")?;
        }
        writeln!(f, "- Reference: {}", self.reference_no)?;
        match &self.time {
            Some(time) => writeln!(f, "- Date: {} {time}", self.date)?,
            None => writeln!(f, "- Date: {}", self.date)?,
        }
        writeln!(f, "- Status: {}", self.status)?;
        for (label, value) in &self.details {
            writeln!(f, "- {label}: {value}")?;
        }
        if let Some(url) = &self.file_url {
            writeln!(f, "- Document: {url}")?;
        }

        writeln!(f)
    }
}

impl fmt::Display for GuideInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "*{}*", self.story)?;
        writeln!(f)?;

        if !self.highlights.is_empty() {
            writeln!(f, "#### Highlights")?;
            writeln!(f)?;
            for tag in &self.highlights {
                writeln!(f, "- {} ({})", tag.text, tag.color)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Tip: {}", self.tip)
    }
}

impl fmt::Display for TripDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.trip_name)?;
        writeln!(f)?;

        let dates = schedule::distinct_dates_sorted(&self.schedule);
        match (dates.first(), dates.last()) {
            (Some(first), Some(last)) if first != last => {
                writeln!(f, "- Days: {} ({first} – {last})", dates.len())?;
            }
            (Some(first), _) => writeln!(f, "- Days: 1 ({first})")?,
            _ => writeln!(f, "- Days: 0")?,
        }

        let completed = self.schedule.iter().filter(|i| i.is_completed).count();
        writeln!(
            f,
            "- Schedule items: {} ({completed} done)",
            self.schedule.len()
        )?;
        writeln!(f, "- Bookings: {}", self.bookings.len())?;
        writeln!(f, "- Updated: {}", LocalMillis(self.last_updated))?;

        Ok(())
    }
}
