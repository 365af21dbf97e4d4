//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{CheckListItem, ScheduleItem};

/// Outcome of an item completion toggle.
pub struct ToggleResult {
    pub item: ScheduleItem,
}

impl ToggleResult {
    /// Create a new ToggleResult wrapper.
    pub fn new(item: ScheduleItem) -> Self {
        Self { item }
    }
}

impl fmt::Display for ToggleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.item.is_completed {
            writeln!(f, "Marked '{}' as done ✓", self.item.title)
        } else {
            writeln!(f, "Reopened '{}' ○", self.item.title)
        }
    }
}

/// Outcome of a checklist entry toggle, carrying the parent title for
/// context.
pub struct ChecklistToggleResult {
    pub item_title: String,
    pub entry: CheckListItem,
}

impl fmt::Display for ChecklistToggleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entry.is_completed {
            writeln!(
                f,
                "Checked off '{}' under '{}' ✓",
                self.entry.text, self.item_title
            )
        } else {
            writeln!(
                f,
                "Unchecked '{}' under '{}' ○",
                self.entry.text, self.item_title
            )
        }
    }
}

/// Outcome of a trip rename.
pub struct RenameResult {
    pub name: String,
}

impl fmt::Display for RenameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trip renamed to '{}'", self.name)
    }
}
