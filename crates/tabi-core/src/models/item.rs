//! Schedule item and checklist model definitions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::GuideInfo;

/// One dated, timed itinerary entry (attraction, meal, transport leg, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    /// Unique identifier within the schedule
    pub id: String,

    /// Calendar date in `YYYY-MM-DD` form; the grouping key for day views.
    /// Compared as an opaque string, never parsed.
    pub date: String,

    /// Canonical `HH:mm` time, used as a fallback when no display time is set
    pub time: String,

    /// Free-form time text for rendering; may hold a two-line range
    /// separated by `\n`. Empty means "render no time".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_time: Option<String>,

    /// Entry title
    pub title: String,

    /// Place name or address text
    pub location: String,

    /// Free-text category label (the original allows custom categories)
    pub category: String,

    /// Visual grouping color for the category badge
    #[serde(default)]
    pub category_color: HighlightColor,

    /// Subtext such as floor directions or menu notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Opening hours text, e.g. `10:00 - 20:00`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_hours: Option<String>,

    /// Direct navigation URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,

    /// Completion flag, toggled by the user
    #[serde(default)]
    pub is_completed: bool,

    /// Sub-tasks tied to this entry (shopping lists and the like)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub check_list: Vec<CheckListItem>,

    /// Previously generated guide payload, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guide_info: Option<GuideInfo>,

    /// Provider badges marking where the entry was booked. Presentation
    /// only; not mutually exclusive.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_klook: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_tabelog: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_google: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_tablecheck: bool,
}

impl ScheduleItem {
    /// The time text to render, or `None` when the item carries no display
    /// time. An empty `displayTime` counts as absent.
    pub fn rendered_time(&self) -> Option<&str> {
        self.display_time.as_deref().filter(|t| !t.is_empty())
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Sub-task nested under a schedule item, toggleable independently of its
/// parent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckListItem {
    /// Unique identifier within the parent's checklist
    pub id: String,

    /// Sub-task description
    pub text: String,

    /// Completion flag
    #[serde(default)]
    pub is_completed: bool,
}

/// Fixed palette used for category badges and highlight tags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HighlightColor {
    Red,
    Orange,
    Green,
    Blue,
    Purple,
    #[default]
    Gray,
}

impl FromStr for HighlightColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "red" => Ok(HighlightColor::Red),
            "orange" => Ok(HighlightColor::Orange),
            "green" => Ok(HighlightColor::Green),
            "blue" => Ok(HighlightColor::Blue),
            "purple" => Ok(HighlightColor::Purple),
            "gray" => Ok(HighlightColor::Gray),
            _ => Err(format!("Invalid highlight color: {s}")),
        }
    }
}

impl HighlightColor {
    /// Lowercase wire representation, matching the persisted document.
    pub fn as_str(&self) -> &'static str {
        match self {
            HighlightColor::Red => "red",
            HighlightColor::Orange => "orange",
            HighlightColor::Green => "green",
            HighlightColor::Blue => "blue",
            HighlightColor::Purple => "purple",
            HighlightColor::Gray => "gray",
        }
    }
}
