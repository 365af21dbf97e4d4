//! Display formatting for terminal output.
//!
//! Newtype wrappers and `Display` implementations that format domain
//! objects as markdown for rich terminal rendering. Business data stays in
//! [`crate::models`]; everything presentational lives here, so the same
//! document can be shown as a day timeline, a search result list, or a
//! wallet without the models knowing about any of it.

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

// Re-export commonly used types for convenience
pub use collections::{DateList, DaySummary, DayTimeline, SearchResults, Wallet};
pub use datetime::{DayHeading, LocalMillis};
pub use results::{ChecklistToggleResult, RenameResult, ToggleResult};
