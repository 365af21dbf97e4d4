//! Core library for the tabi travel itinerary organizer.
//!
//! This crate provides the business logic behind a personal trip organizer:
//! a single trip document (itinerary plus booking wallet) persisted locally,
//! day-indexed schedule views with search and completion tracking, and
//! wallet filtering.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌─────────────────────┐    ┌──────────────┐
//! │   Session    │    │      Engines        │    │    Store     │
//! │ (document +  │───▶│ (schedule, bookings │    │ (SQLite KV,  │
//! │  commits)    │    │  as pure functions) │    │  one record) │
//! └──────────────┘    └─────────────────────┘    └──────────────┘
//! ```
//!
//! - **Models** ([`models`]): the trip document and its contents, serialized
//!   with the persisted camelCase field names
//! - **Engines** ([`schedule`], [`bookings`]): pure, copy-on-write view and
//!   toggle functions over borrowed data
//! - **Store** ([`store`]): one SQLite record under a fixed key, overwritten
//!   wholesale on every save
//! - **Organizer/Session** ([`organizer`]): the async facade and the owned
//!   application state with optimistic persistence
//! - **Display** ([`display`]): markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tabi_core::{schedule, OrganizerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Open (or seed) the trip document
//! let mut session = OrganizerBuilder::new()
//!     .with_database_path(Some("trip.db"))
//!     .build()?
//!     .open_session()
//!     .await?;
//!
//! // Derive a day view
//! let dates = schedule::distinct_dates_sorted(&session.document().schedule);
//! if let Some(first) = dates.first() {
//!     for item in schedule::filter_by_date(&session.document().schedule, first) {
//!         println!("{}", item.title);
//!     }
//! }
//!
//! // Toggle an item; the change is persisted optimistically
//! if let Some(item) = session.toggle_item("d1-1").await {
//!     println!("{} done: {}", item.title, item.is_completed);
//! }
//! # Ok(())
//! # }
//! ```

pub mod bookings;
pub mod display;
pub mod error;
pub mod guide;
pub mod models;
pub mod organizer;
pub mod params;
pub mod schedule;
pub mod seed;
pub mod store;

// Re-export commonly used types
pub use error::{Result, TripError};
pub use models::{
    Booking, BookingKind, BookingStatus, CheckListItem, GuideInfo, HighlightColor, ScheduleItem,
    TripDocument,
};
pub use organizer::{Organizer, OrganizerBuilder, TripSession};
pub use store::Store;
