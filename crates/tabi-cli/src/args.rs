//! Command-line argument definitions using clap.
//!
//! The argument structs here are thin wrappers over the core parameter
//! types: clap derives and help text live in this layer, and each wrapper
//! converts into its `tabi_core::params` counterpart via `From`, keeping
//! the core free of CLI framework concerns.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use tabi_core::{
    params::{BookingQuery, DayQuery, GuideQuery, RenameTrip, ToggleItem},
    BookingKind,
};

/// Main command-line interface for the tabi travel organizer
///
/// Tabi keeps a single trip (a day-by-day itinerary plus a wallet of
/// bookings) in a local database, seeded with content on first run. The
/// schedule can be browsed per day, searched across all days, and items
/// (and their checklist entries) can be checked off.
#[derive(Parser)]
#[command(version, about, name = "tabi")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/tabi/trip.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the tabi CLI
///
/// Three command groups mirror the three things a trip holds:
/// - `schedule`: browse and update the day-by-day itinerary
/// - `booking`: browse the reservation wallet
/// - `trip`: show or rename the trip itself
#[derive(Subcommand)]
pub enum Commands {
    /// Browse and update the day-by-day schedule
    #[command(alias = "s")]
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },
    /// Browse the booking wallet
    #[command(alias = "b")]
    Booking {
        #[command(subcommand)]
        command: BookingCommands,
    },
    /// Show or rename the trip
    #[command(alias = "t")]
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },
}

#[derive(Subcommand)]
pub enum ScheduleCommands {
    /// List the scheduled days with completion progress
    #[command(alias = "d")]
    Days,
    /// Show one day's timeline, or search across all days
    #[command(alias = "s")]
    Show(ShowDayArgs),
    /// Toggle completion of an item or one of its checklist entries
    #[command(alias = "t")]
    Toggle(ToggleArgs),
    /// Generate guide info for a schedule item
    #[command(alias = "g")]
    Guide(GuideArgs),
}

#[derive(Subcommand)]
pub enum BookingCommands {
    /// List bookings, optionally filtered by kind and search term
    #[command(aliases = ["l", "ls"])]
    List(BookingListArgs),
}

#[derive(Subcommand)]
pub enum TripCommands {
    /// Show the trip overview
    #[command(alias = "s")]
    Show,
    /// Rename the trip
    #[command(alias = "r")]
    Rename(RenameArgs),
}

/// Show one day of the schedule
///
/// Without flags the first scheduled day is shown. A search term switches
/// to a whole-schedule search and any selected date is ignored, matching
/// the mode switch of the original app.
#[derive(ClapArgs)]
pub struct ShowDayArgs {
    /// Day to display, YYYY-MM-DD
    #[arg(long, help = "Day to display (defaults to the first scheduled day)")]
    pub date: Option<String>,
    /// Search term applied across the whole schedule
    #[arg(
        long,
        help = "Case-insensitive search across titles, locations, categories, notes, and checklists"
    )]
    pub search: Option<String>,
}

impl From<ShowDayArgs> for DayQuery {
    fn from(val: ShowDayArgs) -> Self {
        DayQuery {
            date: val.date,
            search: val.search,
        }
    }
}

/// Toggle completion state
#[derive(ClapArgs)]
pub struct ToggleArgs {
    /// ID of the schedule item
    #[arg(help = "Identifier of the schedule item, e.g. d1-1")]
    pub item_id: String,
    /// Checklist entry inside the item to toggle instead of the item itself
    #[arg(long, help = "Checklist entry ID to toggle instead of the item itself")]
    pub check: Option<String>,
}

impl From<ToggleArgs> for ToggleItem {
    fn from(val: ToggleArgs) -> Self {
        ToggleItem {
            item_id: val.item_id,
            check_id: val.check,
        }
    }
}

/// Request guide info for a schedule item
#[derive(ClapArgs)]
pub struct GuideArgs {
    /// ID of the schedule item
    #[arg(help = "Identifier of the schedule item to describe")]
    pub item_id: String,
}

impl From<GuideArgs> for GuideQuery {
    fn from(val: GuideArgs) -> Self {
        GuideQuery {
            item_id: val.item_id,
        }
    }
}

/// List wallet bookings
#[derive(ClapArgs)]
pub struct BookingListArgs {
    /// Restrict to one booking kind
    #[arg(long, value_enum, help = "Show only bookings of this kind")]
    pub kind: Option<BookingKindArg>,
    /// Search term over title, subtitle, and reference number
    #[arg(long, help = "Case-insensitive search over title, subtitle, and reference number")]
    pub search: Option<String>,
}

impl From<BookingListArgs> for BookingQuery {
    fn from(val: BookingListArgs) -> Self {
        BookingQuery {
            kind: val.kind.map(Into::into),
            search: val.search,
        }
    }
}

/// Rename the trip
#[derive(ClapArgs)]
pub struct RenameArgs {
    /// New trip name
    pub name: String,
}

impl From<RenameArgs> for RenameTrip {
    fn from(val: RenameArgs) -> Self {
        RenameTrip { name: val.name }
    }
}

/// Command-line argument representation of booking kinds
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum BookingKindArg {
    Flight,
    Hotel,
    Train,
    Activity,
    Transfer,
}

impl From<BookingKindArg> for BookingKind {
    fn from(val: BookingKindArg) -> Self {
        match val {
            BookingKindArg::Flight => BookingKind::Flight,
            BookingKindArg::Hotel => BookingKind::Hotel,
            BookingKindArg::Train => BookingKind::Train,
            BookingKindArg::Activity => BookingKind::Activity,
            BookingKindArg::Transfer => BookingKind::Transfer,
        }
    }
}
