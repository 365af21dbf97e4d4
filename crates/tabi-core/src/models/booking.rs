//! Booking model definition and related enumerations.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One reservation record in the wallet (flight, hotel, transfer, ...).
///
/// Bookings are read-only seed/display data in this feature set; no engine
/// operation mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique identifier within the wallet
    pub id: String,

    /// Reservation kind; selects the rendering template and is the only
    /// structured field the wallet filter understands
    #[serde(rename = "type")]
    pub kind: BookingKind,

    /// Primary label, e.g. `TPE - KIX` for a flight
    pub title: String,

    /// Secondary label, e.g. the carrier or the hotel's romanized name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,

    /// Confirmation or flight number
    pub reference_no: String,

    /// Date text; hotels may hold a range such as `2026-01-04 ~ 2026-01-10`
    pub date: String,

    /// Optional time text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Label → value detail rows. Semantically unordered, but display order
    /// is insertion order, so an order-preserving map is required.
    #[serde(default)]
    pub details: IndexMap<String, String>,

    /// Attached document URL, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,

    /// Static confirmation label; no engine-driven transitions exist
    pub status: BookingStatus,
}

/// Type-safe enumeration of booking kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingKind {
    Flight,
    Hotel,
    Train,
    Activity,
    Transfer,
}

impl FromStr for BookingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flight" => Ok(BookingKind::Flight),
            "hotel" => Ok(BookingKind::Hotel),
            "train" => Ok(BookingKind::Train),
            "activity" => Ok(BookingKind::Activity),
            "transfer" => Ok(BookingKind::Transfer),
            _ => Err(format!("Invalid booking kind: {s}")),
        }
    }
}

impl BookingKind {
    /// Lowercase wire representation, matching the persisted document.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingKind::Flight => "flight",
            BookingKind::Hotel => "hotel",
            BookingKind::Train => "train",
            BookingKind::Activity => "activity",
            BookingKind::Transfer => "transfer",
        }
    }
}

/// Type-safe enumeration of booking statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
}

impl BookingStatus {
    /// Lowercase wire representation, matching the persisted document.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Pending => "pending",
        }
    }
}
