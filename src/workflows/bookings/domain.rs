use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::workflows::dates::deserialize_instant;
use crate::workflows::reservation::nights;
use crate::workflows::search::domain::PropertyId;

/// Identifier wrapper for bookings issued by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(pub u64);

/// Identifier of the signed-in guest, always passed explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status reported by the backend.
///
/// Codes match exactly (surrounding whitespace aside); any other spelling is kept verbatim
/// as [`BookingStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
    Completed,
    Other(String),
}

impl BookingStatus {
    /// Confirmed and pending stays are placed by their dates; everything else is history.
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Pending)
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::Pending => "PENDING",
            Self::Cancelled => "CANCELLED",
            Self::Completed => "COMPLETED",
            Self::Other(code) => code,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Pending => "Pending",
            Self::Cancelled => "Cancelled",
            Self::Completed => "Completed",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for BookingStatus {
    fn from(value: String) -> Self {
        match value.trim() {
            "CONFIRMED" => Self::Confirmed,
            "PENDING" => Self::Pending,
            "CANCELLED" => Self::Cancelled,
            "COMPLETED" => Self::Completed,
            _ => Self::Other(value),
        }
    }
}

impl From<BookingStatus> for String {
    fn from(value: BookingStatus) -> Self {
        match value {
            BookingStatus::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A stay as returned by the booking listing endpoint.
///
/// Check-in and check-out keep whatever time of day the backend sent. Classification only
/// looks at their calendar dates; night counts use the full instants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id: BookingId,
    pub property_id: PropertyId,
    pub user_id: UserId,
    #[serde(rename = "checkinDate", deserialize_with = "deserialize_instant")]
    pub checkin_at: NaiveDateTime,
    #[serde(rename = "checkoutDate", deserialize_with = "deserialize_instant")]
    pub checkout_at: NaiveDateTime,
    #[serde(rename = "isBookingStatus")]
    pub booking_status: BookingStatus,
    #[serde(rename = "isPaymentStatus", default)]
    pub payment_status: bool,
    #[serde(default)]
    pub property_name: String,
    #[serde(default)]
    pub property_image: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub has_extra_cot: bool,
    #[serde(default)]
    pub has_deep_clean: bool,
}

impl Booking {
    pub const fn payment_label(&self) -> &'static str {
        if self.payment_status {
            "Paid"
        } else {
            "Pending"
        }
    }

    pub fn checkin_date(&self) -> NaiveDate {
        self.checkin_at.date()
    }

    pub fn checkout_date(&self) -> NaiveDate {
        self.checkout_at.date()
    }

    /// Nights between check-in and check-out; a partial day counts as a full night.
    pub fn nights(&self) -> i64 {
        nights(self.checkin_at, self.checkout_at)
    }
}
