use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::date::parse_date;
use crate::shared::validation::Validate;

/// Approval state of a booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Approved,
    Pending,
    Rejected,
    /// Status value this client does not know yet
    Other(String),
}

impl BookingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Approved => "approved",
            BookingStatus::Pending => "pending",
            BookingStatus::Rejected => "rejected",
            BookingStatus::Other(s) => s,
        }
    }

    /// Label shown in the status badge
    pub fn label(&self) -> &str {
        match self {
            BookingStatus::Approved => "Disetujui",
            BookingStatus::Pending => "Menunggu",
            BookingStatus::Rejected => "Ditolak",
            BookingStatus::Other(s) => s,
        }
    }
}

impl From<String> for BookingStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "approved" => BookingStatus::Approved,
            "pending" => BookingStatus::Pending,
            "rejected" => BookingStatus::Rejected,
            _ => BookingStatus::Other(value),
        }
    }
}

impl From<BookingStatus> for String {
    fn from(value: BookingStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Room reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub booking_date: String,
    pub room_id: i64,
    pub user_id: i64,
    pub status: BookingStatus,
    #[serde(default)]
    pub room_name: String,
    #[serde(default)]
    pub user_name: String,
}

/// Writable part of a booking; status and names are owned by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub booking_date: String,
    pub room_id: i64,
}

impl From<&Booking> for BookingDto {
    fn from(booking: &Booking) -> Self {
        Self {
            booking_date: booking.booking_date.clone(),
            room_id: booking.room_id,
        }
    }
}

impl Validate for BookingDto {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if parse_date(&self.booking_date).is_none() {
            missing.push("bookingDate");
        }
        if self.room_id <= 0 {
            missing.push("roomId");
        }
        missing
    }
}
