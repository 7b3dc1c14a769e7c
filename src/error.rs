//! Errors reported by booking operations.

use crate::types::Booking;
use thiserror::Error;

/// Why a time window text was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeFormatError {
    #[error("The time must contain 'to' surrounded by spaces")]
    MissingSeparator,

    #[error("'{0}' is not in 'HH:MM AM/PM' format")]
    BadComponent(String),

    #[error("The end of the time window must be after its start")]
    EndNotAfterStart,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Invalid section: {0}")]
    InvalidSection(String),

    #[error("Invalid year in date: {0}")]
    InvalidYear(String),

    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(#[from] TimeFormatError),

    /// Carries the existing booking the request collided with.
    #[error("Conflict detected with existing booking: {0}")]
    Conflict(Booking),

    #[error("Invalid index {index}, {len} bookings available")]
    IndexOutOfRange { index: usize, len: usize },
}
