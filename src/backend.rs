use crate::{error::BookingError, types::Booking};
use tokio_stream::wrappers::WatchStream;

/// Operations a front end drives the bookings through.
///
/// Indices are positions in the current listing. They shift after a delete,
/// so callers must not keep them across mutating calls.
pub trait BookingBackend: Clone + Send + Sync + 'static {
    fn bookings(&self) -> Vec<Booking>;
    fn booking_stream(&self) -> WatchStream<Vec<Booking>>;
    fn create_booking(&self, section: String, date: String, time: String)
        -> Result<(), BookingError>;
    fn update_booking(
        &self,
        index: usize,
        section: String,
        date: String,
        time: String,
    ) -> Result<(), BookingError>;
    fn delete_booking(&self, index: usize) -> Result<(), BookingError>;
}
