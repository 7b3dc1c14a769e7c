use crate::{
    backend::BookingBackend,
    error::{BookingError, TimeFormatError},
    time_range::TimeRange,
    types::{Booking, BookingRules},
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch::{self, Sender};
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
struct Entry {
    booking: Booking,
    window: TimeRange,
}

/// In-memory bookings in insertion order. Nothing survives the process.
#[derive(Debug, Clone)]
pub struct LocalBookings {
    entries: Arc<Mutex<Vec<Entry>>>,
    rules: Arc<BookingRules>,
    sender: Sender<Vec<Booking>>,
}

impl Default for LocalBookings {
    fn default() -> Self {
        Self::new(BookingRules::default())
    }
}

impl LocalBookings {
    pub fn new(rules: BookingRules) -> Self {
        let (sender, _) = watch::channel(vec![]);
        Self {
            entries: Arc::new(Mutex::default()),
            rules: Arc::new(rules),
            sender,
        }
    }

    fn entries(&self) -> MutexGuard<'_, Vec<Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Section, year and time format checks, in that order.
    fn validate(&self, section: &str, date: &str, time: &str) -> Result<TimeRange, BookingError> {
        if !self.rules.is_valid_section(section) {
            return Err(BookingError::InvalidSection(section.to_string()));
        }
        if !self.rules.is_valid_year(date) {
            return Err(BookingError::InvalidYear(date.to_string()));
        }
        let window = TimeRange::parse(time)?;
        if self.rules.strict_time_ranges && !window.is_ordered() {
            return Err(TimeFormatError::EndNotAfterStart.into());
        }
        Ok(window)
    }

    fn find_conflict<'a>(
        entries: impl IntoIterator<Item = &'a Entry>,
        date: &str,
        window: &TimeRange,
    ) -> Option<Booking> {
        entries
            .into_iter()
            .find(|entry| entry.booking.date == date && window.overlaps(&entry.window))
            .map(|entry| entry.booking.clone())
    }

    fn check_index(index: usize, len: usize) -> Result<(), BookingError> {
        if index >= len {
            return Err(BookingError::IndexOutOfRange { index, len });
        }
        Ok(())
    }

    fn send_bookings(&self, entries: &[Entry]) {
        let bookings = entries.iter().map(|entry| entry.booking.clone()).collect();
        self.sender.send_replace(bookings);
    }
}

impl BookingBackend for LocalBookings {
    fn bookings(&self) -> Vec<Booking> {
        let bookings: Vec<Booking> = self
            .entries()
            .iter()
            .map(|entry| entry.booking.clone())
            .collect();
        debug!(count = bookings.len(), "Listing bookings");
        bookings
    }

    fn booking_stream(&self) -> WatchStream<Vec<Booking>> {
        let stream = WatchStream::new(self.sender.subscribe());
        self.send_bookings(&self.entries());
        stream
    }

    fn create_booking(
        &self,
        section: String,
        date: String,
        time: String,
    ) -> Result<(), BookingError> {
        let window = self.validate(&section, &date, &time).map_err(|err| {
            warn!(%err, "Booking not created");
            err
        })?;

        let mut entries = self.entries();
        if let Some(existing) = Self::find_conflict(entries.iter(), &date, &window) {
            warn!(%existing, "Booking not created, time window is taken");
            return Err(BookingError::Conflict(existing));
        }

        let booking = Booking::new(section, date, time);
        info!(%booking, index = entries.len(), "Booking created");
        entries.push(Entry { booking, window });
        self.send_bookings(&entries);
        Ok(())
    }

    fn update_booking(
        &self,
        index: usize,
        section: String,
        date: String,
        time: String,
    ) -> Result<(), BookingError> {
        let mut entries = self.entries();
        let result = Self::check_index(index, entries.len())
            .and_then(|()| self.validate(&section, &date, &time));
        let window = result.map_err(|err| {
            warn!(%err, index, "Booking not updated");
            err
        })?;

        if self.rules.check_update_conflicts {
            let others = entries
                .iter()
                .enumerate()
                .filter(|(position, _)| *position != index)
                .map(|(_, entry)| entry);
            if let Some(existing) = Self::find_conflict(others, &date, &window) {
                warn!(%existing, index, "Booking not updated, time window is taken");
                return Err(BookingError::Conflict(existing));
            }
        }

        let booking = Booking::new(section, date, time);
        info!(%booking, index, "Booking updated");
        entries[index] = Entry { booking, window };
        self.send_bookings(&entries);
        Ok(())
    }

    fn delete_booking(&self, index: usize) -> Result<(), BookingError> {
        let mut entries = self.entries();
        if let Err(err) = Self::check_index(index, entries.len()) {
            warn!(%err, "Booking not deleted");
            return Err(err);
        }

        let removed = entries.remove(index);
        info!(booking = %removed.booking, index, "Booking deleted");
        self.send_bookings(&entries);
        Ok(())
    }
}
