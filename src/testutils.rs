use std::{
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use futures::StreamExt;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::{backend::BookingBackend, error::BookingError, types::Booking};

pub struct MockBookingBackendInner {
    pub success: AtomicBool,
    pub calls_to_bookings: AtomicU64,
    pub calls_to_booking_stream: AtomicU64,
    pub calls_to_create_booking: AtomicU64,
    pub calls_to_update_booking: AtomicU64,
    pub calls_to_delete_booking: AtomicU64,
    pub bookings: Mutex<Vec<Booking>>,
    pub error: Mutex<Option<BookingError>>,
}

#[derive(Clone)]
pub struct MockBookingBackend(pub Arc<MockBookingBackendInner>);

impl MockBookingBackendInner {
    fn new() -> Self {
        Self {
            success: AtomicBool::new(true),
            calls_to_bookings: AtomicU64::default(),
            calls_to_booking_stream: AtomicU64::default(),
            calls_to_create_booking: AtomicU64::default(),
            calls_to_update_booking: AtomicU64::default(),
            calls_to_delete_booking: AtomicU64::default(),
            bookings: Mutex::default(),
            error: Mutex::default(),
        }
    }
}

impl MockBookingBackend {
    pub fn new() -> Self {
        Self(Arc::new(MockBookingBackendInner::new()))
    }

    /// Makes every mutating call fail with `err`.
    pub fn fail_with(&self, err: BookingError) {
        *self.0.error.lock().unwrap() = Some(err);
        self.0.success.store(false, Ordering::SeqCst);
    }

    fn result(&self) -> Result<(), BookingError> {
        match self.0.success.load(Ordering::SeqCst) {
            true => Ok(()),
            false => Err(self
                .0
                .error
                .lock()
                .unwrap()
                .clone()
                .unwrap_or(BookingError::IndexOutOfRange { index: 0, len: 0 })),
        }
    }
}

impl BookingBackend for MockBookingBackend {
    fn bookings(&self) -> Vec<Booking> {
        self.0.calls_to_bookings.fetch_add(1, Ordering::SeqCst);
        self.0.bookings.lock().unwrap().clone()
    }

    fn booking_stream(&self) -> WatchStream<Vec<Booking>> {
        self.0.calls_to_booking_stream.fetch_add(1, Ordering::SeqCst);
        let (_sender, receiver) = watch::channel(self.0.bookings.lock().unwrap().clone());
        WatchStream::new(receiver)
    }

    fn create_booking(
        &self,
        _section: String,
        _date: String,
        _time: String,
    ) -> Result<(), BookingError> {
        self.0.calls_to_create_booking.fetch_add(1, Ordering::SeqCst);
        self.result()
    }

    fn update_booking(
        &self,
        _index: usize,
        _section: String,
        _date: String,
        _time: String,
    ) -> Result<(), BookingError> {
        self.0.calls_to_update_booking.fetch_add(1, Ordering::SeqCst);
        self.result()
    }

    fn delete_booking(&self, _index: usize) -> Result<(), BookingError> {
        self.0.calls_to_delete_booking.fetch_add(1, Ordering::SeqCst);
        self.result()
    }
}

pub async fn read_from_booking_stream(stream: &mut WatchStream<Vec<Booking>>) -> Vec<Booking> {
    tokio::time::timeout(Duration::from_secs(1), stream.next())
        .await
        .expect("No bookings received in time")
        .expect("Booking stream closed")
}
