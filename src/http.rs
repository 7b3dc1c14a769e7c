use crate::backend::BookingBackend;
use crate::error::BookingError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use axum::{
    routing::{get, put},
    Json, Router,
};
use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

#[derive(Clone)]
pub struct AppState<T: BookingBackend> {
    booking_manager: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    section: String,
    date: String,
    time: String,
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match &self {
            BookingError::InvalidSection(_)
            | BookingError::InvalidYear(_)
            | BookingError::InvalidTimeFormat(_) => StatusCode::BAD_REQUEST,
            BookingError::Conflict(_) => StatusCode::CONFLICT,
            BookingError::IndexOutOfRange { .. } => StatusCode::NOT_FOUND,
        };
        (status, self.to_string()).into_response()
    }
}

pub fn create_app<T: BookingBackend>(booking_manager: T) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/bookings", get(get_bookings::<T>).post(create_booking::<T>))
        .route("/bookings/stream", get(stream_bookings::<T>))
        .route(
            "/bookings/:index",
            put(update_booking::<T>).delete(delete_booking::<T>),
        )
        .with_state(AppState { booking_manager })
        .layer(cors)
}

async fn get_bookings<T: BookingBackend>(State(state): State<AppState<T>>) -> impl IntoResponse {
    Json(state.booking_manager.bookings())
}

async fn stream_bookings<T: BookingBackend>(
    State(state): State<AppState<T>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    info!("Booking stream subscribed");
    let stream = state
        .booking_manager
        .booking_stream()
        .map(|bookings| Event::default().json_data(bookings));
    Sse::new(stream).keep_alive(KeepAlive::default())
}

async fn create_booking<T: BookingBackend>(
    State(state): State<AppState<T>>,
    Json(booking): Json<BookingRequest>,
) -> Result<(StatusCode, String), BookingError> {
    state
        .booking_manager
        .create_booking(booking.section, booking.date, booking.time)?;
    Ok((StatusCode::OK, "Booking created successfully".to_string()))
}

async fn update_booking<T: BookingBackend>(
    State(state): State<AppState<T>>,
    Path(index): Path<usize>,
    Json(booking): Json<BookingRequest>,
) -> Result<(StatusCode, String), BookingError> {
    state
        .booking_manager
        .update_booking(index, booking.section, booking.date, booking.time)?;
    Ok((StatusCode::OK, "Booking updated successfully".to_string()))
}

async fn delete_booking<T: BookingBackend>(
    State(state): State<AppState<T>>,
    Path(index): Path<usize>,
) -> Result<(StatusCode, String), BookingError> {
    state.booking_manager.delete_booking(index)?;
    Ok((StatusCode::OK, "Booking deleted successfully".to_string()))
}
