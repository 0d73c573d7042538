// handler/booking.rs
use std::sync::Arc;

use axum::{
    extract::Path,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::Utc;
use num_traits::ToPrimitive;
use validator::Validate;

use crate::{
    db::bookingdb::BookingExt,
    dtos::{bookingdtos::*, ApiResponse},
    error::HttpError,
    middleware::{auth, JWTAuthMiddeware},
    models::bookingmodel::{BookingStatus, BusinessBooking},
    AppState,
};

pub fn booking_handler() -> Router {
    Router::new()
        .route("/accept/:token", get(get_booking_by_token))
        .route(
            "/accept",
            post(accept_booking).layer(middleware::from_fn(auth)),
        )
}

fn public_view(booking: &BusinessBooking) -> BookingPublicView {
    BookingPublicView {
        service_type: booking.service_type.clone(),
        workers_needed: booking.workers_needed,
        duration: booking.duration.clone(),
        location: booking.location.clone(),
        status: booking.status,
        expires_at: booking.expires_at,
        amount_per_worker: booking
            .amount_per_worker
            .as_ref()
            .and_then(|a| a.to_f64()),
        number_of_days: booking.number_of_days,
    }
}

/// Backs the accept-link page a worker opens from WhatsApp. Expiry is
/// evaluated here too, so a stale PENDING booking flips to EXPIRED on read.
pub async fn get_booking_by_token(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let mut booking = app_state
        .db_client
        .get_booking_by_token(&token)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("No booking found for this accept link"))?;

    if booking.status == Some(BookingStatus::Pending) && booking.is_expired(Utc::now()) {
        booking = app_state
            .db_client
            .update_booking_status(booking.id, BookingStatus::Expired)
            .await
            .map_err(|e| HttpError::server_error(e.to_string()))?;
    }

    Ok(Json(ApiResponse::success(
        "Booking fetched",
        public_view(&booking),
    )))
}

pub async fn accept_booking(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
    Json(body): Json<AcceptBookingDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let worker = auth.worker()?;

    let result = app_state
        .booking_service
        .accept_booking(&body.token, worker)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(ApiResponse::success("Booking accepted", result)))
}
