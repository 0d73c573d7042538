// handler/worker.rs
use std::sync::Arc;

use axum::{
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use num_traits::ToPrimitive;
use validator::Validate;

use crate::{
    db::{bookingdb::BookingExt, paymentdb::PaymentExt, userdb::UserExt},
    dtos::{
        bookingdtos::{EarningItemDto, WorkerEarningsDto},
        paymentdtos::UpsertPaymentDetailsDto,
        userdtos::UpdateWorkerProfileDto,
        ApiResponse,
    },
    error::HttpError,
    middleware::JWTAuthMiddeware,
    models::bookingmodel::BookingStatus,
    AppState,
};

pub fn worker_handler() -> Router {
    Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route("/notifications", get(get_notifications))
        .route("/earnings", get(get_earnings))
        .route(
            "/payment-details",
            get(get_payment_details).post(upsert_payment_details),
        )
}

pub async fn get_profile(
    Extension(auth): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let worker = auth.worker()?;
    Ok(Json(ApiResponse::success("Profile fetched", worker.clone())))
}

pub async fn update_profile(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
    Json(body): Json<UpdateWorkerProfileDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let worker = auth.worker()?;
    let updated = app_state
        .db_client
        .update_worker(worker.id, body.name, body.services)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success("Profile updated", updated)))
}

/// Open invitations: PENDING assignments on live PENDING bookings.
pub async fn get_notifications(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let worker = auth.worker()?;
    let bookings = app_state
        .db_client
        .get_worker_open_invitations(worker.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success("Notifications fetched", bookings)))
}

pub async fn get_earnings(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let worker = auth.worker()?;
    let bookings = app_state
        .db_client
        .get_worker_accepted_bookings(worker.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let mut total_earnings = 0.0_f64;
    let mut completed_bookings = 0_i64;
    let mut active_bookings = 0_i64;
    let mut items = Vec::with_capacity(bookings.len());

    for booking in &bookings {
        let amount = booking.amount_per_worker.as_ref().and_then(|a| a.to_f64());
        match booking.status {
            Some(BookingStatus::Completed) => {
                completed_bookings += 1;
                total_earnings += amount.unwrap_or(0.0);
            }
            Some(BookingStatus::Assigned) | Some(BookingStatus::Pending) => {
                active_bookings += 1;
            }
            _ => {}
        }
        items.push(EarningItemDto {
            booking_id: booking.id,
            service_type: booking.service_type.clone(),
            location: booking.location.clone(),
            status: booking.status,
            amount,
            number_of_days: booking.number_of_days,
        });
    }

    Ok(Json(ApiResponse::success(
        "Earnings fetched",
        WorkerEarningsDto {
            total_earnings,
            completed_bookings,
            active_bookings,
            items,
        },
    )))
}

pub async fn get_payment_details(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let worker = auth.worker()?;
    let details = app_state
        .db_client
        .get_payment_details(worker.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("No payment details on file"))?;

    Ok(Json(ApiResponse::success("Payment details fetched", details)))
}

pub async fn upsert_payment_details(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
    Json(body): Json<UpsertPaymentDetailsDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    if body.upi_id.is_none() && body.bank_account.is_none() {
        return Err(HttpError::bad_request(
            "Either a UPI id or a bank account is required",
        ));
    }
    if body.bank_account.is_some() && body.ifsc_code.is_none() {
        return Err(HttpError::bad_request(
            "IFSC code is required with a bank account",
        ));
    }

    let worker = auth.worker()?;
    let details = app_state
        .db_client
        .upsert_payment_details(
            worker.id,
            body.upi_id,
            body.phone_number,
            body.bank_account,
            body.ifsc_code,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success("Payment details saved", details)))
}
