// handler/business.rs
use std::sync::Arc;

use axum::{
    response::IntoResponse,
    routing::{get, post, put},
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::{bookingdb::BookingExt, userdb::UserExt},
    dtos::{bookingdtos::*, userdtos::UpdateBusinessProfileDto, ApiResponse},
    error::HttpError,
    mail::mails::send_requirement_email,
    middleware::JWTAuthMiddeware,
    AppState,
};

pub fn business_handler() -> Router {
    Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route("/requirements", post(submit_requirement))
        .route("/bookings", get(get_my_bookings))
}

pub async fn get_profile(
    Extension(auth): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let user = auth.business()?;
    Ok(Json(ApiResponse::success("Profile fetched", user.clone())))
}

pub async fn update_profile(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
    Json(body): Json<UpdateBusinessProfileDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let user = auth.business()?;
    let updated = app_state
        .db_client
        .update_business_user(
            user.id,
            body.name,
            body.email,
            body.company_name,
            body.location,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success("Profile updated", updated)))
}

/// Requirement submission: persists the booking, fans out PENDING assignments
/// with WhatsApp invites, and emails a confirmation to the business.
pub async fn submit_requirement(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
    Json(body): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let business = auth.business()?.clone();

    let (booking, workers) = app_state
        .booking_service
        .create_booking(&business, body)
        .await
        .map_err(HttpError::from)?;

    // Confirmation email is best-effort and must not delay the response.
    let config = app_state.env.clone();
    let email_business = business.clone();
    let email_booking = booking.clone();
    tokio::spawn(async move {
        if let Err(e) = send_requirement_email(&config, &email_business, &email_booking).await {
            tracing::error!("Requirement email to {} failed: {}", email_business.email, e);
        }
    });

    let accept_link = booking
        .accept_token
        .as_deref()
        .map(|t| app_state.booking_service.accept_link(t))
        .unwrap_or_default();

    Ok(Json(ApiResponse::success(
        "Requirement submitted",
        BookingCreatedResponse {
            booking,
            matched_workers: workers.len(),
            accept_link,
        },
    )))
}

pub async fn get_my_bookings(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let user = auth.business()?;
    let bookings = app_state
        .db_client
        .get_bookings_for_business(user.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success("Bookings fetched", bookings)))
}
