// handler/admin.rs
//
// Admin panel API. Every route here sits behind the Basic Auth middleware.

use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{admindb::AdminExt, bookingdb::BookingExt, servicedb::ServiceExt, userdb::UserExt},
    dtos::{
        admindtos::{AdminBookingView, PageQueryDto, ResendNotificationsDto, UpdateBookingStatusDto},
        servicedtos::{CreateServiceDto, UpdateServiceDto},
        ApiResponse,
    },
    error::HttpError,
    service::error::is_unique_violation,
    utils::money,
    AppState,
};

pub fn admin_handler() -> Router {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/bookings", get(list_bookings))
        .route("/bookings/:booking_id/status", put(update_booking_status))
        .route("/bookings/:booking_id/resend", post(resend_notifications))
        .route("/services", get(list_all_services).post(create_service))
        .route("/services/:service_id", put(update_service))
        .route("/services/:service_id", delete(deactivate_service))
}

pub async fn get_dashboard(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let stats = app_state
        .db_client
        .get_dashboard_stats()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success("Dashboard stats fetched", stats)))
}

pub async fn list_bookings(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(params): Query<PageQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    params
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let page = params.page.unwrap_or(1);
    let limit = params.limit.unwrap_or(20);
    let offset = page_offset(page, limit);

    let bookings = app_state
        .db_client
        .get_all_bookings(limit as i64, offset)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let mut views = Vec::with_capacity(bookings.len());
    for booking in bookings {
        let business = app_state
            .db_client
            .get_business_user_by_id(booking.business_id)
            .await
            .map_err(|e| HttpError::server_error(e.to_string()))?;
        let assignments = app_state
            .db_client
            .get_assignments_for_booking(booking.id)
            .await
            .map_err(|e| HttpError::server_error(e.to_string()))?;
        let accepted_count = app_state
            .db_client
            .count_accepted_assignments(booking.id)
            .await
            .map_err(|e| HttpError::server_error(e.to_string()))?;

        views.push(AdminBookingView {
            booking,
            business,
            assignments,
            accepted_count,
        });
    }

    Ok(Json(ApiResponse::success("Bookings fetched", views)))
}

/// Zero-based OFFSET for a 1-based page, saturating so oversized page
/// numbers cannot wrap into a negative offset.
fn page_offset(page: usize, limit: usize) -> i64 {
    page.saturating_sub(1)
        .saturating_mul(limit)
        .min(i64::MAX as usize) as i64
}

pub async fn update_booking_status(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(booking_id): Path<Uuid>,
    Json(body): Json<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, HttpError> {
    app_state
        .db_client
        .get_booking_by_id(booking_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Booking not found"))?;

    let booking = app_state
        .db_client
        .update_booking_status(booking_id, body.status)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success("Booking status updated", booking)))
}

/// Re-send accept links for a booking. Sends run sequentially with a fixed
/// delay, so the response can take several seconds for large worker sets.
pub async fn resend_notifications(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(booking_id): Path<Uuid>,
    Json(body): Json<ResendNotificationsDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let report = app_state
        .booking_service
        .resend_notifications(booking_id, body.payment_amount)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(ApiResponse::success("Notifications resent", report)))
}

pub async fn list_all_services(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let services = app_state
        .db_client
        .get_all_services()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success("Services fetched", services)))
}

pub async fn create_service(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateServiceDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let base_price = money::amount_from_f64(body.base_price)
        .ok_or_else(|| HttpError::bad_request("Invalid base price"))?;
    let service_charge = money::amount_from_f64(body.service_charge)
        .ok_or_else(|| HttpError::bad_request("Invalid service charge"))?;

    let service = app_state
        .db_client
        .create_service(
            body.name,
            body.category,
            base_price,
            service_charge,
            body.duration,
            body.tags,
            body.seo_keywords,
            body.featured,
        )
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                HttpError::conflict("A service with this name already exists")
            } else {
                HttpError::server_error(e.to_string())
            }
        })?;

    Ok(Json(ApiResponse::success("Service created", service)))
}

pub async fn update_service(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(service_id): Path<Uuid>,
    Json(body): Json<UpdateServiceDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    app_state
        .db_client
        .get_service_by_id(service_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Service not found"))?;

    let base_price = body.base_price.and_then(money::amount_from_f64);
    let service_charge = body.service_charge.and_then(money::amount_from_f64);

    let service = app_state
        .db_client
        .update_service(
            service_id,
            body.name,
            body.category,
            base_price,
            service_charge,
            body.duration,
            body.tags,
            body.seo_keywords,
            body.featured,
        )
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                HttpError::conflict("A service with this name already exists")
            } else {
                HttpError::server_error(e.to_string())
            }
        })?;

    Ok(Json(ApiResponse::success("Service updated", service)))
}

/// Soft delete. The service drops out of listings and matching; historical
/// bookings keep their service_type strings.
pub async fn deactivate_service(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(service_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    app_state
        .db_client
        .get_service_by_id(service_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Service not found"))?;

    let service = app_state
        .db_client
        .deactivate_service(service_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success("Service deactivated", service)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_offset_is_zero_based() {
        assert_eq!(page_offset(1, 20), 0);
        assert_eq!(page_offset(2, 20), 20);
        assert_eq!(page_offset(5, 100), 400);
    }

    #[test]
    fn page_offset_never_goes_negative() {
        assert_eq!(page_offset(0, 20), 0);
        assert!(page_offset(usize::MAX, 100) >= 0);
    }
}
