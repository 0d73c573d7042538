use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::bookingmodel::{BookingStatus, BusinessBooking};

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingDto {
    #[validate(length(min = 1, max = 100, message = "Service type is required"))]
    pub service_type: String,

    #[validate(range(min = 1, max = 500, message = "Workers needed must be between 1 and 500"))]
    pub workers_needed: i32,

    #[validate(length(min = 1, max = 100, message = "Duration is required"))]
    pub duration: String,

    #[validate(length(min = 1, max = 255, message = "Location is required"))]
    pub location: String,

    #[validate(range(min = 0.0, message = "Negotiated price must be positive"))]
    pub negotiated_price: Option<f64>,

    #[validate(range(min = 1, max = 365, message = "Number of days must be between 1 and 365"))]
    pub number_of_days: Option<i32>,
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct AcceptBookingDto {
    #[validate(length(min = 1, message = "Accept token is required"))]
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookingCreatedResponse {
    pub booking: BusinessBooking,
    pub matched_workers: usize,
    pub accept_link: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AcceptBookingResponse {
    pub booking_id: Uuid,
    pub status: BookingStatus,
    pub accepted_count: i64,
    pub workers_needed: i32,
}

/// Public view served to the accept-link page; hides payment internals.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookingPublicView {
    pub service_type: String,
    pub workers_needed: i32,
    pub duration: String,
    pub location: String,
    pub status: Option<BookingStatus>,
    pub expires_at: Option<DateTime<Utc>>,
    pub amount_per_worker: Option<f64>,
    pub number_of_days: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EarningItemDto {
    pub booking_id: Uuid,
    pub service_type: String,
    pub location: String,
    pub status: Option<BookingStatus>,
    pub amount: Option<f64>,
    pub number_of_days: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WorkerEarningsDto {
    pub total_earnings: f64,
    pub completed_bookings: i64,
    pub active_bookings: i64,
    pub items: Vec<EarningItemDto>,
}
