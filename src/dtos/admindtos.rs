use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{
    bookingmodel::{BookingAssignment, BookingStatus, BusinessBooking},
    usermodel::BusinessUser,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_businesses: i64,
    pub total_workers: i64,
    pub total_services: i64,
    pub pending_bookings: i64,
    pub assigned_bookings: i64,
    pub completed_bookings: i64,
    pub expired_bookings: i64,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct ResendNotificationsDto {
    /// When set, stored on the booking and split evenly across workers_needed.
    #[validate(range(min = 0.0, message = "Payment amount must be positive"))]
    pub payment_amount: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingStatusDto {
    pub status: BookingStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminBookingView {
    pub booking: BusinessBooking,
    pub business: Option<BusinessUser>,
    pub assignments: Vec<BookingAssignment>,
    pub accepted_count: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NotificationSendResult {
    pub worker_id: Uuid,
    pub phone: String,
    pub sent: bool,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResendReport {
    pub booking_id: Uuid,
    pub matched_workers: usize,
    pub results: Vec<NotificationSendResult>,
}

#[derive(Serialize, Deserialize, Validate)]
pub struct PageQueryDto {
    #[validate(range(min = 1, max = 100000))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<usize>,
}
