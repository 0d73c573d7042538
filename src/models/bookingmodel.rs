use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "booking_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Assigned,
    Expired,
    Completed,
}

impl BookingStatus {
    pub fn to_str(&self) -> &str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Assigned => "assigned",
            BookingStatus::Expired => "expired",
            BookingStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "assignment_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Pending,
    Accepted,
}

impl AssignmentStatus {
    pub fn to_str(&self) -> &str {
        match self {
            AssignmentStatus::Pending => "pending",
            AssignmentStatus::Accepted => "accepted",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BusinessBooking {
    pub id: Uuid,
    pub business_id: Uuid,
    pub service_type: String, // free text, matched against worker service slugs
    pub workers_needed: i32,
    pub duration: String,
    pub location: String,
    pub status: Option<BookingStatus>, // Database has DEFAULT 'pending', can be NULL
    pub accept_token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub payment_amount: Option<BigDecimal>,
    pub amount_per_worker: Option<BigDecimal>,
    pub negotiated_price: Option<BigDecimal>,
    pub number_of_days: Option<i32>,
    pub total_cost: Option<BigDecimal>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl BusinessBooking {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map(|at| at < now).unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BookingAssignment {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub worker_id: Uuid,
    pub status: Option<AssignmentStatus>, // Database has DEFAULT 'pending', can be NULL
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn booking_expiring_at(expires_at: Option<DateTime<Utc>>) -> BusinessBooking {
        BusinessBooking {
            id: Uuid::new_v4(),
            business_id: Uuid::new_v4(),
            service_type: "Security Guard".to_string(),
            workers_needed: 1,
            duration: "8 hours".to_string(),
            location: "Mumbai".to_string(),
            status: Some(BookingStatus::Pending),
            accept_token: Some("tok".to_string()),
            expires_at,
            payment_amount: None,
            amount_per_worker: None,
            negotiated_price: None,
            number_of_days: None,
            total_cost: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn booking_past_deadline_is_expired() {
        let now = Utc::now();
        let booking = booking_expiring_at(Some(now - Duration::minutes(1)));
        assert!(booking.is_expired(now));
    }

    #[test]
    fn booking_without_deadline_never_expires() {
        let booking = booking_expiring_at(None);
        assert!(!booking.is_expired(Utc::now()));
    }

    #[test]
    fn booking_before_deadline_is_live() {
        let now = Utc::now();
        let booking = booking_expiring_at(Some(now + Duration::hours(24)));
        assert!(!booking.is_expired(now));
    }
}
