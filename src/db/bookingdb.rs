// db/bookingdb.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::BigDecimal;
use sqlx::Error;
use uuid::Uuid;

use super::db::DBClient;
use crate::models::bookingmodel::{BookingAssignment, BookingStatus, BusinessBooking};

#[async_trait]
pub trait BookingExt {
    #[allow(clippy::too_many_arguments)]
    async fn create_booking(
        &self,
        business_id: Uuid,
        service_type: String,
        workers_needed: i32,
        duration: String,
        location: String,
        accept_token: String,
        expires_at: DateTime<Utc>,
        negotiated_price: Option<BigDecimal>,
        number_of_days: Option<i32>,
        total_cost: Option<BigDecimal>,
    ) -> Result<BusinessBooking, Error>;

    async fn get_booking_by_id(&self, booking_id: Uuid) -> Result<Option<BusinessBooking>, Error>;

    async fn get_booking_by_token(&self, token: &str) -> Result<Option<BusinessBooking>, Error>;

    async fn get_bookings_for_business(
        &self,
        business_id: Uuid,
    ) -> Result<Vec<BusinessBooking>, Error>;

    async fn get_all_bookings(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BusinessBooking>, Error>;

    async fn update_booking_status(
        &self,
        booking_id: Uuid,
        status: BookingStatus,
    ) -> Result<BusinessBooking, Error>;

    async fn set_booking_payment(
        &self,
        booking_id: Uuid,
        payment_amount: BigDecimal,
        amount_per_worker: BigDecimal,
    ) -> Result<BusinessBooking, Error>;

    async fn set_accept_token(
        &self,
        booking_id: Uuid,
        accept_token: String,
        expires_at: DateTime<Utc>,
    ) -> Result<BusinessBooking, Error>;

    /// Speculative PENDING assignment per matching worker; existing rows are
    /// left untouched.
    async fn create_pending_assignments(
        &self,
        booking_id: Uuid,
        worker_ids: &[Uuid],
    ) -> Result<u64, Error>;

    /// Resend path: upsert assignment rows back to PENDING without clobbering
    /// rows a worker has already accepted.
    async fn reset_assignments_to_pending(
        &self,
        booking_id: Uuid,
        worker_ids: &[Uuid],
    ) -> Result<u64, Error>;

    async fn get_assignments_for_booking(
        &self,
        booking_id: Uuid,
    ) -> Result<Vec<BookingAssignment>, Error>;

    async fn count_accepted_assignments(&self, booking_id: Uuid) -> Result<i64, Error>;

    /// PENDING invitations on live PENDING bookings for a worker's feed.
    async fn get_worker_open_invitations(
        &self,
        worker_id: Uuid,
    ) -> Result<Vec<BusinessBooking>, Error>;

    /// Bookings the worker has accepted, newest first. Used for earnings.
    async fn get_worker_accepted_bookings(
        &self,
        worker_id: Uuid,
    ) -> Result<Vec<BusinessBooking>, Error>;
}

#[async_trait]
impl BookingExt for DBClient {
    async fn create_booking(
        &self,
        business_id: Uuid,
        service_type: String,
        workers_needed: i32,
        duration: String,
        location: String,
        accept_token: String,
        expires_at: DateTime<Utc>,
        negotiated_price: Option<BigDecimal>,
        number_of_days: Option<i32>,
        total_cost: Option<BigDecimal>,
    ) -> Result<BusinessBooking, Error> {
        sqlx::query_as::<_, BusinessBooking>(
            r#"
            INSERT INTO business_bookings
                (business_id, service_type, workers_needed, duration, location,
                 accept_token, expires_at, negotiated_price, number_of_days, total_cost)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(business_id)
        .bind(service_type)
        .bind(workers_needed)
        .bind(duration)
        .bind(location)
        .bind(accept_token)
        .bind(expires_at)
        .bind(negotiated_price)
        .bind(number_of_days)
        .bind(total_cost)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_booking_by_id(&self, booking_id: Uuid) -> Result<Option<BusinessBooking>, Error> {
        sqlx::query_as::<_, BusinessBooking>("SELECT * FROM business_bookings WHERE id = $1")
            .bind(booking_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_booking_by_token(&self, token: &str) -> Result<Option<BusinessBooking>, Error> {
        sqlx::query_as::<_, BusinessBooking>(
            "SELECT * FROM business_bookings WHERE accept_token = $1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_bookings_for_business(
        &self,
        business_id: Uuid,
    ) -> Result<Vec<BusinessBooking>, Error> {
        sqlx::query_as::<_, BusinessBooking>(
            "SELECT * FROM business_bookings WHERE business_id = $1 ORDER BY created_at DESC",
        )
        .bind(business_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_all_bookings(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BusinessBooking>, Error> {
        sqlx::query_as::<_, BusinessBooking>(
            "SELECT * FROM business_bookings ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
    }

    async fn update_booking_status(
        &self,
        booking_id: Uuid,
        status: BookingStatus,
    ) -> Result<BusinessBooking, Error> {
        sqlx::query_as::<_, BusinessBooking>(
            r#"
            UPDATE business_bookings
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(booking_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
    }

    async fn set_booking_payment(
        &self,
        booking_id: Uuid,
        payment_amount: BigDecimal,
        amount_per_worker: BigDecimal,
    ) -> Result<BusinessBooking, Error> {
        sqlx::query_as::<_, BusinessBooking>(
            r#"
            UPDATE business_bookings
            SET payment_amount = $2, amount_per_worker = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(booking_id)
        .bind(payment_amount)
        .bind(amount_per_worker)
        .fetch_one(&self.pool)
        .await
    }

    async fn set_accept_token(
        &self,
        booking_id: Uuid,
        accept_token: String,
        expires_at: DateTime<Utc>,
    ) -> Result<BusinessBooking, Error> {
        sqlx::query_as::<_, BusinessBooking>(
            r#"
            UPDATE business_bookings
            SET accept_token = $2, expires_at = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(booking_id)
        .bind(accept_token)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
    }

    async fn create_pending_assignments(
        &self,
        booking_id: Uuid,
        worker_ids: &[Uuid],
    ) -> Result<u64, Error> {
        if worker_ids.is_empty() {
            return Ok(0);
        }
        let result = sqlx::query(
            r#"
            INSERT INTO business_booking_assignments (booking_id, worker_id)
            SELECT $1, unnest($2::uuid[])
            ON CONFLICT (booking_id, worker_id) DO NOTHING
            "#,
        )
        .bind(booking_id)
        .bind(worker_ids)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn reset_assignments_to_pending(
        &self,
        booking_id: Uuid,
        worker_ids: &[Uuid],
    ) -> Result<u64, Error> {
        if worker_ids.is_empty() {
            return Ok(0);
        }
        let result = sqlx::query(
            r#"
            INSERT INTO business_booking_assignments (booking_id, worker_id)
            SELECT $1, unnest($2::uuid[])
            ON CONFLICT (booking_id, worker_id) DO UPDATE
                SET status = 'pending', updated_at = NOW()
                WHERE business_booking_assignments.status <> 'accepted'
            "#,
        )
        .bind(booking_id)
        .bind(worker_ids)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn get_assignments_for_booking(
        &self,
        booking_id: Uuid,
    ) -> Result<Vec<BookingAssignment>, Error> {
        sqlx::query_as::<_, BookingAssignment>(
            "SELECT * FROM business_booking_assignments WHERE booking_id = $1 ORDER BY created_at",
        )
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn count_accepted_assignments(&self, booking_id: Uuid) -> Result<i64, Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM business_booking_assignments
            WHERE booking_id = $1 AND status = 'accepted'
            "#,
        )
        .bind(booking_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_worker_open_invitations(
        &self,
        worker_id: Uuid,
    ) -> Result<Vec<BusinessBooking>, Error> {
        sqlx::query_as::<_, BusinessBooking>(
            r#"
            SELECT b.* FROM business_bookings b
            JOIN business_booking_assignments a ON a.booking_id = b.id
            WHERE a.worker_id = $1
              AND a.status = 'pending'
              AND b.status = 'pending'
              AND (b.expires_at IS NULL OR b.expires_at > NOW())
            ORDER BY b.created_at DESC
            "#,
        )
        .bind(worker_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_worker_accepted_bookings(
        &self,
        worker_id: Uuid,
    ) -> Result<Vec<BusinessBooking>, Error> {
        sqlx::query_as::<_, BusinessBooking>(
            r#"
            SELECT b.* FROM business_bookings b
            JOIN business_booking_assignments a ON a.booking_id = b.id
            WHERE a.worker_id = $1 AND a.status = 'accepted'
            ORDER BY b.created_at DESC
            "#,
        )
        .bind(worker_id)
        .fetch_all(&self.pool)
        .await
    }
}
