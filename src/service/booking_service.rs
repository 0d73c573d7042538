// service/booking_service.rs
//
// The booking-assignment workflow: requirement fan-out to matching workers,
// first-come-first-served token acceptance, and the admin resend path.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use sqlx::types::BigDecimal;
use tokio::time::{sleep, Duration as TokioDuration};
use uuid::Uuid;

use crate::{
    db::{bookingdb::BookingExt, db::DBClient, servicedb::ServiceExt, userdb::UserExt},
    dtos::{
        admindtos::{NotificationSendResult, ResendReport},
        bookingdtos::{AcceptBookingResponse, CreateBookingDto},
    },
    models::{
        bookingmodel::{BookingStatus, BusinessBooking},
        usermodel::{BusinessUser, Worker},
    },
    service::{
        error::{is_unique_violation, ServiceError},
        whatsapp::WhatsAppClient,
    },
    utils::{money, otp_generator, slug},
};

/// Accept links stay valid this long after booking creation.
const ACCEPT_TOKEN_TTL_HOURS: i64 = 24;

/// Fixed inter-message delay on the admin resend path, to stay under the
/// provider rate limit.
const RESEND_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct BookingService {
    db_client: Arc<DBClient>,
    whatsapp: Arc<WhatsAppClient>,
    app_url: String,
}

impl BookingService {
    pub fn new(db_client: Arc<DBClient>, whatsapp: Arc<WhatsAppClient>, app_url: String) -> Self {
        Self {
            db_client,
            whatsapp,
            app_url,
        }
    }

    pub fn accept_link(&self, token: &str) -> String {
        format!("{}/booking/accept/{}", self.app_url, token)
    }

    /// Persist the requirement, fan out PENDING assignments to every active
    /// worker matching the service slug, and notify them over WhatsApp.
    /// Invites run on a detached task so they never hold up the submit
    /// response; failures are logged and never roll anything back.
    pub async fn create_booking(
        &self,
        business: &BusinessUser,
        body: CreateBookingDto,
    ) -> Result<(BusinessBooking, Vec<Worker>), ServiceError> {
        let accept_token = otp_generator::generate_accept_token();
        let expires_at = Utc::now() + Duration::hours(ACCEPT_TOKEN_TTL_HOURS);

        let negotiated_price = body.negotiated_price.and_then(money::amount_from_f64);
        let total_cost = match (&negotiated_price, body.number_of_days) {
            (Some(price), Some(days)) => {
                Some(price * BigDecimal::from(days) * BigDecimal::from(body.workers_needed))
            }
            _ => None,
        };

        let booking = self
            .db_client
            .create_booking(
                business.id,
                body.service_type.clone(),
                body.workers_needed,
                body.duration,
                body.location,
                accept_token,
                expires_at,
                negotiated_price,
                body.number_of_days,
                total_cost,
            )
            .await?;

        if let Err(e) = self
            .db_client
            .bump_service_popularity(&body.service_type)
            .await
        {
            tracing::warn!("Failed to bump popularity for '{}': {}", body.service_type, e);
        }

        let service_slug = slug::slugify(&booking.service_type);
        let workers = self.db_client.get_active_workers_by_slug(&service_slug).await?;
        let worker_ids: Vec<Uuid> = workers.iter().map(|w| w.id).collect();

        self.db_client
            .create_pending_assignments(booking.id, &worker_ids)
            .await?;

        if let Some(token) = &booking.accept_token {
            let message = invite_message(&booking, &business.company_name, &self.accept_link(token));
            let whatsapp = self.whatsapp.clone();
            let phones: Vec<String> = workers.iter().map(|w| w.phone.clone()).collect();
            let booking_id = booking.id;
            tokio::spawn(async move {
                let sent = send_invites(&whatsapp, &phones, &message).await;
                tracing::info!(
                    "Booking {}: invites sent to {}/{} workers",
                    booking_id,
                    sent,
                    phones.len()
                );
            });
        }

        tracing::info!(
            "Booking {} created for '{}': {} workers matched",
            booking.id,
            booking.service_type,
            workers.len()
        );

        Ok((booking, workers))
    }

    /// First-come-first-served accept. Runs in one transaction with the
    /// booking row locked, so the accepted-count check cannot race.
    pub async fn accept_booking(
        &self,
        token: &str,
        worker: &Worker,
    ) -> Result<AcceptBookingResponse, ServiceError> {
        let mut tx = self.db_client.pool.begin().await?;

        let booking = sqlx::query_as::<_, BusinessBooking>(
            "SELECT * FROM business_bookings WHERE accept_token = $1 FOR UPDATE",
        )
        .bind(token)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(ServiceError::BookingTokenNotFound)?;

        if let Err(err) = ensure_open_for_accept(&booking, Utc::now()) {
            if matches!(err, ServiceError::BookingExpired(_)) {
                sqlx::query(
                    "UPDATE business_bookings SET status = 'expired', updated_at = NOW() WHERE id = $1",
                )
                .bind(booking.id)
                .execute(&mut *tx)
                .await?;
                tx.commit().await?;
            }
            return Err(err);
        }

        if !slug::worker_matches_service(&worker.services, &booking.service_type) {
            return Err(ServiceError::WorkerNotEligible {
                worker_id: worker.id,
                service_type: booking.service_type.clone(),
            });
        }

        // Upsert refuses rows already accepted; the fan-out may or may not
        // have pre-created a PENDING row for this worker.
        let accepted_row = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO business_booking_assignments (booking_id, worker_id, status)
            VALUES ($1, $2, 'accepted')
            ON CONFLICT (booking_id, worker_id) DO UPDATE
                SET status = 'accepted', updated_at = NOW()
                WHERE business_booking_assignments.status <> 'accepted'
            RETURNING id
            "#,
        )
        .bind(booking.id)
        .bind(worker.id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ServiceError::AlreadyAccepted
            } else {
                ServiceError::Database(e)
            }
        })?;

        accepted_row_id(accepted_row)?;

        let accepted_count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM business_booking_assignments
            WHERE booking_id = $1 AND status = 'accepted'
            "#,
        )
        .bind(booking.id)
        .fetch_one(&mut *tx)
        .await?;

        let status = status_after_accept(accepted_count, booking.workers_needed);
        if status == BookingStatus::Assigned {
            sqlx::query(
                "UPDATE business_bookings SET status = 'assigned', updated_at = NOW() WHERE id = $1",
            )
            .bind(booking.id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        // Business confirmation is best-effort and outside the transaction.
        self.confirm_to_business(&booking, worker, accepted_count).await;

        Ok(AcceptBookingResponse {
            booking_id: booking.id,
            status,
            accepted_count,
            workers_needed: booking.workers_needed,
        })
    }

    async fn confirm_to_business(
        &self,
        booking: &BusinessBooking,
        worker: &Worker,
        accepted_count: i64,
    ) {
        let business = match self.db_client.get_business_user_by_id(booking.business_id).await {
            Ok(Some(business)) => business,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!("Business lookup failed for confirmation: {}", e);
                return;
            }
        };

        let message = acceptance_message(booking, &worker.name, accepted_count);
        if let Err(e) = self.whatsapp.send(&business.phone, &message).await {
            tracing::warn!(
                "Acceptance confirmation to business {} failed: {}",
                business.id,
                e
            );
        }
    }

    /// Admin resend: refresh the worker set from the current slug, reset
    /// assignment rows to PENDING (never clobbering accepts), optionally
    /// store the payment split, and send links sequentially with a fixed
    /// delay between messages.
    pub async fn resend_notifications(
        &self,
        booking_id: Uuid,
        payment_amount: Option<f64>,
    ) -> Result<ResendReport, ServiceError> {
        let mut booking = self
            .db_client
            .get_booking_by_id(booking_id)
            .await?
            .ok_or(ServiceError::BookingNotFound(booking_id))?;

        if let Some(amount) = payment_amount {
            let amount = money::amount_from_f64(amount)
                .ok_or_else(|| ServiceError::Validation("Invalid payment amount".to_string()))?;
            let per_worker = money::split_per_worker(&amount, booking.workers_needed);
            booking = self
                .db_client
                .set_booking_payment(booking_id, amount, per_worker)
                .await?;
        }

        if booking.accept_token.is_none() {
            let token = otp_generator::generate_accept_token();
            let expires_at = Utc::now() + Duration::hours(ACCEPT_TOKEN_TTL_HOURS);
            booking = self
                .db_client
                .set_accept_token(booking_id, token, expires_at)
                .await?;
        }

        let service_slug = slug::slugify(&booking.service_type);
        let workers = self.db_client.get_active_workers_by_slug(&service_slug).await?;
        let worker_ids: Vec<Uuid> = workers.iter().map(|w| w.id).collect();

        self.db_client
            .reset_assignments_to_pending(booking_id, &worker_ids)
            .await?;

        let token = booking.accept_token.clone().ok_or_else(|| {
            ServiceError::Validation("Booking has no accept token".to_string())
        })?;
        let business = self
            .db_client
            .get_business_user_by_id(booking.business_id)
            .await?;
        let company = business
            .map(|b| b.company_name)
            .unwrap_or_else(|| "a business".to_string());
        let message = invite_message(&booking, &company, &self.accept_link(&token));

        let mut results = Vec::with_capacity(workers.len());
        for (i, worker) in workers.iter().enumerate() {
            if i > 0 {
                sleep(TokioDuration::from_millis(RESEND_DELAY_MS)).await;
            }
            match self.whatsapp.send(&worker.phone, &message).await {
                Ok(_) => results.push(NotificationSendResult {
                    worker_id: worker.id,
                    phone: worker.phone.clone(),
                    sent: true,
                    error: None,
                }),
                Err(e) => {
                    tracing::warn!("Resend to worker {} failed: {}", worker.id, e);
                    results.push(NotificationSendResult {
                        worker_id: worker.id,
                        phone: worker.phone.clone(),
                        sent: false,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        Ok(ResendReport {
            booking_id,
            matched_workers: workers.len(),
            results,
        })
    }
}

/// Concurrent fan-out of one invite message. Returns how many sends
/// succeeded; failures are logged per recipient.
async fn send_invites(whatsapp: &WhatsAppClient, phones: &[String], message: &str) -> usize {
    let sends = phones
        .iter()
        .map(|phone| async move { whatsapp.send(phone, message).await.map_err(|e| (phone, e)) });

    let mut sent = 0usize;
    for result in futures::future::join_all(sends).await {
        match result {
            Ok(()) => sent += 1,
            Err((phone, e)) => tracing::warn!("Invite to {} failed: {}", phone, e),
        }
    }
    sent
}

/// A booking only takes accepts while PENDING and before its deadline.
fn ensure_open_for_accept(booking: &BusinessBooking, now: DateTime<Utc>) -> Result<(), ServiceError> {
    if booking.status != Some(BookingStatus::Pending) {
        return Err(ServiceError::BookingNotPending(booking.id));
    }
    if booking.is_expired(now) {
        return Err(ServiceError::BookingExpired(booking.id));
    }
    Ok(())
}

/// The accept upsert returns no row when this worker's assignment was
/// already accepted.
fn accepted_row_id(row: Option<Uuid>) -> Result<Uuid, ServiceError> {
    row.ok_or(ServiceError::AlreadyAccepted)
}

fn status_after_accept(accepted_count: i64, workers_needed: i32) -> BookingStatus {
    if accepted_count >= workers_needed as i64 {
        BookingStatus::Assigned
    } else {
        BookingStatus::Pending
    }
}

fn invite_message(booking: &BusinessBooking, company_name: &str, accept_link: &str) -> String {
    let pay_line = booking
        .amount_per_worker
        .as_ref()
        .map(|amount| format!("\nPay per worker: Rs {}", amount))
        .unwrap_or_default();

    format!(
        "New staffing opportunity from {}!\n\
         Service: {}\n\
         Location: {}\n\
         Duration: {}{}\n\
         Workers needed: {}\n\n\
         First come, first served. Accept here: {}",
        company_name,
        booking.service_type,
        booking.location,
        booking.duration,
        pay_line,
        booking.workers_needed,
        accept_link
    )
}

fn acceptance_message(booking: &BusinessBooking, worker_name: &str, accepted_count: i64) -> String {
    format!(
        "{} accepted your booking for {} ({}/{} workers confirmed).",
        worker_name, booking.service_type, accepted_count, booking.workers_needed
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample_booking() -> BusinessBooking {
        BusinessBooking {
            id: Uuid::new_v4(),
            business_id: Uuid::new_v4(),
            service_type: "Hotel / Restaurant Staff".to_string(),
            workers_needed: 2,
            duration: "8 hours".to_string(),
            location: "Andheri East, Mumbai".to_string(),
            status: Some(BookingStatus::Pending),
            accept_token: Some("tok".to_string()),
            expires_at: None,
            payment_amount: None,
            amount_per_worker: Some(BigDecimal::from_str("1500").unwrap()),
            negotiated_price: None,
            number_of_days: Some(3),
            total_cost: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn invite_message_includes_link_and_pay() {
        let booking = sample_booking();
        let msg = invite_message(&booking, "Acme Hotels", "https://x.test/booking/accept/tok");
        assert!(msg.contains("Acme Hotels"));
        assert!(msg.contains("Hotel / Restaurant Staff"));
        assert!(msg.contains("Rs 1500"));
        assert!(msg.contains("https://x.test/booking/accept/tok"));
    }

    #[test]
    fn invite_message_omits_pay_when_unset() {
        let mut booking = sample_booking();
        booking.amount_per_worker = None;
        let msg = invite_message(&booking, "Acme", "link");
        assert!(!msg.contains("Pay per worker"));
    }

    #[test]
    fn acceptance_message_reports_progress() {
        let booking = sample_booking();
        let msg = acceptance_message(&booking, "Ravi", 1);
        assert!(msg.contains("Ravi"));
        assert!(msg.contains("(1/2 workers confirmed)"));
    }

    #[test]
    fn open_booking_passes_accept_checks() {
        let booking = sample_booking();
        assert!(ensure_open_for_accept(&booking, Utc::now()).is_ok());
    }

    #[test]
    fn expired_booking_cannot_be_accepted() {
        let mut booking = sample_booking();
        booking.expires_at = Some(Utc::now() - Duration::hours(1));
        assert!(matches!(
            ensure_open_for_accept(&booking, Utc::now()),
            Err(ServiceError::BookingExpired(_))
        ));
    }

    #[test]
    fn booking_assigns_once_enough_workers_accept() {
        let booking = sample_booking(); // needs 2 workers
        assert_eq!(
            status_after_accept(1, booking.workers_needed),
            BookingStatus::Pending
        );
        assert_eq!(
            status_after_accept(2, booking.workers_needed),
            BookingStatus::Assigned
        );
        assert_eq!(
            status_after_accept(3, booking.workers_needed),
            BookingStatus::Assigned
        );
    }

    #[test]
    fn accepts_after_assignment_are_rejected() {
        // Two distinct accepts fill the booking; the third worker walks
        // into a booking that is no longer pending.
        let mut booking = sample_booking();
        assert!(ensure_open_for_accept(&booking, Utc::now()).is_ok());
        assert_eq!(
            status_after_accept(1, booking.workers_needed),
            BookingStatus::Pending
        );
        assert!(ensure_open_for_accept(&booking, Utc::now()).is_ok());
        booking.status = Some(status_after_accept(2, booking.workers_needed));
        assert!(matches!(
            ensure_open_for_accept(&booking, Utc::now()),
            Err(ServiceError::BookingNotPending(_))
        ));
    }

    #[test]
    fn repeat_accept_maps_to_already_accepted() {
        assert!(matches!(
            accepted_row_id(None),
            Err(ServiceError::AlreadyAccepted)
        ));
        let id = Uuid::new_v4();
        assert_eq!(accepted_row_id(Some(id)).unwrap(), id);
    }

    #[tokio::test]
    async fn invite_fanout_counts_successful_sends() {
        let whatsapp = WhatsAppClient::disabled();
        let phones = vec![
            "+919000000001".to_string(),
            "+919000000002".to_string(),
            "+919000000003".to_string(),
        ];
        assert_eq!(send_invites(&whatsapp, &phones, "invite").await, 3);
        assert_eq!(send_invites(&whatsapp, &[], "invite").await, 0);
    }
}
