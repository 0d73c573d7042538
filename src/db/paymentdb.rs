// db/paymentdb.rs
use async_trait::async_trait;
use sqlx::Error;
use uuid::Uuid;

use super::db::DBClient;
use crate::models::paymentmodel::PaymentDetails;

#[async_trait]
pub trait PaymentExt {
    async fn get_payment_details(&self, worker_id: Uuid)
        -> Result<Option<PaymentDetails>, Error>;

    async fn upsert_payment_details(
        &self,
        worker_id: Uuid,
        upi_id: Option<String>,
        phone_number: Option<String>,
        bank_account: Option<String>,
        ifsc_code: Option<String>,
    ) -> Result<PaymentDetails, Error>;
}

#[async_trait]
impl PaymentExt for DBClient {
    async fn get_payment_details(
        &self,
        worker_id: Uuid,
    ) -> Result<Option<PaymentDetails>, Error> {
        sqlx::query_as::<_, PaymentDetails>("SELECT * FROM payment_details WHERE worker_id = $1")
            .bind(worker_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn upsert_payment_details(
        &self,
        worker_id: Uuid,
        upi_id: Option<String>,
        phone_number: Option<String>,
        bank_account: Option<String>,
        ifsc_code: Option<String>,
    ) -> Result<PaymentDetails, Error> {
        sqlx::query_as::<_, PaymentDetails>(
            r#"
            INSERT INTO payment_details (worker_id, upi_id, phone_number, bank_account, ifsc_code)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (worker_id) DO UPDATE
                SET upi_id = COALESCE(EXCLUDED.upi_id, payment_details.upi_id),
                    phone_number = COALESCE(EXCLUDED.phone_number, payment_details.phone_number),
                    bank_account = COALESCE(EXCLUDED.bank_account, payment_details.bank_account),
                    ifsc_code = COALESCE(EXCLUDED.ifsc_code, payment_details.ifsc_code),
                    is_verified = FALSE,
                    updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(worker_id)
        .bind(upi_id)
        .bind(phone_number)
        .bind(bank_account)
        .bind(ifsc_code)
        .fetch_one(&self.pool)
        .await
    }
}
