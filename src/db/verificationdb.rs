// db/verificationdb.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Error;
use uuid::Uuid;

use super::db::DBClient;
use crate::models::{usermodel::UserType, verificationmodels::VerificationCode};

#[async_trait]
pub trait VerificationExt {
    /// Drops any previous code for (phone, user_type) and stores the new one.
    async fn replace_verification_code(
        &self,
        phone: &str,
        user_type: UserType,
        code: String,
        expires_at: DateTime<Utc>,
    ) -> Result<VerificationCode, Error>;

    async fn get_valid_code(
        &self,
        phone: &str,
        user_type: UserType,
        code: &str,
    ) -> Result<Option<VerificationCode>, Error>;

    async fn mark_code_used(&self, code_id: Uuid) -> Result<(), Error>;
}

#[async_trait]
impl VerificationExt for DBClient {
    async fn replace_verification_code(
        &self,
        phone: &str,
        user_type: UserType,
        code: String,
        expires_at: DateTime<Utc>,
    ) -> Result<VerificationCode, Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM verification_codes WHERE phone = $1 AND user_type = $2")
            .bind(phone)
            .bind(user_type)
            .execute(&mut *tx)
            .await?;

        let record = sqlx::query_as::<_, VerificationCode>(
            r#"
            INSERT INTO verification_codes (phone, user_type, code, expires_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(phone)
        .bind(user_type)
        .bind(code)
        .bind(expires_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(record)
    }

    async fn get_valid_code(
        &self,
        phone: &str,
        user_type: UserType,
        code: &str,
    ) -> Result<Option<VerificationCode>, Error> {
        sqlx::query_as::<_, VerificationCode>(
            r#"
            SELECT * FROM verification_codes
            WHERE phone = $1
              AND user_type = $2
              AND code = $3
              AND COALESCE(used, FALSE) = FALSE
              AND expires_at > NOW()
            "#,
        )
        .bind(phone)
        .bind(user_type)
        .bind(code)
        .fetch_optional(&self.pool)
        .await
    }

    async fn mark_code_used(&self, code_id: Uuid) -> Result<(), Error> {
        sqlx::query("UPDATE verification_codes SET used = TRUE WHERE id = $1")
            .bind(code_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
