// db/admindb.rs
use async_trait::async_trait;
use sqlx::Error;

use super::db::DBClient;
use crate::dtos::admindtos::DashboardStats;
use crate::models::usermodel::Admin;

#[async_trait]
pub trait AdminExt {
    async fn get_admin_by_phone(&self, phone: &str) -> Result<Option<Admin>, Error>;

    /// Idempotent startup seed from ADMIN_PHONE / ADMIN_PASSWORD.
    async fn seed_admin(&self, phone: &str, password_hash: &str) -> Result<Admin, Error>;

    async fn get_dashboard_stats(&self) -> Result<DashboardStats, Error>;
}

#[async_trait]
impl AdminExt for DBClient {
    async fn get_admin_by_phone(&self, phone: &str) -> Result<Option<Admin>, Error> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE phone = $1")
            .bind(phone)
            .fetch_optional(&self.pool)
            .await
    }

    async fn seed_admin(&self, phone: &str, password_hash: &str) -> Result<Admin, Error> {
        sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (phone, password, role, is_active)
            VALUES ($1, $2, 'super_admin', TRUE)
            ON CONFLICT (phone) DO UPDATE
                SET password = EXCLUDED.password, is_active = TRUE
            RETURNING *
            "#,
        )
        .bind(phone)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_dashboard_stats(&self) -> Result<DashboardStats, Error> {
        let total_businesses =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM business_users")
                .fetch_one(&self.pool)
                .await?;
        let total_workers = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM workers")
            .fetch_one(&self.pool)
            .await?;
        let total_services = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM services WHERE COALESCE(is_active, TRUE) = TRUE",
        )
        .fetch_one(&self.pool)
        .await?;
        let pending_bookings = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM business_bookings WHERE status = 'pending'",
        )
        .fetch_one(&self.pool)
        .await?;
        let assigned_bookings = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM business_bookings WHERE status = 'assigned'",
        )
        .fetch_one(&self.pool)
        .await?;
        let completed_bookings = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM business_bookings WHERE status = 'completed'",
        )
        .fetch_one(&self.pool)
        .await?;
        let expired_bookings = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM business_bookings WHERE status = 'expired'",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(DashboardStats {
            total_businesses,
            total_workers,
            total_services,
            pending_bookings,
            assigned_bookings,
            completed_bookings,
            expired_bookings,
        })
    }
}
