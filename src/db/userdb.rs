// db/userdb.rs
use async_trait::async_trait;
use sqlx::Error;
use uuid::Uuid;

use super::db::DBClient;
use crate::models::usermodel::{BusinessUser, Worker};

#[async_trait]
pub trait UserExt {
    async fn get_business_user_by_id(&self, id: Uuid) -> Result<Option<BusinessUser>, Error>;
    async fn get_business_user_by_phone(&self, phone: &str)
        -> Result<Option<BusinessUser>, Error>;

    async fn create_business_user(
        &self,
        phone: String,
        name: String,
        email: String,
        company_name: String,
        location: Option<String>,
    ) -> Result<BusinessUser, Error>;

    async fn update_business_user(
        &self,
        id: Uuid,
        name: Option<String>,
        email: Option<String>,
        company_name: Option<String>,
        location: Option<String>,
    ) -> Result<BusinessUser, Error>;

    async fn get_worker_by_id(&self, id: Uuid) -> Result<Option<Worker>, Error>;
    async fn get_worker_by_phone(&self, phone: &str) -> Result<Option<Worker>, Error>;

    async fn create_worker(
        &self,
        phone: String,
        name: String,
        services: Vec<String>,
    ) -> Result<Worker, Error>;

    async fn update_worker(
        &self,
        id: Uuid,
        name: Option<String>,
        services: Option<Vec<String>>,
    ) -> Result<Worker, Error>;

    /// Active workers whose services list contains the given category slug.
    async fn get_active_workers_by_slug(&self, slug: &str) -> Result<Vec<Worker>, Error>;
}

#[async_trait]
impl UserExt for DBClient {
    async fn get_business_user_by_id(&self, id: Uuid) -> Result<Option<BusinessUser>, Error> {
        sqlx::query_as::<_, BusinessUser>("SELECT * FROM business_users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_business_user_by_phone(
        &self,
        phone: &str,
    ) -> Result<Option<BusinessUser>, Error> {
        sqlx::query_as::<_, BusinessUser>("SELECT * FROM business_users WHERE phone = $1")
            .bind(phone)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create_business_user(
        &self,
        phone: String,
        name: String,
        email: String,
        company_name: String,
        location: Option<String>,
    ) -> Result<BusinessUser, Error> {
        sqlx::query_as::<_, BusinessUser>(
            r#"
            INSERT INTO business_users (phone, name, email, company_name, location, is_verified)
            VALUES ($1, $2, $3, $4, $5, TRUE)
            RETURNING *
            "#,
        )
        .bind(phone)
        .bind(name)
        .bind(email)
        .bind(company_name)
        .bind(location)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_business_user(
        &self,
        id: Uuid,
        name: Option<String>,
        email: Option<String>,
        company_name: Option<String>,
        location: Option<String>,
    ) -> Result<BusinessUser, Error> {
        sqlx::query_as::<_, BusinessUser>(
            r#"
            UPDATE business_users
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                company_name = COALESCE($4, company_name),
                location = COALESCE($5, location),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(company_name)
        .bind(location)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_worker_by_id(&self, id: Uuid) -> Result<Option<Worker>, Error> {
        sqlx::query_as::<_, Worker>("SELECT * FROM workers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_worker_by_phone(&self, phone: &str) -> Result<Option<Worker>, Error> {
        sqlx::query_as::<_, Worker>("SELECT * FROM workers WHERE phone = $1")
            .bind(phone)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create_worker(
        &self,
        phone: String,
        name: String,
        services: Vec<String>,
    ) -> Result<Worker, Error> {
        sqlx::query_as::<_, Worker>(
            r#"
            INSERT INTO workers (phone, name, services, is_verified)
            VALUES ($1, $2, $3, TRUE)
            RETURNING *
            "#,
        )
        .bind(phone)
        .bind(name)
        .bind(services)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_worker(
        &self,
        id: Uuid,
        name: Option<String>,
        services: Option<Vec<String>>,
    ) -> Result<Worker, Error> {
        sqlx::query_as::<_, Worker>(
            r#"
            UPDATE workers
            SET name = COALESCE($2, name),
                services = COALESCE($3, services),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(services)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_active_workers_by_slug(&self, slug: &str) -> Result<Vec<Worker>, Error> {
        sqlx::query_as::<_, Worker>(
            r#"
            SELECT * FROM workers
            WHERE COALESCE(is_active, TRUE) = TRUE
              AND $1 = ANY(services)
            ORDER BY rating DESC NULLS LAST, created_at ASC
            "#,
        )
        .bind(slug)
        .fetch_all(&self.pool)
        .await
    }
}
