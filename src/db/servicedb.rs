// db/servicedb.rs
use async_trait::async_trait;
use sqlx::types::BigDecimal;
use sqlx::Error;
use uuid::Uuid;

use super::db::DBClient;
use crate::models::servicemodel::Service;

#[async_trait]
pub trait ServiceExt {
    async fn get_active_services(&self, category: Option<&str>) -> Result<Vec<Service>, Error>;

    /// Admin listing, soft-deleted services included.
    async fn get_all_services(&self) -> Result<Vec<Service>, Error>;

    async fn get_service_by_id(&self, service_id: Uuid) -> Result<Option<Service>, Error>;

    async fn get_service_by_name(&self, name: &str) -> Result<Option<Service>, Error>;

    #[allow(clippy::too_many_arguments)]
    async fn create_service(
        &self,
        name: String,
        category: String,
        base_price: BigDecimal,
        service_charge: BigDecimal,
        duration: String,
        tags: Vec<String>,
        seo_keywords: Vec<String>,
        featured: bool,
    ) -> Result<Service, Error>;

    #[allow(clippy::too_many_arguments)]
    async fn update_service(
        &self,
        service_id: Uuid,
        name: Option<String>,
        category: Option<String>,
        base_price: Option<BigDecimal>,
        service_charge: Option<BigDecimal>,
        duration: Option<String>,
        tags: Option<Vec<String>>,
        seo_keywords: Option<Vec<String>>,
        featured: Option<bool>,
    ) -> Result<Service, Error>;

    /// Soft delete. Historical bookings keep their service_type strings.
    async fn deactivate_service(&self, service_id: Uuid) -> Result<Service, Error>;

    async fn bump_service_popularity(&self, name: &str) -> Result<(), Error>;
}

#[async_trait]
impl ServiceExt for DBClient {
    async fn get_active_services(&self, category: Option<&str>) -> Result<Vec<Service>, Error> {
        sqlx::query_as::<_, Service>(
            r#"
            SELECT * FROM services
            WHERE COALESCE(is_active, TRUE) = TRUE
              AND ($1::text IS NULL OR category = $1)
            ORDER BY featured DESC NULLS LAST, popularity DESC NULLS LAST, name
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_all_services(&self) -> Result<Vec<Service>, Error> {
        sqlx::query_as::<_, Service>(
            "SELECT * FROM services ORDER BY is_active DESC, category, name",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn get_service_by_id(&self, service_id: Uuid) -> Result<Option<Service>, Error> {
        sqlx::query_as::<_, Service>("SELECT * FROM services WHERE id = $1")
            .bind(service_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_service_by_name(&self, name: &str) -> Result<Option<Service>, Error> {
        sqlx::query_as::<_, Service>("SELECT * FROM services WHERE LOWER(name) = LOWER($1)")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create_service(
        &self,
        name: String,
        category: String,
        base_price: BigDecimal,
        service_charge: BigDecimal,
        duration: String,
        tags: Vec<String>,
        seo_keywords: Vec<String>,
        featured: bool,
    ) -> Result<Service, Error> {
        sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services
                (name, category, base_price, service_charge, duration, tags, seo_keywords, featured)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(category)
        .bind(base_price)
        .bind(service_charge)
        .bind(duration)
        .bind(tags)
        .bind(seo_keywords)
        .bind(featured)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_service(
        &self,
        service_id: Uuid,
        name: Option<String>,
        category: Option<String>,
        base_price: Option<BigDecimal>,
        service_charge: Option<BigDecimal>,
        duration: Option<String>,
        tags: Option<Vec<String>>,
        seo_keywords: Option<Vec<String>>,
        featured: Option<bool>,
    ) -> Result<Service, Error> {
        sqlx::query_as::<_, Service>(
            r#"
            UPDATE services
            SET name = COALESCE($2, name),
                category = COALESCE($3, category),
                base_price = COALESCE($4, base_price),
                service_charge = COALESCE($5, service_charge),
                duration = COALESCE($6, duration),
                tags = COALESCE($7, tags),
                seo_keywords = COALESCE($8, seo_keywords),
                featured = COALESCE($9, featured),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(service_id)
        .bind(name)
        .bind(category)
        .bind(base_price)
        .bind(service_charge)
        .bind(duration)
        .bind(tags)
        .bind(seo_keywords)
        .bind(featured)
        .fetch_one(&self.pool)
        .await
    }

    async fn deactivate_service(&self, service_id: Uuid) -> Result<Service, Error> {
        sqlx::query_as::<_, Service>(
            r#"
            UPDATE services
            SET is_active = FALSE, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(service_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn bump_service_popularity(&self, name: &str) -> Result<(), Error> {
        sqlx::query(
            r#"
            UPDATE services
            SET popularity = COALESCE(popularity, 0) + 1
            WHERE LOWER(name) = LOWER($1)
            "#,
        )
        .bind(name)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
