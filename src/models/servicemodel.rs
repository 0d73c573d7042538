use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Service {
    pub id: Uuid,
    pub name: String, // unique display name, e.g. "Hotel / Restaurant Staff"
    pub category: String,
    pub base_price: BigDecimal,
    pub service_charge: BigDecimal,
    pub duration: String,
    pub tags: Vec<String>,
    pub seo_keywords: Vec<String>,
    pub popularity: Option<i32>,
    pub featured: Option<bool>,
    pub is_active: Option<bool>, // soft delete flag
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
