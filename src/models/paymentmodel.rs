use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PaymentDetails {
    pub id: Uuid,
    pub worker_id: Uuid,
    pub upi_id: Option<String>,
    pub phone_number: Option<String>,
    pub bank_account: Option<String>,
    pub ifsc_code: Option<String>,
    pub is_verified: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
