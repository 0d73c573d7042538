use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::usermodel::UserType;

/// Ephemeral OTP record, replaced on every send for the same (phone, user_type).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct VerificationCode {
    pub id: Uuid,
    pub phone: String,
    pub user_type: UserType,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub used: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}
