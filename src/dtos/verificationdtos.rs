use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::usermodel::UserType;

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpDto {
    #[validate(length(min = 10, max = 20, message = "Phone number must be between 10-20 characters"))]
    pub phone: String,

    pub user_type: UserType,
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpDto {
    #[validate(length(min = 10, max = 20, message = "Phone number must be between 10-20 characters"))]
    pub phone: String,

    pub user_type: UserType,

    #[validate(length(equal = 6, message = "Code must be 6 digits"))]
    pub code: String,

    // Registration fields, required only on first verification
    #[validate(length(min = 1, max = 100, message = "Name must be between 1-100 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Email is invalid"))]
    pub email: Option<String>,

    #[validate(length(
        min = 1,
        max = 150,
        message = "Company name must be between 1-150 characters"
    ))]
    pub company_name: Option<String>,

    pub location: Option<String>,

    /// Worker registration: category slugs the worker signs up for.
    pub services: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OtpSentResponse {
    pub status: String,
    pub message: String,
    pub expires_at: DateTime<Utc>,
    /// Populated only when WhatsApp delivery is disabled (development).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_code: Option<String>,
}
